use std::{fs::File, path::Path};

/// Logger for the reader session, or `None` when there is nowhere to send
/// records. The terminal is in raw mode and owned by the frame, so logs only
/// go to a file.
pub(super) fn log_builder(log_file: Option<&Path>) -> Option<env_logger::Builder> {
    let path = log_file?;
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("storybook: cannot open log file {:?}: {}", path, err);
            return None;
        }
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    Some(builder)
}

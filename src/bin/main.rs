use std::io;

use embassy_executor::Spawner;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};
use log::{info, warn};
use storybook_core::{
    app::{ReaderApp, ReaderConfig, TickResult},
    content::builtin_catalog,
    locale::{LocaleSync, country_info},
    text_policy::locale_banner,
};
use storybook_host::{
    input::keyboard::KeyboardInput,
    locale::file_selector::FileLocaleSource,
    platform::{display::TerminalDisplay, fullscreen::TerminalFullscreen, terminal::RawModeGuard},
    render::{FrameRenderer, frame::TextFrame, text::TextRenderer},
    speech::command::CommandSpeech,
};

use config::HostConfig;
use locale_poll::{LocaleUpdates, StopSignal, locale_poll_loop};
use logging::log_builder;

#[path = "main/config.rs"]
mod config;
#[path = "main/locale_poll.rs"]
mod locale_poll;
#[path = "main/logging.rs"]
mod logging;

const TITLE: &str = "Storybook";
const FALLBACK_COLUMNS: u16 = 80;
const MIN_COLUMNS: u16 = 20;

static SHUTDOWN: StopSignal = Signal::new();
static LOCALE_UPDATES: LocaleUpdates = Signal::new();

fn frame_columns() -> usize {
    let columns = crossterm::terminal::size()
        .map(|(columns, _)| columns)
        .unwrap_or(FALLBACK_COLUMNS);
    columns.max(MIN_COLUMNS) as usize
}

async fn run(config: HostConfig) -> io::Result<()> {
    let _raw_mode = RawModeGuard::enable()?;

    let mut app = ReaderApp::new(
        builtin_catalog(),
        KeyboardInput::new(),
        CommandSpeech::new(config.speech_program.clone()),
        TerminalFullscreen::stdout(),
        ReaderConfig::default(),
        TITLE,
    );
    app.set_locale(config.locale.clone());

    let mut renderer = TextRenderer::new();
    if let Some(info) = country_info(config.locale.as_str()) {
        renderer.set_locale_banner(&locale_banner(info, config.locale.as_str()));
    }
    let mut frame = TextFrame::new(frame_columns());
    let mut display = TerminalDisplay::stdout();

    let locale_sync = config
        .locale_file
        .as_ref()
        .map(|path| LocaleSync::new(FileLocaleSource::new(path)));

    info!(
        "reader ready: locale={} speech={:?} frame_ms={} selector={:?}",
        config.locale, config.speech_program, config.frame_ms, config.locale_file
    );

    let loop_start = Instant::now();
    let mut display_fault_logged = false;

    let poll_future = locale_poll_loop(locale_sync, &LOCALE_UPDATES, &SHUTDOWN);
    let ui_future = async {
        loop {
            let mut banner_changed = false;
            if let Some(update) = LOCALE_UPDATES.try_take() {
                if let Some(banner) = update.banner.as_ref() {
                    renderer.set_locale_banner(banner);
                    banner_changed = true;
                }
                app.set_locale(update.code);
            }

            let now_ms = loop_start.elapsed().as_millis();
            let app_requests_render = app.tick(now_ms) == TickResult::RenderRequested;

            if app.exit_requested() {
                info!("reader: exit requested");
                SHUTDOWN.signal(());
                break;
            }

            if app_requests_render || banner_changed {
                app.with_screen(now_ms, |screen| renderer.render(screen, &mut frame));
                if let Err(err) = display.flush_frame(&frame) {
                    if !display_fault_logged {
                        warn!("display flush failed: {}", err);
                        display_fault_logged = true;
                    }
                } else {
                    display_fault_logged = false;
                }
            }

            Timer::after_millis(config.frame_ms).await;
        }
    };

    embassy_futures::join::join(poll_future, ui_future).await;
    Ok(())
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let config = HostConfig::from_env();
    if let Some(mut builder) = log_builder(config.log_file.as_deref()) {
        builder.init();
    }

    // The std executor never returns; leave the process explicitly once the
    // terminal has been restored.
    let code = match run(config).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("storybook: terminal setup failed: {}", err);
            1
        }
    };
    std::process::exit(code);
}

use core::fmt;

use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};
use log::{info, warn};
use storybook_core::locale::{LOCALE_POLL_INTERVAL_MS, LocaleSource, LocaleSync, LocaleUpdate};

pub(super) type LocaleUpdates = Signal<CriticalSectionRawMutex, LocaleUpdate>;
pub(super) type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// Polls the selector until `stop` fires. Only changes are published; a
/// slower UI loop sees the latest selection.
pub(super) async fn locale_poll_loop<LS>(
    sync: Option<LocaleSync<LS>>,
    updates: &'static LocaleUpdates,
    stop: &'static StopSignal,
) where
    LS: LocaleSource,
    LS::Error: fmt::Display,
{
    let Some(mut sync) = sync else {
        info!("locale: no selector configured");
        stop.wait().await;
        return;
    };

    let mut ticker = Ticker::every(Duration::from_millis(LOCALE_POLL_INTERVAL_MS));
    let mut failing = false;

    loop {
        match sync.poll() {
            Ok(Some(update)) => {
                failing = false;
                info!("locale: selector now {}", update.code);
                updates.signal(update);
            }
            Ok(None) => failing = false,
            Err(err) => {
                if !failing {
                    warn!("locale: selector read failed: {}", err);
                }
                failing = true;
            }
        }

        // Stop wins over a due tick.
        if let Either::First(()) = select(stop.wait(), ticker.next()).await {
            info!("locale: poll stopped");
            return;
        }
    }
}

//! Reminder commands, with a console stand-in for desktop notifications.

use chrono::NaiveDate;
use clap::Subcommand;
use habitpro_core::storage::HabitStore;
use habitpro_core::{Config, Event, FilePersistence, Notifier, ReminderHandle, ReminderScheduler};
use std::time::Duration;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Run one reminder sweep now
    Check {
        /// Print delivered reminders as JSON events instead of console lines
        #[arg(long)]
        json: bool,
    },
    /// Sweep periodically until interrupted
    Run {
        /// Seconds between sweeps (default: reminders.interval_secs)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many sweeps
        #[arg(long)]
        ticks: Option<u32>,
    },
}

/// Prints reminders to stdout; permission comes from the config.
pub struct ConsoleNotifier {
    granted: bool,
    quiet: bool,
}

impl Notifier for ConsoleNotifier {
    fn permission_granted(&self) -> bool {
        self.granted
    }

    fn notify(&self, title: &str, body: &str) {
        if !self.quiet {
            println!("[{title}] {body}");
        }
    }
}

pub fn run(action: RemindAction, today: Option<NaiveDate>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let backend = FilePersistence::open()?;
    let key = config.storage.key.clone();
    let notifier = |quiet| ConsoleNotifier {
        granted: config.notifications.granted,
        quiet,
    };
    let title = config.reminders.title.clone();

    match action {
        RemindAction::Check { json } => {
            if !config.notifications.granted {
                println!("Notifications blocked; run `notify enable` first");
                return Ok(());
            }
            let scheduler = ReminderScheduler::with_title(notifier(json), title);
            let store = HabitStore::open(backend, key);
            let today = today.unwrap_or_else(habitpro_core::today);
            let events: Vec<Event> = scheduler
                .tick(store.habits(), today)
                .into_iter()
                .map(Event::from)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("Nothing pending today");
            }
        }
        RemindAction::Run { interval, ticks } => {
            if !config.reminders.enabled {
                println!("Reminders are disabled (reminders.enabled = false)");
                return Ok(());
            }
            let period = interval
                .map(|s| Duration::from_secs(s.max(1)))
                .unwrap_or_else(|| config.reminder_interval());
            if period > ReminderHandle::MAX_PERIOD {
                return Err(format!(
                    "interval must be at most {} seconds",
                    ReminderHandle::MAX_PERIOD.as_secs()
                )
                .into());
            }
            // Wait out `n` sweeps plus half a period of slack.
            let run_for = match ticks {
                Some(n) => Some(
                    period
                        .checked_mul(n)
                        .and_then(|d| d.checked_add(period / 2))
                        .ok_or("interval times ticks is too long")?,
                ),
                None => None,
            };

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let scheduler = ReminderScheduler::with_title(notifier(false), title);
            let swept = runtime.block_on(async move {
                let handle = ReminderHandle::spawn(scheduler, period, move || {
                    // Re-read each sweep so habits done elsewhere stop nagging.
                    let store = HabitStore::open(backend.clone(), key.clone());
                    (store.habits().to_vec(), today.unwrap_or_else(habitpro_core::today))
                });
                match run_for {
                    Some(wait) => tokio::time::sleep(wait).await,
                    None => {
                        let _ = tokio::signal::ctrl_c().await;
                    }
                }
                handle.stop().await
            });
            tracing::info!(swept, "reminder loop finished");
        }
    }
    Ok(())
}

use crate::countdown::{next_refresh, Countdown, ReloadTrigger};
use crate::errors::StoreError;
use crate::store::{date_key, load_store};
use chrono::{NaiveDate, Utc};
use std::{path::Path, path::PathBuf, sync::Arc, time::Duration};
use tokio::{
    task::{JoinError, JoinHandle},
    time::{interval, sleep, MissedTickBehavior},
};
use tracing::{error, info, warn};

/// Background task that ticks once a second and, when the UTC day turns
/// over, reports which quote the new day will serve.
pub struct RolloverWatch {
    handle: JoinHandle<()>,
}

impl RolloverWatch {
    pub fn start(quotes_path: Arc<PathBuf>) -> Self {
        info!("rollover watch started, next refresh at {}", next_refresh(Utc::now()));
        Self {
            handle: tokio::spawn(run(quotes_path)),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub async fn stop(self) {
        self.handle.abort();
        report_exit(self.handle.await);
        info!("rollover watch stopped");
    }
}

/// Logs how the watch task ended. Returns whether it panicked.
fn report_exit(result: Result<(), JoinError>) -> bool {
    match result {
        Err(err) if err.is_panic() => {
            error!("rollover watch panicked: {err}");
            true
        }
        _ => false,
    }
}

async fn run(quotes_path: Arc<PathBuf>) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut trigger = ReloadTrigger::default();
    let mut current_day = Utc::now().date_naive();

    loop {
        ticker.tick().await;

        if let Some(delay) = trigger.observe(Countdown::until_next_refresh(Utc::now())) {
            sleep(delay).await;
        }

        // A late tick can skip the 00:00:00 reading, so the day change is
        // what actually drives the announcement.
        let today = Utc::now().date_naive();
        if today != current_day {
            current_day = today;
            if let Err(err) = announce_day(&quotes_path, today).await {
                error!("quote for {} is unavailable: {err}", date_key(today));
            }
        }
    }
}

/// Logs the quote `day` resolves to. Returns whether it is a fallback.
pub async fn announce_day(quotes_path: &Path, day: NaiveDate) -> Result<bool, StoreError> {
    let store = load_store(quotes_path).await?;
    let daily = store.daily_quote_at(day)?;
    let key = date_key(day);

    if daily.is_fallback {
        warn!("new day {key} has no quote, serving fallback from {}", daily.date);
    } else {
        info!("new day {key}, serving: {}", preview(&daily.quote.text));
    }
    Ok(daily.is_fallback)
}

fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 50;
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("daily_quote_rollover_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn announce_reports_fallback_days() {
        let path = temp_path("announce");
        std::fs::write(
            &path,
            br#"{"quotes": {"2025-08-13": {"text": "A"}, "2025-08-14": {"text": "B"}}}"#,
        )
        .unwrap();

        let exact = announce_day(&path, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()).await;
        assert!(matches!(exact, Ok(false)));

        let fallback = announce_day(&path, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()).await;
        assert!(matches!(fallback, Ok(true)));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn announce_surfaces_store_errors() {
        let path = temp_path("empty");
        std::fs::write(&path, br#"{"quotes": {}}"#).unwrap();

        let result = announce_day(&path, NaiveDate::from_ymd_opt(2025, 8, 13).unwrap()).await;
        assert!(matches!(result, Err(StoreError::NoQuotes)));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn stop_cancels_the_task() {
        let watch = RolloverWatch::start(Arc::new(temp_path("unused")));
        assert!(watch.is_running());
        watch.stop().await;
    }

    async fn failing_tick() {
        panic!("tick failed")
    }

    #[tokio::test]
    async fn panicked_task_is_reported() {
        let panicked = tokio::spawn(failing_tick()).await;
        assert!(report_exit(panicked));

        let cancelled = tokio::spawn(std::future::pending::<()>());
        cancelled.abort();
        assert!(!report_exit(cancelled.await));

        assert!(!report_exit(tokio::spawn(async {}).await));
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("short"), "short");
        let long = "a".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "a".repeat(50)));
    }
}

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Stderr spinner that is a no-op when progress display is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Drive `future` to completion behind a spinner.
///
/// With a `failsafe`, the spinner is cleared once that much time has passed
/// even though the future keeps running; the result is still awaited and
/// returned.
pub async fn with_spinner<F, T>(message: &str, failsafe: Option<Duration>, future: F) -> T
where
    F: Future<Output = T>,
{
    let progress = Progress::spinner(message);
    let mut future = std::pin::pin!(future);

    let output = match failsafe {
        Some(limit) => match tokio::time::timeout(limit, &mut future).await {
            Ok(output) => output,
            Err(_) => {
                progress.finish_clear();
                tracing::debug!(secs = limit.as_secs(), "spinner failsafe elapsed; still waiting");
                future.await
            }
        },
        None => future.await,
    };

    progress.finish_clear();
    output
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Progress, with_spinner};

    #[test]
    fn spinner_is_inert_without_progress_prefs() {
        let progress = Progress::spinner("working");
        assert!(progress.bar.is_none());
        progress.finish_clear();
    }

    #[tokio::test]
    async fn failsafe_still_returns_slow_result() {
        let value = with_spinner("slow", Some(Duration::from_millis(10)), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            42
        })
        .await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn fast_future_returns_without_failsafe() {
        let value = with_spinner("fast", None, async { "done" }).await;
        assert_eq!(value, "done");
    }
}

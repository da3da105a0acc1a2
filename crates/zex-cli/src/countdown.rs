//! Countdown wait between daemon cycles.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Instant;

/// Block until `deadline`, refreshing a remaining-time display once per
/// second.
///
/// The display runs in its own task with no shared state beyond the
/// read-only deadline; when the wait ends it is aborted, not joined. A
/// deadline in the past returns immediately.
pub async fn wait_until(deadline: Instant) {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let display = tokio::spawn({
        let bar = bar.clone();
        async move {
            let mut tick = tokio::time::interval(Duration::from_secs(1));
            loop {
                tick.tick().await;
                let remaining = deadline.saturating_duration_since(Instant::now());
                bar.set_message(format!("next sync in {}", format_remaining(remaining)));
                bar.tick();
            }
        }
    });

    tokio::time::sleep_until(deadline).await;
    display.abort();
    bar.finish_and_clear();
}

/// Format a remaining duration as `MM:SS`, or `H:MM:SS` above an hour.
fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_minutes_and_seconds() {
        assert_eq!(format_remaining(Duration::from_secs(0)), "00:00");
        assert_eq!(format_remaining(Duration::from_secs(59)), "00:59");
        assert_eq!(format_remaining(Duration::from_secs(60)), "01:00");
        assert_eq!(format_remaining(Duration::from_secs(29 * 60 + 7)), "29:07");
    }

    #[test]
    fn format_rolls_over_to_hours() {
        assert_eq!(format_remaining(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(
            format_remaining(Duration::from_secs(2 * 3600 + 61)),
            "2:01:01"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn wait_targets_cycle_start_plus_interval() {
        let cycle_start = Instant::now();

        // The cycle itself took ten seconds...
        tokio::time::advance(Duration::from_secs(10)).await;

        // ...so the wait ends at cycle_start + 60s, not finish + 60s.
        wait_until(cycle_start + Duration::from_secs(60)).await;
        assert_eq!(cycle_start.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn past_deadline_returns_immediately() {
        let cycle_start = Instant::now();
        tokio::time::advance(Duration::from_secs(90)).await;

        wait_until(cycle_start + Duration::from_secs(60)).await;
        assert_eq!(cycle_start.elapsed(), Duration::from_secs(90));
    }
}

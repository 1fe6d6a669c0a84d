use std::time::Duration;
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use gloo_timers::future::TimeoutFuture;

use super::api::{DashboardClient, DashboardSnapshot};

/// Tunables for the initial-load polling fallback.
pub struct RetryConfig {
  /// Delay before the second attempt.
  pub initial_delay: Duration,
  /// Upper bound on the delay between attempts.
  pub max_delay: Duration,
  /// Factor by which the delay grows after each failure.
  pub multiplier: f64,
}

impl Default for RetryConfig {
  fn default() -> Self {
    RetryConfig {
      initial_delay: Duration::from_secs(1),
      max_delay: Duration::from_secs(30),
      multiplier: 2.0,
    }
  }
}

/// Next backoff delay, clamped to [`RetryConfig::max_delay`].
pub fn next_delay(current: Duration, config: &RetryConfig) -> Duration {
  let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
  Duration::from_millis(next_ms).min(config.max_delay)
}

/// Poll the read endpoints until a full snapshot loads. Only the initial
/// dashboard load goes through here; later reloads are single attempts.
/// The attempt counter is a signal so the page can show polling progress.
pub async fn load_until_ready(
  client: &DashboardClient,
  config: &RetryConfig,
  mut attempts: Signal<u32>,
) -> DashboardSnapshot {
  let mut delay = config.initial_delay;
  let mut attempt = 0u32;

  loop {
    attempt += 1;
    match client.load_snapshot().await {
      Ok(snapshot) => {
        info!("dashboard snapshot loaded on attempt {}", attempt);
        return snapshot;
      }
      Err(e) => {
        warn!("snapshot load failed: {}. next attempt in {}ms", e, delay.as_millis());
      }
    }

    attempts.set(attempt);
    TimeoutFuture::new(delay.as_millis() as u32).await;
    delay = next_delay(delay, config);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn delay_grows_by_the_multiplier() {
    let config = RetryConfig::default();
    assert_eq!(next_delay(Duration::from_secs(4), &config), Duration::from_secs(8));
  }

  #[test]
  fn delay_never_exceeds_the_cap() {
    let config = RetryConfig { max_delay: Duration::from_secs(10), ..Default::default() };
    assert_eq!(next_delay(Duration::from_secs(8), &config), Duration::from_secs(10));
    assert_eq!(next_delay(Duration::from_secs(10), &config), Duration::from_secs(10));
  }

  #[test]
  fn default_schedule_settles_at_thirty_seconds() {
    let config = RetryConfig::default();
    let mut delay = config.initial_delay;
    let mut schedule = vec![delay.as_secs()];
    for _ in 0..6 {
      delay = next_delay(delay, &config);
      schedule.push(delay.as_secs());
    }
    assert_eq!(schedule, vec![1, 2, 4, 8, 16, 30, 30]);
  }

  #[test]
  fn gentler_multiplier_is_respected() {
    let config = RetryConfig { multiplier: 1.5, ..Default::default() };
    assert_eq!(next_delay(Duration::from_secs(2), &config), Duration::from_secs(3));
  }
}

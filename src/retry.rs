//! Minimal retry support for transfer attempts.

use std::future::Future;
use tracing::debug;

/// Runs `op` until it succeeds or `max_attempts` attempts are used up.
///
/// Attempts are numbered from 1 and the current number is passed to `op`.
/// An error is retried only while `is_transient` accepts it; a rejected
/// error and the error of the final attempt are returned as-is. There is
/// no delay between attempts.
pub async fn retry<T, E, C, F, Fut>(
    max_attempts: u32,
    mut is_transient: C,
    mut op: F,
) -> Result<T, E>
where
    C: FnMut(&E) -> bool,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && is_transient(&e) => {
                debug!("attempt {} failed: {}", attempt, e);
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_first_attempt_success_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_ref = calls.clone();

        let result: Result<&str, String> = retry(4, |_| true, move |_| {
            let calls = calls_ref.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("done")
            }
        })
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_succeeds_on_final_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_ref = calls.clone();

        let result: Result<u32, String> = retry(4, |_| true, move |attempt| {
            let calls = calls_ref.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if attempt < 4 {
                    Err(format!("attempt {} broke", attempt))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(4));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let result: Result<(), String> = retry(4, |_| true, |attempt| async move {
            Err(format!("attempt {} broke", attempt))
        })
        .await;

        assert_eq!(result, Err("attempt 4 broke".to_string()));
    }

    #[tokio::test]
    async fn test_non_transient_error_stops_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_ref = calls.clone();

        let result: Result<(), String> = retry(
            4,
            |e: &String| e != "fatal",
            move |_| {
                let calls = calls_ref.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("fatal".to_string())
                }
            },
        )
        .await;

        assert_eq!(result, Err("fatal".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

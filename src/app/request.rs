// DocuChat - app/request.rs
//
// Request lifecycle management. Each submission runs its blocking HTTP
// round trip on a background thread and reports exactly one completion
// message to the UI thread via an mpsc channel.
//
// Architecture:
//   - One `RequestManager` per panel; panels never share display state.
//   - Every submission is tagged with a per-manager sequence number; a
//     completion is applied only if it carries the latest issued number,
//     so overlapping submissions resolve last-issued-wins.
//   - No cancellation: a superseded request runs to completion and its
//     result is discarded on arrival.

use std::sync::mpsc;
use std::sync::Arc;

use crate::core::backend::BackendClient;

/// A completion produced by a worker thread.
struct Completion<R> {
    seq: u64,
    response: R,
}

/// Manages the in-flight request of one panel.
///
/// Generic over the response type so each panel keeps its own result shape
/// without a shared enum.
pub struct RequestManager<R> {
    client: Arc<BackendClient>,
    tx: mpsc::Sender<Completion<R>>,
    rx: mpsc::Receiver<Completion<R>>,
    latest_seq: u64,
    awaiting: bool,
}

impl<R: Send + 'static> RequestManager<R> {
    pub fn new(client: Arc<BackendClient>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            tx,
            rx,
            latest_seq: 0,
            awaiting: false,
        }
    }

    /// Dispatch `job` on a background thread.
    ///
    /// The job receives the shared backend client and returns the panel's
    /// response value. Submitting while a request is already in flight is
    /// allowed; the earlier request's completion becomes stale.
    pub fn submit<F>(&mut self, job: F)
    where
        F: FnOnce(&BackendClient) -> R + Send + 'static,
    {
        self.latest_seq += 1;
        self.awaiting = true;

        let seq = self.latest_seq;
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let response = job(&client);
            // Receiver dropped (app closed): exit quietly.
            let _ = tx.send(Completion { seq, response });
        });

        tracing::debug!(seq, "Request dispatched");
    }

    /// Drain completions without blocking. Returns the response of the
    /// latest issued request if it has arrived; stale completions are
    /// logged and dropped.
    pub fn poll(&mut self) -> Option<R> {
        let mut current = None;
        while let Ok(completion) = self.rx.try_recv() {
            if completion.seq == self.latest_seq {
                self.awaiting = false;
                current = Some(completion.response);
            } else {
                tracing::debug!(
                    seq = completion.seq,
                    latest = self.latest_seq,
                    "Discarding stale response"
                );
            }
        }
        current
    }

    /// True while the latest issued request has not yet completed.
    pub fn awaiting(&self) -> bool {
        self.awaiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn test_client() -> Arc<BackendClient> {
        // Never actually contacted; jobs under test are plain closures.
        Arc::new(BackendClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap())
    }

    /// Poll until a response arrives or the deadline passes.
    fn poll_until(manager: &mut RequestManager<u32>, deadline: Duration) -> Option<u32> {
        let start = Instant::now();
        while start.elapsed() < deadline {
            if let Some(response) = manager.poll() {
                return Some(response);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn completion_clears_awaiting() {
        let mut manager: RequestManager<u32> = RequestManager::new(test_client());
        assert!(!manager.awaiting());

        manager.submit(|_| 7);
        assert!(manager.awaiting());

        let response = poll_until(&mut manager, Duration::from_secs(2));
        assert_eq!(response, Some(7));
        assert!(!manager.awaiting());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut manager: RequestManager<u32> = RequestManager::new(test_client());

        // First request blocks until released, second completes immediately.
        let (release_tx, release_rx) = mpsc::channel::<()>();
        manager.submit(move |_| {
            let _ = release_rx.recv();
            1
        });
        manager.submit(|_| 2);

        let response = poll_until(&mut manager, Duration::from_secs(2));
        assert_eq!(response, Some(2), "latest issued request wins");
        assert!(!manager.awaiting());

        // Release the first request and confirm its late completion never
        // surfaces through poll().
        release_tx.send(()).unwrap();
        let start = Instant::now();
        while start.elapsed() < Duration::from_millis(200) {
            assert_eq!(manager.poll(), None, "stale completion must be dropped");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn resubmission_after_completion_reports_new_result() {
        let mut manager: RequestManager<u32> = RequestManager::new(test_client());

        manager.submit(|_| 1);
        assert_eq!(poll_until(&mut manager, Duration::from_secs(2)), Some(1));

        manager.submit(|_| 2);
        assert_eq!(poll_until(&mut manager, Duration::from_secs(2)), Some(2));
    }
}

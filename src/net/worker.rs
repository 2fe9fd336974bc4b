use crate::net::gateway::{ContactGateway, SubmitError};
use crate::net::payload::ContactPayload;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use tracing::info;

/// Runs one submission at a time on a background thread so the event loop
/// stays responsive. The caller's `submitting` flag is the only guard
/// against overlapping submissions.
pub struct SubmitWorker {
    gateway: Arc<dyn ContactGateway>,
    tx: Sender<Result<(), SubmitError>>,
    rx: Receiver<Result<(), SubmitError>>,
}

impl SubmitWorker {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        let (tx, rx) = channel();
        Self { gateway, tx, rx }
    }

    pub fn start(&self, payload: ContactPayload) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        thread::spawn(move || {
            info!("posting contact form");
            let outcome = gateway.submit(&payload);
            let _ = tx.send(outcome);
        });
    }

    pub fn poll(&self) -> Option<Result<(), SubmitError>> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    struct ScriptedGateway {
        outcome: Result<(), SubmitError>,
        seen: Mutex<Vec<ContactPayload>>,
    }

    impl ScriptedGateway {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContactGateway for ScriptedGateway {
        fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
            self.seen.lock().unwrap().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn wait_for(worker: &SubmitWorker) -> Result<(), SubmitError> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(outcome) = worker.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "worker never reported");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn reports_success_with_the_submitted_payload() {
        let gateway = Arc::new(ScriptedGateway::new(Ok(())));
        let worker = SubmitWorker::new(gateway.clone());

        worker.start(payload());

        assert_eq!(wait_for(&worker), Ok(()));
        assert_eq!(gateway.seen.lock().unwrap().as_slice(), &[payload()]);
    }

    #[test]
    fn reports_transport_failures() {
        let outcome = Err(SubmitError::Transport("connection refused".to_string()));
        let gateway = Arc::new(ScriptedGateway::new(outcome.clone()));
        let worker = SubmitWorker::new(gateway);

        worker.start(payload());

        assert_eq!(wait_for(&worker), outcome);
    }

    #[test]
    fn poll_is_empty_before_any_submission() {
        let worker = SubmitWorker::new(Arc::new(ScriptedGateway::new(Ok(()))));
        assert!(worker.poll().is_none());
    }
}

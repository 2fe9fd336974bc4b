use crate::net::payload::ContactPayload;
use thiserror::Error;
use tracing::debug;

pub const CONTACT_ENDPOINT: &str =
    "https://1hmfpsvto6.execute-api.ap-northeast-1.amazonaws.com/dev/contacts";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
}

/// The seam between the submit lifecycle and the network.
pub trait ContactGateway: Send + Sync {
    fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

pub struct HttpGateway {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self::with_endpoint(CONTACT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactGateway for HttpGateway {
    fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        // The response status is deliberately not inspected: any answer from
        // the endpoint counts as delivered, only transport failures bubble up.
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        debug!(status = %response.status(), "contact endpoint answered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::mpsc;
    use std::thread;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    /// Accepts one connection, captures the full request, answers with
    /// `status_line` and an empty body.
    fn spawn_server(status_line: &'static str) -> (SocketAddr, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        });

        (addr, rx)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let headers = &text[..split];
        let body_len = headers
            .lines()
            .find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        text[split + 4..].len() >= body_len
    }

    #[test]
    fn posts_json_to_the_contacts_path() {
        let (addr, rx) = spawn_server("HTTP/1.1 200 OK");
        let gateway = HttpGateway::with_endpoint(format!("http://{addr}/dev/contacts"));

        gateway.submit(&payload()).unwrap();

        let request = rx.recv().unwrap();
        assert!(request.starts_with("POST /dev/contacts HTTP/1.1\r\n"));
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.contains("content-type: application/json"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Taro",
                "email": "taro@example.com",
                "message": "Hello",
            })
        );
    }

    #[test]
    fn server_errors_still_count_as_delivered() {
        let (addr, _rx) = spawn_server("HTTP/1.1 500 Internal Server Error");
        let gateway = HttpGateway::with_endpoint(format!("http://{addr}/dev/contacts"));
        assert!(gateway.submit(&payload()).is_ok());
    }

    #[test]
    fn refused_connections_are_transport_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpGateway::with_endpoint(format!("http://{addr}/dev/contacts"));
        let err = gateway.submit(&payload()).unwrap_err();
        let SubmitError::Transport(_) = err;
    }
}

//! Shared HTTP plumbing for the engine adapters

use reqwest::{Client, RequestBuilder, StatusCode};
use sakhi_application::EngineError;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error bodies are cut to this many bytes before they reach logs
const MAX_ERROR_BODY: usize = 2048;

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<Client, EngineError> {
    let mut builder = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("legal-sakhi/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| EngineError::Configuration(format!("Could not build HTTP client: {}", e)))
}

/// Send a request and decode a JSON body, mapping failures to [`EngineError`].
pub(crate) async fn send_json(request: RequestBuilder) -> Result<Value, EngineError> {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, "Engine returned non-success status");
        return Err(status_error(status, body));
    }

    let body = response.text().await.map_err(transport_error)?;
    debug!("Engine response body is {} bytes", body.len());
    serde_json::from_str(&body)
        .map_err(|e| EngineError::MalformedResponse(format!("Response is not JSON: {}", e)))
}

pub(crate) fn transport_error(e: reqwest::Error) -> EngineError {
    if e.is_timeout() {
        EngineError::Timeout
    } else {
        EngineError::ConnectionError(e.to_string())
    }
}

pub(crate) fn status_error(status: StatusCode, body: String) -> EngineError {
    let body = truncate_body(body);
    match status.as_u16() {
        401 | 403 => EngineError::AuthFailed(body),
        429 => EngineError::QuotaExceeded(body),
        code => EngineError::RequestFailed { status: code, body },
    }
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}

/// One-shot HTTP server for adapter tests.
#[cfg(test)]
pub(crate) mod stub {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single request with `status` and a JSON `body`.
    ///
    /// Returns the base URL and a handle yielding the raw request text.
    pub async fn serve_once(status: u16, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if request_complete(&received) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&received).into_owned()
        });

        (base_url, handle)
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        received.len() >= header_end + 4 + content_length
    }
}

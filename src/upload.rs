//! Simulated file upload against the device /upload endpoint

use std::fmt;
use std::time::{Duration, Instant};

/// Placeholder file name for synthesized uploads
pub const DEFAULT_FILENAME: &str = "test_song.mp3";

/// Default payload size in KB
pub const DEFAULT_SIZE_KB: u64 = 50;

/// Outcome of a single upload attempt
#[derive(Debug)]
pub enum UploadOutcome {
    /// HTTP 200; elapsed covers send through full body read
    Success { elapsed: Duration, body: String },
    /// Any non-200 response
    Failed { status: u16, body: String },
    /// Transport-level fault (connection refused, DNS failure, ...)
    Fault(String),
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Success { elapsed, body } => write!(
                f,
                "<< Success! Upload complete in {:.2} seconds.\n   Server says: {}",
                elapsed.as_secs_f64(),
                body
            ),
            UploadOutcome::Failed { status, body } => {
                write!(f, "!! Failed. Status code: {status}\n   Response: {body}")
            }
            UploadOutcome::Fault(message) => write!(f, "!! Error: {message}"),
        }
    }
}

/// Synthesize `size_kb * 1024` bytes of filler content
pub fn fill_payload(size_kb: u64) -> Vec<u8> {
    vec![b'0'; (size_kb * 1024) as usize]
}

/// POST a synthesized file to `http://{address}/upload` as a multipart form,
/// timing the round trip. No timeout is applied; an unresponsive target
/// blocks indefinitely.
pub async fn simulate_upload(address: &str, filename: &str, size_kb: u64) -> UploadOutcome {
    let url = format!("http://{address}/upload");
    tracing::debug!("POST {} ({} KB multipart)", url, size_kb);

    let part = match reqwest::multipart::Part::bytes(fill_payload(size_kb))
        .file_name(filename.to_string())
        .mime_str("application/octet-stream")
    {
        Ok(part) => part,
        Err(e) => return UploadOutcome::Fault(e.to_string()),
    };
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let start = Instant::now();
    let response = match client.post(&url).multipart(form).send().await {
        Ok(r) => r,
        Err(e) => return UploadOutcome::Fault(e.to_string()),
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => return UploadOutcome::Fault(e.to_string()),
    };
    let elapsed = start.elapsed();
    tracing::debug!("Upload response: {} after {:.2?}", status, elapsed);

    if status == reqwest::StatusCode::OK {
        UploadOutcome::Success { elapsed, body }
    } else {
        UploadOutcome::Failed {
            status: status.as_u16(),
            body,
        }
    }
}

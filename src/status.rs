//! Device status probe against the /api/status endpoint

use std::fmt;
use std::time::Duration;

/// Status request timeout in seconds
pub const STATUS_TIMEOUT_SECS: u64 = 2;

/// Outcome of a single status check
#[derive(Debug)]
pub enum StatusOutcome {
    /// HTTP 200 with a parsed key-value body
    Online(serde_json::Value),
    /// Any non-200 response
    Failed { status: u16 },
    /// Transport-level fault or timeout
    Fault(String),
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusOutcome::Online(data) => {
                write!(f, "<< Success! Device is online.\n   Data: {data}")
            }
            StatusOutcome::Failed { status } => write!(f, "!! Failed. Status code: {status}"),
            StatusOutcome::Fault(message) => write!(f, "!! Error: {message}"),
        }
    }
}

/// GET `http://{address}/api/status` with a fixed timeout covering connect
/// through body read.
pub async fn simulate_status(address: &str) -> StatusOutcome {
    let url = format!("http://{address}/api/status");
    tracing::debug!("GET {} (timeout {} s)", url, STATUS_TIMEOUT_SECS);

    let client = reqwest::Client::new();
    let response = match client
        .get(&url)
        .timeout(Duration::from_secs(STATUS_TIMEOUT_SECS))
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => return StatusOutcome::Fault(e.to_string()),
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return StatusOutcome::Failed {
            status: status.as_u16(),
        };
    }

    match response.json::<serde_json::Value>().await {
        Ok(data) => StatusOutcome::Online(data),
        Err(e) => StatusOutcome::Fault(e.to_string()),
    }
}

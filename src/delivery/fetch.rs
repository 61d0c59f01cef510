use std::time::Duration;

use reqwest::blocking::Client;

use crate::foundation::error::{GoalwaveError, GoalwaveResult};

pub(crate) const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Default request timeout for [`fetch_png`].
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// GET `url` and return the body, which must be a PNG.
#[tracing::instrument]
pub fn fetch_png(url: &str, timeout: Duration) -> GoalwaveResult<Vec<u8>> {
    let client = Client::builder()
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .timeout(timeout)
        .build()
        .map_err(|e| GoalwaveError::io(format!("http client setup failed: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| GoalwaveError::io(format!("GET {url} failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GoalwaveError::io(format!("GET {url} returned {status}")));
    }

    let body = response
        .bytes()
        .map_err(|e| GoalwaveError::io(format!("reading body of {url} failed: {e}")))?;
    check_png(&body)?;
    tracing::debug!(bytes = body.len(), "fetched wallpaper");
    Ok(body.to_vec())
}

pub(crate) fn check_png(bytes: &[u8]) -> GoalwaveResult<()> {
    if bytes.starts_with(PNG_SIGNATURE) {
        Ok(())
    } else {
        Err(GoalwaveError::serde("response body is not a PNG image"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/delivery/fetch.rs"]
mod tests;

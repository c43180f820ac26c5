use std::time::Duration;

use serde_json::json;

use super::{parse_response, PhotoMatcher, ScanOutcome, SubmitError};

/// Blocking client for the photo-match endpoint.
pub struct HttpPhotoMatcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpPhotoMatcher {
    /// Build a client for `POST {base}/api/find_my_photos/{event_id}`.
    ///
    /// The timeout bounds the whole request so a hung server cannot leave
    /// the scanner loading forever.
    pub fn new(base_url: &str, event_id: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let url = format!(
            "{}/api/find_my_photos/{}",
            base_url.trim_end_matches('/'),
            event_id
        );

        Ok(Self { client, url })
    }
}

impl PhotoMatcher for HttpPhotoMatcher {
    fn submit(&self, image_data_url: &str) -> Result<ScanOutcome, SubmitError> {
        tracing::debug!("POST {}", self.url);

        // Application errors come back as `{"error": ...}` with a non-2xx
        // status, so the body is parsed regardless of status code.
        let body = self
            .client
            .post(&self.url)
            .json(&json!({ "image": image_data_url }))
            .send()?
            .text()?;

        parse_response(&body)
    }
}

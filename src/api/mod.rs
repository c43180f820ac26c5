mod http;

pub use http::HttpPhotoMatcher;

use serde::Deserialize;
use thiserror::Error;

/// Outcome of one photo-match submission.
///
/// The wire format is a union with exactly one of `error`, `message` or
/// `gallery_html` populated; dispatch checks them in that order and the
/// first present field wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Application error, e.g. no face detected in the selfie. Retryable.
    Error(String),
    /// Informational result, e.g. no matching photos. Retryable.
    Message(String),
    /// Server-rendered gallery markup. Terminal for the session.
    Gallery(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed server response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        SubmitError::Transport(e.to_string())
    }
}

/// Trait for the photo-match submission endpoint
pub trait PhotoMatcher {
    /// Submit an encoded selfie and interpret the server's reply
    fn submit(&self, image_data_url: &str) -> Result<ScanOutcome, SubmitError>;
}

/// Wire shape of the endpoint response, before validation.
#[derive(Debug, Deserialize)]
struct RawResponse {
    error: Option<String>,
    message: Option<String>,
    gallery_html: Option<String>,
}

/// Validate a response body into exactly one outcome.
///
/// A body carrying none of the three fields violates the endpoint contract
/// and is reported as malformed.
pub(crate) fn parse_response(body: &str) -> Result<ScanOutcome, SubmitError> {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

    if let Some(error) = raw.error {
        Ok(ScanOutcome::Error(error))
    } else if let Some(message) = raw.message {
        Ok(ScanOutcome::Message(message))
    } else if let Some(gallery) = raw.gallery_html {
        Ok(ScanOutcome::Gallery(gallery))
    } else {
        Err(SubmitError::MalformedResponse(
            "none of error, message or gallery_html present".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins_over_everything() {
        let body = r#"{"error": "No faces detected", "message": "x", "gallery_html": "<div/>"}"#;
        let outcome = parse_response(body).unwrap();
        assert_eq!(outcome, ScanOutcome::Error("No faces detected".to_string()));
    }

    #[test]
    fn message_field_wins_over_gallery() {
        let body = r#"{"message": "No matches found", "gallery_html": "<div/>"}"#;
        let outcome = parse_response(body).unwrap();
        assert_eq!(outcome, ScanOutcome::Message("No matches found".to_string()));
    }

    #[test]
    fn gallery_field_alone() {
        let body = r#"{"gallery_html": "<div class=\"gallery\"></div>"}"#;
        let outcome = parse_response(body).unwrap();
        assert_eq!(
            outcome,
            ScanOutcome::Gallery("<div class=\"gallery\"></div>".to_string())
        );
    }

    #[test]
    fn empty_union_is_malformed() {
        let err = parse_response("{}").unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let body = r#"{"error": null, "message": "ok"}"#;
        let outcome = parse_response(body).unwrap();
        assert_eq!(outcome, ScanOutcome::Message("ok".to_string()));
    }
}

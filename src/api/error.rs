use thiserror::Error;

/// Failures from the auth backend's three procedures.
///
/// The backend is a small POST-only surface, so the taxonomy follows what
/// it actually returns: a 4xx rejecting the submitted payload (stale or
/// already-used challenge, malformed signature), a 401 rejecting the
/// credential itself, rate limiting, and backend/transport trouble.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Login payload rejected: {0}")]
    PayloadRejected(String),

    #[error("Credential rejected by backend")]
    Unauthorized,

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

/// Maximum length in bytes for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data in errors.
    /// Cuts on a char boundary so multibyte bodies never split mid-character.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            // The verify endpoint rejects stale/used challenges and bad
            // signatures as client errors.
            400 | 410 | 422 => ApiError::PayloadRejected(truncated),
            401 | 403 => ApiError::Unauthorized,
            429 => ApiError::RateLimited,
            500..=599 => ApiError::Backend(truncated),
            _ => ApiError::Unexpected(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_status_codes_to_variants() {
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "challenge expired"),
            ApiError::PayloadRejected(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::GONE, "challenge already used"),
            ApiError::PayloadRejected(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "nope"),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "boom"),
            ApiError::Backend(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            ApiError::Unexpected(_)
        ));
    }

    #[test]
    fn truncates_oversized_bodies() {
        let body = "x".repeat(2000);
        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::Backend(msg) => {
                assert!(msg.len() < body.len());
                assert!(msg.contains("truncated"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        // A two-byte char straddling the truncation index: localized error
        // bodies must truncate cleanly, not panic.
        let body = format!("{}é{}", "x".repeat(499), "y".repeat(600));
        assert!(!body.is_char_boundary(MAX_ERROR_BODY_LENGTH));

        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::Backend(msg) => {
                assert!(msg.starts_with(&"x".repeat(499)));
                assert!(msg.contains("truncated"));
                assert!(!msg.contains('é'));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn short_multibyte_bodies_pass_through_untouched() {
        let body = "échec de la vérification";
        match ApiError::from_status(StatusCode::BAD_REQUEST, body) {
            ApiError::PayloadRejected(msg) => assert_eq!(msg, body),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}

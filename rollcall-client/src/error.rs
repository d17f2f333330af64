//! Error taxonomy for directory requests.

use thiserror::Error;

/// Failure modes of a single GraphQL request.
///
/// Every variant is scoped to one user-initiated action; none is fatal to
/// the process. The UI renders the `Display` form as its diagnostic string.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response carried GraphQL-level errors.
    #[error("server reported: {}", .0.join("; "))]
    Server(Vec<String>),

    /// A well-formed response with neither data nor errors.
    #[error("response contained no data")]
    MissingData,
}

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn server_errors_join_messages() {
        let err = ClientError::Server(vec![
            "name taken".to_string(),
            "quota exceeded".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "server reported: name taken; quota exceeded"
        );
    }

    #[test]
    fn missing_data_has_diagnostic() {
        assert_eq!(
            ClientError::MissingData.to_string(),
            "response contained no data"
        );
    }
}

use super::request::SensorField;

/// Everything that can go wrong between pressing submit and showing a result.
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    /// A numeric form field did not parse; the request is never sent.
    #[error("Please enter a valid numerical value for {}", .0.label())]
    InvalidField(SensorField),

    /// The service answered with a non-2xx status.
    #[error("Error: HTTP error! Status: {0}")]
    Http(u16),

    /// The service answered 2xx with an `error` field; shown verbatim.
    #[error("{0}")]
    Service(String),

    /// The request could not be sent or the connection failed.
    #[error("Error: {0}")]
    Transport(String),

    /// The response body was not a usable prediction.
    #[error("Error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PredictionError::InvalidField(SensorField::AirTemp).to_string(),
            "Please enter a valid numerical value for air temp"
        );
        assert_eq!(PredictionError::Http(503).to_string(), "Error: HTTP error! Status: 503");
        assert_eq!(
            PredictionError::Service("model unavailable".into()).to_string(),
            "model unavailable"
        );
        assert_eq!(
            PredictionError::Transport("Failed to fetch".into()).to_string(),
            "Error: Failed to fetch"
        );
    }
}

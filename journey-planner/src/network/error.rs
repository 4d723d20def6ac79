//! Network construction and lookup errors.

/// Errors from loading a network description or looking up its members.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// No station with this name
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// No line with this name
    #[error("unknown line: {0}")]
    UnknownLine(String),

    /// A station is declared twice in a network description
    #[error("station declared more than once: {0}")]
    DuplicateStation(String),

    /// A line is declared twice in a network description
    #[error("line declared more than once: {0}")]
    DuplicateLine(String),

    /// Failed to read a network description file
    #[error("failed to read network description: {0}")]
    Io(#[from] std::io::Error),

    /// Network description is not valid JSON, or has the wrong shape
    #[error("invalid network description: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownStation("Nowhere".into());
        assert_eq!(err.to_string(), "unknown station: Nowhere");

        let err = NetworkError::UnknownLine("Crossrail".into());
        assert_eq!(err.to_string(), "unknown line: Crossrail");

        let err = NetworkError::DuplicateStation("Bank".into());
        assert_eq!(err.to_string(), "station declared more than once: Bank");

        let err = NetworkError::DuplicateLine("Central".into());
        assert_eq!(err.to_string(), "line declared more than once: Central");
    }
}

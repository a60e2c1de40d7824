use std::fmt;

#[derive(Debug)]
pub enum StatsError {
    SchemaVersionMismatch { found: u8, expected: u8 },
    UnknownProfile(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::SchemaVersionMismatch { found, expected } => {
                write!(f, "Schema version mismatch: found {}, expected {}", found, expected)
            }
            StatsError::UnknownProfile(id) => {
                write!(f, "Unknown cultural profile: {}", id)
            }
            StatsError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            StatsError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StatsError {}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            StatsError::DeserializationError(err.to_string())
        } else {
            StatsError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_problem() {
        let err = StatsError::SchemaVersionMismatch { found: 2, expected: 1 };
        assert_eq!(err.to_string(), "Schema version mismatch: found 2, expected 1");

        let err = StatsError::UnknownProfile("atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown cultural profile: atlantis");
    }

    #[test]
    fn serde_errors_split_into_data_and_io() {
        let parse: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted = StatsError::from(parse);
        assert!(matches!(converted, StatsError::SerializationError(_)));

        let data: serde_json::Error =
            serde_json::from_str::<u8>("\"text\"").unwrap_err();
        let converted = StatsError::from(data);
        assert!(matches!(converted, StatsError::DeserializationError(_)));
    }
}

//! Error types for the birthday engine.

use std::io;

/// Why a poem could not be obtained.
///
/// Each variant is reported to the honoree with its own message; none of
/// them is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The text-generation service answered with a failure (quota, auth,
    /// malformed or empty reply).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The service could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be assembled into a valid API call.
    #[error("Type mismatch building request: {0}")]
    TypeMismatch(String),

    /// An argument to the call was semantically invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl GenerationError {
    /// The message shown in the display slot in place of the poem.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Provider(detail) => {
                format!("El servicio de generación devolvió un error: {detail}")
            }
            GenerationError::Network(detail) => format!("Error de conexión: {detail}"),
            GenerationError::TypeMismatch(_) => {
                "Error de tipo de datos al interactuar con la API de Claude.".to_string()
            }
            GenerationError::InvalidValue(_) => {
                "Error de valor al interactuar con la API de Claude.".to_string()
            }
        }
    }

    /// Short tag used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Provider(_) => "provider",
            GenerationError::Network(_) => "network",
            GenerationError::TypeMismatch(_) => "type_mismatch",
            GenerationError::InvalidValue(_) => "invalid_value",
        }
    }
}

impl From<claude::Error> for GenerationError {
    fn from(e: claude::Error) -> Self {
        match e {
            claude::Error::NoApiKey => {
                GenerationError::InvalidValue("ANTHROPIC_API_KEY is not set".to_string())
            }
            claude::Error::Config(msg) => GenerationError::InvalidValue(msg),
            claude::Error::Request(msg) => GenerationError::TypeMismatch(msg),
            claude::Error::Network(msg) => GenerationError::Network(msg),
            e @ claude::Error::Api { .. } => GenerationError::Provider(e.to_string()),
            claude::Error::Parse(msg) => GenerationError::Provider(msg),
        }
    }
}

/// Invalid configuration read from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown display mode '{0}' (expected 'tui' or 'plain')")]
    UnknownDisplayMode(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Failure to draw to, or read from, the display surface.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_distinct() {
        let errors = [
            GenerationError::Provider("quota".into()),
            GenerationError::Network("refused".into()),
            GenerationError::TypeMismatch("body".into()),
            GenerationError::InvalidValue("name".into()),
        ];
        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        for (i, a) in messages.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_network_message_includes_detail() {
        let e = GenerationError::Network("connection refused".into());
        assert_eq!(e.user_message(), "Error de conexión: connection refused");
    }

    #[test]
    fn test_claude_error_mapping() {
        let api = claude::Error::Api {
            status: 401,
            message: "authentication_error: bad key".into(),
        };
        assert!(matches!(GenerationError::from(api), GenerationError::Provider(m) if m.contains("401")));
        assert!(matches!(
            GenerationError::from(claude::Error::Network("x".into())),
            GenerationError::Network(_)
        ));
        assert!(matches!(
            GenerationError::from(claude::Error::Request("x".into())),
            GenerationError::TypeMismatch(_)
        ));
        assert!(matches!(
            GenerationError::from(claude::Error::Config("x".into())),
            GenerationError::InvalidValue(_)
        ));
        assert!(matches!(
            GenerationError::from(claude::Error::NoApiKey),
            GenerationError::InvalidValue(_)
        ));
        assert!(matches!(
            GenerationError::from(claude::Error::Parse("x".into())),
            GenerationError::Provider(_)
        ));
    }
}

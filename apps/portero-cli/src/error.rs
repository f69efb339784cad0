//! CLI error types and exit codes

use portero_client::ClientError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Authentication required
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not logged in. Run 'portero login' first.")]
    NotAuthenticated,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the API endpoint is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotAuthenticated | CliError::AuthenticationFailed(_) => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) | CliError::NotFound(_) => 4,
            CliError::Server(_) => 5,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::Config(_) | CliError::Io(_) | CliError::InputError(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        // Print suggested action if available
        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::NotAuthenticated => Some("Run 'portero login' to authenticate."),
            CliError::AuthenticationFailed(_) => {
                Some("Check the email and password, then try again.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

impl From<ClientError> for CliError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::ConnectionFailed(message) => CliError::ConnectionFailed(message),
            ClientError::Network(message) => CliError::Network(message),
            // The stored token is stale or absent; the client already
            // dropped it through the credential hook.
            ClientError::Api { status: 401, .. } => CliError::NotAuthenticated,
            ClientError::Api {
                status: 404,
                message,
                path,
            } => CliError::NotFound(format!("{message} ({path})")),
            ClientError::Api {
                status, message, ..
            } if status >= 500 => CliError::Server(message),
            ClientError::Api {
                status, message, ..
            } => CliError::Api { status, message },
            ClientError::Decode { path, message } => {
                CliError::Server(format!("Malformed response from {path}: {message}"))
            }
            ClientError::InvalidConfig(message) => CliError::Config(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::InputError(format!("Dialog error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_not_authenticated() {
        assert_eq!(CliError::NotAuthenticated.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_network_error() {
        assert_eq!(CliError::Network("test".to_string()).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_connection_failed() {
        assert_eq!(
            CliError::ConnectionFailed("test".to_string()).exit_code(),
            3
        );
    }

    #[test]
    fn test_exit_code_validation_error() {
        assert_eq!(CliError::Validation("test".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_server_error() {
        assert_eq!(CliError::Server("test".to_string()).exit_code(), 5);
    }

    #[test]
    fn test_exit_code_api_error_5xx() {
        assert_eq!(
            CliError::Api {
                status: 503,
                message: "test".to_string()
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_exit_code_api_error_conflict() {
        assert_eq!(
            CliError::Api {
                status: 409,
                message: "test".to_string()
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn test_client_unauthorized_becomes_not_authenticated() {
        let client_err = ClientError::Api {
            status: 401,
            message: "expired".to_string(),
            path: "/usuarios".to_string(),
        };
        let cli_err: CliError = client_err.into();
        assert!(matches!(cli_err, CliError::NotAuthenticated));
        assert_eq!(cli_err.exit_code(), 2);
    }

    #[test]
    fn test_client_not_found_keeps_path() {
        let client_err = ClientError::Api {
            status: 404,
            message: "Registro no encontrado".to_string(),
            path: "/secciones/abc".to_string(),
        };
        let cli_err: CliError = client_err.into();
        match cli_err {
            CliError::NotFound(message) => {
                assert!(message.contains("/secciones/abc"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_client_server_error_maps_to_server() {
        let client_err = ClientError::Api {
            status: 500,
            message: "boom".to_string(),
            path: "/sesiones".to_string(),
        };
        let cli_err: CliError = client_err.into();
        assert!(matches!(cli_err, CliError::Server(_)));
    }

    #[test]
    fn test_error_display_not_authenticated() {
        let error = CliError::NotAuthenticated;
        assert!(error.to_string().contains("Not logged in"));
    }
}

//! Stored login session

use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use portero_client::CredentialProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login session persisted in session.json.
///
/// Holds the bearer token next to the profile it was issued for. The file
/// is written with owner-only permissions because of the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Account ID
    pub user_id: Uuid,

    /// First name(s)
    pub nombres: String,

    /// Last name(s)
    pub apellidos: String,

    /// Account email
    pub email: String,

    /// Bearer token issued at login
    pub token: String,
}

impl Session {
    /// Load the session from file
    pub fn load(paths: &ConfigPaths) -> CliResult<Option<Self>> {
        if !paths.session_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&paths.session_file)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    /// Load the session, failing when nobody is logged in
    pub fn require(paths: &ConfigPaths) -> CliResult<Self> {
        Self::load(paths)?.ok_or(CliError::NotAuthenticated)
    }

    /// Save the session to file
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.session_file, content)?;

        // Owner-only: the file carries the bearer token (Unix)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&paths.session_file, perms)?;
        }

        Ok(())
    }

    /// Delete the session file
    pub fn delete(paths: &ConfigPaths) -> CliResult<()> {
        if paths.session_file.exists() {
            std::fs::remove_file(&paths.session_file)?;
        }
        Ok(())
    }

    /// Full name for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}

/// Feeds the stored token into the client's credential seam.
///
/// When the server answers 401 the stored session file is removed, so the
/// next command starts from a clean "not logged in" state instead of
/// retrying a dead token.
pub struct SessionCredentials {
    token: String,
    paths: ConfigPaths,
}

impl SessionCredentials {
    pub fn new(session: &Session, paths: ConfigPaths) -> Self {
        Self {
            token: session.token.clone(),
            paths,
        }
    }
}

impl CredentialProvider for SessionCredentials {
    fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }

    fn on_unauthorized(&self) {
        if self.paths.session_file.exists() {
            let _ = std::fs::remove_file(&self.paths.session_file);
        }
    }
}

//! Shared harness for the CLI integration tests

use portero_cli::config::ConfigPaths;
use tempfile::TempDir;
use wiremock::MockServer;

/// One isolated environment per test: a mock API server plus a throwaway
/// config directory nothing else reads or writes.
pub struct TestContext {
    pub server: MockServer,
    #[allow(dead_code)]
    temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            temp_dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Paths rooted in the throwaway directory.
    #[allow(dead_code)]
    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths {
            config_dir: self.temp_dir.path().to_path_buf(),
            config_file: self.temp_dir.path().join("config.json"),
            session_file: self.temp_dir.path().join("session.json"),
        }
    }

    /// Store a logged-in session with the given token and return it.
    #[allow(dead_code)]
    pub fn write_session(&self, token: &str) -> portero_cli::session::Session {
        use portero_cli::session::Session;

        let session = Session {
            user_id: uuid::Uuid::new_v4(),
            nombres: "Ana".to_string(),
            apellidos: "González".to_string(),
            email: "ana@example.com".to_string(),
            token: token.to_string(),
        };
        session.save(&self.paths()).expect("save session");
        session
    }
}

//! Logout command - Close the session and clear the stored token

use crate::config::ConfigPaths;
use crate::context;
use crate::error::CliResult;
use crate::output::{print_info, print_success, print_warning};
use crate::session::Session;
use clap::Args;

/// Arguments for the logout command
#[derive(Args)]
pub struct LogoutArgs {}

/// Execute the logout command
pub async fn execute(_args: LogoutArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    let session = match Session::load(&paths)? {
        Some(session) => session,
        None => {
            print_info("You are not logged in.");
            return Ok(());
        }
    };

    // Close the server-side session first; a dead token is not a reason
    // to keep the local one, so failures only warn.
    match context::authenticated_client() {
        Ok(client) => {
            if let Err(e) = client.auth().logout().await {
                if !e.is_unauthorized() {
                    print_warning(&format!("Could not close the server session: {e}"));
                }
            }
        }
        Err(e) => print_warning(&format!("Could not reach the server: {e}")),
    }

    Session::delete(&paths)?;
    print_success(&format!("Logged out {}.", session.email));

    Ok(())
}

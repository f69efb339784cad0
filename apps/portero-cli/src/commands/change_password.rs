//! Change-password command for the logged-in account

use crate::config::ConfigPaths;
use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::print_success;
use crate::session::Session;
use clap::Args;
use dialoguer::Password;
use portero_client::models::PasswordChangeRequest;

/// Arguments for the change-password command
#[derive(Args)]
pub struct ChangePasswordArgs {}

/// Execute the change-password command
pub async fn execute(_args: ChangePasswordArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    Session::require(&paths)?;

    // Both passwords come from prompts only; argv would leak them.
    if !atty::is(atty::Stream::Stdin) {
        return Err(CliError::Validation(
            "Cannot prompt for passwords in non-interactive mode.".to_string(),
        ));
    }

    let current_password = Password::new().with_prompt("Current password").interact()?;
    let new_password = Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match.")
        .interact()?;

    let client = context::authenticated_client()?;
    let request = PasswordChangeRequest {
        current_password,
        new_password,
    };
    client.auth().change_password(&request).await?;

    print_success("Password changed.");

    Ok(())
}

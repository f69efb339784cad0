//! Login command - Exchange credentials for a stored session

use crate::config::ConfigPaths;
use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_success};
use crate::session::Session;
use clap::Args;
use dialoguer::{Input, Password};
use portero_client::models::LoginRequest;
use portero_client::ClientError;

/// Arguments for the login command
#[derive(Args)]
pub struct LoginArgs {
    /// Email address to authenticate as (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Execute the login command
pub async fn execute(args: LoginArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    if let Some(session) = Session::load(&paths)? {
        print_info(&format!(
            "Already logged in as {}. Run 'portero logout' first to switch accounts.",
            session.email
        ));
        return Ok(());
    }

    let email = match args.email {
        Some(email) => email,
        None => {
            if !atty::is(atty::Stream::Stdin) {
                return Err(CliError::Validation(
                    "No email given. Pass --email or run interactively.".to_string(),
                ));
            }
            Input::<String>::new().with_prompt("Email").interact_text()?
        }
    };

    // The password never travels through argv or shell history.
    if !atty::is(atty::Stream::Stdin) {
        return Err(CliError::Validation(
            "Cannot prompt for a password in non-interactive mode.".to_string(),
        ));
    }
    let contrasena = Password::new().with_prompt("Password").interact()?;

    let client = context::anonymous_client()?;
    let request = LoginRequest { email, contrasena };

    let response = match client.auth().login(&request).await {
        Ok(response) => response,
        Err(ClientError::Api {
            status: 401,
            message,
            ..
        }) => {
            return Err(CliError::AuthenticationFailed(message));
        }
        Err(e) => return Err(e.into()),
    };

    let session = Session {
        user_id: response.id,
        nombres: response.nombres,
        apellidos: response.apellidos,
        email: response.email,
        token: response.token,
    };
    session.save(&paths)?;

    print_success(&format!(
        "Logged in as {} <{}>",
        session.display_name(),
        session.email
    ));

    Ok(())
}

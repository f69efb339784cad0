//! Whoami command - Display the account behind the stored session

use crate::config::ConfigPaths;
use crate::error::CliResult;
use crate::session::Session;
use clap::Args;
use serde::Serialize;

/// Arguments for the whoami command
#[derive(Args)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for whoami. The token stays in the session file.
#[derive(Serialize)]
struct WhoamiOutput {
    user_id: String,
    nombres: String,
    apellidos: String,
    email: String,
}

impl From<&Session> for WhoamiOutput {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.to_string(),
            nombres: session.nombres.clone(),
            apellidos: session.apellidos.clone(),
            email: session.email.clone(),
        }
    }
}

/// Execute the whoami command
pub async fn execute(args: WhoamiArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let session = Session::require(&paths)?;

    if args.json {
        let output = WhoamiOutput::from(&session);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Logged in as: {}", session.display_name());
        println!("Email:        {}", session.email);
        println!("User ID:      {}", session.user_id);
    }

    Ok(())
}

//! Sesion administration CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Page, Sesion};
use portero_client::{ListQuery, PageQuery};

const VALID_ESTADOS: [&str; 3] = ["activa", "cerrada", "expirada"];

/// Sesion management commands
#[derive(Args, Debug)]
pub struct SesionesArgs {
    #[command(subcommand)]
    pub command: SesionesCommands,
}

#[derive(Subcommand, Debug)]
pub enum SesionesCommands {
    /// List sesiones
    List(ListArgs),
    /// Get details of a specific sesion
    Get(GetArgs),
    /// Change the estado of a sesion (activa, cerrada, expirada)
    SetStatus(SetStatusArgs),
    /// Soft-delete a sesion
    Delete(DeleteArgs),
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Page to fetch (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Page size (1-100)
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Free-text filter applied server-side
    #[arg(long, default_value = "")]
    pub search: String,

    /// Show only sesiones in this estado (activa, cerrada, expirada)
    #[arg(long)]
    pub estado: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Sesion ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the set-status command
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    /// Sesion ID (UUID)
    pub id: String,

    /// New estado (activa, cerrada, expirada)
    pub estado: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Sesion ID (UUID)
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute sesion commands
pub async fn execute(args: SesionesArgs) -> CliResult<()> {
    match args.command {
        SesionesCommands::List(a) => execute_list(a).await,
        SesionesCommands::Get(a) => execute_get(a).await,
        SesionesCommands::SetStatus(a) => execute_set_status(a).await,
        SesionesCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.estado.is_some() && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --estado.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<Sesion> = if let Some(ref estado) = args.estado {
        validate_estado(estado)?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client.sesiones().list_by_estado(estado, &query).await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.sesiones().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No sesiones found.");
    } else {
        print_sesion_table(&page.content);
        println!();
        println!(
            "{}",
            page_footer(
                page.content.len(),
                page.number,
                page.total_pages,
                page.total_elements
            )
        );
    }

    Ok(())
}

async fn execute_get(args: GetArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "sesion")?;
    let client = context::authenticated_client()?;

    let sesion = client.sesiones().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sesion)?);
    } else {
        print_sesion_details(&sesion);
    }

    Ok(())
}

async fn execute_set_status(args: SetStatusArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "sesion")?;
    validate_estado(&args.estado)?;

    let client = context::authenticated_client()?;
    let sesion = client.sesiones().update_status(id, &args.estado).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sesion)?);
    } else {
        print_success(&format!("Sesion {} is now {}", sesion.id, sesion.estado));
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "sesion")?;
    let client = context::authenticated_client()?;

    let sesion = client.sesiones().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let owner = sesion.email_usuario.as_deref().unwrap_or("?");
        let confirm = Confirm::new()
            .with_prompt(format!("Soft-delete the sesion of '{owner}'?"))
            .default(false)
            .interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.sesiones().soft_delete(id).await?;
    print_success("Sesion soft-deleted.");

    Ok(())
}

fn validate_estado(estado: &str) -> CliResult<()> {
    if VALID_ESTADOS.contains(&estado) {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "Invalid estado '{}'. Valid values: {}",
            estado,
            VALID_ESTADOS.join(", ")
        )))
    }
}

fn print_sesion_table(sesiones: &[Sesion]) {
    println!(
        "{:<38} {:<24} {:<28} {:<10} {:<18}",
        "ID", "USUARIO", "EMAIL", "ESTADO", "INICIO"
    );
    println!("{}", "-".repeat(122));

    for sesion in sesiones {
        let nombres = sesion.usuario_nombres.as_deref().unwrap_or("");
        let apellidos = sesion.usuario_apellidos.as_deref().unwrap_or("");
        let nombre = format!("{nombres} {apellidos}");
        let usuario = if nombre.trim().is_empty() {
            sesion.usuario_id.to_string()
        } else {
            nombre.trim().to_string()
        };
        let email = sesion.email_usuario.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<24} {:<28} {:<10} {:<18}",
            sesion.id,
            truncate(&usuario, 22),
            truncate(email, 26),
            sesion.estado,
            sesion.fecha_inicio.format("%Y-%m-%d %H:%M")
        );
    }
}

fn print_sesion_details(sesion: &Sesion) {
    println!("Sesion: {}", sesion.id);
    println!("{}", "\u{2501}".repeat(50));

    let nombres = sesion.usuario_nombres.as_deref().unwrap_or("");
    let apellidos = sesion.usuario_apellidos.as_deref().unwrap_or("");
    let nombre = format!("{nombres} {apellidos}");
    if nombre.trim().is_empty() {
        println!("Usuario:     {}", sesion.usuario_id);
    } else {
        println!("Usuario:     {} ({})", nombre.trim(), sesion.usuario_id);
    }
    if let Some(ref email) = sesion.email_usuario {
        println!("Email:       {email}");
    }
    println!("Estado:      {}", sesion.estado);

    if let Some(ref ip) = sesion.ip_origen {
        println!("IP:          {ip}");
    }
    if let Some(ref dispositivo) = sesion.informacion_dispositivo {
        println!("Device:      {dispositivo}");
    }

    println!(
        "Started:     {}",
        sesion.fecha_inicio.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(fecha) = sesion.fecha_expiracion {
        println!("Expires:     {}", fecha.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(fecha) = sesion.fecha_fin {
        println!("Ended:       {}", fecha.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = sesion.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_estado_accepts_known_values() {
        for estado in VALID_ESTADOS {
            assert!(validate_estado(estado).is_ok());
        }
    }

    #[test]
    fn test_validate_estado_rejects_unknown_value() {
        let err = validate_estado("abierta").unwrap_err();
        match err {
            CliError::Validation(msg) => {
                assert!(msg.contains("abierta"));
                assert!(msg.contains("activa, cerrada, expirada"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_estado_is_case_sensitive() {
        assert!(validate_estado("Activa").is_err());
    }
}

//! Auditoria de accesos CLI commands (read-only)

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, truncate, validate_pagination};
use chrono::{DateTime, FixedOffset};
use clap::{Args, Subcommand};
use portero_client::models::{AuditoriaAcceso, Page};
use portero_client::{ListQuery, PageQuery};

/// Auditoria de accesos commands
#[derive(Args, Debug)]
pub struct AuditoriaArgs {
    #[command(subcommand)]
    pub command: AuditoriaCommands,
}

#[derive(Subcommand, Debug)]
pub enum AuditoriaCommands {
    /// List audit entries
    List(ListArgs),
    /// Get one audit entry by its composite key (uuid plus fecha)
    Get(GetArgs),
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

    /// Show only the entries of this aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,

    /// Show only the entries of this accion (UUID)
    #[arg(long)]
    pub accion: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Entry UUID
    pub id: String,

    /// Entry fecha, formatted as 2025-03-01T10:15:30Z
    pub fecha: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute auditoria commands
pub async fn execute(args: AuditoriaArgs) -> CliResult<()> {
    match args.command {
        AuditoriaCommands::List(a) => execute_list(a).await,
        AuditoriaCommands::Get(a) => execute_get(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.aplicacion.is_some() && args.accion.is_some() {
        return Err(CliError::Validation(
            "Use either --aplicacion or --accion, not both.".to_string(),
        ));
    }
    if (args.aplicacion.is_some() || args.accion.is_some()) && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --aplicacion or --accion.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<AuditoriaAcceso> = if let Some(ref aplicacion) = args.aplicacion {
        let aplicacion_id = parse_uuid(aplicacion, "aplicacion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .auditoria_accesos()
            .list_by_aplicacion(aplicacion_id, &query)
            .await?
    } else if let Some(ref accion) = args.accion {
        let accion_id = parse_uuid(accion, "accion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .auditoria_accesos()
            .list_by_accion(accion_id, &query)
            .await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.auditoria_accesos().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No audit entries found.");
    } else {
        print_auditoria_table(&page.content);
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
    let uuid_id = parse_uuid(&args.id, "audit entry")?;
    let fecha = parse_fecha(&args.fecha)?;
    let client = context::authenticated_client()?;

    let entry = client.auditoria_accesos().get(uuid_id, fecha).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print_auditoria_details(&entry);
    }

    Ok(())
}

fn parse_fecha(value: &str) -> CliResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|_| {
        CliError::Validation(format!(
            "Invalid fecha '{value}'. Expected RFC 3339, e.g. 2025-03-01T10:15:30Z"
        ))
    })
}

fn print_auditoria_table(entries: &[AuditoriaAcceso]) {
    println!(
        "{:<38} {:<20} {:<28} {:<20} {:<10}",
        "UUID", "FECHA", "EMAIL", "ACCION", "ESTADO"
    );
    println!("{}", "-".repeat(120));

    for entry in entries {
        let email = entry.email_usuario.as_deref().unwrap_or("-");
        let accion = entry.accion_nombre.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<20} {:<28} {:<20} {:<10}",
            entry.uuid_id,
            entry.fecha.format("%Y-%m-%d %H:%M:%S"),
            truncate(email, 26),
            truncate(accion, 18),
            entry.estado
        );
    }
}

fn print_auditoria_details(entry: &AuditoriaAcceso) {
    println!("Audit entry: {}", entry.uuid_id);
    println!("{}", "\u{2501}".repeat(50));
    println!("Fecha:       {}", entry.fecha.format("%Y-%m-%d %H:%M:%S"));
    println!("Estado:      {}", entry.estado);

    let nombres = entry.usuario_nombres.as_deref().unwrap_or("");
    let apellidos = entry.usuario_apellidos.as_deref().unwrap_or("");
    let nombre = format!("{nombres} {apellidos}");
    if !nombre.trim().is_empty() {
        println!("Usuario:     {}", nombre.trim());
    } else if let Some(usuario_id) = entry.usuario_id {
        println!("Usuario:     {usuario_id}");
    }
    if let Some(ref email) = entry.email_usuario {
        println!("Email:       {email}");
    }

    if let Some(ref aplicacion) = entry.aplicacion_nombre {
        println!("Aplicacion:  {aplicacion}");
    } else if let Some(aplicacion_id) = entry.aplicacion_id {
        println!("Aplicacion:  {aplicacion_id}");
    }

    if let Some(ref accion) = entry.accion_nombre {
        println!("Accion:      {accion}");
    } else if let Some(accion_id) = entry.accion_id {
        println!("Accion:      {accion_id}");
    }
    if let Some(ref descripcion) = entry.accion_descripcion {
        println!("             {descripcion}");
    }

    if let Some(ref mensaje) = entry.mensaje {
        println!("Mensaje:     {mensaje}");
    }
    if let Some(ref ip) = entry.ip_origen {
        println!("IP:          {ip}");
    }
    if let Some(ref dispositivo) = entry.informacion_dispositivo {
        println!("Device:      {dispositivo}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fecha_accepts_rfc3339() {
        let fecha = parse_fecha("2025-03-01T10:15:30Z").unwrap();
        assert_eq!(fecha.to_rfc3339(), "2025-03-01T10:15:30+00:00");

        let with_offset = parse_fecha("2025-03-01T10:15:30-05:00").unwrap();
        assert_eq!(with_offset.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_fecha_rejects_other_shapes() {
        assert!(parse_fecha("2025-03-01").is_err());
        assert!(parse_fecha("2025-03-01 10:15:30").is_err());
        assert!(parse_fecha("2025-03-01T10:15:30").is_err());
        assert!(parse_fecha("not-a-date").is_err());
    }

    #[test]
    fn test_parse_fecha_error_names_the_expected_format() {
        let err = parse_fecha("garbage").unwrap_err();
        match err {
            CliError::Validation(msg) => assert!(msg.contains("2025-03-01T10:15:30Z")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

//! Usuario management CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::{Confirm, Password};
use portero_client::models::{Page, Usuario, UsuarioCreateRequest, UsuarioUpdateRequest};
use portero_client::{ListQuery, PageQuery};

/// Usuario management commands
#[derive(Args, Debug)]
pub struct UsuariosArgs {
    #[command(subcommand)]
    pub command: UsuariosCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsuariosCommands {
    /// List usuarios
    List(ListArgs),
    /// Get details of a specific usuario
    Get(GetArgs),
    /// Create a new usuario (prompts for the password)
    Create(CreateArgs),
    /// Update an existing usuario
    Update(UpdateArgs),
    /// Soft-delete a usuario, or remove it permanently with --hard
    Delete(DeleteArgs),
    /// Check whether a usuario is locked out of starting sessions
    SessionBlocked(SessionBlockedArgs),
    /// List the reduced projection used by pickers
    Select(SelectArgs),
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

    /// Show only usuarios in this estado (activo, inactivo, bloqueado)
    #[arg(long)]
    pub estado: Option<String>,

    /// Show only usuarios with two-factor on (true) or off (false)
    #[arg(long)]
    pub dos_factor: Option<bool>,

    /// Show only usuarios that must (true) or need not (false) change password
    #[arg(long)]
    pub requiere_cambio: Option<bool>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Usuario ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Email address (also the login name)
    pub email: String,

    /// Given names
    #[arg(long)]
    pub nombres: String,

    /// Family names
    #[arg(long)]
    pub apellidos: String,

    /// Estado for the new record
    #[arg(long, default_value = "activo")]
    pub estado: String,

    /// Enable two-factor authentication
    #[arg(long)]
    pub dos_factor: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Usuario ID (UUID)
    pub id: String,

    /// New given names
    #[arg(long)]
    pub nombres: Option<String>,

    /// New family names
    #[arg(long)]
    pub apellidos: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New estado (activo, inactivo, bloqueado)
    #[arg(long)]
    pub estado: Option<String>,

    /// Turn two-factor on (true) or off (false)
    #[arg(long)]
    pub dos_factor: Option<bool>,

    /// Require (true) or clear (false) a forced password change
    #[arg(long)]
    pub requiere_cambio: Option<bool>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Usuario ID (UUID)
    pub id: String,

    /// Remove the record permanently instead of soft-deleting
    #[arg(long)]
    pub hard: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the session-blocked command
#[derive(Args, Debug)]
pub struct SessionBlockedArgs {
    /// Usuario ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the select command
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute usuario commands
pub async fn execute(args: UsuariosArgs) -> CliResult<()> {
    match args.command {
        UsuariosCommands::List(a) => execute_list(a).await,
        UsuariosCommands::Get(a) => execute_get(a).await,
        UsuariosCommands::Create(a) => execute_create(a).await,
        UsuariosCommands::Update(a) => execute_update(a).await,
        UsuariosCommands::Delete(a) => execute_delete(a).await,
        UsuariosCommands::SessionBlocked(a) => execute_session_blocked(a).await,
        UsuariosCommands::Select(a) => execute_select(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    let filters = [
        args.estado.is_some(),
        args.dos_factor.is_some(),
        args.requiere_cambio.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();

    if filters > 1 {
        return Err(CliError::Validation(
            "Use at most one of --estado, --dos-factor, or --requiere-cambio.".to_string(),
        ));
    }
    if filters == 1 && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --estado, --dos-factor, or --requiere-cambio."
                .to_string(),
        ));
    }

    let client = context::authenticated_client()?;
    let query = PageQuery::new().with_page(args.page).with_limit(args.limit);

    let page: Page<Usuario> = if let Some(ref estado) = args.estado {
        client.usuarios().list_by_estado(estado, &query).await?
    } else if let Some(dos_factor) = args.dos_factor {
        client
            .usuarios()
            .list_by_dos_factor_activo(dos_factor, &query)
            .await?
    } else if let Some(requiere_cambio) = args.requiere_cambio {
        client
            .usuarios()
            .list_by_requiere_cambio_contrasena(requiere_cambio, &query)
            .await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.usuarios().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No usuarios found.");
    } else {
        print_usuario_table(&page.content);
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
    let id = parse_uuid(&args.id, "usuario")?;
    let client = context::authenticated_client()?;

    let usuario = client.usuarios().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&usuario)?);
    } else {
        print_usuario_details(&usuario);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    // The password never travels through argv or shell history.
    if !atty::is(atty::Stream::Stdin) {
        return Err(CliError::Validation(
            "Creating a usuario needs an interactive terminal to prompt for the password."
                .to_string(),
        ));
    }
    let contrasena = Password::new()
        .with_prompt(format!("Password for {}", args.email))
        .with_confirmation("Confirm password", "Passwords do not match.")
        .interact()?;

    let client = context::authenticated_client()?;

    let request = UsuarioCreateRequest {
        nombres: args.nombres,
        apellidos: args.apellidos,
        email: args.email,
        contrasena,
        estado: args.estado,
        dos_factor_activo: args.dos_factor,
    };
    let usuario = client.usuarios().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&usuario)?);
    } else {
        print_success(&format!("Usuario created: {}", usuario.email));
        println!();
        print_usuario_details(&usuario);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "usuario")?;
    let client = context::authenticated_client()?;

    // The endpoint replaces the whole record; start from the current one
    // and overlay the provided flags.
    let current = client.usuarios().get(id).await?;
    let request = build_update_request(current, &args);
    let usuario = client.usuarios().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&usuario)?);
    } else {
        print_success(&format!("Usuario updated: {}", usuario.email));
        println!();
        print_usuario_details(&usuario);
    }

    Ok(())
}

/// The lockout bookkeeping is server-managed; sending the current values
/// back keeps a profile edit from resetting it.
fn build_update_request(current: Usuario, args: &UpdateArgs) -> UsuarioUpdateRequest {
    UsuarioUpdateRequest {
        nombres: args.nombres.clone().unwrap_or(current.nombres),
        apellidos: args.apellidos.clone().unwrap_or(current.apellidos),
        email: args.email.clone().unwrap_or(current.email),
        estado: args.estado.clone().unwrap_or(current.estado),
        dos_factor_activo: args.dos_factor.unwrap_or(current.dos_factor_activo),
        dos_factor_secreto_totp: current.dos_factor_secreto_totp,
        intentos_fallidos_sesion: Some(current.intentos_fallidos_sesion),
        fecha_ultimo_intento_fallido: current.fecha_ultimo_intento_fallido,
        fecha_bloqueo_sesion: current.fecha_bloqueo_sesion,
        requiere_cambio_contrasena: args
            .requiere_cambio
            .unwrap_or(current.requiere_cambio_contrasena),
    }
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "usuario")?;
    let client = context::authenticated_client()?;

    let usuario = client.usuarios().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let prompt = if args.hard {
            format!(
                "Permanently remove usuario '{}'? This cannot be undone.",
                usuario.email
            )
        } else {
            format!("Soft-delete usuario '{}'?", usuario.email)
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.usuarios().delete(id).await?;
        print_success(&format!("Usuario removed: {}", usuario.email));
    } else {
        client.usuarios().soft_delete(id).await?;
        print_success(&format!("Usuario soft-deleted: {}", usuario.email));
    }

    Ok(())
}

async fn execute_session_blocked(args: SessionBlockedArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "usuario")?;
    let client = context::authenticated_client()?;

    let blocked = client.usuarios().is_session_blocked(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&blocked)?);
    } else if blocked {
        println!("blocked");
    } else {
        println!("not blocked");
    }

    Ok(())
}

async fn execute_select(args: SelectArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let items = client.usuarios().select().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No usuarios found.");
    } else {
        for item in &items {
            println!("{}  {} {} <{}>", item.id, item.nombre, item.apellidos, item.email);
        }
    }

    Ok(())
}

fn print_usuario_table(usuarios: &[Usuario]) {
    println!(
        "{:<38} {:<26} {:<30} {:<10} {:<4}",
        "ID", "NOMBRE", "EMAIL", "ESTADO", "2FA"
    );
    println!("{}", "-".repeat(112));

    for usuario in usuarios {
        let nombre = format!("{} {}", usuario.nombres, usuario.apellidos);
        let dos_factor = if usuario.dos_factor_activo { "yes" } else { "no" };

        println!(
            "{:<38} {:<26} {:<30} {:<10} {:<4}",
            usuario.id,
            truncate(&nombre, 24),
            truncate(&usuario.email, 28),
            usuario.estado,
            dos_factor
        );
    }
}

fn print_usuario_details(usuario: &Usuario) {
    println!("Usuario: {} {}", usuario.nombres, usuario.apellidos);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:          {}", usuario.id);
    println!("Email:       {}", usuario.email);
    println!("Estado:      {}", usuario.estado);
    println!(
        "Two-factor:  {}",
        if usuario.dos_factor_activo { "on" } else { "off" }
    );
    println!(
        "Must change password: {}",
        if usuario.requiere_cambio_contrasena { "yes" } else { "no" }
    );

    if usuario.intentos_fallidos_sesion > 0 {
        println!("Failed logins: {}", usuario.intentos_fallidos_sesion);
    }
    if let Some(fecha) = usuario.fecha_ultimo_intento_fallido {
        println!("Last failed: {}", fecha.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(fecha) = usuario.fecha_bloqueo_sesion {
        println!("Blocked at:  {}", fecha.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(fecha) = usuario.fecha_ultimo_cambio_contrasena {
        println!("Password changed: {}", fecha.format("%Y-%m-%d %H:%M:%S"));
    }

    println!(
        "Created:     {}",
        usuario.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = usuario.updated_at {
        println!("Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = usuario.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_usuario() -> Usuario {
        Usuario {
            id: uuid::Uuid::nil(),
            nombres: "Ana".to_string(),
            apellidos: "González".to_string(),
            email: "ana@example.com".to_string(),
            estado: "activo".to_string(),
            dos_factor_activo: false,
            dos_factor_secreto_totp: Some("JBSWY3DP".to_string()),
            intentos_fallidos_sesion: 2,
            fecha_ultimo_intento_fallido: Some(
                DateTime::parse_from_rfc3339("2025-03-01T09:15:00Z").unwrap(),
            ),
            fecha_bloqueo_sesion: None,
            fecha_ultimo_cambio_contrasena: None,
            requiere_cambio_contrasena: false,
            created_at: DateTime::parse_from_rfc3339("2025-01-01T12:00:00Z").unwrap(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn empty_update_args() -> UpdateArgs {
        UpdateArgs {
            id: uuid::Uuid::nil().to_string(),
            nombres: None,
            apellidos: None,
            email: None,
            estado: None,
            dos_factor: None,
            requiere_cambio: None,
            json: false,
        }
    }

    #[test]
    fn test_update_overlays_provided_flags() {
        let mut args = empty_update_args();
        args.nombres = Some("Ana María".to_string());
        args.estado = Some("inactivo".to_string());

        let request = build_update_request(sample_usuario(), &args);

        assert_eq!(request.nombres, "Ana María");
        assert_eq!(request.estado, "inactivo");
        assert_eq!(request.apellidos, "González");
        assert_eq!(request.email, "ana@example.com");
        assert!(!request.dos_factor_activo);
    }

    #[test]
    fn test_update_keeps_current_when_no_flags() {
        let request = build_update_request(sample_usuario(), &empty_update_args());

        assert_eq!(request.nombres, "Ana");
        assert_eq!(request.estado, "activo");
        assert!(!request.requiere_cambio_contrasena);
    }

    #[test]
    fn test_update_passes_through_lockout_fields() {
        let mut args = empty_update_args();
        args.dos_factor = Some(true);

        let request = build_update_request(sample_usuario(), &args);

        assert!(request.dos_factor_activo);
        assert_eq!(request.dos_factor_secreto_totp.as_deref(), Some("JBSWY3DP"));
        assert_eq!(request.intentos_fallidos_sesion, Some(2));
        assert!(request.fecha_ultimo_intento_fallido.is_some());
        assert!(request.fecha_bloqueo_sesion.is_none());
    }
}

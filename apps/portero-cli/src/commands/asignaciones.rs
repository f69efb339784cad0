//! Asignacion (usuario / tipo de usuario) CLI commands, including the
//! effective-permission projection

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Page, UsuarioTipoUsuario, UsuarioTipoUsuarioRequest};
use portero_client::{ListQuery, PageQuery};

/// Asignacion management commands
#[derive(Args, Debug)]
pub struct AsignacionesArgs {
    #[command(subcommand)]
    pub command: AsignacionesCommands,
}

#[derive(Subcommand, Debug)]
pub enum AsignacionesCommands {
    /// List asignaciones
    List(ListArgs),
    /// Get details of a specific asignacion
    Get(GetArgs),
    /// Assign a tipo de usuario to a usuario
    Create(CreateArgs),
    /// Update an existing asignacion
    Update(UpdateArgs),
    /// Soft-delete an asignacion, or remove it permanently with --hard
    Delete(DeleteArgs),
    /// Show a usuario's effective permissions inside one aplicacion
    Permissions(PermissionsArgs),
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

    /// Show only the asignaciones of this usuario (UUID)
    #[arg(long)]
    pub usuario: Option<String>,

    /// Show only the asignaciones of this tipo de usuario (UUID)
    #[arg(long)]
    pub tipo_usuario: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Asignacion ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Usuario receiving the tipo (UUID)
    #[arg(long)]
    pub usuario: String,

    /// Tipo de usuario to assign (UUID)
    #[arg(long)]
    pub tipo_usuario: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Asignacion ID (UUID)
    pub id: String,

    /// New usuario (UUID)
    #[arg(long)]
    pub usuario: Option<String>,

    /// New tipo de usuario (UUID)
    #[arg(long)]
    pub tipo_usuario: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Asignacion ID (UUID)
    pub id: String,

    /// Remove the record permanently instead of soft-deleting
    #[arg(long)]
    pub hard: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the permissions command
#[derive(Args, Debug)]
pub struct PermissionsArgs {
    /// Usuario ID (UUID)
    pub usuario: String,

    /// Llave identificadora of the aplicacion to project into
    pub llave: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute asignacion commands
pub async fn execute(args: AsignacionesArgs) -> CliResult<()> {
    match args.command {
        AsignacionesCommands::List(a) => execute_list(a).await,
        AsignacionesCommands::Get(a) => execute_get(a).await,
        AsignacionesCommands::Create(a) => execute_create(a).await,
        AsignacionesCommands::Update(a) => execute_update(a).await,
        AsignacionesCommands::Delete(a) => execute_delete(a).await,
        AsignacionesCommands::Permissions(a) => execute_permissions(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.usuario.is_some() && args.tipo_usuario.is_some() {
        return Err(CliError::Validation(
            "Use either --usuario or --tipo-usuario, not both.".to_string(),
        ));
    }
    if (args.usuario.is_some() || args.tipo_usuario.is_some()) && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --usuario or --tipo-usuario.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<UsuarioTipoUsuario> = if let Some(ref usuario) = args.usuario {
        let usuario_id = parse_uuid(usuario, "usuario")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .usuarios_tipos_usuario()
            .list_by_usuario(usuario_id, &query)
            .await?
    } else if let Some(ref tipo_usuario) = args.tipo_usuario {
        let tipo_usuario_id = parse_uuid(tipo_usuario, "tipo de usuario")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .usuarios_tipos_usuario()
            .list_by_tipo_usuario(tipo_usuario_id, &query)
            .await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.usuarios_tipos_usuario().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No asignaciones found.");
    } else {
        print_asignacion_table(&page.content);
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
    let id = parse_uuid(&args.id, "asignacion")?;
    let client = context::authenticated_client()?;

    let asignacion = client.usuarios_tipos_usuario().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&asignacion)?);
    } else {
        print_asignacion_details(&asignacion);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let usuario_id = parse_uuid(&args.usuario, "usuario")?;
    let tipo_usuario_id = parse_uuid(&args.tipo_usuario, "tipo de usuario")?;
    let client = context::authenticated_client()?;

    let request = UsuarioTipoUsuarioRequest {
        usuario_id,
        tipo_usuario_id,
    };
    let asignacion = client.usuarios_tipos_usuario().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&asignacion)?);
    } else {
        print_success(&format!(
            "Asignacion created: {} -> {}",
            asignacion.usuario_email.as_deref().unwrap_or("usuario"),
            asignacion
                .tipo_usuario_nombre
                .as_deref()
                .unwrap_or("tipo de usuario")
        ));
        println!();
        print_asignacion_details(&asignacion);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "asignacion")?;
    let client = context::authenticated_client()?;

    let current = client.usuarios_tipos_usuario().get(id).await?;
    let usuario_id = match args.usuario {
        Some(ref usuario) => parse_uuid(usuario, "usuario")?,
        None => current.usuario_id,
    };
    let tipo_usuario_id = match args.tipo_usuario {
        Some(ref tipo_usuario) => parse_uuid(tipo_usuario, "tipo de usuario")?,
        None => current.tipo_usuario_id,
    };

    let request = UsuarioTipoUsuarioRequest {
        usuario_id,
        tipo_usuario_id,
    };
    let asignacion = client.usuarios_tipos_usuario().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&asignacion)?);
    } else {
        print_success("Asignacion updated.");
        println!();
        print_asignacion_details(&asignacion);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "asignacion")?;
    let client = context::authenticated_client()?;

    let asignacion = client.usuarios_tipos_usuario().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let usuario = asignacion.usuario_email.as_deref().unwrap_or("?");
        let tipo_usuario = asignacion.tipo_usuario_nombre.as_deref().unwrap_or("?");
        let prompt = if args.hard {
            format!(
                "Permanently remove '{tipo_usuario}' from '{usuario}'? This cannot be undone."
            )
        } else {
            format!("Remove '{tipo_usuario}' from '{usuario}'?")
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.usuarios_tipos_usuario().delete(id).await?;
        print_success("Asignacion removed.");
    } else {
        client.usuarios_tipos_usuario().soft_delete(id).await?;
        print_success("Asignacion soft-deleted.");
    }

    Ok(())
}

async fn execute_permissions(args: PermissionsArgs) -> CliResult<()> {
    let usuario_id = parse_uuid(&args.usuario, "usuario")?;
    let client = context::authenticated_client()?;

    let grupos = client
        .usuarios_tipos_usuario()
        .permissions_by_section(usuario_id, &args.llave)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grupos)?);
        return Ok(());
    }

    if grupos.is_empty() {
        println!("No permissions granted.");
        return Ok(());
    }

    for (i, grupo) in grupos.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", grupo.nombre_seccion);
        if let Some(ref descripcion) = grupo.descripcion_seccion {
            println!("  {descripcion}");
        }
        for accion in &grupo.acciones {
            match accion.descripcion_accion {
                Some(ref descripcion) => {
                    println!("  - {} ({})", accion.nombre_accion, descripcion)
                }
                None => println!("  - {}", accion.nombre_accion),
            }
        }
    }

    Ok(())
}

fn print_asignacion_table(asignaciones: &[UsuarioTipoUsuario]) {
    println!(
        "{:<38} {:<30} {:<24} {:<12}",
        "ID", "USUARIO", "TIPO USUARIO", "CREATED"
    );
    println!("{}", "-".repeat(106));

    for asignacion in asignaciones {
        let usuario = asignacion.usuario_email.as_deref().unwrap_or("-");
        let tipo_usuario = asignacion.tipo_usuario_nombre.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<30} {:<24} {:<12}",
            asignacion.id,
            truncate(usuario, 28),
            truncate(tipo_usuario, 22),
            asignacion.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_asignacion_details(asignacion: &UsuarioTipoUsuario) {
    println!("Asignacion: {}", asignacion.id);
    println!("{}", "\u{2501}".repeat(50));

    let nombres = asignacion.usuario_nombres.as_deref().unwrap_or("");
    let apellidos = asignacion.usuario_apellidos.as_deref().unwrap_or("");
    let nombre = format!("{nombres} {apellidos}");
    if nombre.trim().is_empty() {
        println!("Usuario:      {}", asignacion.usuario_id);
    } else {
        println!("Usuario:      {} ({})", nombre.trim(), asignacion.usuario_id);
    }
    if let Some(ref email) = asignacion.usuario_email {
        println!("Email:        {email}");
    }

    match asignacion.tipo_usuario_nombre {
        Some(ref nombre) => {
            println!("Tipo usuario: {} ({})", nombre, asignacion.tipo_usuario_id)
        }
        None => println!("Tipo usuario: {}", asignacion.tipo_usuario_id),
    }
    if let Some(ref descripcion) = asignacion.tipo_usuario_descripcion {
        println!("              {descripcion}");
    }

    println!(
        "Created:      {}",
        asignacion.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = asignacion.updated_at {
        println!("Updated:      {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = asignacion.deleted_at {
        println!("Deleted:      {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

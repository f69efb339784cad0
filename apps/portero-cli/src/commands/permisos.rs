//! Permiso (accion grant per tipo de usuario) CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Page, PermisoTipoUsuario, PermisoTipoUsuarioRequest};
use portero_client::{ListQuery, PageQuery};

/// Permiso management commands
#[derive(Args, Debug)]
pub struct PermisosArgs {
    #[command(subcommand)]
    pub command: PermisosCommands,
}

#[derive(Subcommand, Debug)]
pub enum PermisosCommands {
    /// List permisos
    List(ListArgs),
    /// Get details of a specific permiso
    Get(GetArgs),
    /// Grant an accion to a tipo de usuario
    Create(CreateArgs),
    /// Update an existing permiso
    Update(UpdateArgs),
    /// Soft-delete a permiso, or remove it permanently with --hard
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

    /// Show only the permisos of this tipo de usuario (UUID)
    #[arg(long)]
    pub tipo_usuario: Option<String>,

    /// Show only the permisos of this aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Permiso ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Accion to grant (UUID)
    #[arg(long)]
    pub accion: String,

    /// Tipo de usuario receiving the grant (UUID)
    #[arg(long)]
    pub tipo_usuario: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Permiso ID (UUID)
    pub id: String,

    /// New accion (UUID)
    #[arg(long)]
    pub accion: Option<String>,

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
    /// Permiso ID (UUID)
    pub id: String,

    /// Remove the record permanently instead of soft-deleting
    #[arg(long)]
    pub hard: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute permiso commands
pub async fn execute(args: PermisosArgs) -> CliResult<()> {
    match args.command {
        PermisosCommands::List(a) => execute_list(a).await,
        PermisosCommands::Get(a) => execute_get(a).await,
        PermisosCommands::Create(a) => execute_create(a).await,
        PermisosCommands::Update(a) => execute_update(a).await,
        PermisosCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.tipo_usuario.is_some() && args.aplicacion.is_some() {
        return Err(CliError::Validation(
            "Use either --tipo-usuario or --aplicacion, not both.".to_string(),
        ));
    }
    if (args.tipo_usuario.is_some() || args.aplicacion.is_some()) && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --tipo-usuario or --aplicacion.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<PermisoTipoUsuario> = if let Some(ref tipo_usuario) = args.tipo_usuario {
        let tipo_usuario_id = parse_uuid(tipo_usuario, "tipo de usuario")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .permisos_tipo_usuario()
            .list_by_tipo_usuario(tipo_usuario_id, &query)
            .await?
    } else if let Some(ref aplicacion) = args.aplicacion {
        let aplicacion_id = parse_uuid(aplicacion, "aplicacion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .permisos_tipo_usuario()
            .list_by_aplicacion(aplicacion_id, &query)
            .await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.permisos_tipo_usuario().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No permisos found.");
    } else {
        print_permiso_table(&page.content);
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
    let id = parse_uuid(&args.id, "permiso")?;
    let client = context::authenticated_client()?;

    let permiso = client.permisos_tipo_usuario().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&permiso)?);
    } else {
        print_permiso_details(&permiso);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let accion_id = parse_uuid(&args.accion, "accion")?;
    let tipo_usuario_id = parse_uuid(&args.tipo_usuario, "tipo de usuario")?;
    let client = context::authenticated_client()?;

    let request = PermisoTipoUsuarioRequest {
        accion_id,
        tipo_usuario_id,
    };
    let permiso = client.permisos_tipo_usuario().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&permiso)?);
    } else {
        print_success(&format!(
            "Permiso granted: {} -> {}",
            permiso.accion_nombre.as_deref().unwrap_or("accion"),
            permiso.tipo_usuario_nombre.as_deref().unwrap_or("tipo de usuario")
        ));
        println!();
        print_permiso_details(&permiso);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "permiso")?;
    let client = context::authenticated_client()?;

    let current = client.permisos_tipo_usuario().get(id).await?;
    let accion_id = match args.accion {
        Some(ref accion) => parse_uuid(accion, "accion")?,
        None => current.accion_id,
    };
    let tipo_usuario_id = match args.tipo_usuario {
        Some(ref tipo_usuario) => parse_uuid(tipo_usuario, "tipo de usuario")?,
        None => current.tipo_usuario_id,
    };

    let request = PermisoTipoUsuarioRequest {
        accion_id,
        tipo_usuario_id,
    };
    let permiso = client.permisos_tipo_usuario().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&permiso)?);
    } else {
        print_success("Permiso updated.");
        println!();
        print_permiso_details(&permiso);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "permiso")?;
    let client = context::authenticated_client()?;

    let permiso = client.permisos_tipo_usuario().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let accion = permiso.accion_nombre.as_deref().unwrap_or("?");
        let tipo_usuario = permiso.tipo_usuario_nombre.as_deref().unwrap_or("?");
        let prompt = if args.hard {
            format!(
                "Permanently revoke '{accion}' from '{tipo_usuario}'? This cannot be undone."
            )
        } else {
            format!("Revoke '{accion}' from '{tipo_usuario}'?")
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.permisos_tipo_usuario().delete(id).await?;
        print_success("Permiso removed.");
    } else {
        client.permisos_tipo_usuario().soft_delete(id).await?;
        print_success("Permiso soft-deleted.");
    }

    Ok(())
}

fn print_permiso_table(permisos: &[PermisoTipoUsuario]) {
    println!(
        "{:<38} {:<26} {:<26} {:<12}",
        "ID", "ACCION", "TIPO USUARIO", "CREATED"
    );
    println!("{}", "-".repeat(104));

    for permiso in permisos {
        let accion = permiso.accion_nombre.as_deref().unwrap_or("-");
        let tipo_usuario = permiso.tipo_usuario_nombre.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<26} {:<26} {:<12}",
            permiso.id,
            truncate(accion, 24),
            truncate(tipo_usuario, 24),
            permiso.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_permiso_details(permiso: &PermisoTipoUsuario) {
    println!("Permiso: {}", permiso.id);
    println!("{}", "\u{2501}".repeat(50));

    match permiso.accion_nombre {
        Some(ref nombre) => println!("Accion:       {} ({})", nombre, permiso.accion_id),
        None => println!("Accion:       {}", permiso.accion_id),
    }
    if let Some(ref descripcion) = permiso.accion_descripcion {
        println!("              {descripcion}");
    }

    match permiso.tipo_usuario_nombre {
        Some(ref nombre) => println!("Tipo usuario: {} ({})", nombre, permiso.tipo_usuario_id),
        None => println!("Tipo usuario: {}", permiso.tipo_usuario_id),
    }
    if let Some(ref descripcion) = permiso.tipo_usuario_descripcion {
        println!("              {descripcion}");
    }

    println!(
        "Created:      {}",
        permiso.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = permiso.updated_at {
        println!("Updated:      {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = permiso.deleted_at {
        println!("Deleted:      {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

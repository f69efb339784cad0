//! Tipo de usuario (role) management CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Page, TipoUsuario, TipoUsuarioRequest};
use portero_client::{ListQuery, PageQuery};

/// Tipo de usuario management commands
#[derive(Args, Debug)]
pub struct TiposUsuarioArgs {
    #[command(subcommand)]
    pub command: TiposUsuarioCommands,
}

#[derive(Subcommand, Debug)]
pub enum TiposUsuarioCommands {
    /// List tipos de usuario
    List(ListArgs),
    /// Get details of a specific tipo de usuario
    Get(GetArgs),
    /// Create a new tipo de usuario
    Create(CreateArgs),
    /// Update an existing tipo de usuario
    Update(UpdateArgs),
    /// Soft-delete a tipo de usuario, or remove it permanently with --hard
    Delete(DeleteArgs),
    /// List the reduced id/nombre projection used by pickers
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

    /// Show only tipos de usuario in this estado (activo, inactivo)
    #[arg(long)]
    pub estado: Option<String>,

    /// Show only the tipos de usuario of this aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Tipo de usuario ID (UUID)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name
    pub nombre: String,

    /// Owning aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: String,

    /// Description
    #[arg(long)]
    pub descripcion: Option<String>,

    /// Estado for the new record
    #[arg(long, default_value = "activo")]
    pub estado: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Tipo de usuario ID (UUID)
    pub id: String,

    /// New display name
    #[arg(long)]
    pub nombre: Option<String>,

    /// New owning aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,

    /// New description
    #[arg(long)]
    pub descripcion: Option<String>,

    /// New estado
    #[arg(long)]
    pub estado: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Tipo de usuario ID (UUID)
    pub id: String,

    /// Remove the record permanently instead of soft-deleting
    #[arg(long)]
    pub hard: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the select command
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute tipo de usuario commands
pub async fn execute(args: TiposUsuarioArgs) -> CliResult<()> {
    match args.command {
        TiposUsuarioCommands::List(a) => execute_list(a).await,
        TiposUsuarioCommands::Get(a) => execute_get(a).await,
        TiposUsuarioCommands::Create(a) => execute_create(a).await,
        TiposUsuarioCommands::Update(a) => execute_update(a).await,
        TiposUsuarioCommands::Delete(a) => execute_delete(a).await,
        TiposUsuarioCommands::Select(a) => execute_select(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.estado.is_some() && args.aplicacion.is_some() {
        return Err(CliError::Validation(
            "Use either --estado or --aplicacion, not both.".to_string(),
        ));
    }
    if (args.estado.is_some() || args.aplicacion.is_some()) && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --estado or --aplicacion.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<TipoUsuario> = if let Some(ref estado) = args.estado {
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client.tipos_usuario().list_by_estado(estado, &query).await?
    } else if let Some(ref aplicacion) = args.aplicacion {
        let aplicacion_id = parse_uuid(aplicacion, "aplicacion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .tipos_usuario()
            .list_by_aplicacion(aplicacion_id, &query)
            .await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.tipos_usuario().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No tipos de usuario found.");
    } else {
        print_tipo_usuario_table(&page.content);
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
    let id = parse_uuid(&args.id, "tipo de usuario")?;
    let client = context::authenticated_client()?;

    let tipo = client.tipos_usuario().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tipo)?);
    } else {
        print_tipo_usuario_details(&tipo);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let aplicacion_id = parse_uuid(&args.aplicacion, "aplicacion")?;
    let client = context::authenticated_client()?;

    let request = TipoUsuarioRequest {
        nombre: args.nombre,
        descripcion: args.descripcion,
        aplicacion_id,
        estado: args.estado,
    };
    let tipo = client.tipos_usuario().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tipo)?);
    } else {
        print_success(&format!("Tipo de usuario created: {}", tipo.nombre));
        println!();
        print_tipo_usuario_details(&tipo);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "tipo de usuario")?;
    let client = context::authenticated_client()?;

    let current = client.tipos_usuario().get(id).await?;
    let aplicacion_id = match args.aplicacion {
        Some(ref aplicacion) => parse_uuid(aplicacion, "aplicacion")?,
        None => current.aplicacion_id,
    };

    let request = TipoUsuarioRequest {
        nombre: args.nombre.unwrap_or(current.nombre),
        descripcion: args.descripcion.or(current.descripcion),
        aplicacion_id,
        estado: args.estado.unwrap_or(current.estado),
    };
    let tipo = client.tipos_usuario().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tipo)?);
    } else {
        print_success(&format!("Tipo de usuario updated: {}", tipo.nombre));
        println!();
        print_tipo_usuario_details(&tipo);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "tipo de usuario")?;
    let client = context::authenticated_client()?;

    let tipo = client.tipos_usuario().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let prompt = if args.hard {
            format!(
                "Permanently remove tipo de usuario '{}'? This cannot be undone.",
                tipo.nombre
            )
        } else {
            format!("Soft-delete tipo de usuario '{}'?", tipo.nombre)
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.tipos_usuario().delete(id).await?;
        print_success(&format!("Tipo de usuario removed: {}", tipo.nombre));
    } else {
        client.tipos_usuario().soft_delete(id).await?;
        print_success(&format!("Tipo de usuario soft-deleted: {}", tipo.nombre));
    }

    Ok(())
}

async fn execute_select(args: SelectArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let items = client.tipos_usuario().select().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No tipos de usuario found.");
    } else {
        for item in &items {
            println!("{}  {}", item.id, item.nombre);
        }
    }

    Ok(())
}

fn print_tipo_usuario_table(tipos: &[TipoUsuario]) {
    println!(
        "{:<38} {:<24} {:<20} {:<10} {:<12}",
        "ID", "NOMBRE", "APLICACION", "ESTADO", "CREATED"
    );
    println!("{}", "-".repeat(108));

    for tipo in tipos {
        let aplicacion = tipo.nombre_aplicacion.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<24} {:<20} {:<10} {:<12}",
            tipo.id,
            truncate(&tipo.nombre, 22),
            truncate(aplicacion, 18),
            tipo.estado,
            tipo.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_tipo_usuario_details(tipo: &TipoUsuario) {
    println!("Tipo de usuario: {}", tipo.nombre);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:          {}", tipo.id);
    println!("Nombre:      {}", tipo.nombre);

    if let Some(ref descripcion) = tipo.descripcion {
        println!("Descripcion: {descripcion}");
    }

    match tipo.nombre_aplicacion {
        Some(ref nombre) => println!("Aplicacion:  {} ({})", nombre, tipo.aplicacion_id),
        None => println!("Aplicacion:  {}", tipo.aplicacion_id),
    }
    println!("Estado:      {}", tipo.estado);

    println!(
        "Created:     {}",
        tipo.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = tipo.updated_at {
        println!("Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = tipo.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

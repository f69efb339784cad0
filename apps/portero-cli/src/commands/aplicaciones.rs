//! Aplicacion management CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Aplicacion, AplicacionRequest};
use portero_client::{ListQuery, PageQuery};

/// Aplicacion management commands
#[derive(Args, Debug)]
pub struct AplicacionesArgs {
    #[command(subcommand)]
    pub command: AplicacionesCommands,
}

#[derive(Subcommand, Debug)]
pub enum AplicacionesCommands {
    /// List aplicaciones
    List(ListArgs),
    /// Get details of a specific aplicacion
    Get(GetArgs),
    /// Register a new aplicacion
    Create(CreateArgs),
    /// Update an existing aplicacion
    Update(UpdateArgs),
    /// Soft-delete an aplicacion, or remove it permanently with --hard
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

    /// Show only aplicaciones in this estado (activo, inactivo)
    #[arg(long)]
    pub estado: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Aplicacion ID (UUID)
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

    /// Stable machine key other services use to address the aplicacion
    #[arg(long)]
    pub llave: String,

    /// Application URL
    #[arg(long)]
    pub url: String,

    /// Description
    #[arg(long)]
    pub descripcion: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Aplicacion ID (UUID)
    pub id: String,

    /// New display name
    #[arg(long)]
    pub nombre: Option<String>,

    /// New machine key
    #[arg(long)]
    pub llave: Option<String>,

    /// New application URL
    #[arg(long)]
    pub url: Option<String>,

    /// New description
    #[arg(long)]
    pub descripcion: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Aplicacion ID (UUID)
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

/// Execute aplicacion commands
pub async fn execute(args: AplicacionesArgs) -> CliResult<()> {
    match args.command {
        AplicacionesCommands::List(a) => execute_list(a).await,
        AplicacionesCommands::Get(a) => execute_get(a).await,
        AplicacionesCommands::Create(a) => execute_create(a).await,
        AplicacionesCommands::Update(a) => execute_update(a).await,
        AplicacionesCommands::Delete(a) => execute_delete(a).await,
        AplicacionesCommands::Select(a) => execute_select(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;
    let client = context::authenticated_client()?;

    let page = match args.estado {
        Some(ref estado) => {
            // The estado endpoint paginates but does not search.
            if !args.search.is_empty() {
                return Err(CliError::Validation(
                    "Use either --estado or --search, not both.".to_string(),
                ));
            }
            let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
            client.aplicaciones().list_by_estado(estado, &query).await?
        }
        None => {
            let query = ListQuery::new()
                .with_page(args.page)
                .with_limit(args.limit)
                .with_search(args.search);
            client.aplicaciones().list(&query).await?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No aplicaciones found.");
    } else {
        print_aplicacion_table(&page.content);
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
    let id = parse_uuid(&args.id, "aplicacion")?;
    let client = context::authenticated_client()?;

    let aplicacion = client.aplicaciones().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aplicacion)?);
    } else {
        print_aplicacion_details(&aplicacion);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let request = AplicacionRequest {
        nombre: args.nombre,
        descripcion: args.descripcion,
        url: args.url,
        llave_identificadora: args.llave,
    };
    let aplicacion = client.aplicaciones().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aplicacion)?);
    } else {
        print_success(&format!("Aplicacion created: {}", aplicacion.nombre));
        println!();
        print_aplicacion_details(&aplicacion);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "aplicacion")?;
    let client = context::authenticated_client()?;

    let current = client.aplicaciones().get(id).await?;
    let request = AplicacionRequest {
        nombre: args.nombre.unwrap_or(current.nombre),
        descripcion: args.descripcion.or(current.descripcion),
        url: args.url.unwrap_or(current.url),
        llave_identificadora: args.llave.unwrap_or(current.llave_identificadora),
    };
    let aplicacion = client.aplicaciones().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aplicacion)?);
    } else {
        print_success(&format!("Aplicacion updated: {}", aplicacion.nombre));
        println!();
        print_aplicacion_details(&aplicacion);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "aplicacion")?;
    let client = context::authenticated_client()?;

    let aplicacion = client.aplicaciones().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let prompt = if args.hard {
            format!(
                "Permanently remove aplicacion '{}'? This cannot be undone.",
                aplicacion.nombre
            )
        } else {
            format!("Soft-delete aplicacion '{}'?", aplicacion.nombre)
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.aplicaciones().delete(id).await?;
        print_success(&format!("Aplicacion removed: {}", aplicacion.nombre));
    } else {
        client.aplicaciones().soft_delete(id).await?;
        print_success(&format!("Aplicacion soft-deleted: {}", aplicacion.nombre));
    }

    Ok(())
}

async fn execute_select(args: SelectArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let items = client.aplicaciones().select().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No aplicaciones found.");
    } else {
        for item in &items {
            println!("{}  {}", item.id, item.nombre);
        }
    }

    Ok(())
}

fn print_aplicacion_table(aplicaciones: &[Aplicacion]) {
    println!(
        "{:<38} {:<24} {:<20} {:<10} {:<24}",
        "ID", "NOMBRE", "LLAVE", "ESTADO", "URL"
    );
    println!("{}", "-".repeat(118));

    for aplicacion in aplicaciones {
        println!(
            "{:<38} {:<24} {:<20} {:<10} {:<24}",
            aplicacion.id,
            truncate(&aplicacion.nombre, 22),
            truncate(&aplicacion.llave_identificadora, 18),
            aplicacion.estado,
            truncate(&aplicacion.url, 22)
        );
    }
}

fn print_aplicacion_details(aplicacion: &Aplicacion) {
    println!("Aplicacion: {}", aplicacion.nombre);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:          {}", aplicacion.id);
    println!("Nombre:      {}", aplicacion.nombre);
    println!("Llave:       {}", aplicacion.llave_identificadora);
    println!("URL:         {}", aplicacion.url);
    println!("Estado:      {}", aplicacion.estado);

    if let Some(ref descripcion) = aplicacion.descripcion {
        println!("Descripcion: {descripcion}");
    }

    println!(
        "Created:     {}",
        aplicacion.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = aplicacion.updated_at {
        println!("Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = aplicacion.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

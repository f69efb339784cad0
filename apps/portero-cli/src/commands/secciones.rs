//! Seccion management CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Seccion, SeccionRequest};
use portero_client::ListQuery;

/// Seccion management commands
#[derive(Args, Debug)]
pub struct SeccionesArgs {
    #[command(subcommand)]
    pub command: SeccionesCommands,
}

#[derive(Subcommand, Debug)]
pub enum SeccionesCommands {
    /// List secciones
    List(ListArgs),
    /// Get details of a specific seccion
    Get(GetArgs),
    /// Create a new seccion
    Create(CreateArgs),
    /// Update an existing seccion
    Update(UpdateArgs),
    /// Soft-delete a seccion, or remove it permanently with --hard
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
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Seccion ID (UUID)
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
    /// Seccion ID (UUID)
    pub id: String,

    /// New display name
    #[arg(long)]
    pub nombre: Option<String>,

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
    /// Seccion ID (UUID)
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

/// Execute seccion commands
pub async fn execute(args: SeccionesArgs) -> CliResult<()> {
    match args.command {
        SeccionesCommands::List(a) => execute_list(a).await,
        SeccionesCommands::Get(a) => execute_get(a).await,
        SeccionesCommands::Create(a) => execute_create(a).await,
        SeccionesCommands::Update(a) => execute_update(a).await,
        SeccionesCommands::Delete(a) => execute_delete(a).await,
        SeccionesCommands::Select(a) => execute_select(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;
    let client = context::authenticated_client()?;

    let query = ListQuery::new()
        .with_page(args.page)
        .with_limit(args.limit)
        .with_search(args.search);
    let page = client.secciones().list(&query).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No secciones found.");
    } else {
        print_seccion_table(&page.content);
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
    let id = parse_uuid(&args.id, "seccion")?;
    let client = context::authenticated_client()?;

    let seccion = client.secciones().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&seccion)?);
    } else {
        print_seccion_details(&seccion);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let request = SeccionRequest {
        nombre: args.nombre,
        descripcion: args.descripcion,
    };
    let seccion = client.secciones().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&seccion)?);
    } else {
        print_success(&format!("Seccion created: {}", seccion.nombre));
        println!();
        print_seccion_details(&seccion);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "seccion")?;
    let client = context::authenticated_client()?;

    // The endpoint replaces the whole record; start from the current one
    // and overlay the provided flags.
    let current = client.secciones().get(id).await?;
    let request = SeccionRequest {
        nombre: args.nombre.unwrap_or(current.nombre),
        descripcion: args.descripcion.or(current.descripcion),
    };
    let seccion = client.secciones().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&seccion)?);
    } else {
        print_success(&format!("Seccion updated: {}", seccion.nombre));
        println!();
        print_seccion_details(&seccion);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "seccion")?;
    let client = context::authenticated_client()?;

    let seccion = client.secciones().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let prompt = if args.hard {
            format!(
                "Permanently remove seccion '{}'? This cannot be undone.",
                seccion.nombre
            )
        } else {
            format!("Soft-delete seccion '{}'?", seccion.nombre)
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.secciones().delete(id).await?;
        print_success(&format!("Seccion removed: {}", seccion.nombre));
    } else {
        client.secciones().soft_delete(id).await?;
        print_success(&format!("Seccion soft-deleted: {}", seccion.nombre));
    }

    Ok(())
}

async fn execute_select(args: SelectArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let items = client.secciones().select().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No secciones found.");
    } else {
        for item in &items {
            println!("{}  {}", item.id, item.nombre);
        }
    }

    Ok(())
}

fn print_seccion_table(secciones: &[Seccion]) {
    println!(
        "{:<38} {:<28} {:<36} {:<12}",
        "ID", "NOMBRE", "DESCRIPCION", "CREATED"
    );
    println!("{}", "-".repeat(116));

    for seccion in secciones {
        let descripcion = seccion.descripcion.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<28} {:<36} {:<12}",
            seccion.id,
            truncate(&seccion.nombre, 26),
            truncate(descripcion, 34),
            seccion.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_seccion_details(seccion: &Seccion) {
    println!("Seccion: {}", seccion.nombre);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:          {}", seccion.id);
    println!("Nombre:      {}", seccion.nombre);

    if let Some(ref descripcion) = seccion.descripcion {
        println!("Descripcion: {descripcion}");
    }

    println!(
        "Created:     {}",
        seccion.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = seccion.updated_at {
        println!("Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = seccion.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

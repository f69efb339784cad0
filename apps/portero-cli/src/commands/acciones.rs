//! Accion management CLI commands

use crate::context;
use crate::error::{CliError, CliResult};
use crate::output::{page_footer, parse_uuid, print_success, truncate, validate_pagination};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use portero_client::models::{Accion, AccionRequest, Page};
use portero_client::{ListQuery, PageQuery};

/// Accion management commands
#[derive(Args, Debug)]
pub struct AccionesArgs {
    #[command(subcommand)]
    pub command: AccionesCommands,
}

#[derive(Subcommand, Debug)]
pub enum AccionesCommands {
    /// List acciones
    List(ListArgs),
    /// Get details of a specific accion
    Get(GetArgs),
    /// Create a new accion
    Create(CreateArgs),
    /// Update an existing accion
    Update(UpdateArgs),
    /// Soft-delete an accion, or remove it permanently with --hard
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

    /// Show only the acciones of this aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,

    /// Show only the acciones of this seccion (UUID)
    #[arg(long)]
    pub seccion: Option<String>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Accion ID (UUID)
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

    /// Owning seccion (UUID)
    #[arg(long)]
    pub seccion: String,

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
    /// Accion ID (UUID)
    pub id: String,

    /// New display name
    #[arg(long)]
    pub nombre: Option<String>,

    /// New owning aplicacion (UUID)
    #[arg(long)]
    pub aplicacion: Option<String>,

    /// New owning seccion (UUID)
    #[arg(long)]
    pub seccion: Option<String>,

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
    /// Accion ID (UUID)
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

/// Execute accion commands
pub async fn execute(args: AccionesArgs) -> CliResult<()> {
    match args.command {
        AccionesCommands::List(a) => execute_list(a).await,
        AccionesCommands::Get(a) => execute_get(a).await,
        AccionesCommands::Create(a) => execute_create(a).await,
        AccionesCommands::Update(a) => execute_update(a).await,
        AccionesCommands::Delete(a) => execute_delete(a).await,
        AccionesCommands::Select(a) => execute_select(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    validate_pagination(args.page, args.limit)?;

    if args.aplicacion.is_some() && args.seccion.is_some() {
        return Err(CliError::Validation(
            "Use either --aplicacion or --seccion, not both.".to_string(),
        ));
    }
    if (args.aplicacion.is_some() || args.seccion.is_some()) && !args.search.is_empty() {
        return Err(CliError::Validation(
            "--search cannot be combined with --aplicacion or --seccion.".to_string(),
        ));
    }

    let client = context::authenticated_client()?;

    let page: Page<Accion> = if let Some(ref aplicacion) = args.aplicacion {
        let aplicacion_id = parse_uuid(aplicacion, "aplicacion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client
            .acciones()
            .list_by_aplicacion(aplicacion_id, &query)
            .await?
    } else if let Some(ref seccion) = args.seccion {
        let seccion_id = parse_uuid(seccion, "seccion")?;
        let query = PageQuery::new().with_page(args.page).with_limit(args.limit);
        client.acciones().list_by_seccion(seccion_id, &query).await?
    } else {
        let query = ListQuery::new()
            .with_page(args.page)
            .with_limit(args.limit)
            .with_search(args.search);
        client.acciones().list(&query).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if page.content.is_empty() {
        println!("No acciones found.");
    } else {
        print_accion_table(&page.content);
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
    let id = parse_uuid(&args.id, "accion")?;
    let client = context::authenticated_client()?;

    let accion = client.acciones().get(id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&accion)?);
    } else {
        print_accion_details(&accion);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let aplicacion_id = parse_uuid(&args.aplicacion, "aplicacion")?;
    let seccion_id = parse_uuid(&args.seccion, "seccion")?;
    let client = context::authenticated_client()?;

    let request = AccionRequest {
        nombre: args.nombre,
        descripcion: args.descripcion,
        aplicacion_id,
        seccion_id,
    };
    let accion = client.acciones().create(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&accion)?);
    } else {
        print_success(&format!("Accion created: {}", accion.nombre));
        println!();
        print_accion_details(&accion);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "accion")?;
    let client = context::authenticated_client()?;

    let current = client.acciones().get(id).await?;
    let aplicacion_id = match args.aplicacion {
        Some(ref aplicacion) => parse_uuid(aplicacion, "aplicacion")?,
        None => current.aplicacion_id,
    };
    let seccion_id = match args.seccion {
        Some(ref seccion) => parse_uuid(seccion, "seccion")?,
        None => current.seccion_id,
    };

    let request = AccionRequest {
        nombre: args.nombre.unwrap_or(current.nombre),
        descripcion: args.descripcion.or(current.descripcion),
        aplicacion_id,
        seccion_id,
    };
    let accion = client.acciones().update(id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&accion)?);
    } else {
        print_success(&format!("Accion updated: {}", accion.nombre));
        println!();
        print_accion_details(&accion);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let id = parse_uuid(&args.id, "accion")?;
    let client = context::authenticated_client()?;

    let accion = client.acciones().get(id).await?;

    if !args.force {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                    .to_string(),
            ));
        }

        let prompt = if args.hard {
            format!(
                "Permanently remove accion '{}'? This cannot be undone.",
                accion.nombre
            )
        } else {
            format!("Soft-delete accion '{}'?", accion.nombre)
        };

        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if args.hard {
        client.acciones().delete(id).await?;
        print_success(&format!("Accion removed: {}", accion.nombre));
    } else {
        client.acciones().soft_delete(id).await?;
        print_success(&format!("Accion soft-deleted: {}", accion.nombre));
    }

    Ok(())
}

async fn execute_select(args: SelectArgs) -> CliResult<()> {
    let client = context::authenticated_client()?;

    let items = client.acciones().select().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No acciones found.");
    } else {
        for item in &items {
            println!("{}  {}", item.id, item.nombre);
        }
    }

    Ok(())
}

fn print_accion_table(acciones: &[Accion]) {
    println!(
        "{:<38} {:<24} {:<20} {:<20} {:<12}",
        "ID", "NOMBRE", "APLICACION", "SECCION", "CREATED"
    );
    println!("{}", "-".repeat(118));

    for accion in acciones {
        let aplicacion = accion.nombre_aplicacion.as_deref().unwrap_or("-");
        let seccion = accion.nombre_seccion.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<24} {:<20} {:<20} {:<12}",
            accion.id,
            truncate(&accion.nombre, 22),
            truncate(aplicacion, 18),
            truncate(seccion, 18),
            accion.created_at.format("%Y-%m-%d")
        );
    }
}

fn print_accion_details(accion: &Accion) {
    println!("Accion: {}", accion.nombre);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:          {}", accion.id);
    println!("Nombre:      {}", accion.nombre);

    if let Some(ref descripcion) = accion.descripcion {
        println!("Descripcion: {descripcion}");
    }

    match accion.nombre_aplicacion {
        Some(ref nombre) => println!("Aplicacion:  {} ({})", nombre, accion.aplicacion_id),
        None => println!("Aplicacion:  {}", accion.aplicacion_id),
    }
    match accion.nombre_seccion {
        Some(ref nombre) => println!("Seccion:     {} ({})", nombre, accion.seccion_id),
        None => println!("Seccion:     {}", accion.seccion_id),
    }

    println!(
        "Created:     {}",
        accion.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(updated) = accion.updated_at {
        println!("Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(deleted) = accion.deleted_at {
        println!("Deleted:     {}", deleted.format("%Y-%m-%d %H:%M:%S"));
    }
}

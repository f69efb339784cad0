//! portero CLI - Command-line interface for the Centro de Control de Acceso
//!
//! This CLI enables administrators to:
//! - Authenticate against the access-control API
//! - Manage secciones, aplicaciones, acciones and tipos de usuario
//! - Grant acciones to tipos de usuario and assign tipos to usuarios
//! - Inspect sessions and the access audit trail
//! - Project a usuario's effective permissions inside one aplicacion

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod context;
mod error;
mod output;
mod session;

use error::CliResult;

/// portero CLI - Access control administration
#[derive(Parser)]
#[command(name = "portero")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with the access-control API
    Login(commands::login::LoginArgs),

    /// Close the server session and clear stored credentials
    Logout(commands::logout::LogoutArgs),

    /// Display the identity behind the stored session
    Whoami(commands::whoami::WhoamiArgs),

    /// Change the password of the logged-in usuario
    ChangePassword(commands::change_password::ChangePasswordArgs),

    /// Manage secciones (menu groupings)
    Secciones(commands::secciones::SeccionesArgs),

    /// Manage registered aplicaciones
    Aplicaciones(commands::aplicaciones::AplicacionesArgs),

    /// Manage acciones (permission atoms)
    Acciones(commands::acciones::AccionesArgs),

    /// Manage tipos de usuario (roles)
    TiposUsuario(commands::tipos_usuario::TiposUsuarioArgs),

    /// Grant acciones to tipos de usuario
    Permisos(commands::permisos::PermisosArgs),

    /// Manage usuarios
    Usuarios(commands::usuarios::UsuariosArgs),

    /// Assign tipos de usuario to usuarios
    Asignaciones(commands::asignaciones::AsignacionesArgs),

    /// Inspect and administer login sesiones
    Sesiones(commands::sesiones::SesionesArgs),

    /// Browse the access audit trail
    Auditoria(commands::auditoria::AuditoriaArgs),
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("portero=debug,portero_client=debug")
    } else {
        EnvFilter::new("warn")
    };

    // Tables and JSON go to stdout; keep diagnostics off it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Login(args) => commands::login::execute(args).await,
        Commands::Logout(args) => commands::logout::execute(args).await,
        Commands::Whoami(args) => commands::whoami::execute(args).await,
        Commands::ChangePassword(args) => commands::change_password::execute(args).await,
        Commands::Secciones(args) => commands::secciones::execute(args).await,
        Commands::Aplicaciones(args) => commands::aplicaciones::execute(args).await,
        Commands::Acciones(args) => commands::acciones::execute(args).await,
        Commands::TiposUsuario(args) => commands::tipos_usuario::execute(args).await,
        Commands::Permisos(args) => commands::permisos::execute(args).await,
        Commands::Usuarios(args) => commands::usuarios::execute(args).await,
        Commands::Asignaciones(args) => commands::asignaciones::execute(args).await,
        Commands::Sesiones(args) => commands::sesiones::execute(args).await,
        Commands::Auditoria(args) => commands::auditoria::execute(args).await,
    }
}

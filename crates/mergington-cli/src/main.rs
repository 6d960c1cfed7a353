use clap::{Parser, Subcommand};
use mergington_core::directory::ActivityDirectory;

#[derive(Parser)]
#[command(
    name = "mergington",
    about = "Mergington High School extracurricular activities service",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the activities web server
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "PORT", default_value = "8000")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Print the seeded activity catalog as JSON
    Activities,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            no_open,
        } => run_serve(&host, port, no_open),
        Commands::Activities => run_activities(),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run_serve(host: &str, port: u16, no_open: bool) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(mergington_server::serve(
        ActivityDirectory::seeded(),
        host,
        port,
        !no_open,
    ))
}

fn run_activities() -> anyhow::Result<()> {
    let directory = ActivityDirectory::seeded();
    println!("{}", serde_json::to_string_pretty(directory.activities())?);
    Ok(())
}

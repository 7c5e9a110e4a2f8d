//! CLI entry point for inkpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpress::commands::check::Format;

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "A Markdown blog content toolkit", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new content workspace
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post or page
    New {
        /// Template to use (post, page)
        #[arg(short, long)]
        template: Option<String>,

        /// Mark the new document as a draft
        #[arg(long)]
        draft: bool,

        /// Title of the new document
        title: String,

        /// File name for the new document
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Check content integrity
    #[command(alias = "c")]
    Check {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List site content
    List {
        /// Type of content to list (post, draft, page, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing content workspace in {:?}", target_dir);
            inkpress::commands::init::init_workspace(&target_dir)?;
            println!("Initialized empty content workspace in {:?}", target_dir);
        }

        Commands::New {
            template,
            draft,
            title,
            path,
        } => {
            let workspace = inkpress::Workspace::new(&base_dir)?;
            tracing::info!("Creating new document with title: {}", title);
            inkpress::commands::new::run(
                &workspace,
                &title,
                template.as_deref(),
                draft,
                path.as_deref(),
            )?;
        }

        Commands::Check { format } => {
            let workspace = inkpress::Workspace::new(&base_dir)?;
            let format = match format.as_str() {
                "json" => Format::Json,
                "text" => Format::Text,
                other => anyhow::bail!("Unknown format: {}. Available: text, json", other),
            };
            inkpress::commands::check::run(&workspace, format)?;
        }

        Commands::List { r#type } => {
            let workspace = inkpress::Workspace::new(&base_dir)?;
            inkpress::commands::list::run(&workspace, &r#type)?;
        }

        Commands::Version => {
            println!("inkpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

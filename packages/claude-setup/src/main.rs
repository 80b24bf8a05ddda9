//! claude-setup scaffolds a new project for working with Claude Code.

use std::path::PathBuf;

use claude_setup::manifest::{self, MANIFEST};
use claude_setup::scaffold::{self, ProjectRequest, ScaffoldError};
use clap::Parser;
use color_eyre::{Result, Section, eyre::Context};
use color_print::cprintln;
use tracing::{instrument, level_filters::LevelFilter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const EXAMPLES: &str = "\
Examples:
  claude-setup my-awesome-app
  claude-setup my-app --path /path/to/projects/
  claude-setup api-service --path ~/dev/";

/// Set up a new project with Claude Code agents, docs, and settings.
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = EXAMPLES)]
struct Cli {
    /// Name of the project to create.
    ///
    /// Letters, numbers, hyphens, and underscores only.
    #[arg(value_parser = parse_project_name)]
    project_name: String,

    /// Parent directory where the project is created.
    #[arg(long, default_value = ".")]
    path: PathBuf,
}

fn parse_project_name(name: &str) -> Result<String, ScaffoldError> {
    scaffold::validate_name(name).map(|()| name.to_string())
}

#[instrument]
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Logging is for debugging only, so by default we only log errors.
    // Set `CLAUDE_SETUP_LOG=debug` to see each directory and file as it is
    // created.
    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            fmt::layer()
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .pretty(),
        )
        .with(
            EnvFilter::builder()
                .with_env_var("CLAUDE_SETUP_LOG")
                .with_default_directive(LevelFilter::ERROR.into())
                .from_env_lossy(),
        )
        .init();

    let request = ProjectRequest::builder()
        .name(cli.project_name)
        .base_path(cli.path)
        .build();
    let target = request.target();

    cprintln!("<bold>Setting up Claude Code project:</bold> {}", request.name);
    cprintln!("<bold>Project path:</bold> {}", target.display());
    println!();

    match scaffold::create(&request) {
        Ok(()) => {}
        Err(err @ ScaffoldError::AlreadyExists { .. }) => {
            return Err(err).suggestion(
                "Remove or rename the existing directory, then run claude-setup again.",
            );
        }
        Err(err) => {
            return Err(err).with_context(|| format!("set up project {:?}", request.name));
        }
    }

    for dir in manifest::directories() {
        cprintln!("<green>✓</green> Created directory: {}", dir.display());
    }
    for entry in MANIFEST {
        cprintln!("<green>✓</green> Created file: {}", entry.path);
    }

    println!();
    cprintln!("<green>✓ Claude Code project setup complete!</green>");
    println!();
    println!("Next steps:");
    println!("1. cd {}", target.display());
    println!("2. Initialize git: git init");
    println!("3. Edit docs/architecture-design.md with your project specifics");
    println!("4. Start Claude Code: claude");
    println!("5. Begin with: claude \"Please read @CLAUDE.md and @docs/architecture-design.md\"");
    println!();
    println!("Key files to customize:");
    println!("- docs/01-scope.md (define your project scope)");
    println!("- docs/architecture-design.md (your technical architecture)");
    println!("- CLAUDE.md (keep under 200 lines)");

    Ok(())
}

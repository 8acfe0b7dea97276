//! fiorigen CLI — scaffold artifacts into an existing SAPUI5 webapp.
//!
//! Calls `fiorigen-core` directly; all commands are one-shot and synchronous.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fiorigen_core::{add_fragment, add_model, add_view, Error, Project};

mod prompt;

/// fiorigen — add views, models, and dialog fragments to a SAPUI5 webapp.
#[derive(Parser)]
#[command(name = "fiorigen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Project root (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an artifact to the project
    #[command(subcommand)]
    Add(AddCommands),
}

#[derive(Subcommand)]
enum AddCommands {
    /// Create a view with its controller and register a route for it
    View {
        /// View name (first character is capitalized automatically)
        name: String,
    },
    /// Create a JSON model module
    Model {
        /// Model name (first character is capitalized automatically)
        name: String,
    },
    /// Create a dialog fragment and wire open/close handlers into a controller
    Fragment {
        /// Fragment name (first character is capitalized automatically)
        name: String,
    },
}

fn resolve_root(root: Option<PathBuf>) -> PathBuf {
    let root = root.unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Error: could not determine current directory: {e}");
            std::process::exit(1);
        })
    });
    root.canonicalize().unwrap_or_else(|e| {
        eprintln!("Error: path '{}' not found: {}", root.display(), e);
        std::process::exit(1);
    })
}

fn fail(err: Error) -> ! {
    tracing::debug!(kind = err.kind(), "invocation aborted");
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fiorigen_core=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let root = resolve_root(cli.root);
    tracing::debug!(root = %root.display(), "resolved project root");

    match cli.command {
        Commands::Add(AddCommands::View { name }) => {
            let mut project = Project::discover(&root).unwrap_or_else(|e| fail(e));
            let outcome = add_view(&mut project, &name).unwrap_or_else(|e| fail(e));

            if cli.json {
                let output = serde_json::json!({
                    "view": project.rel(&outcome.view_path),
                    "controller": project.rel(&outcome.controller_path),
                    "route": outcome.route,
                    "target": outcome.target,
                    "pattern": outcome.pattern,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!(" -> Created: {}", project.rel(&outcome.view_path));
                println!(" -> Created: {}", project.rel(&outcome.controller_path));
                println!(
                    " -> Registered route '{}' (pattern '{}')",
                    outcome.route, outcome.pattern
                );
                if !outcome.i18n_updated {
                    eprintln!("    (no i18n.properties found; title key skipped)");
                }
                println!("\nNavigate to it with getRouter().navTo(\"{}\").", outcome.route);
            }
        }
        Commands::Add(AddCommands::Model { name }) => {
            let project = Project::discover(&root).unwrap_or_else(|e| fail(e));
            let outcome = add_model(&project, &name).unwrap_or_else(|e| fail(e));

            if cli.json {
                let output = serde_json::json!({
                    "model": project.rel(&outcome.model_path),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!(" -> Created: {}", project.rel(&outcome.model_path));
            }
        }
        Commands::Add(AddCommands::Fragment { name }) => {
            let project = Project::discover(&root).unwrap_or_else(|e| fail(e));
            let controllers = project.controller_files().unwrap_or_else(|e| fail(e));

            let chosen = prompt::select(
                "Which controller should receive the open/close handlers?",
                &controllers,
            )
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            let outcome =
                add_fragment(&project, &controllers[chosen], &name).unwrap_or_else(|e| fail(e));

            if cli.json {
                let output = serde_json::json!({
                    "fragment": project.rel(&outcome.fragment_path),
                    "controller": project.rel(&outcome.controller_path),
                    "openHandler": outcome.open_handler,
                    "closeHandler": outcome.close_handler,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!(" -> Created: {}", project.rel(&outcome.fragment_path));
                println!(" -> Handlers added: {}", project.rel(&outcome.controller_path));
                println!(
                    "\nTrigger it from a view with press=\".{}\".",
                    outcome.open_handler
                );
            }
        }
    }
}

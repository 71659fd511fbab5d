//! # wpm CLI Entry Point
//!
//! Parses CLI arguments using clap and routes commands through the
//! acquisition pipeline. Every command is gated on workspace integrity
//! before its own logic runs; the first typed failure anywhere in the
//! pipeline becomes a single printed diagnostic and a non-zero exit.

use std::path::Path;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;

use wurstpm::deps;
use wurstpm::error::Error;
use wurstpm::workspace::WorkspaceLayout;

#[derive(Parser)]
#[command(name = "wpm")]
#[command(about = "Dependency manager for Wurst map-scripting projects", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(allow_external_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a Wurst repository (currently only reports intent)
    Init,
    /// Validate and materialize one dependency into the store
    Require {
        /// Reference in host/owner/repo form, e.g. github.com/owner/repo
        reference: Option<String>,
    },
    /// Re-resolve every dependency declared in wurst.dependencies
    Up,
    /// Generate shell completion scripts
    Completion { shell: Shell },
    /// Anything else is an unknown command
    #[command(external_subcommand)]
    External(Vec<String>),
}

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_splash();
        return;
    };

    if let Err(err) = run(command) {
        eprintln!("{} {}", "x".red(), err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    // Every command is gated on a well-formed workspace, init included.
    // The layout is the on-disk contract with the downstream build
    // pipeline, so the gate runs before any argument-specific logic.
    WorkspaceLayout::wurst_project().verify(Path::new("."))?;

    match command {
        Commands::Init => init_repo(),
        Commands::Require { reference } => {
            let reference = reference.ok_or(Error::MissingArgument("dependency reference"))?;
            deps::require_dependency(&reference)
        }
        Commands::Up => deps::resolve_declared(),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
        Commands::External(args) => {
            let verb = args.first().cloned().unwrap_or_default();
            Err(Error::UnknownCommand(verb).into())
        }
    }
}

fn init_repo() -> anyhow::Result<()> {
    println!("{} Initializing Wurst repo...", "📦".blue());
    // The workspace gate has already demanded the full layout, so there
    // is nothing left to scaffold once we get here.
    println!("{} Workspace layout is in place.", "✓".green());
    Ok(())
}

fn print_splash() {
    println!();
    println!("   {} v{}", "wpm".bold().cyan(), env!("CARGO_PKG_VERSION"));
    println!(
        "   {}",
        "Dependency manager for Wurst map-scripting projects"
            .dimmed()
            .italic()
    );
    println!();
    println!("   {}      Initialize a Wurst repository", "init".cyan());
    println!("   {}   Validate and materialize a dependency", "require".cyan());
    println!("   {}        Re-resolve declared dependencies", "up".cyan());
    println!();
    println!("   Run {} for detailed usage.", "wpm --help".white().bold());
    println!();
}

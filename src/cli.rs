use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::generate_model_from_definition;
use crate::schema::{lint_model, load_definition, print_issues};

/// Command-line interface for the CWMP data-model generator
///
/// Provides commands for generating entity modules from data-model
/// definition files and for linting definitions on their own.
#[derive(Parser)]
#[command(name = "cwmp-gen")]
#[command(about = "CWMP data-model entity generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an entity module from a data-model definition
    Generate {
        /// Path to the definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,

        /// Output directory for the generated module (default: src/model/{model})
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Overwrite an existing module without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Report definition anomalies without generating anything
    Lint {
        /// Path to the definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            definition,
            out,
            force,
        } => {
            let model = load_definition(
                definition
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("non-UTF-8 definition path: {definition:?}"))?,
            )?;
            let out_dir = match out {
                Some(dir) => dir.clone(),
                None => PathBuf::from("src/model").join(&model.model),
            };
            let module_path = generate_model_from_definition(definition, &out_dir, *force)?;
            println!("generated {}", module_path.display());
            Ok(())
        }
        Commands::Lint { definition } => {
            let model = load_definition(
                definition
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("non-UTF-8 definition path: {definition:?}"))?,
            )?;
            let issues = lint_model(&model);
            if issues.is_empty() {
                println!("no issues found in {}", definition.display());
            } else {
                print_issues(&issues);
            }
            Ok(())
        }
    }
}

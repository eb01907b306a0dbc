//! ctorgen CLI - Constructor generator for Go structs
//!
//! Commands:
//! - `ctorgen generate` - Generate constructors for one struct
//! - `ctorgen inspect` - Print the parsed struct model as JSON
//! - `ctorgen batch` - Generate every struct listed in a ctorgen.toml manifest
//! - `ctorgen check` - Validate a ctorgen.toml manifest
//!
//! Typically invoked from a `//go:generate ctorgen generate --type T` directive.

use clap::{Parser, Subcommand};
use ctorgen_cli::generate::{self, DEFAULT_CONSTRUCTOR_TYPES, GenerateOptions};
use ctorgen_cli::{batch, logging, manifest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ctorgen")]
#[command(author, version, about = "Constructor generator for Go structs", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constructors for a struct
    Generate {
        /// Struct type name
        #[arg(short, long = "type")]
        type_name: String,

        /// Comma-separated constructor types (allArgs, builder, options)
        #[arg(short, long, default_value = DEFAULT_CONSTRUCTOR_TYPES)]
        constructor_types: String,

        /// Go source file declaring the struct (default: $GOFILE or a scan of the current directory)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output file (default: <type>_gen.go beside the source)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Method called on every constructed instance before it is returned
        #[arg(long)]
        init: Option<String>,

        /// Return the struct by value instead of a pointer
        #[arg(long)]
        return_value: bool,

        /// Prefix for builder method names (e.g. With)
        #[arg(long)]
        setter_prefix: Option<String>,

        /// Also generate getters for private fields
        #[arg(long)]
        with_getter: bool,
    },

    /// Print the parsed struct model as JSON
    Inspect {
        /// Struct type name
        #[arg(short, long = "type")]
        type_name: String,

        /// Go source file declaring the struct
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Generate every struct listed in a manifest
    Batch {
        /// Path to ctorgen.toml (default: ./ctorgen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Validate a ctorgen.toml manifest
    Check {
        /// Path to ctorgen.toml (default: ./ctorgen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            type_name,
            constructor_types,
            source,
            output,
            init,
            return_value,
            setter_prefix,
            with_getter,
        } => {
            generate::run(GenerateOptions {
                type_name,
                constructor_types,
                source,
                output,
                init,
                return_value,
                setter_prefix,
                with_getter,
            })?;
        }
        Commands::Inspect { type_name, source } => {
            generate::run_inspect(&type_name, source)?;
        }
        Commands::Batch { manifest } => {
            batch::run(manifest)?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}

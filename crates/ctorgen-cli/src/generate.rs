//! Generate and inspect command implementations

use anyhow::{Context, Result};
use ctorgen_core::{GenerationConfig, Generator, Pattern, StructModel};
use ctorgen_parser::{GOFILE_ENV, default_output_path, locate_source_with, parse_file};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default value of `--constructor-types`
pub const DEFAULT_CONSTRUCTOR_TYPES: &str = "allArgs";

/// Options of the `generate` command as given on the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub type_name: String,
    pub constructor_types: String,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub init: Option<String>,
    pub return_value: bool,
    pub setter_prefix: Option<String>,
    pub with_getter: bool,
}

impl GenerateOptions {
    /// Validate the options into a generation request.
    pub fn into_request(self) -> Result<GenerateRequest> {
        let patterns = Pattern::parse_list(&self.constructor_types)?;
        let config = GenerationConfig::new(self.type_name)
            .with_patterns(patterns)
            .with_init_hook(self.init.unwrap_or_default())
            .with_return_by_value(self.return_value)
            .with_mutator_prefix(self.setter_prefix.unwrap_or_default())
            .with_accessors(self.with_getter);
        config.validate()?;

        Ok(GenerateRequest {
            config,
            source: self.source,
            output: self.output,
        })
    }
}

/// One struct to generate for, with its file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub config: GenerationConfig,

    /// Declaring file; located in the working directory when absent
    pub source: Option<PathBuf>,

    /// Output file; `<type>_gen.go` beside the source when absent
    pub output: Option<PathBuf>,
}

impl GenerateRequest {
    /// Resolve the declaring file, honouring `GOFILE` and otherwise searching `dir`.
    pub fn resolve_source(&self, dir: &Path) -> Result<PathBuf> {
        self.resolve_source_with(dir, gofile().as_deref())
    }

    /// [`resolve_source`](Self::resolve_source) with the `GOFILE` value passed explicitly.
    pub fn resolve_source_with(&self, dir: &Path, gofile: Option<&str>) -> Result<PathBuf> {
        match &self.source {
            Some(source) => Ok(source.clone()),
            None => locate_source_with(&self.config.type_name, dir, gofile).with_context(|| {
                format!(
                    "Failed to locate struct {} in {}",
                    self.config.type_name,
                    dir.display()
                )
            }),
        }
    }

    /// Generate the code and write it; returns the output path.
    pub fn execute(&self, dir: &Path) -> Result<PathBuf> {
        self.execute_with(dir, gofile().as_deref())
    }

    /// [`execute`](Self::execute) with the `GOFILE` value passed explicitly.
    ///
    /// `None` always scans `dir` for sourceless requests.
    pub fn execute_with(&self, dir: &Path, gofile: Option<&str>) -> Result<PathBuf> {
        let type_name = &self.config.type_name;
        let source = self.resolve_source_with(dir, gofile)?;
        let model = load_model(&source, type_name)?;

        let code = Generator::new(&self.config, &model)
            .generate()
            .with_context(|| format!("Failed to generate code for {type_name}"))?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&source, type_name));
        std::fs::write(&output, code)
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        info!(
            type_name = %type_name,
            source = %source.display(),
            output = %output.display(),
            "Generated constructor code"
        );
        Ok(output)
    }
}

fn gofile() -> Option<String> {
    std::env::var(GOFILE_ENV).ok()
}

fn load_model(source: &Path, type_name: &str) -> Result<StructModel> {
    parse_file(source, type_name)
        .with_context(|| format!("Failed to parse {}", source.display()))
}

/// Generate command implementation
pub fn run(options: GenerateOptions) -> Result<PathBuf> {
    let request = options.into_request()?;
    let output = request.execute(Path::new("."))?;

    println!("Generated constructor code in {}", output.display());

    Ok(output)
}

/// Parse a struct and render its model as pretty JSON.
pub fn inspect(type_name: &str, source: Option<PathBuf>, dir: &Path) -> Result<String> {
    let request = GenerateRequest {
        config: GenerationConfig::new(type_name),
        source,
        output: None,
    };
    let source = request.resolve_source(dir)?;
    let model = load_model(&source, type_name)?;

    serde_json::to_string_pretty(&model).context("Failed to serialize struct model")
}

/// Inspect command implementation
pub fn run_inspect(type_name: &str, source: Option<PathBuf>) -> Result<()> {
    let json = inspect(type_name, source, Path::new("."))?;
    println!("{json}");
    Ok(())
}

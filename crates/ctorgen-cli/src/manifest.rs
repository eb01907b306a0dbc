//! Manifest parsing and validation

use crate::generate::{DEFAULT_CONSTRUCTOR_TYPES, GenerateRequest};
use anyhow::{Context, Result};
use ctorgen_core::{GenerationConfig, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "ctorgen.toml";

/// ctorgen.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

/// Values applied to every type entry unless overridden
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub constructor_types: Option<Vec<String>>,

    #[serde(default)]
    pub init: Option<String>,

    #[serde(default)]
    pub return_value: Option<bool>,

    #[serde(default)]
    pub setter_prefix: Option<String>,

    #[serde(default)]
    pub with_getter: Option<bool>,
}

/// One struct to generate for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,

    /// Declaring file, relative to the manifest
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Output file, relative to the manifest
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub constructor_types: Option<Vec<String>>,

    #[serde(default)]
    pub init: Option<String>,

    #[serde(default)]
    pub return_value: Option<bool>,

    #[serde(default)]
    pub setter_prefix: Option<String>,

    #[serde(default)]
    pub with_getter: Option<bool>,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            anyhow::bail!("Manifest must declare at least one [[types]] entry");
        }

        if let Some(types) = &self.defaults.constructor_types {
            parse_patterns(types).context("Invalid [defaults] constructor_types")?;
        }

        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for entry in &self.types {
            if entry.name.trim().is_empty() {
                anyhow::bail!("Type name cannot be empty");
            }
            if !names.insert(entry.name.as_str()) {
                anyhow::bail!("Duplicate type name: {}", entry.name);
            }

            let patterns = self.patterns_for(entry)?;
            if patterns.is_empty() {
                anyhow::bail!("Type '{}' requests no constructor types", entry.name);
            }

            if let Some(output) = self.planned_output(entry)
                && !outputs.insert(output.clone())
            {
                anyhow::bail!(
                    "Duplicate output path for type '{}': {}",
                    entry.name,
                    output.display()
                );
            }
        }

        Ok(())
    }

    /// Output path known before locating sources, if any
    fn planned_output(&self, entry: &TypeEntry) -> Option<PathBuf> {
        match (&entry.output, &entry.source) {
            (Some(output), _) => Some(output.clone()),
            (None, Some(source)) => Some(ctorgen_parser::default_output_path(source, &entry.name)),
            (None, None) => None,
        }
    }

    fn patterns_for(&self, entry: &TypeEntry) -> Result<Vec<Pattern>> {
        let types = entry
            .constructor_types
            .as_ref()
            .or(self.defaults.constructor_types.as_ref());
        match types {
            Some(types) => parse_patterns(types)
                .with_context(|| format!("Invalid constructor_types for type '{}'", entry.name)),
            None => parse_patterns(&[DEFAULT_CONSTRUCTOR_TYPES.to_string()]),
        }
    }

    /// Resolve every entry into a request; paths are joined onto `base_dir`.
    pub fn requests(&self, base_dir: &Path) -> Result<Vec<GenerateRequest>> {
        self.types
            .iter()
            .map(|entry| {
                let defaults = &self.defaults;
                let config = GenerationConfig::new(entry.name.clone())
                    .with_patterns(self.patterns_for(entry)?)
                    .with_init_hook(
                        entry
                            .init
                            .clone()
                            .or_else(|| defaults.init.clone())
                            .unwrap_or_default(),
                    )
                    .with_return_by_value(
                        entry.return_value.or(defaults.return_value).unwrap_or(false),
                    )
                    .with_mutator_prefix(
                        entry
                            .setter_prefix
                            .clone()
                            .or_else(|| defaults.setter_prefix.clone())
                            .unwrap_or_default(),
                    )
                    .with_accessors(entry.with_getter.or(defaults.with_getter).unwrap_or(false));

                Ok(GenerateRequest {
                    config,
                    source: entry.source.as_ref().map(|p| base_dir.join(p)),
                    output: entry.output.as_ref().map(|p| base_dir.join(p)),
                })
            })
            .collect()
    }
}

fn parse_patterns(types: &[String]) -> Result<Vec<Pattern>> {
    let list = types.join(",");
    let patterns = Pattern::parse_list(&list)?;
    Ok(patterns.into_iter().collect())
}

/// Manifest path given on the command line, or the default
pub fn manifest_path(manifest_path: Option<String>) -> PathBuf {
    PathBuf::from(manifest_path.unwrap_or_else(|| MANIFEST_FILE.to_string()))
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = self::manifest_path(manifest_path);

    println!("Checking manifest: {}", path.display());

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    for entry in &manifest.types {
        let patterns = manifest.patterns_for(entry)?;
        let names: Vec<&str> = patterns.iter().map(Pattern::as_str).collect();
        println!("✓ {}: {}", entry.name, names.join(", "));
    }
    println!("\nManifest is valid! ({} types)", manifest.types.len());

    Ok(())
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;

//! Source and output file resolution
//!
//! Under `go generate` the `GOFILE` environment variable names the file
//! holding the directive. Outside of it the package directory is scanned.

use crate::parser::parse_source;
use ctorgen_core::{CtorgenError, CtorgenResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable set by `go generate`
pub const GOFILE_ENV: &str = "GOFILE";

/// Suffix of generated files, which are never scanned
pub const GENERATED_SUFFIX: &str = "_gen.go";

/// Find the file declaring `type_name` in `dir`.
///
/// `GOFILE` takes precedence when set; it is resolved against `dir`.
pub fn locate_source(type_name: &str, dir: &Path) -> CtorgenResult<PathBuf> {
    let gofile = std::env::var(GOFILE_ENV).ok();
    locate_source_with(type_name, dir, gofile.as_deref())
}

/// [`locate_source`] with the `GOFILE` value passed explicitly.
pub fn locate_source_with(
    type_name: &str,
    dir: &Path,
    gofile: Option<&str>,
) -> CtorgenResult<PathBuf> {
    if let Some(gofile) = gofile.filter(|f| !f.is_empty()) {
        let path = dir.join(gofile);
        debug!(path = %path.display(), "Using GOFILE");
        return Ok(path);
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_candidate(path))
        .collect();
    candidates.sort();

    for path in candidates {
        let source = std::fs::read_to_string(&path)?;
        match parse_source(&source) {
            Ok(parsed) if parsed.declares_struct(type_name) => {
                debug!(path = %path.display(), type_name, "Located struct");
                return Ok(path);
            }
            Ok(_) => {}
            // One broken file must not hide the struct in another
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping unparsable Go file"),
        }
    }

    Err(CtorgenError::lookup(
        type_name,
        format!("any Go file in {}", dir.display()),
    ))
}

fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    path.is_file() && name.ends_with(".go") && !name.ends_with(GENERATED_SUFFIX)
}

/// Default output file: `<source dir>/<lowercase type>_gen.go`
pub fn default_output_path(source: &Path, type_name: &str) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}{GENERATED_SUFFIX}", type_name.to_lowercase()))
}

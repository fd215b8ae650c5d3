use anyhow::{Result, bail};
use log::{debug, info};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Environment variable naming the declaration file.
pub const FILE_ENV: &str = "NPM_GLOBAL_FILE";

/// Declaration file looked up in the current directory.
pub const LOCAL_FILE_NAME: &str = "npm-global.json";

/// Locate the declaration file.
///
/// Lookup order: `explicit`, then `$NPM_GLOBAL_FILE`, then `./npm-global.json`,
/// then `<config dir>/npm-global/packages.json`. An explicitly named file
/// (argument or environment) must exist; it never falls through to the
/// defaults.
#[tracing::instrument(skip(runtime))]
pub fn resolve_declaration_file<R: Runtime>(
    runtime: &R,
    explicit: Option<PathBuf>,
) -> Result<PathBuf> {
    let explicit = explicit.or_else(|| {
        runtime
            .env_var(FILE_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    });

    if let Some(path) = explicit {
        if !runtime.exists(&path) {
            bail!("Declaration file {} does not exist", path.display());
        }
        info!("Using declaration file: {}", path.display());
        return Ok(path);
    }

    let candidates = default_candidates(runtime)?;
    for candidate in &candidates {
        debug!("Looking for declarations at {}", candidate.display());
        if runtime.exists(candidate) {
            info!("Using declaration file: {}", candidate.display());
            return Ok(candidate.clone());
        }
    }

    let searched: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    bail!(
        "No declaration file found (searched: {}). Use --file or set {}",
        searched.join(", "),
        FILE_ENV
    )
}

fn default_candidates<R: Runtime>(runtime: &R) -> Result<Vec<PathBuf>> {
    let mut candidates = vec![runtime.current_dir()?.join(LOCAL_FILE_NAME)];
    if let Some(config_dir) = runtime.config_dir() {
        candidates.push(config_dir.join("npm-global").join("packages.json"));
    }
    Ok(candidates)
}

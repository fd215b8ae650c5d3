//! Declaration file loading.
//!
//! A declaration file lists the packages to install globally:
//!
//! ```json
//! {
//!   "packages": [
//!     { "name": "lodash", "version": "^4.17.0", "alias": "_", "force": true },
//!     { "name": "types-node", "scope": "types", "pkg": "node" }
//!   ]
//! }
//! ```
//!
//! Entries are replayed in file order into a [`PackageSet`]. An entry whose
//! name the set rejects is reported and skipped; the rest still load.

mod paths;

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::Deserialize;
use std::path::Path;

use crate::package::{InvalidNameError, PackageSet, PackageSpec, Packages};
use crate::runtime::Runtime;

pub use paths::{FILE_ENV, LOCAL_FILE_NAME, resolve_declaration_file};

/// Parsed contents of a declaration file.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DeclarationFile {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

/// One entry of the `packages` list, as written by the user.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PackageEntry {
    pub name: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub pkg: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub force: Option<bool>,
}

impl PackageEntry {
    fn apply(self, spec: &mut PackageSpec) {
        if let Some(from) = self.from {
            spec.set_from(from);
        }
        if let Some(scope) = self.scope {
            spec.set_scope(scope);
        }
        if let Some(pkg) = self.pkg {
            spec.set_pkg(pkg);
        }
        if let Some(version) = self.version {
            spec.set_version(version);
        }
        if let Some(alias) = self.alias {
            spec.set_alias(alias);
        }
        if let Some(force) = self.force {
            spec.set_force(force);
        }
    }
}

/// A declaration the package set refused.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// Zero-based position in the `packages` list.
    pub index: usize,
    pub name: String,
    pub error: InvalidNameError,
}

/// Outcome of replaying a declaration file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub set: PackageSet,
    pub rejected: Vec<Rejected>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Finalize the accepted declarations, failing if any were rejected.
    pub fn into_packages(self) -> Result<Packages> {
        if let Some(first) = self.rejected.first() {
            bail!(
                "{} declaration(s) rejected; first: entry #{}: {}",
                self.rejected.len(),
                first.index,
                first.error
            );
        }
        Ok(self.set.finalize())
    }
}

impl DeclarationFile {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse declaration file")
    }

    /// Replay every entry into a fresh [`PackageSet`].
    pub fn into_report(self) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, entry) in self.packages.into_iter().enumerate() {
            let name = entry.name.clone();
            match report.set.create(&name) {
                Ok(spec) => entry.apply(spec),
                Err(error) => {
                    warn!("Skipping entry #{}: {}", index, error);
                    report.rejected.push(Rejected { index, name, error });
                }
            }
        }

        debug!(
            "Loaded {} package(s), rejected {}",
            report.set.len(),
            report.rejected.len()
        );
        report
    }
}

/// Read and replay the declaration file at `path`.
#[tracing::instrument(skip(runtime))]
pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<LoadReport> {
    let content = runtime
        .read_to_string(path)
        .with_context(|| format!("Failed to read declarations from {:?}", path))?;
    let file = DeclarationFile::parse(&content)
        .with_context(|| format!("Invalid declaration file {:?}", path))?;
    Ok(file.into_report())
}

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{package::PackageSet, runtime::Runtime};

use super::load_declarations;

/// List declared packages with their version constraint.
///
/// Rejected entries are skipped here; `check` reports them.
#[tracing::instrument(skip(runtime))]
pub fn list<R: Runtime>(runtime: R, file: Option<PathBuf>) -> Result<()> {
    let report = load_declarations(&runtime, file)?;
    debug!("Found {} package(s)", report.set.len());
    print!("{}", render_list(&report.set));
    Ok(())
}

pub(crate) fn render_list(set: &PackageSet) -> String {
    if set.is_empty() {
        return "No packages declared.\n".to_string();
    }

    set.iter()
        .map(|spec| format!("{} {}\n", spec.name(), spec.version().unwrap_or("(any)")))
        .collect()
}

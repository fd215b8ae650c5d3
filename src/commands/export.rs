use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{package::Packages, runtime::Runtime};

use super::load_declarations;

/// Print the finalized declarations as JSON for the installer.
#[tracing::instrument(skip(runtime))]
pub fn export<R: Runtime>(runtime: R, file: Option<PathBuf>) -> Result<()> {
    let packages = load_declarations(&runtime, file)?.into_packages()?;
    println!("{}", render_export(&packages)?);
    Ok(())
}

pub(crate) fn render_export(packages: &Packages) -> Result<String> {
    serde_json::to_string_pretty(packages).context("Failed to serialize packages")
}

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::{config::LoadReport, runtime::Runtime};

use super::load_declarations;

/// Validate the declaration file, failing if any entry was rejected.
#[tracing::instrument(skip(runtime))]
pub fn check<R: Runtime>(runtime: R, file: Option<PathBuf>) -> Result<()> {
    let report = load_declarations(&runtime, file)?;
    print!("{}", render_check(&report));

    if !report.is_clean() {
        bail!("{} declaration(s) rejected", report.rejected.len());
    }
    Ok(())
}

pub(crate) fn render_check(report: &LoadReport) -> String {
    if report.is_clean() {
        return format!("ok: {} package(s)\n", report.set.len());
    }

    let mut out = String::new();
    for rejected in &report.rejected {
        out.push_str(&format!("entry #{}: {}\n", rejected.index, rejected.error));
    }
    out
}

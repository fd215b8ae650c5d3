//! CLI command implementations.
//!
//! Each command resolves the declaration file, loads it, and prints to stdout.
//! Output is built by a `render_*` helper so it can be checked in tests.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    config::{self, LoadReport},
    runtime::Runtime,
};

mod check;
mod export;
mod list;
mod show;

pub use check::check;
pub use export::export;
pub use list::list;
pub use show::show;

/// Locate and load the declaration file.
#[tracing::instrument(skip(runtime))]
fn load_declarations<R: Runtime>(runtime: &R, file: Option<PathBuf>) -> Result<LoadReport> {
    let path = config::resolve_declaration_file(runtime, file)?;
    debug!("Loading declarations from {:?}", path);
    config::load(runtime, &path)
}

//! Package declarations
//!
//! This module provides the declared-package record and the named collection
//! that owns declarations while configuration is in progress.

mod error;
mod set;
mod spec;

pub use error::InvalidNameError;
pub use set::{PackageSet, Packages};
pub use spec::PackageSpec;

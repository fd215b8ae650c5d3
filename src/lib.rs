pub mod commands;
pub mod config;
pub mod package;
pub mod runtime;

pub use package::{InvalidNameError, PackageSet, PackageSpec, Packages};

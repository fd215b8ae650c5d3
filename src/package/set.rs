//! Named collection of package declarations.
//!
//! [`PackageSet`] is mutable and only lives through the configuration phase.
//! [`PackageSet::finalize`] turns it into [`Packages`], the read-only view that
//! is handed to whatever installs the packages.

use log::debug;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::{InvalidNameError, PackageSpec};

/// Owning collection of [`PackageSpec`]s, keyed by name.
///
/// Entries iterate in name order.
#[derive(Debug, Default, Clone)]
pub struct PackageSet {
    specs: BTreeMap<String, PackageSpec>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new package with every optional field unset.
    ///
    /// Fails if `name` is empty or already declared; existing entries are left
    /// as they were.
    pub fn create(&mut self, name: &str) -> Result<&mut PackageSpec, InvalidNameError> {
        if name.is_empty() {
            return Err(InvalidNameError::Empty);
        }
        if self.specs.contains_key(name) {
            return Err(InvalidNameError::Duplicate {
                name: name.to_string(),
            });
        }

        debug!("Declaring package {}", name);
        Ok(self
            .specs
            .entry(name.to_string())
            .or_insert_with(|| PackageSpec::new(name.to_string())))
    }

    /// Declare a package and configure it in one step.
    pub fn register<F>(
        &mut self,
        name: &str,
        configure: F,
    ) -> Result<&PackageSpec, InvalidNameError>
    where
        F: FnOnce(&mut PackageSpec),
    {
        let spec = self.create(name)?;
        configure(&mut *spec);
        Ok(spec)
    }

    pub fn get(&self, name: &str) -> Option<&PackageSpec> {
        self.specs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PackageSpec> {
        self.specs.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageSpec> {
        self.specs.values()
    }

    /// End the configuration phase.
    pub fn finalize(self) -> Packages {
        debug!("Finalizing {} package declaration(s)", self.specs.len());
        Packages { specs: self.specs }
    }
}

/// Finalized package declarations. No mutation is possible from here on.
#[derive(Debug, Clone, Default)]
pub struct Packages {
    specs: BTreeMap<String, PackageSpec>,
}

impl Packages {
    pub fn get(&self, name: &str) -> Option<&PackageSpec> {
        self.specs.get(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageSpec> {
        self.specs.values()
    }
}

// Serialized as a list; each entry already carries its name.
impl Serialize for Packages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.specs.values())
    }
}

impl<'a> IntoIterator for &'a Packages {
    type Item = &'a PackageSpec;
    type IntoIter = std::collections::btree_map::Values<'a, String, PackageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.values()
    }
}

use serde::Serialize;

/// One declared global npm package.
///
/// Instances are only created through [`PackageSet`](super::PackageSet), which
/// owns the identity rules. Field values are stored as given; interpreting
/// them (version syntax, whether `pkg` overrides `name`) is up to whoever
/// installs the package.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pkg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    force: Option<bool>,
}

impl PackageSpec {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            from: None,
            scope: None,
            pkg: None,
            version: None,
            alias: None,
            force: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source the package is fetched from (registry, path or tarball).
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn set_from(&mut self, from: impl Into<String>) -> &mut Self {
        self.from = Some(from.into());
        self
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) -> &mut Self {
        self.scope = Some(scope.into());
        self
    }

    /// Explicit package name, for when it differs from [`name`](Self::name).
    pub fn pkg(&self) -> Option<&str> {
        self.pkg.as_deref()
    }

    pub fn set_pkg(&mut self, pkg: impl Into<String>) -> &mut Self {
        self.pkg = Some(pkg.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    /// Whether reinstallation was requested, `None` if never set.
    pub fn force(&self) -> Option<bool> {
        self.force
    }

    pub fn set_force(&mut self, force: bool) -> &mut Self {
        self.force = Some(force);
        self
    }

    /// Resolved force flag; unset means `false`.
    pub fn force_or_default(&self) -> bool {
        self.force.unwrap_or(false)
    }
}

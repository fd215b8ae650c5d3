use anyhow::{Result, anyhow};
use std::path::PathBuf;

use crate::{package::PackageSpec, runtime::Runtime};

use super::load_declarations;

/// Show every field of one declared package.
#[tracing::instrument(skip(runtime))]
pub fn show<R: Runtime>(runtime: R, name: &str, file: Option<PathBuf>) -> Result<()> {
    let report = load_declarations(&runtime, file)?;
    let spec = report
        .set
        .get(name)
        .ok_or_else(|| anyhow!("Package {} is not declared", name))?;
    print!("{}", render_show(spec));
    Ok(())
}

pub(crate) fn render_show(spec: &PackageSpec) -> String {
    let field = |value: Option<&str>| value.unwrap_or("(unset)").to_string();
    let force = match spec.force() {
        Some(force) => force.to_string(),
        None => format!("{} (default)", spec.force_or_default()),
    };

    let mut out = String::new();
    out.push_str(&format!("Package: {}\n", spec.name()));
    out.push_str(&format!("  from:    {}\n", field(spec.from())));
    out.push_str(&format!("  scope:   {}\n", field(spec.scope())));
    out.push_str(&format!("  pkg:     {}\n", field(spec.pkg())));
    out.push_str(&format!("  version: {}\n", field(spec.version())));
    out.push_str(&format!("  alias:   {}\n", field(spec.alias())));
    out.push_str(&format!("  force:   {}\n", force));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{DECLARATIONS, runtime_with};
    use crate::package::PackageSet;

    #[test]
    fn test_render_show_lodash() {
        let mut set = PackageSet::new();
        let spec = set
            .register("lodash", |p| {
                p.set_version("^4.17.0").set_alias("_").set_force(true);
            })
            .unwrap();

        assert_eq!(
            render_show(spec),
            "Package: lodash\n\
             \x20 from:    (unset)\n\
             \x20 scope:   (unset)\n\
             \x20 pkg:     (unset)\n\
             \x20 version: ^4.17.0\n\
             \x20 alias:   _\n\
             \x20 force:   true\n"
        );
    }

    #[test]
    fn test_render_show_default_force() {
        let mut set = PackageSet::new();
        let spec = set.create("eslint").unwrap();
        assert!(render_show(spec).contains("force:   false (default)"));
    }

    #[test]
    fn test_show_unknown_package_fails() {
        let (runtime, path) = runtime_with(DECLARATIONS);
        let err = show(runtime, "prettier", Some(path)).unwrap_err().to_string();
        assert_eq!(err, "Package prettier is not declared");
    }

    #[test]
    fn test_show_declared_package() {
        let (runtime, path) = runtime_with(DECLARATIONS);
        assert!(show(runtime, "types-node", Some(path)).is_ok());
    }
}

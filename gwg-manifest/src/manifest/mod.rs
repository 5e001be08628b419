//! Manifest types and parsing for gwg.toml files.

mod file;
mod package;
mod parse;
mod validate;

use gwg_codegen_go::Mod;
use gwg_core::GoVersion;
use serde::Deserialize;

pub use file::GwgToml;
pub use package::{
    EnumConfig, FuncConfig, InterfaceConfig, MethodConfig, PackageConfig, PairConfig,
    PropertyConfig, StructConfig,
};
pub use validate::ParseContext;

/// Root manifest for gwg.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Go module metadata
    pub module: ModuleConfig,

    /// The package generated inside the module
    pub package: PackageConfig,
}

/// `[module]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Module path written to `go.mod`
    pub name: String,

    /// Go toolchain version of the `go` directive
    #[serde(default)]
    pub go: GoVersion,

    /// Content of `.gitignore`; no file is generated when empty
    #[serde(default)]
    pub gitignore: String,
}

impl ModuleConfig {
    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> crate::Result<()> {
        ctx.require_non_empty(&self.name, "name", "module name")
    }
}

impl Manifest {
    /// Build the Go module described by this manifest.
    pub fn to_mod(&self) -> Mod {
        Mod::new(&self.module.name, self.package.to_package())
            .with_go(self.module.go.clone())
            .with_gitignore(&self.module.gitignore)
    }
}

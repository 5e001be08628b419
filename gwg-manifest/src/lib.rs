// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `gwg.toml`, the declarative description of a
//! Go module, and its conversion into the `gwg-codegen-go` model.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    EnumConfig, FuncConfig, GwgToml, InterfaceConfig, Manifest, MethodConfig, ModuleConfig,
    PackageConfig, PairConfig, ParseContext, PropertyConfig, StructConfig,
};

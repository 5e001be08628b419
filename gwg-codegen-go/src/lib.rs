//! Go code generator for gwg.
//!
//! Build a tree of [`ast`] nodes, register them in a [`Package`], and render
//! it to Go source text. [`Mod`] wraps a package with the module metadata
//! needed to write a complete Go module to disk.
//!
//! ```
//! use gwg_codegen_go::{Package, Renderable, ast::{Enums, Property, Struct}};
//!
//! let package = Package::new("model")
//!     .add_code(Enums::new("Color").add_values(["RED", "BLUE"]))
//!     .add_code(Struct::new("Car").add_property(Property::new("Color", "Color")));
//!
//! assert!(package.render().starts_with("package model\ntype Color string\n"));
//! ```

pub mod ast;
pub mod files;
mod module;
mod package;

pub use gwg_codegen::{Indent, Renderable};
pub use module::{Mod, PreviewFile, WrittenFile};
pub use package::Package;

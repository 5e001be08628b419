//! Go AST builders for generating types, functions, and declarations.
//!
//! Inline pieces ([`Pair`], [`Tag`], [`Parameters`], [`Outputs`],
//! [`Property`]) implement `Display`; top-level declarations implement
//! [`Renderable`](gwg_codegen::Renderable) and can be added to a
//! [`Package`](crate::Package).

mod enums;
mod fns;
mod imports;
mod interface;
mod methods;
mod pairs;
mod structs;
mod tags;

pub use enums::Enums;
pub use fns::{CallArg, Func, Line};
pub use imports::Import;
pub use interface::Interface;
pub use methods::Method;
pub use pairs::{Outputs, Pair, Parameters};
pub use structs::{Property, Struct};
pub use tags::Tag;

//! Language-agnostic code generation utilities for gwg.
//!
//! AST nodes of a target language implement [`Renderable`] and are turned
//! into text by [`CodeBuilder`], which owns indentation.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};

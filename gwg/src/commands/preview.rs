use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use gwg_codegen_go::{Indent, Renderable};
use gwg_manifest::GwgToml;

use super::UnwrapOrExit;

/// Indentation of struct, interface and func bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndentStyle {
    /// Every line flush-left
    #[value(name = "none")]
    Flat,
    /// One tab per level, as gofmt writes it
    Tab,
}

impl From<IndentStyle> for Indent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Flat => Indent::NONE,
            IndentStyle::Tab => Indent::GO,
        }
    }
}

#[derive(Args)]
pub struct PreviewCommand {
    /// Path to gwg.toml (defaults to ./gwg.toml)
    #[arg(short, long, default_value = "gwg.toml")]
    pub config: PathBuf,

    /// Body indentation
    #[arg(long, value_enum, default_value_t = IndentStyle::Flat)]
    pub indent: IndentStyle,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let gwg_toml = GwgToml::open(&self.config).unwrap_or_exit();
        let package = gwg_toml.manifest().package.to_package();

        print!("{}", package.render_with_indent(self.indent.into()));
        Ok(())
    }
}

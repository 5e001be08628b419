use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gwg_manifest::GwgToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gwg.toml (defaults to ./gwg.toml)
    #[arg(short, long, default_value = "gwg.toml")]
    pub config: PathBuf,
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let gwg_toml = GwgToml::open(&self.config).unwrap_or_exit();
        let manifest = gwg_toml.manifest();
        let package = &manifest.package;

        println!("✓ {} is valid\n", self.config.display());
        println!("  {} (go {})", manifest.module.name, manifest.module.go);
        println!("  package {}", package.name);
        println!("    {}", plural(package.imports.len(), "import"));
        println!("    {}", plural(package.enums.len(), "enum"));
        println!("    {}", plural(package.structs.len(), "struct"));
        println!("    {}", plural(package.interfaces.len(), "interface"));
        println!("    {}", plural(package.funcs.len(), "func"));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "enum"), "0 enums");
        assert_eq!(plural(1, "struct"), "1 struct");
        assert_eq!(plural(3, "func"), "3 funcs");
    }
}

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use gwg_codegen_go::Mod;
use gwg_core::WriteResult;
use gwg_manifest::GwgToml;
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to gwg.toml (defaults to ./gwg.toml)
    #[arg(short, long, default_value = "gwg.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the directory holding the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let gwg_toml = GwgToml::open(&self.config).unwrap_or_exit();
        info!(config = %gwg_toml.path().display(), "loaded manifest");

        let module = gwg_toml.manifest().to_mod();
        let output = self.output.as_deref().unwrap_or_else(|| gwg_toml.dir());

        if self.dry_run {
            run_preview(&module, output)
        } else {
            run_generation(&module, output)
        }
    }
}

fn run_generation(module: &Mod, output: &Path) -> Result<()> {
    let written = module
        .write(output)
        .wrap_err_with(|| format!("Failed to write module to '{}'", output.display()))?;

    println!("{} (go {})", module.module(), module.go());
    println!();

    for file in &written {
        match file.result {
            WriteResult::Written => println!("  + {}", file.path.display()),
            WriteResult::Skipped => println!("  = {} (kept existing)", file.path.display()),
        }
    }

    Ok(())
}

fn run_preview(module: &Mod, output: &Path) -> Result<()> {
    let files = module.preview();

    for file in &files {
        println!("── {} ──", file.path);
        print!("{}", file.content);
        println!();
    }

    println!("── Summary ──");
    println!("{} files would be generated in {}", files.len(), output.display());

    Ok(())
}

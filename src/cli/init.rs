use crate::models::{CotizadorConfig, CONFIG_FILE};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Write a default config file into `dir`
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if dir.join(CONFIG_FILE).exists() && !force {
        println!("{}", format!("⚠️  {} already exists", CONFIG_FILE).yellow());
        println!("   Run with --force to overwrite");
        return Ok(());
    }

    CotizadorConfig::default().save(dir)?;
    println!("{}", format!("✅ Wrote {}", dir.join(CONFIG_FILE).display()).green());
    Ok(())
}

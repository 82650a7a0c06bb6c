//! Init command - Create the .gavel data directory

use std::path::Path;

use crate::errors::{GavelError, Result};
use crate::fs;
use crate::schemas::Config;

/// Initialize a .gavel data directory in the working directory
pub async fn run(cwd: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    let root = fs::resolve_cwd(cwd);
    let gavel_dir = fs::get_gavel_dir(&root);

    if gavel_dir.exists() && !force {
        return Err(GavelError::ConfigError(format!(
            "{} already exists; use --force to reinitialize",
            gavel_dir.display()
        )));
    }

    if dry_run {
        tracing::info!("[DRY RUN] create {}", gavel_dir.display());
        tracing::info!("[DRY RUN] write {}", fs::get_config_path(&root).display());
        return Ok(());
    }

    std::fs::create_dir_all(fs::get_items_dir(&root))?;
    fs::write_json(&fs::get_config_path(&root), &Config::default())?;

    tracing::info!(root = %root.display(), "Initialized gavel data directory");
    println!("Initialized {}", gavel_dir.display());
    Ok(())
}

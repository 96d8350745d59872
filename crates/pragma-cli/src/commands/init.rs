//! Write a default config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Pragma Configuration

[render]
# Host to translate against: "markup" (HTML) or "trace" (call log as JSON)
host = "markup"

# Pretty-print trace JSON
pretty = true

[batch]
# Extension of tree files to pick up
extension = "json"

# Output directory
output = "out"
"#;

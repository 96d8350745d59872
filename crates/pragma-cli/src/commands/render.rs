//! Single-file render command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pragma_host::{load_tree, render_element, MarkupHost, TraceHost};

use crate::config::{ConfigFile, HostKind};

/// Translate a JSON tree and format the result for `host`.
///
/// Trace output is JSON, markup output is HTML.
pub fn translate_source(source: &str, host: HostKind, pretty: bool) -> Result<String> {
    let tree = load_tree(source)?;

    let output = match host {
        HostKind::Trace => {
            let node = render_element(&TraceHost::new(), &tree)?;
            if pretty {
                serde_json::to_string_pretty(&node)?
            } else {
                serde_json::to_string(&node)?
            }
        }
        HostKind::Markup => render_element(&MarkupHost::new(), &tree)?.to_html(),
    };

    Ok(output)
}

/// Run the render command.
pub fn run(
    config: &ConfigFile,
    file: &Path,
    host: Option<HostKind>,
    output: Option<PathBuf>,
) -> Result<()> {
    let host = host.unwrap_or(config.render.host);
    tracing::debug!("Rendering {} with {:?} host", file.display(), host);

    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rendered = translate_source(&source, host, config.render.pretty)
        .with_context(|| format!("Failed to translate {}", file.display()))?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

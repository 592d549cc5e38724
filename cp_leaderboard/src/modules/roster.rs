use anyhow::Result;
use itertools::Itertools;
use std::{io::ErrorKind, path::Path};

/// Split a roster into user identifiers, one per line.
///
/// Lines are trimmed and blank ones dropped. Order and duplicates are kept as written.
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect_vec()
}

/// Read the roster file at `path`.
///
/// A missing file is an empty roster. Any other read failure is an error.
pub async fn load(path: &Path) -> Result<Vec<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            let users = parse(&text);
            tracing::info!("{} users loaded from {}", users.len(), path.display());
            Ok(users)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "The roster {} doesn't exist, so no users will be processed",
                path.display()
            );
            Ok(Vec::new())
        }
        Err(e) => {
            let message = format!("failed to read roster {} cause {:?}", path.display(), e);
            tracing::error!(message);
            anyhow::bail!(message)
        }
    }
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Write `data` as pretty-printed JSON to `path`, replacing any previous content.
pub async fn save<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let content = serde_json::to_string_pretty(data).with_context(|| {
        let message = "failed to serialize results";
        tracing::error!(message);
        message
    })?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            tracing::warn!(
                "The directory {} doesn't exists, so attempt to create it",
                dir.display()
            );
            tokio::fs::create_dir_all(dir).await.with_context(|| {
                let message = format!("failed to create the directory {}", dir.display());
                tracing::error!(message);
                message
            })?;
        }
    }

    tokio::fs::write(path, content).await.with_context(|| {
        let message = format!("failed to write results to {}", path.display());
        tracing::error!(message);
        message
    })?;

    tracing::info!("Results saved to {}", path.display());

    Ok(())
}

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Download `url` to `dest`. The body lands in a temporary file next to
/// `dest` and is renamed into place only once complete.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let unavailable = |msg: String| Error::DatasetUnavailable(format!("{}: {}", url, msg));

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| unavailable(e.to_string()))?;
    let body = response.bytes().map_err(|e| unavailable(e.to_string()))?;

    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| unavailable(format!("cache dir {}: {}", dir.display(), e)))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| unavailable(e.to_string()))?;
    tmp.write_all(&body).map_err(|e| unavailable(e.to_string()))?;
    tmp.persist(dest).map_err(|e| unavailable(e.to_string()))?;

    info!("Cached {} bytes at {:?}", body.len(), dest);
    Ok(())
}

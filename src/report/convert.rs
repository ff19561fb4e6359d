use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::warn;

/// Best-effort markdown-to-PDF conversion through a locally installed
/// `pandoc`. Returns `None` when the tool is missing or fails; callers treat
/// that as a degraded export, never an error.
pub fn markdown_to_pdf(markdown_path: &Path) -> Option<PathBuf> {
    let pdf_path = markdown_path.with_extension("pdf");

    let status = Command::new("pandoc")
        .arg(markdown_path)
        .arg("-o")
        .arg(&pdf_path)
        .status();

    match status {
        Ok(status) if status.success() => Some(pdf_path),
        Ok(status) => {
            warn!(%status, "pandoc exited with failure; keeping the markdown report only");
            None
        }
        Err(err) => {
            warn!(%err, "pandoc unavailable; install pandoc to enable PDF export");
            None
        }
    }
}

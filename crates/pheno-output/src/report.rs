//! Plain-text invalid-code report.

use std::fs;
use std::path::{Path, PathBuf};

use pheno_model::InvalidCodeIncident;
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// First line of every report.
pub const REPORT_HEADER: &str = "Invalid or missing HPO codes:";

/// Render the report text.
///
/// `row_offset` is added to each incident's zero-based row index; pass the
/// 1-based header row so numbers line up with the source spreadsheet.
pub fn render_incident_report(incidents: &[InvalidCodeIncident], row_offset: usize) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push_str("\n\n");
    for incident in incidents {
        out.push_str(&incident.report_line(row_offset));
        out.push('\n');
    }
    out
}

/// Write the report to `path` if there is anything to report.
///
/// Returns the path written, or `None` when `incidents` is empty (no file is
/// created in that case).
pub fn write_incident_report(
    incidents: &[InvalidCodeIncident],
    row_offset: usize,
    path: &Path,
) -> Result<Option<PathBuf>> {
    if incidents.is_empty() {
        debug!(path = %path.display(), "no incidents, report not written");
        return Ok(None);
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::io(parent, source))?;
    }
    fs::write(path, render_incident_report(incidents, row_offset))
        .map_err(|source| OutputError::io(path, source))?;
    info!(
        path = %path.display(),
        incidents = incidents.len(),
        "invalid code report written"
    );
    Ok(Some(path.to_path_buf()))
}

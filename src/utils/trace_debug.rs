// src/utils/trace_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::extractors::ExtractionReport;
use crate::utils::error::AppError;

// Marker for fragments no section claimed
const DROPPED_MARKER: &str = "-";

/// Renders the routing decision of every fragment, one block per fragment:
/// `[index] section_id` followed by the fragment text.
pub fn render_routing_trace(report: &ExtractionReport) -> String {
    let mut out = format!(
        "# elements={} fragments={} classified={} dropped={}\n",
        report.stats.elements, report.stats.fragments, report.stats.classified, report.stats.dropped
    );

    for (index, routed) in report.trace.iter().enumerate() {
        out.push_str(&format!(
            "\n[{}] {}\n{}\n",
            index,
            routed.section.unwrap_or(DROPPED_MARKER),
            routed.text
        ));
    }
    out
}

/// Saves the routing trace of an extraction to `filename`
pub fn save_routing_trace(report: &ExtractionReport, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;
    file.write_all(render_routing_trace(report).as_bytes())?;

    tracing::info!("Saved routing trace to {}", filename.display());
    Ok(())
}

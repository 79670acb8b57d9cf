//! Text rendering for a comparison report: a legend plus one scaled bar
//! per measured series.

use std::time::Duration;

use crate::bench::CompareReport;

const DP_LABEL: &str = "DP O(n²)";
const PATIENCE_LABEL: &str = "Optimized O(n log n)";
const DP_MARK: &str = "#";
const PATIENCE_MARK: &str = "=";

/// Width of a full-scale bar, in characters.
const BAR_WIDTH: usize = 40;

/// Formats a duration in milliseconds with three fractional digits.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lislab::chart::format_ms;
///
/// assert_eq!(format_ms(Duration::from_micros(1500)), "1.500 ms");
/// ```
pub fn format_ms(elapsed: Duration) -> String {
    format!("{:.3} ms", as_ms(elapsed))
}

fn as_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

/// Renders a comparison report as a fixed-width block of text.
///
/// Bars are scaled against the slowest measured time; skipped quadratic
/// cells render a note instead of a bar.
pub fn render_chart(report: &CompareReport) -> String {
    let mut measured: Vec<f64> = report.patience_times.iter().copied().map(as_ms).collect();
    measured.extend(report.dp_times.iter().flatten().copied().map(as_ms));
    // The axis never collapses below one millisecond.
    let max_ms = measured.iter().fold(1.0_f64, |acc, &ms| acc.max(ms));

    let mut out = String::new();
    out.push_str(&format!(
        "legend: {DP_MARK} {DP_LABEL}   {PATIENCE_MARK} {PATIENCE_LABEL}\n"
    ));

    for (i, &n) in report.sizes.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("n = {n}\n"));

        match report.dp_times[i] {
            Some(elapsed) => {
                out.push_str(&format!(
                    "  {:<22}{:<width$}  {}\n",
                    DP_LABEL,
                    bar(DP_MARK, as_ms(elapsed), max_ms),
                    format_ms(elapsed),
                    width = BAR_WIDTH,
                ));
            }
            None => {
                out.push_str(&format!(
                    "  {:<22}skipped (n > {})\n",
                    DP_LABEL, report.dp_cutoff
                ));
            }
        }

        let elapsed = report.patience_times[i];
        out.push_str(&format!(
            "  {:<22}{:<width$}  {}\n",
            PATIENCE_LABEL,
            bar(PATIENCE_MARK, as_ms(elapsed), max_ms),
            format_ms(elapsed),
            width = BAR_WIDTH,
        ));
    }

    out
}

/// A bar scaled to `ms / max_ms`, never shorter than one mark.
fn bar(mark: &str, ms: f64, max_ms: f64) -> String {
    let width = ((ms / max_ms) * BAR_WIDTH as f64).round() as usize;
    mark.repeat(width.max(1))
}

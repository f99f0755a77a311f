//! End-of-run summary printing

use owo_colors::{OwoColorize, Style};
use shrink_engine::RunReport;

/// Render a byte count the way `ls -h` does
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

struct Palette {
    ok: Style,
    ok_count: Style,
    err: Style,
    err_count: Style,
    dim: Style,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                ok: Style::new().bright_green(),
                ok_count: Style::new().bright_green().bold(),
                err: Style::new().bright_red(),
                err_count: Style::new().bright_red().bold(),
                dim: Style::new().dimmed(),
            }
        } else {
            Self {
                ok: Style::new(),
                ok_count: Style::new(),
                err: Style::new(),
                err_count: Style::new(),
                dim: Style::new(),
            }
        }
    }
}

/// Summary lines for a finished run
///
/// Continue-on-error runs also list every failed file with its error.
pub fn summary_lines(report: &RunReport, color: bool) -> Vec<String> {
    let palette = Palette::new(color);
    let stats = &report.stats;
    let files = stats.files;
    let failed = stats.failed;
    let saved = format!("{} saved", format_bytes(stats.saved()));

    let mut lines = Vec::new();

    if report.dry_run {
        lines.push(format!(
            "{} {} would be minified ({})",
            "●".style(palette.ok),
            files.to_string().style(palette.ok_count),
            saved.style(palette.dim)
        ));
    } else if failed > 0 {
        lines.push(format!(
            "{} {} minified | {} {} failed",
            "●".style(palette.ok),
            files.to_string().style(palette.ok_count),
            "●".style(palette.err),
            failed.to_string().style(palette.err_count),
        ));
    } else {
        lines.push(format!(
            "{} {} minified ({})",
            "●".style(palette.ok),
            files.to_string().style(palette.ok_count),
            saved.style(palette.dim)
        ));
    }

    for failure in &report.failures {
        lines.push(format!(
            "  {} {}: {}",
            "✗".style(palette.err),
            failure.rel_path,
            failure.error.to_string().style(palette.dim)
        ));
    }

    lines
}

/// Print the summary for a finished run to stdout
pub fn print_summary(report: &RunReport, color: bool) {
    for line in summary_lines(report, color) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use shrink_engine::{Error, FileFailure, RelPath, StatsSnapshot};
    use std::path::PathBuf;

    fn report(stats: StatsSnapshot, failures: Vec<FileFailure>, dry_run: bool) -> RunReport {
        RunReport {
            outcomes: Vec::new(),
            failures,
            stats,
            dry_run,
        }
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_success_summary() {
        let stats = StatsSnapshot {
            files: 3,
            failed: 0,
            bytes_before: 300,
            bytes_after: 200,
        };
        let lines = summary_lines(&report(stats, Vec::new(), false), false);
        assert_eq!(lines, vec!["● 3 minified (100 B saved)".to_string()]);
    }

    #[test]
    fn test_dry_run_summary() {
        let stats = StatsSnapshot {
            files: 2,
            failed: 0,
            bytes_before: 50,
            bytes_after: 40,
        };
        let lines = summary_lines(&report(stats, Vec::new(), true), false);
        assert_eq!(lines, vec!["● 2 would be minified (10 B saved)".to_string()]);
    }

    #[test]
    fn test_failure_summary_lists_files() {
        let stats = StatsSnapshot {
            files: 1,
            failed: 1,
            bytes_before: 10,
            bytes_after: 8,
        };
        let failure = FileFailure {
            rel_path: RelPath::new(PathBuf::from("bad.html")).unwrap(),
            error: Error::Minify {
                path: "bad.html".to_string(),
                message: "broken".to_string(),
            },
        };

        let lines = summary_lines(&report(stats, vec![failure], false), false);
        assert_eq!(lines[0], "● 1 minified | ● 1 failed");
        assert!(lines[1].starts_with("  ✗ bad.html: "));
        assert!(lines[1].contains("broken"));
    }

    #[test]
    fn test_colored_summary_has_escapes() {
        let stats = StatsSnapshot {
            files: 1,
            ..StatsSnapshot::default()
        };
        let lines = summary_lines(&report(stats, Vec::new(), false), true);
        assert!(lines[0].contains('\u{1b}'));
    }
}

use packlist_core::config::{AppConfig, LoadOptions};
use packlist_core::{catalog, Catalog};
use serde::Serialize;

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Fail { 2 } else { 0 };

    let output = if json_output {
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"))
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_catalog_source(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "catalog_source",
                status: CheckStatus::Skipped,
                details: "skipped because config validation failed".to_string(),
            });
        }
    }

    let failed = checks.iter().filter(|check| check.status == CheckStatus::Fail).count();
    let overall_status = if failed == 0 { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if failed == 0 {
        "all checks passed".to_string()
    } else {
        format!("{failed} check(s) failed")
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_catalog_source(config: &AppConfig) -> DoctorCheck {
    match &config.catalog.path {
        None => DoctorCheck {
            name: "catalog_source",
            status: CheckStatus::Pass,
            details: format!(
                "no dataset configured, embedded defaults in use ({} entries)",
                Catalog::fallback().len()
            ),
        },
        Some(path) => match catalog::load_entries(path) {
            Ok(entries) => DoctorCheck {
                name: "catalog_source",
                status: CheckStatus::Pass,
                details: format!("dataset `{}` loads ({} entries)", path.display(), entries.len()),
            },
            Err(error) => DoctorCheck {
                name: "catalog_source",
                status: CheckStatus::Fail,
                details: format!("dataset unusable, generator would fall back: {error}"),
            },
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = vec![format!("doctor: {}", report.summary)];
    for check in &report.checks {
        let status = match check.status {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("  [{status}] {:<18} {}", check.name, check.details));
    }
    lines.join("\n")
}

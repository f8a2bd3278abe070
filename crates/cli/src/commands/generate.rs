use std::path::PathBuf;

use packlist_core::config::{AppConfig, LoadOptions};
use packlist_core::{
    Accommodation, Catalog, Climate, PackingListGenerator, TransportMode, TripSnapshot,
};
use serde::Serialize;

use crate::GenerateArgs;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct GenerateReport {
    destination: String,
    items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
struct ItemReport {
    id: String,
    name: String,
    category: String,
    quantity: u32,
    essential: bool,
    confidence: f64,
    reasons: Vec<String>,
}

pub fn run(args: &GenerateArgs) -> CommandResult {
    let snapshot = match build_snapshot(args) {
        Ok(snapshot) => snapshot,
        Err(message) => return CommandResult::failure("generate", "invalid_arguments", message),
    };

    let catalog = match load_catalog(args.catalog.clone()) {
        Ok(catalog) => catalog,
        Err(message) => return CommandResult::failure("generate", "config_validation", message),
    };

    let generator = PackingListGenerator::new(catalog);
    let recommendations = generator.generate(&snapshot);

    let items: Vec<ItemReport> = recommendations
        .iter()
        .filter_map(|recommendation| {
            let entry = generator.catalog().find(&recommendation.entry_id)?;
            Some(ItemReport {
                id: entry.id.as_str().to_string(),
                name: display_name(&entry.name_key),
                category: entry.category.as_str().to_string(),
                quantity: recommendation.quantity,
                essential: entry.essential,
                confidence: recommendation.confidence,
                reasons: recommendation.reasons.clone(),
            })
        })
        .collect();

    let report = GenerateReport { destination: snapshot.destination.clone(), items };

    if args.json {
        return CommandResult::success(
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}")),
        );
    }

    CommandResult::success(render_human(&report))
}

fn build_snapshot(args: &GenerateArgs) -> Result<TripSnapshot, String> {
    let mut transports = Vec::new();
    for raw in &args.transports {
        transports.push(raw.parse::<TransportMode>().map_err(|error| error.to_string())?);
    }
    let accommodation =
        args.accommodation.parse::<Accommodation>().map_err(|error| error.to_string())?;
    let climate = args.climate.parse::<Climate>().map_err(|error| error.to_string())?;

    Ok(TripSnapshot::new(args.destination.clone(), args.start, args.end)
        .with_transports(transports)
        .with_accommodation(accommodation)
        .with_activities(args.activities.iter().cloned())
        .with_business(args.business)
        .with_party_size(args.party)
        .with_climate(climate))
}

pub(super) fn load_catalog(override_path: Option<PathBuf>) -> Result<Catalog, String> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| error.to_string())?;
    let path = override_path.or(config.catalog.path);
    Ok(Catalog::load_or_default(path.as_deref()))
}

/// Fallback display rendering: strip the key namespace and humanize.
/// Real deployments plug a localization resolver into the core instead.
fn display_name(name_key: &str) -> String {
    let base = name_key.rsplit('.').next().unwrap_or(name_key);
    let mut words: Vec<String> = Vec::new();
    for word in base.split('_') {
        let mut chars = word.chars();
        words.push(match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        });
    }
    words.join(" ")
}

fn render_human(report: &GenerateReport) -> String {
    let mut lines = vec![format!(
        "packing list for {} ({} items):",
        report.destination,
        report.items.len()
    )];

    for item in &report.items {
        let marker = if item.essential { "*" } else { " " };
        lines.push(format!(
            "  {marker} {:<3} x {:<24} [{:<11}] {:>3.0}%",
            item.quantity,
            item.name,
            item.category,
            item.confidence * 100.0
        ));
    }

    if report.items.is_empty() {
        lines.push("  (no recommendations for this trip)".to_string());
    }

    lines.join("\n")
}

use packlist_core::{CatalogQuery, ItemCategory, PriorityTier};
use serde::Serialize;

use crate::CatalogArgs;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CatalogReport {
    total: usize,
    matched: usize,
    entries: Vec<EntryReport>,
}

#[derive(Debug, Serialize)]
struct EntryReport {
    id: String,
    name_key: String,
    category: String,
    priority: String,
    essential: bool,
    tags: Vec<String>,
}

pub fn run(args: &CatalogArgs) -> CommandResult {
    let query = match build_query(args) {
        Ok(query) => query,
        Err(message) => return CommandResult::failure("catalog", "invalid_arguments", message),
    };

    let catalog = match super::generate::load_catalog(args.catalog.clone()) {
        Ok(catalog) => catalog,
        Err(message) => return CommandResult::failure("catalog", "config_validation", message),
    };

    let matched = catalog.search(&query);
    let report = CatalogReport {
        total: catalog.len(),
        matched: matched.len(),
        entries: matched
            .iter()
            .map(|entry| EntryReport {
                id: entry.id.as_str().to_string(),
                name_key: entry.name_key.clone(),
                category: entry.category.as_str().to_string(),
                priority: entry.priority.as_str().to_string(),
                essential: entry.essential,
                tags: entry.tags.iter().cloned().collect(),
            })
            .collect(),
    };

    if args.json {
        return CommandResult::success(
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}")),
        );
    }

    CommandResult::success(render_human(&report))
}

fn build_query(args: &CatalogArgs) -> Result<CatalogQuery, String> {
    let mut categories = Vec::new();
    for raw in &args.categories {
        categories.push(raw.parse::<ItemCategory>().map_err(|error| error.to_string())?);
    }
    let mut priorities = Vec::new();
    for raw in &args.priorities {
        priorities.push(raw.parse::<PriorityTier>().map_err(|error| error.to_string())?);
    }

    let mut query = CatalogQuery::new()
        .with_categories(categories)
        .with_priorities(priorities)
        .with_tags(args.tags.iter().cloned());
    if args.essential {
        query = query.with_essential(true);
    }
    Ok(query)
}

fn render_human(report: &CatalogReport) -> String {
    let mut lines =
        vec![format!("catalog entries ({} of {} matched):", report.matched, report.total)];

    for entry in &report.entries {
        let marker = if entry.essential { "*" } else { " " };
        lines.push(format!(
            "  {marker} {:<20} [{:<11}] {:<12} tags: {}",
            entry.id,
            entry.category,
            entry.priority,
            entry.tags.join(", ")
        ));
    }

    lines.join("\n")
}

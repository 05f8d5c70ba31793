//! Tables command implementation.
//!
//! This module lists the weight tables the estimator runs on, with optional
//! filtering by table or label.

use crate::display::{Kind, format_weight};
use leadscope_lib::prelude::*;

/// List the weight tables, or a single table, optionally filtered by label.
pub(crate) fn list_tables(tables: &MarketTables, kind: Option<Kind>, search: Option<&str>) {
    let kinds: Vec<TableKind> = match kind {
        Some(kind) => vec![kind.into()],
        None => TableKind::all().to_vec(),
    };

    let mut total = 0;
    for table_kind in kinds {
        let table = tables.table(table_kind);
        let entries: Vec<_> = match search {
            Some(pattern) => table.search(pattern),
            None => table.iter().collect(),
        };
        if entries.is_empty() {
            continue;
        }

        println!("{:<22} {:>12}", table_kind.as_str().to_uppercase(), "WEIGHT");
        println!("{}", "-".repeat(35));
        for entry in &entries {
            println!("{:<22} {:>12}", entry.label, format_weight(table_kind, entry.weight));
        }
        println!(
            "{:<22} {:>12}\n",
            "(unknown)",
            format_weight(table_kind, tables.fallback_weight(table_kind))
        );
        total += entries.len();
    }

    if total == 0 {
        println!("No labels found.");
        return;
    }

    if kind.is_none() && search.is_none() {
        let confidence = tables.confidence();
        println!("Regions:    {}", tables.regions().join(", "));
        println!(
            "Confidence: {:.0}% - {:.0}% of reachable",
            confidence.conservative * 100.0,
            confidence.aggressive * 100.0
        );
    }

    println!("\nTotal: {total} labels");
}

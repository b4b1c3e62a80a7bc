//! dash-runner: headless resolution runner for the risk dashboard.
//!
//! Usage:
//!   dash-runner --date Apr-2025
//!   dash-runner --date Apr-2025 --json
//!   dash-runner --degraded            # no selection, newest month unpopulated

use anyhow::Result;
use riskdash_core::{
    catalog::{PARAM_RBC, PARAM_TOTAL_ASSETS, PARAM_TOTAL_EQUITY, RISK_CATEGORIES},
    fixture, resolver,
    table::{BlockPair, Cell, SeriesTable, SummaryTable},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let degraded = args.iter().any(|a| a == "--degraded");
    let json = args.iter().any(|a| a == "--json");
    let date = args
        .windows(2)
        .find(|w| w[0] == "--date")
        .map(|w| w[1].clone());

    let series = fixture::series_table();
    let summary = if degraded {
        fixture::summary_table_unpopulated_tail()
    } else {
        fixture::summary_table()
    };

    // No explicit date and not forced degraded: behave like the date
    // selector defaulting to the newest month.
    let default_label = fixture::month_labels().last().cloned();
    let selected = if degraded {
        None
    } else {
        date.or(default_label)
    };

    let resolved = resolver::resolve(selected.as_deref(), Some(&series), Some(&summary));

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("riskdash — dash-runner");
    println!("  selected: {}", resolved.label.as_deref().unwrap_or("(none)"));
    println!();

    match resolved.series {
        Some(pair) => print_series(&series, pair),
        None => println!("series: no data"),
    }
    println!();
    match resolved.summary {
        Some(pair) => print_summary(&summary, pair),
        None => println!("summary: no data"),
    }

    Ok(())
}

fn print_series(table: &SeriesTable, pair: BlockPair) {
    println!(
        "series: previous column {} ({}), current column {} ({})",
        pair.previous,
        table.short_label(pair.previous).unwrap_or("?"),
        pair.current,
        table.short_label(pair.current).unwrap_or("?"),
    );
    for (label, row) in [
        ("Jumlah Aset", PARAM_TOTAL_ASSETS),
        ("Jumlah Ekuitas", PARAM_TOTAL_EQUITY),
        ("RBC", PARAM_RBC),
    ] {
        println!(
            "  {label:<16} {:>12} -> {:>12}",
            show(table.metric(pair.previous, row)),
            show(table.metric(pair.current, row)),
        );
    }
}

fn print_summary(table: &SummaryTable, pair: BlockPair) {
    println!(
        "summary: previous column {}, current column {}",
        pair.previous, pair.current
    );
    for (row, category) in RISK_CATEGORIES.iter().enumerate() {
        println!(
            "  {category:<28} {:>8} -> {:>8}",
            show(table.score(pair.previous, row)),
            show(table.score(pair.current, row)),
        );
    }
    match table.composite_score(pair.current) {
        Some(score) => println!("  composite score: {score:.2}"),
        None => println!("  composite score: -"),
    }
}

fn show(cell: Option<&Cell>) -> String {
    match cell {
        Some(Cell::Number(n)) => format!("{n:.2}"),
        Some(Cell::Text(s)) if !s.is_empty() => s.clone(),
        _ => "-".to_string(),
    }
}

//! Canned fixture tables — thirteen months, Aug-2024 through Aug-2025.
//!
//! Deterministic stand-ins for the two uploaded sheets, shaped exactly
//! like the production export: leading label columns, repeating period
//! units, short labels in row 0 of series value columns, sentinel cells
//! where data has not arrived. Used by dash-runner and the integration
//! tests; this is not a data generator.

use crate::{
    catalog::{
        RiskBand, COMPOSITE_LABEL, PARAM_CASH_AND_BANK, PARAM_COMPREHENSIVE_PROFIT,
        PARAM_GROSS_CLAIMS, PARAM_GROSS_PREMIUM, PARAM_INVESTMENT_ASSETS, PARAM_POLICY_COUNT,
        PARAM_RBC, PARAM_TOTAL_ASSETS, PARAM_TOTAL_EQUITY, PARAM_TOTAL_INCOME,
        PARAM_TOTAL_LIABILITIES, PARAMETERS, RISK_CATEGORIES, SCORE_WEIGHT,
    },
    table::{Cell, Grid, SeriesTable, SummaryTable},
    types::RowIndex,
};
use chrono::{Datelike, Months, NaiveDate};

/// Periods covered by the fixture, oldest first.
pub const FIXTURE_MONTH_COUNT: usize = 13;

struct FixtureMonth {
    /// "Aug-2024"
    short: String,
    /// "Aug"
    name: String,
    /// "August"
    full: String,
    year: i32,
}

fn fixture_months(count: usize) -> Vec<FixtureMonth> {
    let epoch = NaiveDate::from_ymd_opt(2024, 8, 1).expect("fixture epoch");
    (0..count)
        .map(|i| {
            let date = epoch + Months::new(i as u32);
            FixtureMonth {
                short: date.format("%b-%Y").to_string(),
                name: date.format("%b").to_string(),
                full: date.format("%B").to_string(),
                year: date.year(),
            }
        })
        .collect()
}

/// Short period labels ("Aug-2024"…), as the date selector offers them.
pub fn month_labels() -> Vec<String> {
    fixture_months(FIXTURE_MONTH_COUNT)
        .into_iter()
        .map(|m| m.short)
        .collect()
}

/// Metrics with a meaningful month-on-month progression. Everything
/// else gets a flat banded default, same as the production seed sheet.
const PROGRESSIONS: &[(RowIndex, f64, f64)] = &[
    (PARAM_INVESTMENT_ASSETS, 3200.5, 50.0),
    (PARAM_CASH_AND_BANK, 450.0, 15.0),
    (PARAM_TOTAL_ASSETS, 8500.0, 100.0),
    (PARAM_TOTAL_LIABILITIES, 3200.0, 50.0),
    (PARAM_TOTAL_EQUITY, 5300.0, 50.0),
    (PARAM_GROSS_PREMIUM, 650.0, 20.0),
    (PARAM_TOTAL_INCOME, 720.0, 20.0),
    (PARAM_GROSS_CLAIMS, 380.0, 10.0),
    (PARAM_COMPREHENSIVE_PROFIT, 185.0, 5.0),
    (PARAM_RBC, 165.5, 1.75),
    (PARAM_POLICY_COUNT, 45000.0, 500.0),
];

fn metric_value(row: RowIndex, month_idx: usize) -> f64 {
    if let Some((_, base, step)) = PROGRESSIONS.iter().find(|(r, _, _)| *r == row) {
        return round2(base + step * month_idx as f64);
    }
    if row < 50 {
        100.0 + row as f64 * 10.0
    } else if row < 100 {
        1.5 + (row % 10) as f64 * 0.5
    } else {
        (10 + row % 20) as f64
    }
}

/// Per-category score trend: (starting score, monthly drift).
const CATEGORY_TRENDS: [(f64, f64); 9] = [
    (2.80, -0.05),
    (3.20, -0.05),
    (2.60, -0.02),
    (2.40, -0.02),
    (2.10, -0.02),
    (2.90, -0.02),
    (2.50, -0.02),
    (3.00, -0.02),
    (2.70, -0.02),
];

fn category_score(category: usize, month_idx: usize) -> f64 {
    let (start, step) = CATEGORY_TRENDS[category];
    round2(start + step * month_idx as f64)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Table A fixture: parameter column plus 13 (marker, value) pairs.
pub fn series_table() -> SeriesTable {
    let months = fixture_months(FIXTURE_MONTH_COUNT);

    let mut headers = vec!["Parameter".to_string()];
    for (m, month) in months.iter().enumerate() {
        headers.push(month.short.clone());
        headers.push(format!("Unnamed: {}", 2 + 2 * m));
    }
    let mut grid = Grid::new(headers);

    // Row 0: the short-label row. Year under the marker, month name
    // under the value column.
    let mut label_row = vec![Cell::Empty];
    for month in &months {
        label_row.push(Cell::Number(month.year as f64));
        label_row.push(Cell::Text(month.name.clone()));
    }
    grid.push_row(label_row);

    for (row, name) in PARAMETERS.iter().enumerate() {
        let mut cells = vec![Cell::Text((*name).to_string())];
        for m in 0..months.len() {
            cells.push(Cell::Empty);
            cells.push(Cell::Number(metric_value(row, m)));
        }
        grid.push_row(cells);
    }

    SeriesTable::from_grid(grid)
}

/// Table B fixture: label and category columns plus 13 periods of
/// (marker, score, weighted, classification).
pub fn summary_table() -> SummaryTable {
    build_summary(false)
}

/// Same as [`summary_table`] with one extra period whose cells are all
/// sentinel — the shape of a sheet whose newest month has not arrived.
pub fn summary_table_unpopulated_tail() -> SummaryTable {
    build_summary(true)
}

fn build_summary(unpopulated_tail: bool) -> SummaryTable {
    let total = FIXTURE_MONTH_COUNT + usize::from(unpopulated_tail);
    let months = fixture_months(total);

    let mut headers = vec!["No".to_string(), "Jenis Risiko".to_string()];
    for month in &months {
        // Data columns first, then the year marker that closes the
        // period — the score column sits three left of its marker.
        headers.push(format!("{}-score", month.full));
        headers.push(format!("{}-weighted", month.full));
        headers.push(format!("{}-classification", month.full));
        headers.push(format!("{}-{}", month.full, month.year));
    }
    let mut grid = Grid::new(headers);

    let unit = |score: Option<f64>, year: i32, populated: bool| -> Vec<Cell> {
        if !populated {
            return vec![Cell::sentinel(), Cell::sentinel(), Cell::sentinel(), Cell::sentinel()];
        }
        match score {
            Some(s) => vec![
                Cell::Number(s),
                Cell::Number(round2(s * SCORE_WEIGHT)),
                Cell::Text(RiskBand::from_score(s).label().to_string()),
                Cell::Number(year as f64),
            ],
            // Separator row: data sentinel, year marker still present.
            None => vec![
                Cell::sentinel(),
                Cell::sentinel(),
                Cell::sentinel(),
                Cell::Number(year as f64),
            ],
        }
    };

    for (cat, name) in RISK_CATEGORIES.iter().enumerate() {
        let mut cells = vec![Cell::Empty, Cell::Text((*name).to_string())];
        for (m, month) in months.iter().enumerate() {
            let populated = m < FIXTURE_MONTH_COUNT;
            cells.extend(unit(Some(category_score(cat, m)), month.year, populated));
        }
        grid.push_row(cells);
    }

    let mut separator = vec![Cell::Empty, Cell::Text(String::new())];
    for (m, month) in months.iter().enumerate() {
        separator.extend(unit(None, month.year, m < FIXTURE_MONTH_COUNT));
    }
    grid.push_row(separator);

    let mut composite = vec![Cell::Empty, Cell::Text(COMPOSITE_LABEL.to_string())];
    for (m, month) in months.iter().enumerate() {
        let mean = (0..RISK_CATEGORIES.len())
            .map(|c| category_score(c, m))
            .sum::<f64>()
            / RISK_CATEGORIES.len() as f64;
        composite.extend(unit(Some(round2(mean)), month.year, m < FIXTURE_MONTH_COUNT));
    }
    grid.push_row(composite);

    SummaryTable::from_grid(grid)
}

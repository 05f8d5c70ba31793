//! Benchmark fixtures for leadscope.

use leadscope_lib::{MarketTables, OutreachFrequency, RoiConfig, TableKind, TamConfig};

/// Selection of the first `n` labels of every table.
pub fn widest_selection(tables: &MarketTables, n: usize) -> TamConfig {
    let labels = |kind: TableKind| -> Vec<String> {
        tables
            .table(kind)
            .labels()
            .take(n)
            .map(str::to_string)
            .collect()
    };

    TamConfig {
        industries: labels(TableKind::Industries),
        roles: labels(TableKind::Roles),
        company_sizes: labels(TableKind::CompanySizes),
        ..TamConfig::default()
    }
}

/// TAM selections of increasing width, named for benchmark ids.
pub fn tam_scenarios() -> Vec<(&'static str, TamConfig)> {
    let tables = MarketTables::global();
    vec![
        (
            "single",
            TamConfig::default()
                .with_industry("Technology")
                .with_role("CEO")
                .with_company_size("51-200"),
        ),
        ("half", widest_selection(tables, 5)),
        ("all", widest_selection(tables, usize::MAX)),
        (
            "fallbacks",
            TamConfig::new("Trade shows")
                .with_industry("Biotech")
                .with_industry("Logistics")
                .with_role("Founder")
                .with_company_size("10000+"),
        ),
    ]
}

/// Campaigns covering the default, an override and a degenerate funnel.
pub fn roi_scenarios() -> Vec<(&'static str, RoiConfig)> {
    vec![
        ("default", RoiConfig::default()),
        (
            "ltv-override",
            RoiConfig {
                leads: 250_000.0,
                outreach_frequency: OutreachFrequency::Daily,
                customer_ltv: Some(48_000.0),
                ..RoiConfig::default()
            },
        ),
        (
            "no-deals",
            RoiConfig {
                deal_close_rate: 0.0,
                ..RoiConfig::default()
            },
        ),
    ]
}

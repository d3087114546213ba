#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the selectors emitted by the dashboard components (KPI tiles, chart
series, range selector, table) remain present in the shared theme at
`ui/assets/theme/main.css`. A renamed class would otherwise only show up as
unstyled markup in a packaged build.

When a component's class names change, update REQUIRED_SELECTORS to match.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-header",
    ".app-header__brand-mark",
    // Toolbar
    ".status-pill",
    ".status-pill--pulse",
    ".segmented",
    ".seg.active",
    ".button {",
    ".button--primary",
    ".dashboard__updated",
    ".dashboard__error",
    // Cards
    ".dashboard-card",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__placeholder",
    // KPI tiles
    ".kpi-grid",
    ".kpi__value",
    ".kpi__delta.up",
    ".kpi__delta.down",
    // Chart
    ".chart__surface",
    ".chart__gridline",
    ".chart__axis-label",
    ".chart__line",
    ".chart__series--visits",
    ".chart__series--signups",
    ".chart__point",
    ".chart__legend-swatch--visits",
    ".chart__legend-swatch--signups",
    // Table
    ".metrics-table__grid",
    ".metrics-table__grid .num",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn both_series_have_line_and_marker_colors() {
    for kind in ["visits", "signups"] {
        let line = format!(".chart__series--{kind} .chart__line");
        let point = format!(".chart__series--{kind} .chart__point");
        assert!(
            THEME_CSS.contains(&line) && THEME_CSS.contains(&point),
            "Series `{kind}` is missing line or marker styling"
        );
    }
}

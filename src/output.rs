// Rendering of computed reports for the two shells: markdown-style tables
// for the terminal, plain HTML tables for the web form.
use crate::reports::Report;
use crate::types::{
    DistributionRow, PreferenceRow, PriceStats, PriceStatsRow, ProductTotal, RecordRow,
    SalesRecord, SummaryStats, WeeklySalesRow, WeeklyTotal,
};
use crate::util::format_number;
use tabled::{settings::Style, Table, Tabled};

/// Render a report as a markdown-style table for the terminal.
pub fn render_text(report: &Report) -> String {
    match report {
        Report::MonthlySales(rows) => table_text(&record_rows(rows)),
        Report::Price(stats) => table_text(&price_rows(stats)),
        Report::WeeklySales(totals) => table_text(&weekly_rows(totals)),
        Report::ProductPreference(totals) => table_text(&preference_rows(totals)),
        Report::SalesDistribution(stats) => table_text(&distribution_rows(stats)),
    }
}

/// Render a report as an HTML table for the web shell.
pub fn render_html(report: &Report) -> String {
    match report {
        Report::MonthlySales(rows) => table_html(&record_rows(rows)),
        Report::Price(stats) => table_html(&price_rows(stats)),
        Report::WeeklySales(totals) => table_html(&weekly_rows(totals)),
        Report::ProductPreference(totals) => table_html(&preference_rows(totals)),
        Report::SalesDistribution(stats) => table_html(&distribution_rows(stats)),
    }
}

fn record_rows(records: &[SalesRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            branch_id: r.branch_id.clone(),
            date: r.date.clone(),
            product_id: r.product_id.clone(),
            sales_amount: format_number(r.sales_amount, 2),
            price: format_number(r.price, 2),
        })
        .collect()
}

fn price_rows(stats: &[PriceStats]) -> Vec<PriceStatsRow> {
    stats
        .iter()
        .map(|s| PriceStatsRow {
            product_id: s.product_id.clone(),
            count: s.stats.count,
            mean: format_number(s.stats.mean, 2),
            std: format_number(s.stats.std, 2),
            min: format_number(s.stats.min, 2),
            p25: format_number(s.stats.p25, 2),
            p50: format_number(s.stats.p50, 2),
            p75: format_number(s.stats.p75, 2),
            max: format_number(s.stats.max, 2),
        })
        .collect()
}

fn weekly_rows(totals: &[WeeklyTotal]) -> Vec<WeeklySalesRow> {
    totals
        .iter()
        .map(|t| WeeklySalesRow {
            week: t.week,
            total: format_number(t.total, 2),
        })
        .collect()
}

fn preference_rows(totals: &[ProductTotal]) -> Vec<PreferenceRow> {
    totals
        .iter()
        .enumerate()
        .map(|(idx, t)| PreferenceRow {
            rank: idx + 1,
            product_id: t.product_id.clone(),
            total: format_number(t.total, 2),
        })
        .collect()
}

fn distribution_rows(stats: &SummaryStats) -> Vec<DistributionRow> {
    let value_rows = [
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.p25),
        ("50%", stats.p50),
        ("75%", stats.p75),
        ("max", stats.max),
    ];
    let mut rows = vec![DistributionRow {
        statistic: "count".to_string(),
        value: stats.count.to_string(),
    }];
    rows.extend(value_rows.iter().map(|(name, value)| DistributionRow {
        statistic: name.to_string(),
        value: format_number(*value, 2),
    }));
    rows
}

fn table_text<T>(rows: &[T]) -> String
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows.to_vec()).with(Style::markdown()).to_string()
}

fn table_html<T>(rows: &[T]) -> String
where
    T: Tabled,
{
    let mut html = String::from("<table border=\"1\">\n  <thead>\n    <tr>");
    for header in T::headers() {
        html.push_str("<th>");
        html.push_str(&escape_html(&header));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");
    for row in rows {
        html.push_str("    <tr>");
        for field in row.fields() {
            html.push_str("<td>");
            html.push_str(&escape_html(&field));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}

/// Minimal HTML escaping for text interpolated into the page.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

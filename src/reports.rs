use crate::error::{AnalysisError, Result};
use crate::types::{PriceStats, ProductTotal, SalesRecord, SummaryStats, WeeklyTotal};
use crate::util::{describe, normalize_branch_id, parse_date};
use chrono::Datelike;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The closed set of reports the analysis layer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    MonthlySales,
    Price,
    WeeklySales,
    ProductPreference,
    SalesDistribution,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::MonthlySales,
        ReportKind::Price,
        ReportKind::WeeklySales,
        ReportKind::ProductPreference,
        ReportKind::SalesDistribution,
    ];

    /// Resolve a wire/form name into a report kind.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "monthly_sales" => Ok(ReportKind::MonthlySales),
            "price" => Ok(ReportKind::Price),
            "weekly_sales" => Ok(ReportKind::WeeklySales),
            "product_preference" => Ok(ReportKind::ProductPreference),
            "sales_distribution" => Ok(ReportKind::SalesDistribution),
            other => Err(AnalysisError::UnknownReport(other.to_string())),
        }
    }

    /// Name used by the web form and the report API.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::MonthlySales => "monthly_sales",
            ReportKind::Price => "price",
            ReportKind::WeeklySales => "weekly_sales",
            ReportKind::ProductPreference => "product_preference",
            ReportKind::SalesDistribution => "sales_distribution",
        }
    }

    /// Human-facing title shown above a rendered report.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::MonthlySales => "Monthly Sales Analysis",
            ReportKind::Price => "Price Analysis",
            ReportKind::WeeklySales => "Weekly Sales Analysis",
            ReportKind::ProductPreference => "Product Preference Analysis",
            ReportKind::SalesDistribution => "Sales Distribution Analysis",
        }
    }

    /// Whether the report needs a branch identifier parameter.
    pub fn needs_branch_id(self) -> bool {
        self == ReportKind::MonthlySales
    }

    fn label(self) -> &'static str {
        match self {
            ReportKind::MonthlySales => "monthly sales",
            ReportKind::Price => "price analysis",
            ReportKind::WeeklySales => "weekly sales",
            ReportKind::ProductPreference => "product preference",
            ReportKind::SalesDistribution => "sales distribution",
        }
    }
}

/// A computed report, one variant per kind.
#[derive(Debug, Clone)]
pub enum Report {
    MonthlySales(Vec<SalesRecord>),
    Price(Vec<PriceStats>),
    WeeklySales(Vec<WeeklyTotal>),
    ProductPreference(Vec<ProductTotal>),
    SalesDistribution(SummaryStats),
}

/// Entry point shared by the terminal and web shells.
///
/// Any failure inside a query comes back wrapped in the scope of the report
/// that was running, with the original cause preserved as its source.
pub fn run_report(
    data: &[SalesRecord],
    kind: ReportKind,
    branch_id: Option<&str>,
) -> Result<Report> {
    let result = match kind {
        ReportKind::MonthlySales => {
            monthly_sales(data, branch_id.unwrap_or("")).map(Report::MonthlySales)
        }
        ReportKind::Price => price_analysis(data).map(Report::Price),
        ReportKind::WeeklySales => weekly_sales(data).map(Report::WeeklySales),
        ReportKind::ProductPreference => product_preference(data).map(Report::ProductPreference),
        ReportKind::SalesDistribution => sales_distribution(data).map(Report::SalesDistribution),
    };
    result.map_err(|e| e.in_report(kind.label()))
}

/// Records for one branch, in source-file order.
///
/// The query parameter goes through the same normalization as the stored
/// column, so `"007"` and `"7"` select the same branch.
pub fn monthly_sales(data: &[SalesRecord], branch_id: &str) -> Result<Vec<SalesRecord>> {
    let wanted = normalize_branch_id(branch_id);
    let rows: Vec<SalesRecord> = data
        .iter()
        .filter(|r| r.branch_id == wanted)
        .cloned()
        .collect();
    if rows.is_empty() {
        return Err(AnalysisError::NotFound(format!(
            "no data found for branch ID: {}",
            wanted
        )));
    }
    Ok(rows)
}

/// Eight summary statistics over `price` per product, ascending product id.
pub fn price_analysis(data: &[SalesRecord]) -> Result<Vec<PriceStats>> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in data {
        groups.entry(r.product_id.as_str()).or_default().push(r.price);
    }
    Ok(groups
        .into_iter()
        .map(|(product_id, prices)| PriceStats {
            product_id: product_id.to_string(),
            stats: describe(&prices),
        })
        .collect())
}

/// Summed sales per ISO week number, ascending week.
///
/// A single unparseable date fails the whole report.
pub fn weekly_sales(data: &[SalesRecord]) -> Result<Vec<WeeklyTotal>> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for r in data {
        let date = parse_date(&r.date).ok_or_else(|| {
            AnalysisError::Parse(format!(
                "unparseable date `{}` for product {} at branch {}",
                r.date, r.product_id, r.branch_id
            ))
        })?;
        *totals.entry(date.iso_week().week()).or_insert(0.0) += r.sales_amount;
    }
    Ok(totals
        .into_iter()
        .map(|(week, total)| WeeklyTotal { week, total })
        .collect())
}

/// Products ranked by summed sales, descending; ties break on ascending
/// product id so the ordering is deterministic.
pub fn product_preference(data: &[SalesRecord]) -> Result<Vec<ProductTotal>> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for r in data {
        *totals.entry(r.product_id.as_str()).or_insert(0.0) += r.sales_amount;
    }
    let mut rows: Vec<ProductTotal> = totals
        .into_iter()
        .map(|(product_id, total)| ProductTotal {
            product_id: product_id.to_string(),
            total,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    Ok(rows)
}

/// Eight summary statistics over the entire `sales_amount` column.
pub fn sales_distribution(data: &[SalesRecord]) -> Result<SummaryStats> {
    let amounts: Vec<f64> = data.iter().map(|r| r.sales_amount).collect();
    Ok(describe(&amounts))
}

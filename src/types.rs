use serde::Deserialize;
use tabled::Tabled;

/// One raw CSV row exactly as it appears in the input file.
///
/// Every field comes in as an optional string so the loader can do its own
/// normalization and validation instead of trusting the source encoding.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub branch_id: Option<String>,
    pub date: Option<String>,
    pub product_id: Option<String>,
    pub sales_amount: Option<String>,
    pub price: Option<String>,
}

/// A validated sales record.
///
/// `branch_id` is normalized to canonical text at load time so equality
/// filters behave the same no matter how the source file encoded the
/// column. The date is kept verbatim; only the weekly report needs it as a
/// calendar date and parses it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub branch_id: String,
    pub product_id: String,
    pub date: String,
    pub sales_amount: f64,
    pub price: f64,
}

/// The eight summary statistics produced by the describe-style reports.
///
/// `std` is the sample standard deviation (n−1) and is `NaN` for fewer
/// than two values; percentiles use linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Per-product price statistics.
#[derive(Debug, Clone)]
pub struct PriceStats {
    pub product_id: String,
    pub stats: SummaryStats,
}

/// Summed sales for one ISO week number.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTotal {
    pub week: u32,
    pub total: f64,
}

/// Summed sales for one product, used by the preference ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTotal {
    pub product_id: String,
    pub total: f64,
}

// Display rows below carry pre-formatted strings; the numeric results above
// stay raw so callers can compute with them.

#[derive(Debug, Clone, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "BranchID")]
    pub branch_id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "ProductID")]
    pub product_id: String,
    #[tabled(rename = "SalesAmount")]
    pub sales_amount: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct PriceStatsRow {
    #[tabled(rename = "ProductID")]
    pub product_id: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Mean")]
    pub mean: String,
    #[tabled(rename = "Std")]
    pub std: String,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "25%")]
    pub p25: String,
    #[tabled(rename = "50%")]
    pub p50: String,
    #[tabled(rename = "75%")]
    pub p75: String,
    #[tabled(rename = "Max")]
    pub max: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct WeeklySalesRow {
    #[tabled(rename = "Week")]
    pub week: u32,
    #[tabled(rename = "TotalSales")]
    pub total: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct PreferenceRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "ProductID")]
    pub product_id: String,
    #[tabled(rename = "TotalSales")]
    pub total: String,
}

/// One statistic of the ungrouped sales distribution, rendered vertically
/// the way the source library prints a summarized series.
#[derive(Debug, Clone, Tabled)]
pub struct DistributionRow {
    #[tabled(rename = "Statistic")]
    pub statistic: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

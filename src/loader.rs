use crate::error::{AnalysisError, Result};
use crate::types::{RawRow, SalesRecord};
use crate::util::{normalize_branch_id, parse_f64_safe};
use csv::ReaderBuilder;
use log::info;
use once_cell::sync::OnceCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Columns the input file must carry; anything extra is ignored.
const REQUIRED_COLUMNS: [&str; 5] = ["branch_id", "date", "product_id", "sales_amount", "price"];

/// Loads the sales CSV once and hands out the cached dataset afterwards.
///
/// The loader is constructed by whoever owns the data path and passed to
/// the shells; there is no process-global instance. `get` loads lazily on
/// first use, and the one-time cell keeps concurrent first calls from
/// racing the load.
pub struct DataLoader {
    path: PathBuf,
    cache: OnceCell<Vec<SalesRecord>>,
}

impl DataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached dataset, loading it on first access.
    pub fn get(&self) -> Result<&[SalesRecord]> {
        self.cache
            .get_or_try_init(|| load(&self.path))
            .map(Vec::as_slice)
    }

    /// Drop the cached dataset; the next `get` reloads from disk.
    pub fn invalidate(&mut self) {
        self.cache.take();
    }
}

/// Read and validate the sales CSV at `path`.
pub fn load(path: &Path) -> Result<Vec<SalesRecord>> {
    if !path.exists() {
        return Err(AnalysisError::NotFound(format!(
            "the file {} does not exist",
            path.display()
        )));
    }
    let meta = std::fs::metadata(path)
        .map_err(|e| AnalysisError::Io(format!("{}: {}", path.display(), e)))?;
    if meta.len() == 0 {
        return Err(AnalysisError::Parse(format!(
            "the file {} is empty",
            path.display()
        )));
    }

    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_fault(path, e))?;

    let headers = rdr.headers().map_err(|e| csv_fault(path, e))?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(AnalysisError::Parse(format!(
                "missing required column `{}` in {}",
                required,
                path.display()
            )));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        // Line 1 is the header row.
        let line = idx + 2;
        let row = result.map_err(|e| AnalysisError::Parse(format!("row {}: {}", line, e)))?;
        records.push(validate_row(row, line)?);
    }

    info!(
        "loaded {} sales records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn validate_row(row: RawRow, line: usize) -> Result<SalesRecord> {
    let branch_id = normalize_branch_id(row.branch_id.as_deref().unwrap_or(""));
    if branch_id.is_empty() {
        return Err(AnalysisError::Parse(format!("row {}: missing branch_id", line)));
    }
    let product_id = row.product_id.as_deref().unwrap_or("").trim().to_string();
    if product_id.is_empty() {
        return Err(AnalysisError::Parse(format!("row {}: missing product_id", line)));
    }
    let date = row.date.as_deref().unwrap_or("").trim().to_string();
    if date.is_empty() {
        return Err(AnalysisError::Parse(format!("row {}: missing date", line)));
    }
    let sales_amount = parse_f64_safe(row.sales_amount.as_deref()).ok_or_else(|| {
        AnalysisError::Parse(format!(
            "row {}: invalid sales_amount `{}`",
            line,
            row.sales_amount.as_deref().unwrap_or("")
        ))
    })?;
    let price = parse_f64_safe(row.price.as_deref()).ok_or_else(|| {
        AnalysisError::Parse(format!(
            "row {}: invalid price `{}`",
            line,
            row.price.as_deref().unwrap_or("")
        ))
    })?;

    Ok(SalesRecord {
        branch_id,
        product_id,
        date,
        sales_amount,
        price,
    })
}

fn csv_fault(path: &Path, err: csv::Error) -> AnalysisError {
    match err.kind() {
        csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound => AnalysisError::NotFound(
            format!("the file {} does not exist", path.display()),
        ),
        csv::ErrorKind::Io(io) => AnalysisError::Io(format!("{}: {}", path.display(), io)),
        _ => AnalysisError::Parse(format!("{}: {}", path.display(), err)),
    }
}

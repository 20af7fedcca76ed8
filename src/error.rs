use thiserror::Error;

/// Error taxonomy shared by the loader and the report layer.
///
/// The first four variants classify the underlying fault; `Report` is the
/// wrapper the query layer puts around any fault so the message names the
/// report that failed without losing the original cause.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input file is missing, or a filter matched zero rows.
    #[error("not found: {0}")]
    NotFound(String),

    /// The input exists but its content is unusable: empty file, missing
    /// column, malformed row, unparseable date.
    #[error("parse error: {0}")]
    Parse(String),

    /// Any other read fault.
    #[error("i/o failure: {0}")]
    Io(String),

    /// A report name outside the known set.
    #[error("unknown analysis type: {0}")]
    UnknownReport(String),

    #[error("error generating the {report} report: {source}")]
    Report {
        report: &'static str,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Wrap this error in the scope of the named report.
    pub fn in_report(self, report: &'static str) -> Self {
        AnalysisError::Report {
            report,
            source: Box::new(self),
        }
    }

    /// The underlying fault, looking through report wrappers.
    pub fn root(&self) -> &AnalysisError {
        match self {
            AnalysisError::Report { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

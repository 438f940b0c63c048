use thiserror::Error;

/// Failure to derive a spatial bound from a record's bounding box.
///
/// Raised per record and caught at the orchestrator boundary, so a bad
/// bounding box skips one record instead of aborting the run.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("bounding box is missing")]
    Missing,

    #[error("bounding box has {0} components, expected 4")]
    WrongArity(usize),

    #[error("bounding box component is not numeric: {0}")]
    NonNumeric(String),
}

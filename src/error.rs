use thiserror::Error;

/// Possible errors that arise while ingesting points or building spanning trees from them.
///
/// Comparing two trees never fails: a mismatch is reported as a `false` verdict, and an
/// edge that points outside its own coordinate array is a broken contract that panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error("The dataset provided is empty")]
    EmptyDataset,
    #[error("Input vectors have mismatched dimensions: {0}")]
    WrongDimension(String),
    #[error("Non finite coordinate: {0}")]
    NonFiniteCoordinate(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Could not parse line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Nearest neighbour search failed: {0}")]
    NearestNeighbour(String),
    #[error("Could not plot: {0}")]
    Plot(String),
}

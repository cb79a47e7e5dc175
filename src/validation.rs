use crate::{MstError, TreeHyperParams};
use num_traits::Float;

/// Checks a coordinate array once, when it enters the crate, so that later stages can treat
/// every point as a fixed-length tuple of finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Vec<T>],
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>]) -> Self {
        Self { data }
    }

    pub(crate) fn validate_points(&self) -> Result<(), MstError> {
        let first = self.data.first().ok_or(MstError::EmptyDataset)?;
        let dims_0th = first.len();
        if dims_0th == 0 {
            return Err(MstError::WrongDimension(String::from(
                "points must have at least one coordinate",
            )));
        }
        for (n, datapoint) in self.data.iter().enumerate() {
            if datapoint.iter().any(|element| !element.is_finite()) {
                return Err(MstError::NonFiniteCoordinate(format!(
                    "{n}th vector contains non-finite element(s)"
                )));
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(MstError::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn validate_for_tree(&self, hp: &TreeHyperParams) -> Result<(), MstError> {
        self.validate_points()?;
        let n_samples = self.data.len();
        if hp.min_samples > n_samples {
            return Err(MstError::InvalidParameter(format!(
                "min_samples ({}) cannot exceed the number of points ({n_samples})",
                hp.min_samples
            )));
        }
        Ok(())
    }
}

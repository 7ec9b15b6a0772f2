use tracing::warn;
use validator::Validate;

use crate::error::ApiError;

pub fn validate<T: Validate>(value: &T) -> Result<(), ApiError> {
    value.validate().map_err(|err| {
        warn!(error = %err, "Rejected request payload");
        ApiError::from(err)
    })
}

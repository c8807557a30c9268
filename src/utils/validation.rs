use validator::Validate;

use crate::error::Result;

/// Rejects bad input at the HTTP boundary so report code never sees it.
pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate().map_err(|errors| {
        tracing::warn!(%errors, "Rejected invalid payload");
        errors.into()
    })
}

//! Prices cleaning orders by kind.

use crate::error::ServiceError;
use crate::models::CleaningKind;

pub const PERIODIC_COST: i64 = 100;

pub fn base_cost(kind: CleaningKind) -> i64 {
    match kind {
        CleaningKind::Periodic => PERIODIC_COST,
        CleaningKind::General => PERIODIC_COST * 2,
    }
}

/// Applies the caller's cost to an order of `kind`: negative is rejected,
/// zero means "estimate it", anything else is taken as given.
pub fn resolve_cost(requested: i64, kind: CleaningKind) -> Result<i64, ServiceError> {
    match requested {
        c if c < 0 => Err(ServiceError::validation("cost must be non-negative")),
        0 => Ok(base_cost(kind)),
        c => Ok(c),
    }
}

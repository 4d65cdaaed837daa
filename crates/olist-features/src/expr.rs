//! Column expressions shared by the order and seller projections.

use polars::prelude::*;

/// Milliseconds in 24 hours.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Average Gregorian month length in days (365.2425 / 12).
pub const DAYS_PER_MONTH: f64 = 30.436875;

/// Fractional days from `earlier` to `later`.
///
/// Both columns must hold millisecond datetimes. A null on either side
/// yields null.
pub fn days_between(later: &str, earlier: &str) -> Expr {
    (col(later).cast(DataType::Int64) - col(earlier).cast(DataType::Int64))
        .cast(DataType::Float64)
        / lit(MILLIS_PER_DAY)
}

/// Replace negative values by zero, keeping nulls.
pub fn clip_negative(expr: Expr) -> Expr {
    when(expr.clone().lt(lit(0.0)))
        .then(lit(0.0))
        .otherwise(expr)
}

/// Boolean predicate as a 0/1 integer column.
pub fn indicator(predicate: Expr) -> Expr {
    predicate.cast(DataType::Int32)
}

/// Inner join on a single key column.
pub fn inner_join(left: LazyFrame, right: LazyFrame, key: &str) -> LazyFrame {
    left.join(
        right,
        [col(key)],
        [col(key)],
        JoinArgs::new(JoinType::Inner),
    )
}

/// Rows whose `seller_id` is known.
///
/// Group-bys in polars keep a null group; the seller grain never wants it.
pub fn with_seller(frame: LazyFrame) -> LazyFrame {
    frame.filter(col("seller_id").is_not_null())
}

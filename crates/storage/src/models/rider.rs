use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored rider row.
///
/// `minute`, `second` and `distance` are optional because older rows may
/// hold partial data. Every numeric read that feeds a comparison goes
/// through [`numeric_or_zero`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rider {
    pub rider_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
    pub distance: Option<f64>,
    pub finish: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl Rider {
    /// Elapsed time in seconds, with missing components counted as zero.
    pub fn total_seconds(&self) -> f64 {
        numeric_or_zero(self.minute.map(f64::from)) * 60.0
            + numeric_or_zero(self.second.map(f64::from))
    }

    /// Distance travelled, with a missing or NaN distance counted as zero.
    pub fn progress(&self) -> f64 {
        numeric_or_zero(self.distance)
    }
}

/// Collapses an absent or NaN value to `0.0`.
pub fn numeric_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// A validated, normalized rider ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRider {
    pub rider_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub minute: i32,
    pub second: i32,
    pub distance: Option<f64>,
    pub finish: bool,
}

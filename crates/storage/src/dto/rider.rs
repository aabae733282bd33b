use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{NewRider, Rider};

/// Request payload for registering a rider from the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_progress"))]
pub struct CreateRiderRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 64,
        message = "Rider ID must be between 1 and 64 characters"
    ))]
    pub rider_id: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 32, message = "Phone is required"))]
    pub phone: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    /// Missing or non-numeric values fail validation with the time message.
    #[serde(default, deserialize_with = "lenient_time")]
    #[schema(value_type = i32, minimum = 0, maximum = 59)]
    #[validate(
        required(message = "Invalid time values (0-59 allowed)"),
        range(min = 0, max = 59, message = "Invalid time values (0-59 allowed)")
    )]
    pub minute: Option<i32>,

    #[serde(default, deserialize_with = "lenient_time")]
    #[schema(value_type = i32, minimum = 0, maximum = 59)]
    #[validate(
        required(message = "Invalid time values (0-59 allowed)"),
        range(min = 0, max = 59, message = "Invalid time values (0-59 allowed)")
    )]
    pub second: Option<i32>,

    /// A non-numeric value is kept as NaN so it fails as an invalid distance.
    #[serde(default, deserialize_with = "lenient_distance")]
    pub distance: Option<f64>,

    /// Accepts a boolean or the form checkbox value `"on"`.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub finish: bool,
}

/// Distance and the finish flag are mutually exclusive: a finished rider has
/// no distance, an ongoing rider needs a positive one.
fn validate_progress(req: &CreateRiderRequest) -> Result<(), ValidationError> {
    match (req.finish, req.distance) {
        (true, Some(_)) => Err(progress_error(
            "distance_on_finished",
            "Distance must be empty when marked as Finished",
        )),
        (false, None) => Err(progress_error(
            "distance_required",
            "Distance is required when not finished",
        )),
        (false, Some(distance)) if distance.is_nan() || distance <= 0.0 => Err(progress_error(
            "invalid_distance",
            "Invalid distance value",
        )),
        _ => Ok(()),
    }
}

fn progress_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// A form value that may arrive as a JSON number, a string, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

fn form_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FormValue::deserialize(deserializer)? {
        FormValue::Number(n) => Some(n),
        FormValue::Text(s) if s.trim().is_empty() => None,
        FormValue::Text(s) => Some(s.trim().parse().unwrap_or(f64::NAN)),
        FormValue::Flag(_) | FormValue::Other(_) => None,
    })
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = form_number(deserializer)?;
    Ok(value
        .filter(|n| n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32))
}

fn lenient_distance<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    form_number(deserializer)
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FormValue::deserialize(deserializer)? {
        FormValue::Flag(flag) => flag,
        FormValue::Text(s) => matches!(s.trim(), "on" | "true"),
        FormValue::Number(_) | FormValue::Other(_) => false,
    })
}

impl From<CreateRiderRequest> for NewRider {
    fn from(req: CreateRiderRequest) -> Self {
        Self {
            rider_id: req.rider_id,
            name: req.name,
            phone: req.phone,
            email: req.email.map(|email| email.to_lowercase()),
            minute: req.minute.unwrap_or_default(),
            second: req.second.unwrap_or_default(),
            distance: if req.finish { None } else { req.distance },
            finish: req.finish,
        }
    }
}

/// Admin listing plus the outcome of the last action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminPanelResponse {
    pub riders: Vec<Rider>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl AdminPanelResponse {
    pub fn listing(riders: Vec<Rider>) -> Self {
        Self {
            riders,
            success: None,
            error: None,
        }
    }

    pub fn success(riders: Vec<Rider>, message: impl Into<String>) -> Self {
        Self {
            riders,
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(riders: Vec<Rider>, message: impl Into<String>) -> Self {
        Self {
            riders,
            success: None,
            error: Some(message.into()),
        }
    }
}

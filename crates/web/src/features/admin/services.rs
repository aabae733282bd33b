use axum::http::StatusCode;
use storage::{
    dto::rider::CreateRiderRequest,
    error::StorageError,
    models::{NewRider, Rider},
    store::RiderStore,
};
use validator::{Validate, ValidationErrors};

use crate::error::{WebError, WebResult};

/// Panel error precedence: the time check, then distance/finish, then the rest.
const PANEL_FIELD_ORDER: [&str; 7] = [
    "minute", "second", "__all__", "rider_id", "name", "phone", "email",
];

/// Validate, normalize and insert a rider
pub async fn add_rider(store: &dyn RiderStore, request: CreateRiderRequest) -> WebResult<Rider> {
    request.validate()?;

    let rider = NewRider::from(request);
    let created = store.insert(&rider).await?;

    Ok(created)
}

/// The admin listing, or an empty one when the store is unavailable
pub async fn list_riders_or_empty(store: &dyn RiderStore) -> Vec<Rider> {
    match store.find_all().await {
        Ok(riders) => riders,
        Err(e) => {
            tracing::error!("Failed to load riders: {:?}", e);
            Vec::new()
        }
    }
}

/// Status code and panel message for a failed insert
pub fn failure_message(error: &WebError) -> (StatusCode, String) {
    match error {
        WebError::Validation(errors) => {
            (StatusCode::BAD_REQUEST, panel_message(errors))
        }
        WebError::Storage(StorageError::ConstraintViolation(msg)) => {
            (StatusCode::CONFLICT, msg.clone())
        }
        other => {
            tracing::error!("Failed to add rider: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to add rider".to_string(),
            )
        }
    }
}

/// Unprefixed validation messages for the panel, each reported once.
pub fn panel_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<(usize, String, &Vec<validator::ValidationError>)> = field_errors
        .iter()
        .map(|(field, errors)| {
            let field = field.to_string();
            let rank = PANEL_FIELD_ORDER
                .iter()
                .position(|known| *known == field)
                .unwrap_or(PANEL_FIELD_ORDER.len());
            (rank, field, *errors)
        })
        .collect();
    fields.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

    let mut messages: Vec<String> = Vec::new();
    for error in fields.iter().flat_map(|(_, _, errors)| errors.iter()) {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());
        if !messages.contains(&message) {
            messages.push(message);
        }
    }
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(value: serde_json::Value) -> ValidationErrors {
        let req: CreateRiderRequest = serde_json::from_value(value).unwrap();
        req.validate().unwrap_err()
    }

    #[test]
    fn test_time_message_reported_once_without_prefix() {
        let errors = errors_for(serde_json::json!({
            "rider_id": "R1", "name": "A", "phone": "1",
            "minute": 60, "second": -1, "distance": 3.0
        }));
        assert_eq!(panel_message(&errors), "Invalid time values (0-59 allowed)");
    }

    #[test]
    fn test_time_message_comes_first() {
        let errors = errors_for(serde_json::json!({
            "rider_id": "R1", "name": "", "phone": "1",
            "minute": 61, "second": 0, "distance": 3.0
        }));
        assert_eq!(
            panel_message(&errors),
            "Invalid time values (0-59 allowed); Name must be between 1 and 255 characters"
        );
    }

    #[test]
    fn test_failure_statuses() {
        let errors = errors_for(serde_json::json!({
            "rider_id": "R1", "name": "A", "phone": "1",
            "minute": 1, "second": 0, "distance": 3.0, "finish": true
        }));
        assert_eq!(
            failure_message(&WebError::Validation(errors)),
            (
                StatusCode::BAD_REQUEST,
                "Distance must be empty when marked as Finished".to_string()
            )
        );
        assert_eq!(
            failure_message(&WebError::Storage(StorageError::duplicate_rider_id())),
            (StatusCode::CONFLICT, "Rider ID already exists".to_string())
        );
    }
}

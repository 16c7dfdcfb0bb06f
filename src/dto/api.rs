use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// Uniform outcome of every mutation endpoint. Errors never cross the
/// handler boundary as anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub ok: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ActionResult {
    fn from(err: ServiceError) -> Self {
        let message = match &err {
            ServiceError::Unauthorized => "Not authorized".to_string(),
            ServiceError::NotFound => "No record found in the database.".to_string(),
            ServiceError::Conflict(message) | ServiceError::Form(message) => message.clone(),
            ServiceError::Internal(_) => "Something went wrong.".to_string(),
        };
        ActionResult::failure(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_conflict_becomes_failure_with_message() {
        let result: ActionResult =
            ServiceError::Conflict("Slug already exists".to_string()).into();
        assert!(!result.ok);
        assert_eq!(result.message, "Slug already exists");
    }

    #[test]
    fn internal_errors_are_not_leaked() {
        let result: ActionResult =
            ServiceError::Internal("connection reset".to_string()).into();
        assert!(!result.ok);
        assert_eq!(result.message, "Something went wrong.");
    }
}

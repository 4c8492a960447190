//! DTO for the update endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::ShortUrlPatch;

/// Request body for `PUT /api/v1/urls/{code}`.
///
/// Both fields are optional. An absent field and an explicit `null` both mean
/// "leave unchanged"; a description cannot be cleared through this request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    pub active: Option<bool>,
}

impl From<UpdateUrlRequest> for ShortUrlPatch {
    fn from(req: UpdateUrlRequest) -> Self {
        ShortUrlPatch {
            description: req.description,
            active: req.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_absent_are_both_none() {
        let absent: UpdateUrlRequest = serde_json::from_str(r#"{"active": false}"#).unwrap();
        let null: UpdateUrlRequest =
            serde_json::from_str(r#"{"description": null, "active": false}"#).unwrap();

        assert!(absent.description.is_none());
        assert!(null.description.is_none());
        assert_eq!(null.active, Some(false));
    }

    #[test]
    fn test_into_patch() {
        let req: UpdateUrlRequest = serde_json::from_str(r#"{"description": "new"}"#).unwrap();
        let patch = ShortUrlPatch::from(req);

        assert_eq!(patch.description.as_deref(), Some("new"));
        assert!(patch.active.is_none());
    }
}

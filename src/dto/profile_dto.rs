use serde::Deserialize;
use validator::Validate;

use crate::models::profile::ProfileChanges;
use crate::utils::validation::{validate_not_blank, validate_user_role, validate_zip_code};

// Request de Settings / onboarding sobre el perfil propio
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 30), custom = "validate_not_blank")]
    pub username: Option<String>,
    #[validate(custom = "validate_user_role")]
    pub user_role: Option<String>,
    #[validate(custom = "validate_zip_code")]
    pub home_zip_code: Option<String>,
    pub onboarding_completed: Option<bool>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            username: request.username.map(|u| u.trim().to_string()),
            user_role: request.user_role,
            home_zip_code: request.home_zip_code.map(|z| z.trim().to_string()),
            onboarding_completed: request.onboarding_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_validation() {
        let ok = UpdateProfileRequest {
            username: Some("roadwarrior".to_string()),
            user_role: Some("professional".to_string()),
            home_zip_code: Some("90210".to_string()),
            onboarding_completed: Some(true),
        };
        assert!(ok.validate().is_ok());

        let bad = UpdateProfileRequest {
            username: Some("ab".to_string()),
            user_role: Some("captain".to_string()),
            home_zip_code: Some("9021".to_string()),
            onboarding_completed: None,
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("user_role"));
        assert!(fields.contains_key("home_zip_code"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateProfileRequest::default().validate().is_ok());
    }

    #[test]
    fn test_changes_are_trimmed() {
        let changes: ProfileChanges = UpdateProfileRequest {
            username: Some("  roadwarrior ".to_string()),
            home_zip_code: Some(" 10001".to_string()),
            ..Default::default()
        }
        .into();

        assert_eq!(changes.username.as_deref(), Some("roadwarrior"));
        assert_eq!(changes.home_zip_code.as_deref(), Some("10001"));
        assert_eq!(changes.user_role, None);
    }
}

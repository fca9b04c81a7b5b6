use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::profile_dto::UpdateProfileRequest;
use crate::models::profile::Profile;
use crate::repositories::ProfileRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ProfileController {
    profiles: ProfileRepository,
}

impl ProfileController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Profile, AppError> {
        self.profiles.ensure(user_id).await
    }

    pub async fn update(&self, user_id: Uuid, request: UpdateProfileRequest) -> Result<ApiResponse<Profile>, AppError> {
        self.profiles.ensure(user_id).await?;

        let profile = self
            .profiles
            .update(user_id, request.into())
            .await?
            .ok_or_else(|| not_found_error("Profile", &user_id.to_string()))?;

        info!("👤 Perfil {} actualizado", user_id);
        Ok(ApiResponse::success_with_message(profile, "Profile updated".to_string()))
    }
}

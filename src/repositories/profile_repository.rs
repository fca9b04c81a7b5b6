use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{default_username, Profile, ProfileChanges};
use crate::utils::errors::AppError;

const PROFILE_COLUMNS: &str =
    "id, username, rank, is_admin, user_role, home_zip_code, onboarding_completed, created_at";

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {} FROM vextor_profiles WHERE id = $1",
            PROFILE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Devuelve el perfil, creándolo con valores por defecto si no existe
    pub async fn ensure(&self, id: Uuid) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO vextor_profiles (id, username)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET id = vextor_profiles.id
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(id)
        .bind(default_username(id))
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn update(&self, id: Uuid, changes: ProfileChanges) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE vextor_profiles SET
                username = COALESCE($2, username),
                user_role = COALESCE($3, user_role),
                home_zip_code = COALESCE($4, home_zip_code),
                onboarding_completed = COALESCE($5, onboarding_completed)
            WHERE id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(id)
        .bind(changes.username)
        .bind(changes.user_role)
        .bind(changes.home_zip_code)
        .bind(changes.onboarding_completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn is_admin(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.find(id).await?.map(|p| p.is_admin).unwrap_or(false))
    }
}

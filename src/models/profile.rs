//! Perfil público del usuario (`vextor_profiles`)
//!
//! El id es el mismo que el `sub` del JWT. La fila se crea la primera vez
//! que el usuario la necesita (ver `ProfileRepository::ensure`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Roles que elige el usuario en el onboarding
pub const USER_ROLES: [&str; 3] = ["personal", "professional", "fleet_manager"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub rank: String,
    pub is_admin: bool,
    pub user_role: String,
    pub home_zip_code: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Cambios parciales sobre el perfil propio
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub user_role: Option<String>,
    pub home_zip_code: Option<String>,
    pub onboarding_completed: Option<bool>,
}

/// Nombre inicial: "operator-1a2b3c4d"
pub fn default_username(user_id: Uuid) -> String {
    let simple = user_id.simple().to_string();
    format!("operator-{}", &simple[..8])
}

//! Autenticación JWT como extractores de Axum
//!
//! `AuthSession` valida el Bearer token y expone el id del usuario; los
//! handlers lo reciben como parámetro explícito. `AdminSession` además
//! exige `vextor_profiles.is_admin`.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;
use uuid::Uuid;

use crate::{
    repositories::ProfileRepository,
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Sesión autenticada de la request actual
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &state.jwt)?;

        Ok(AuthSession {
            user_id: claims.user_id()?,
        })
    }
}

/// Sesión de un administrador de Intel Command
#[derive(Debug, Clone, Copy)]
pub struct AdminSession(pub AuthSession);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;

        let is_admin = ProfileRepository::new(state.pool.clone())
            .is_admin(session.user_id)
            .await?;

        if !is_admin {
            warn!("🔒 Usuario {} intentó acceder a Intel Command", session.user_id);
            return Err(AppError::Forbidden("Se requieren permisos de administrador".to_string()));
        }

        Ok(AdminSession(session))
    }
}

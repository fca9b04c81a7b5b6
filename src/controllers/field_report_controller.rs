//! Reportes de campo e Intel Command (moderación)

use std::collections::HashSet;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::field_report_dto::{HoldReportRequest, PublishReportRequest, SubmitFieldReportRequest};
use crate::models::analytics::LeaderboardEntry;
use crate::models::field_report::{
    FieldReport, FieldReportWithAuthor, PublishChanges, ReportStatus, WEEKLY_PUBLISH_LIMIT,
};
use crate::repositories::{FieldReportRepository, ProfileRepository};
use crate::services::leaderboard::{rank_validations, LEADERBOARD_WINDOW_DAYS};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::slug::{slugify, unique_slug};

pub struct FieldReportController {
    reports: FieldReportRepository,
    profiles: ProfileRepository,
}

impl FieldReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reports: FieldReportRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn submit(
        &self,
        user_id: Uuid,
        request: SubmitFieldReportRequest,
    ) -> Result<ApiResponse<FieldReport>, AppError> {
        // El reporte referencia al perfil del autor
        self.profiles.ensure(user_id).await?;

        let report = self
            .reports
            .insert(user_id, request.image_url.trim(), request.caption.trim())
            .await?;

        info!("📸 Reporte {} enviado a la cola de Intel", report.id);
        Ok(ApiResponse::success_with_message(
            report,
            "Report submitted for review".to_string(),
        ))
    }

    pub async fn list_own(&self, user_id: Uuid) -> Result<Vec<FieldReport>, AppError> {
        self.reports.list_own(user_id).await
    }

    pub async fn queue(&self) -> Result<Vec<FieldReportWithAuthor>, AppError> {
        self.reports.pending_queue().await
    }

    /// Publica un reporte respetando la cuota semanal del autor
    pub async fn publish(
        &self,
        id: Uuid,
        admin_id: Uuid,
        request: PublishReportRequest,
    ) -> Result<ApiResponse<FieldReport>, AppError> {
        let report = self
            .reports
            .find(id)
            .await?
            .ok_or_else(|| not_found_error("Field report", &id.to_string()))?;

        if report.status == ReportStatus::Published.as_str() {
            return Err(AppError::Conflict("Report is already published".to_string()));
        }

        let since = Utc::now() - Duration::days(7);
        let published = self.reports.published_count_since(report.user_id, since).await?;
        check_weekly_quota(published, request.override_limit)?;

        let base = base_slug(
            request.slug.as_deref(),
            request.seo_title.as_deref(),
            request.caption.as_deref().unwrap_or(&report.caption),
            report.id,
        );
        let taken: HashSet<String> = self
            .reports
            .slugs_like(&base)
            .await?
            .into_iter()
            .filter(|slug| Some(slug) != report.slug.as_ref())
            .collect();
        let slug = unique_slug(&base, |candidate| taken.contains(candidate));

        let changes = PublishChanges {
            caption: request.caption.unwrap_or_else(|| report.caption.clone()),
            seo_title: non_blank(request.seo_title),
            seo_desc: non_blank(request.seo_desc),
            slug: Some(slug),
            admin_notes: non_blank(request.admin_notes),
        };

        let published = self
            .reports
            .publish(id, changes)
            .await?
            .ok_or_else(|| not_found_error("Field report", &id.to_string()))?;

        info!(
            "📰 Reporte {} publicado por {} como /{}",
            id,
            admin_id,
            published.slug.as_deref().unwrap_or_default()
        );
        Ok(ApiResponse::success_with_message(published, "Report published".to_string()))
    }

    pub async fn hold(
        &self,
        id: Uuid,
        admin_id: Uuid,
        request: HoldReportRequest,
    ) -> Result<ApiResponse<FieldReport>, AppError> {
        let report = self
            .reports
            .find(id)
            .await?
            .ok_or_else(|| not_found_error("Field report", &id.to_string()))?;

        if report.status == ReportStatus::Published.as_str() {
            return Err(AppError::Conflict("Published reports cannot be put on hold".to_string()));
        }

        let held = self
            .reports
            .hold(id, non_blank(request.admin_notes))
            .await?
            .ok_or_else(|| not_found_error("Field report", &id.to_string()))?;

        info!("⏸️ Reporte {} retenido por {}", id, admin_id);
        Ok(ApiResponse::success_with_message(held, "Report on hold".to_string()))
    }

    pub async fn public_by_slug(&self, slug: &str) -> Result<FieldReportWithAuthor, AppError> {
        self.reports
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No published report at '{}'", slug)))
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let since = Utc::now() - Duration::days(LEADERBOARD_WINDOW_DAYS);
        let rows = self.reports.validations_since(since).await?;
        Ok(rank_validations(rows))
    }
}

/// Rechaza la publicación si el autor ya llegó al límite semanal
pub fn check_weekly_quota(published_this_week: i64, override_limit: bool) -> AppResult<()> {
    if !override_limit && published_this_week >= WEEKLY_PUBLISH_LIMIT {
        return Err(AppError::Conflict(format!(
            "Author already has {} published reports this week (limit {})",
            published_this_week, WEEKLY_PUBLISH_LIMIT
        )));
    }
    Ok(())
}

/// Slug base: el indicado, si no el título SEO, si no el caption
pub fn base_slug(requested: Option<&str>, seo_title: Option<&str>, caption: &str, id: Uuid) -> String {
    [requested, seo_title, Some(caption)]
        .into_iter()
        .flatten()
        .map(slugify)
        .find(|slug| !slug.is_empty())
        .unwrap_or_else(|| format!("report-{}", &id.simple().to_string()[..8]))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_quota() {
        assert!(check_weekly_quota(0, false).is_ok());
        assert!(check_weekly_quota(2, false).is_ok());
        assert!(matches!(check_weekly_quota(3, false), Err(AppError::Conflict(_))));
        assert!(check_weekly_quota(5, true).is_ok());
    }

    #[test]
    fn test_base_slug_precedence() {
        let id = Uuid::new_v4();
        assert_eq!(base_slug(Some("My Slug"), Some("Title"), "caption", id), "my-slug");
        assert_eq!(base_slug(Some("   "), Some("I-40 Black Ice"), "caption", id), "i-40-black-ice");
        assert_eq!(base_slug(None, None, "Scale open at MM 12", id), "scale-open-at-mm-12");

        let fallback = base_slug(None, Some("!!!"), "???", id);
        assert!(fallback.starts_with("report-"));
        assert_eq!(fallback.len(), "report-".len() + 8);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" notes ".to_string())), Some("notes".to_string()));
        assert_eq!(non_blank(None), None);
    }
}

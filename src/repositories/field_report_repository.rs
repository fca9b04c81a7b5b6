use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::field_report::{FieldReport, FieldReportWithAuthor, PublishChanges, ReportStatus, ValidationRow};
use crate::utils::errors::AppError;

pub struct FieldReportRepository {
    pool: PgPool,
}

impl FieldReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user_id: Uuid, image_url: &str, caption: &str) -> Result<FieldReport, AppError> {
        let report = sqlx::query_as::<_, FieldReport>(
            r#"
            INSERT INTO vextor_field_reports (id, user_id, image_url, caption, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(image_url)
        .bind(caption)
        .bind(ReportStatus::Pending.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn list_own(&self, user_id: Uuid) -> Result<Vec<FieldReport>, AppError> {
        let reports = sqlx::query_as::<_, FieldReport>(
            "SELECT * FROM vextor_field_reports WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Cola de moderación: pendientes, los más antiguos primero
    pub async fn pending_queue(&self) -> Result<Vec<FieldReportWithAuthor>, AppError> {
        let reports = sqlx::query_as::<_, FieldReportWithAuthor>(
            r#"
            SELECT r.*, p.username, p.rank
            FROM vextor_field_reports r
            JOIN vextor_profiles p ON p.id = r.user_id
            WHERE r.status = $1
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(ReportStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<FieldReport>, AppError> {
        let report = sqlx::query_as::<_, FieldReport>("SELECT * FROM vextor_field_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn published_count_since(&self, user_id: Uuid, since: DateTime<Utc>) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM vextor_field_reports
            WHERE user_id = $1 AND status = $2 AND published_at >= $3
            "#,
        )
        .bind(user_id)
        .bind(ReportStatus::Published.as_str())
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Slugs existentes que empiezan por `base`, para resolver colisiones
    pub async fn slugs_like(&self, base: &str) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT slug FROM vextor_field_reports WHERE slug = $1 OR slug LIKE $2",
        )
        .bind(base)
        .bind(format!("{}-%", base))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(slug,)| slug).collect())
    }

    pub async fn publish(&self, id: Uuid, changes: PublishChanges) -> Result<Option<FieldReport>, AppError> {
        let report = sqlx::query_as::<_, FieldReport>(
            r#"
            UPDATE vextor_field_reports
            SET caption = $2, seo_title = $3, seo_desc = $4, slug = $5,
                admin_notes = COALESCE($6, admin_notes), status = $7, published_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.caption)
        .bind(changes.seo_title)
        .bind(changes.seo_desc)
        .bind(changes.slug)
        .bind(changes.admin_notes)
        .bind(ReportStatus::Published.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn hold(&self, id: Uuid, admin_notes: Option<String>) -> Result<Option<FieldReport>, AppError> {
        let report = sqlx::query_as::<_, FieldReport>(
            r#"
            UPDATE vextor_field_reports
            SET status = $2, admin_notes = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(ReportStatus::Hold.as_str())
        .bind(admin_notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<FieldReportWithAuthor>, AppError> {
        let report = sqlx::query_as::<_, FieldReportWithAuthor>(
            r#"
            SELECT r.*, p.username, p.rank
            FROM vextor_field_reports r
            JOIN vextor_profiles p ON p.id = r.user_id
            WHERE r.slug = $1 AND r.status = $2
            "#,
        )
        .bind(slug)
        .bind(ReportStatus::Published.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    /// Validaciones por reporte publicado desde `since`, con su autor
    pub async fn validations_since(&self, since: DateTime<Utc>) -> Result<Vec<ValidationRow>, AppError> {
        let rows = sqlx::query_as::<_, ValidationRow>(
            r#"
            SELECT r.user_id, p.username, p.rank, r.validations
            FROM vextor_field_reports r
            JOIN vextor_profiles p ON p.id = r.user_id
            WHERE r.status = $1 AND r.published_at >= $2
            "#,
        )
        .bind(ReportStatus::Published.as_str())
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

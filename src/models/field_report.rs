//! Modelo de FieldReport
//!
//! Reportes de campo enviados por usuarios (foto + caption) y moderados
//! desde Intel Command antes de publicarse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Publicaciones permitidas por autor en una ventana de 7 días
pub const WEEKLY_PUBLISH_LIMIT: i64 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pending,
    Hold,
    Published,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Hold => "HOLD",
            ReportStatus::Published => "PUBLISHED",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ReportStatus::Pending),
            "HOLD" => Ok(ReportStatus::Hold),
            "PUBLISHED" => Ok(ReportStatus::Published),
            other => Err(format!("Estado de reporte desconocido: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FieldReport {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: String,
    pub status: String,
    pub slug: Option<String>,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
    pub admin_notes: Option<String>,
    pub validations: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Reporte con los datos públicos del autor (join con vextor_profiles)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FieldReportWithAuthor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: String,
    pub status: String,
    pub slug: Option<String>,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
    pub admin_notes: Option<String>,
    pub validations: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub rank: String,
}

/// Fila mínima para el leaderboard semanal
#[derive(Debug, Clone, FromRow)]
pub struct ValidationRow {
    pub user_id: Uuid,
    pub username: String,
    pub rank: String,
    pub validations: i32,
}

/// Campos editables al publicar
#[derive(Debug, Clone)]
pub struct PublishChanges {
    pub caption: String,
    pub seo_title: Option<String>,
    pub seo_desc: Option<String>,
    pub slug: Option<String>,
    pub admin_notes: Option<String>,
}

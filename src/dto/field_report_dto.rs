use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para enviar un reporte de campo
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFieldReportRequest {
    #[validate(url)]
    pub image_url: String,
    #[validate(length(min = 1, max = 500), custom = "validate_not_blank")]
    pub caption: String,
}

// Request de Intel Command para publicar un reporte
#[derive(Debug, Deserialize, Validate, Default)]
pub struct PublishReportRequest {
    #[validate(length(min = 1, max = 500))]
    pub caption: Option<String>,
    #[validate(length(max = 120))]
    pub seo_title: Option<String>,
    #[validate(length(max = 320))]
    pub seo_desc: Option<String>,
    #[validate(length(max = 120))]
    pub slug: Option<String>,
    pub admin_notes: Option<String>,
    /// Ignora el límite semanal de publicaciones del autor
    #[serde(default)]
    pub override_limit: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct HoldReportRequest {
    #[validate(length(max = 1000))]
    pub admin_notes: Option<String>,
}

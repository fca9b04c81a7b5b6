//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL y los valores derivados de analytics.

pub mod analytics;
pub mod expense;
pub mod field_report;
pub mod fuel_log;
pub mod mission;
pub mod profile;
pub mod vehicle;

//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT y generación de slugs.

pub mod errors;
pub mod jwt;
pub mod slug;
pub mod validation;

//! DTOs de entrada y salida de la API

pub mod api_response;
pub mod expense_dto;
pub mod field_report_dto;
pub mod fuel_log_dto;
pub mod mission_dto;
pub mod profile_dto;
pub mod vehicle_dto;
pub mod weather_dto;

pub use api_response::ApiResponse;

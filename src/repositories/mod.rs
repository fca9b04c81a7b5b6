//! Repositorios de acceso a datos (SQLx)
//!
//! Toda consulta filtra por `user_id` salvo las de moderación y las públicas.

pub mod expense_repository;
pub mod field_report_repository;
pub mod fuel_log_repository;
pub mod mission_repository;
pub mod profile_repository;
pub mod vehicle_repository;

pub use expense_repository::ExpenseRepository;
pub use field_report_repository::FieldReportRepository;
pub use fuel_log_repository::FuelLogRepository;
pub use mission_repository::MissionRepository;
pub use profile_repository::ProfileRepository;
pub use vehicle_repository::VehicleRepository;

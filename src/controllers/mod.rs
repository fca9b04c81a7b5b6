//! Controladores: orquestan repositorios y servicios por recurso

pub mod analytics_controller;
pub mod expense_controller;
pub mod field_report_controller;
pub mod fuel_log_controller;
pub mod mission_controller;
pub mod profile_controller;
pub mod vehicle_controller;

pub use analytics_controller::AnalyticsController;
pub use expense_controller::ExpenseController;
pub use field_report_controller::FieldReportController;
pub use fuel_log_controller::FuelLogController;
pub use mission_controller::MissionController;
pub use profile_controller::ProfileController;
pub use vehicle_controller::VehicleController;

//! Vehicle Readiness Scorer
//!
//! Funciones puras que convierten el estado de aceite y la frescura de los
//! registros de combustible en una puntuación de salud 0-100, una etiqueta
//! de tres niveles y el promedio de la flota.
//!
//! No hay errores aquí: las entradas se asumen bien formadas y el "ahora"
//! se recibe como parámetro para que todo sea determinista en tests.

use chrono::{DateTime, Utc};

use crate::models::analytics::{HealthStatus, OilStatus, VehicleReadiness};
use crate::models::fuel_log::FuelLog;
use crate::models::vehicle::Vehicle;

/// Por debajo de estas millas restantes el aceite pasa a WARNING
pub const OIL_WARNING_MILES: i64 = 1000;

/// Días sin registro de combustible a partir de los cuales los datos son viejos
pub const STALE_AFTER_DAYS: f64 = 14.0;

pub const SCORE_MAX: u8 = 100;
pub const SCORE_OIL_WARNING: u8 = 70;
pub const SCORE_OIL_OVERDUE: u8 = 0;
pub const SCORE_STALE_CAP: u8 = 50;

pub const COMBAT_READY_MIN: u8 = 80;
pub const MAINTENANCE_REQUIRED_MIN: u8 = 50;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Millas restantes hasta el próximo cambio de aceite (negativo = vencido)
pub fn miles_until_oil_change(
    current_odometer: i64,
    last_oil_change_odometer: i64,
    oil_change_interval: i64,
) -> i64 {
    let miles_since = current_odometer - last_oil_change_odometer;
    oil_change_interval - miles_since
}

pub fn oil_status(miles_until: i64) -> OilStatus {
    if miles_until < 0 {
        OilStatus::Overdue
    } else if miles_until < OIL_WARNING_MILES {
        OilStatus::Warning
    } else {
        OilStatus::Good
    }
}

/// Sin registro, o con el último registro a más de 14 días, los datos son viejos
pub fn is_data_stale(last_fuel_log_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_fuel_log_at {
        None => true,
        Some(last) => {
            let elapsed = now.signed_duration_since(last);
            let days = elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY;
            days > STALE_AFTER_DAYS
        }
    }
}

/// Aceite vencido domina; los datos viejos solo limitan la puntuación
pub fn health_score(oil: OilStatus, is_stale: bool) -> u8 {
    let mut score = match oil {
        OilStatus::Overdue => SCORE_OIL_OVERDUE,
        OilStatus::Warning => SCORE_OIL_WARNING,
        OilStatus::Good => SCORE_MAX,
    };

    if is_stale {
        score = score.min(SCORE_STALE_CAP);
    }

    score
}

pub fn health_status(score: u8) -> HealthStatus {
    if score >= COMBAT_READY_MIN {
        HealthStatus::CombatReady
    } else if score >= MAINTENANCE_REQUIRED_MIN {
        HealthStatus::MaintenanceRequired
    } else {
        HealthStatus::Grounded
    }
}

/// Promedio redondeado de la flota. Sin vehículos devuelve 0; quien lo
/// muestra decide presentarlo como "sin vehículos configurados".
pub fn fleet_average(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    (f64::from(total) / scores.len() as f64).round() as u8
}

/// MPG acumulado: millas de viaje totales entre galones totales
pub fn average_mpg(logs: &[FuelLog]) -> Option<f64> {
    if logs.is_empty() {
        return None;
    }

    let total_miles: i64 = logs.iter().map(|log| log.trip_miles.unwrap_or(0)).sum();
    let total_gallons: f64 = logs.iter().map(|log| log.gallons_added.unwrap_or(0.0)).sum();

    if total_gallons > 0.0 {
        Some(total_miles as f64 / total_gallons)
    } else {
        None
    }
}

/// Puntúa un vehículo a partir de su snapshot y sus registros ordenados
/// ascendentemente por fecha.
pub fn score_vehicle(vehicle: &Vehicle, fuel_logs: &[FuelLog], now: DateTime<Utc>) -> VehicleReadiness {
    let last_fuel_log_at = fuel_logs.last().map(|log| log.created_at);

    let miles_until = miles_until_oil_change(
        vehicle.current_odometer,
        vehicle.last_oil_change_odometer,
        vehicle.oil_change_interval,
    );
    let oil = oil_status(miles_until);
    let stale = is_data_stale(last_fuel_log_at, now);
    let score = health_score(oil, stale);

    VehicleReadiness {
        vehicle_id: vehicle.id,
        display_name: vehicle.display_name(),
        avg_mpg: average_mpg(fuel_logs),
        oil_status: oil,
        miles_until_oil_change: miles_until,
        health_score: score,
        is_stale_intel: stale,
        last_fuel_log_at,
        health_status: health_status(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn vehicle(current: i64, last_change: i64, interval: i64) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Unit 7".to_string(),
            year: 2020,
            make: "Ram".to_string(),
            model: "ProMaster".to_string(),
            vehicle_type: "Van".to_string(),
            usage_type: "commercial".to_string(),
            current_odometer: current,
            oil_change_interval: interval,
            last_oil_change_odometer: last_change,
            created_at: Utc::now(),
        }
    }

    fn log_at(created_at: DateTime<Utc>, trip_miles: Option<i64>, gallons: Option<f64>) -> FuelLog {
        FuelLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            odometer_reading: 10_000,
            gallons_added: gallons,
            total_cost: None,
            trip_miles,
            mpg: None,
            reference: None,
            created_at,
        }
    }

    #[test]
    fn test_oil_status_boundaries() {
        assert_eq!(oil_status(-1), OilStatus::Overdue);
        assert_eq!(oil_status(0), OilStatus::Warning);
        assert_eq!(oil_status(999), OilStatus::Warning);
        assert_eq!(oil_status(1000), OilStatus::Good);
    }

    #[test]
    fn test_fresh_oil_change_is_good() {
        let miles_until = miles_until_oil_change(42_000, 42_000, 5000);
        assert_eq!(miles_until, 5000);
        assert_eq!(oil_status(miles_until), OilStatus::Good);
        assert_eq!(health_score(OilStatus::Good, false), 100);
    }

    #[test]
    fn test_miles_until_goes_negative_when_overdue() {
        assert_eq!(miles_until_oil_change(16_000, 10_000, 5000), -1000);
    }

    #[test]
    fn test_staleness_window() {
        let now = Utc::now();
        assert!(is_data_stale(None, now));
        assert!(!is_data_stale(Some(now - Duration::days(14)), now));
        assert!(is_data_stale(Some(now - Duration::days(14) - Duration::minutes(1)), now));
        assert!(!is_data_stale(Some(now - Duration::days(3)), now));
    }

    #[test]
    fn test_overdue_dominates_staleness() {
        assert_eq!(health_score(OilStatus::Overdue, true), 0);
        assert_eq!(health_score(OilStatus::Overdue, false), 0);
        assert_eq!(health_score(OilStatus::Warning, true), 50);
        assert_eq!(health_score(OilStatus::Good, true), 50);
        assert_eq!(health_score(OilStatus::Warning, false), 70);
    }

    #[test]
    fn test_score_is_monotonic() {
        for stale in [false, true] {
            let good = health_score(OilStatus::Good, stale);
            let warning = health_score(OilStatus::Warning, stale);
            let overdue = health_score(OilStatus::Overdue, stale);
            assert!(good >= warning && warning >= overdue);
        }
        for oil in [OilStatus::Good, OilStatus::Warning, OilStatus::Overdue] {
            assert!(health_score(oil, false) >= health_score(oil, true));
        }
    }

    #[test]
    fn test_health_status_labels() {
        assert_eq!(health_status(100), HealthStatus::CombatReady);
        assert_eq!(health_status(80), HealthStatus::CombatReady);
        assert_eq!(health_status(79), HealthStatus::MaintenanceRequired);
        assert_eq!(health_status(50), HealthStatus::MaintenanceRequired);
        assert_eq!(health_status(49), HealthStatus::Grounded);
        assert_eq!(health_status(0), HealthStatus::Grounded);
    }

    #[test]
    fn test_fleet_average_rounds() {
        assert_eq!(fleet_average(&[]), 0);
        assert_eq!(fleet_average(&[100, 70]), 85);
        assert_eq!(fleet_average(&[100, 50, 0]), 50);
        assert_eq!(fleet_average(&[100, 70, 70]), 80);
        assert_eq!(fleet_average(&[50, 0]), 25);
    }

    #[test]
    fn test_average_mpg_uses_totals() {
        let now = Utc::now();
        let logs = vec![
            log_at(now, None, Some(10.0)),
            log_at(now, Some(300), Some(20.0)),
            log_at(now, Some(100), None),
        ];
        // 400 millas / 30 galones
        let mpg = average_mpg(&logs).unwrap();
        assert!((mpg - 13.333).abs() < 0.01);

        let odometer_only = vec![log_at(now, Some(120), None)];
        assert_eq!(average_mpg(&odometer_only), None);
        assert_eq!(average_mpg(&[]), None);
    }

    #[test]
    fn test_score_vehicle_uses_last_log_for_staleness() {
        let now = Utc::now();
        let v = vehicle(50_500, 46_000, 5000);
        let logs = vec![
            log_at(now - Duration::days(40), None, Some(12.0)),
            log_at(now - Duration::days(2), Some(240), Some(12.0)),
        ];

        let readiness = score_vehicle(&v, &logs, now);
        assert_eq!(readiness.miles_until_oil_change, 500);
        assert_eq!(readiness.oil_status, OilStatus::Warning);
        assert!(!readiness.is_stale_intel);
        assert_eq!(readiness.health_score, 70);
        assert_eq!(readiness.health_status, HealthStatus::MaintenanceRequired);
        assert_eq!(readiness.display_name, "2020 Ram ProMaster");
    }

    #[test]
    fn test_score_vehicle_without_logs_is_stale() {
        let v = vehicle(10_000, 10_000, 5000);
        let readiness = score_vehicle(&v, &[], Utc::now());
        assert!(readiness.is_stale_intel);
        assert_eq!(readiness.health_score, 50);
        assert_eq!(readiness.avg_mpg, None);
        assert_eq!(readiness.last_fuel_log_at, None);
    }
}

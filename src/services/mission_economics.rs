//! Cálculos financieros de misiones y registros
//!
//! Aritmética de una pasada sobre filas ya leídas: costo por milla,
//! cotizaciones, cierre de misión y resúmenes para analytics.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::analytics::{CpmSummary, EarningsSummary, FuelLogStats, MissionStats};
use crate::models::fuel_log::FuelLog;
use crate::models::mission::{Mission, MissionStatus};
use crate::utils::errors::{bad_request_error, AppResult};

/// MPG asumido por la calculadora cuando no se indica uno válido
pub const DEFAULT_QUOTE_MPG: f64 = 6.5;

pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Pago por milla de una misión; millas y pago deben ser positivos
pub fn cost_per_mile(offer_amount: f64, miles: f64) -> AppResult<f64> {
    if miles <= 0.0 || offer_amount <= 0.0 {
        return Err(bad_request_error("Miles and payout must be greater than 0"));
    }
    Ok(offer_amount / miles)
}

/// Resultado de la calculadora de misión
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MissionQuote {
    pub fuel_cost_total: f64,
    pub net_profit: f64,
    pub estimated_cpm: f64,
    pub is_profitable: bool,
}

pub fn quote(offer_amount: f64, total_miles: f64, mpg: Option<f64>, fuel_price: f64) -> MissionQuote {
    let mpg = mpg.filter(|m| *m > 0.0).unwrap_or(DEFAULT_QUOTE_MPG);

    let fuel_cost_total = total_miles / mpg * fuel_price;
    let net_profit = offer_amount - fuel_cost_total;
    let estimated_cpm = if total_miles > 0.0 {
        fuel_cost_total / total_miles
    } else {
        0.0
    };

    MissionQuote {
        fuel_cost_total,
        net_profit,
        estimated_cpm,
        is_profitable: net_profit > 0.0,
    }
}

/// Cierre de una misión a partir del odómetro final
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    pub actual_miles: f64,
    pub status: MissionStatus,
    pub final_odometer: i64,
}

pub fn complete(current_odometer: i64, final_odometer: i64, pod_required: bool) -> AppResult<Completion> {
    if final_odometer <= current_odometer {
        return Err(bad_request_error(&format!(
            "Odometer must be greater than current reading ({})",
            current_odometer
        )));
    }

    let status = if pod_required {
        MissionStatus::PendingPod
    } else {
        MissionStatus::Completed
    };

    Ok(Completion {
        actual_miles: (final_odometer - current_odometer) as f64,
        status,
        final_odometer,
    })
}

/// Costo de combustible total entre millas reales de misiones terminadas
pub fn cpm_summary(fuel_logs: &[FuelLog], finished_missions: &[Mission]) -> Option<CpmSummary> {
    let total_fuel_cost: f64 = fuel_logs
        .iter()
        .map(|log| log.total_cost.map(decimal_to_f64).unwrap_or(0.0))
        .sum();
    let total_miles: f64 = finished_missions
        .iter()
        .map(|mission| mission.actual_miles.unwrap_or(0.0))
        .sum();

    if total_miles > 0.0 {
        Some(CpmSummary {
            total_fuel_cost,
            total_miles,
            cpm: total_fuel_cost / total_miles,
        })
    } else {
        None
    }
}

pub fn fuel_log_stats(fuel_logs: &[FuelLog]) -> Option<FuelLogStats> {
    if fuel_logs.is_empty() {
        return None;
    }

    let total_cost = fuel_logs
        .iter()
        .map(|log| log.total_cost.map(decimal_to_f64).unwrap_or(0.0))
        .sum();
    let mpgs: Vec<f64> = fuel_logs.iter().filter_map(|log| log.mpg).collect();
    let average_mpg = if mpgs.is_empty() {
        0.0
    } else {
        mpgs.iter().sum::<f64>() / mpgs.len() as f64
    };

    Some(FuelLogStats {
        total_logs: fuel_logs.len(),
        total_cost,
        average_mpg,
    })
}

pub fn mission_stats(finished_missions: &[Mission]) -> Option<MissionStats> {
    if finished_missions.is_empty() {
        return None;
    }

    let total_miles: f64 = finished_missions.iter().map(|m| m.actual_miles.unwrap_or(0.0)).sum();
    let total_earnings: f64 = finished_missions.iter().map(|m| decimal_to_f64(m.offer_amount)).sum();
    let earnings_per_mile = if total_miles > 0.0 {
        total_earnings / total_miles
    } else {
        0.0
    };

    Some(MissionStats {
        total_missions: finished_missions.len(),
        total_miles,
        total_earnings,
        earnings_per_mile,
    })
}

/// Ganancias pagadas y pendientes de misiones terminadas
pub fn earnings_summary(active_missions: i64, pending_pod: i64, finished_missions: &[Mission]) -> EarningsSummary {
    let (paid, unpaid): (Vec<&Mission>, Vec<&Mission>) =
        finished_missions.iter().partition(|m| m.is_paid);

    EarningsSummary {
        active_missions,
        pending_pod,
        paid_earnings: paid.iter().map(|m| decimal_to_f64(m.offer_amount)).sum(),
        unpaid_earnings: unpaid.iter().map(|m| decimal_to_f64(m.offer_amount)).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn mission(offer_cents: i64, actual_miles: Option<f64>, is_paid: bool) -> Mission {
        Mission {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            origin: "Dallas, TX".to_string(),
            destination: "Tulsa, OK".to_string(),
            offer_amount: Decimal::new(offer_cents, 2),
            estimated_miles: 260.0,
            actual_miles,
            cost_per_mile: 0.0,
            status: "completed".to_string(),
            pod_required: false,
            proof_uploaded: false,
            proof_image_url: None,
            is_paid,
            delivery_timestamp: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    fn fuel_log(cost_cents: Option<i64>, mpg: Option<f64>) -> FuelLog {
        FuelLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            odometer_reading: 1_000,
            gallons_added: Some(10.0),
            total_cost: cost_cents.map(|c| Decimal::new(c, 2)),
            trip_miles: None,
            mpg,
            reference: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cost_per_mile() {
        assert_eq!(cost_per_mile(500.0, 250.0).unwrap(), 2.0);
        assert!(cost_per_mile(500.0, 0.0).is_err());
        assert!(cost_per_mile(0.0, 250.0).is_err());
    }

    #[test]
    fn test_quote_defaults_mpg() {
        let q = quote(1_000.0, 650.0, None, 4.0);
        // 650 / 6.5 * 4 = 400
        assert!((q.fuel_cost_total - 400.0).abs() < 1e-9);
        assert!((q.net_profit - 600.0).abs() < 1e-9);
        assert!((q.estimated_cpm - 400.0 / 650.0).abs() < 1e-9);
        assert!(q.is_profitable);

        let zero_mpg = quote(1_000.0, 650.0, Some(0.0), 4.0);
        assert_eq!(zero_mpg, q);
    }

    #[test]
    fn test_quote_without_miles() {
        let q = quote(100.0, 0.0, Some(8.0), 4.0);
        assert_eq!(q.estimated_cpm, 0.0);
        assert_eq!(q.net_profit, 100.0);
    }

    #[test]
    fn test_complete_sets_status_from_pod() {
        let done = complete(10_000, 10_250, false).unwrap();
        assert_eq!(done.actual_miles, 250.0);
        assert_eq!(done.status, MissionStatus::Completed);

        let pod = complete(10_000, 10_250, true).unwrap();
        assert_eq!(pod.status, MissionStatus::PendingPod);

        assert!(complete(10_000, 10_000, false).is_err());
    }

    #[test]
    fn test_cpm_summary() {
        let logs = vec![fuel_log(Some(10_000), None), fuel_log(None, None), fuel_log(Some(5_000), None)];
        let missions = vec![mission(50_000, Some(200.0), true), mission(30_000, None, false)];

        let summary = cpm_summary(&logs, &missions).unwrap();
        assert_eq!(summary.total_fuel_cost, 150.0);
        assert_eq!(summary.total_miles, 200.0);
        assert_eq!(summary.cpm, 0.75);

        assert_eq!(cpm_summary(&logs, &[]), None);
    }

    #[test]
    fn test_fuel_log_stats_average_only_mpg_rows() {
        let logs = vec![fuel_log(Some(4_000), Some(10.0)), fuel_log(Some(6_000), Some(14.0)), fuel_log(None, None)];
        let stats = fuel_log_stats(&logs).unwrap();
        assert_eq!(stats.total_logs, 3);
        assert_eq!(stats.total_cost, 100.0);
        assert_eq!(stats.average_mpg, 12.0);

        let no_mpg = fuel_log_stats(&[fuel_log(None, None)]).unwrap();
        assert_eq!(no_mpg.average_mpg, 0.0);
        assert_eq!(fuel_log_stats(&[]), None);
    }

    #[test]
    fn test_mission_stats() {
        let missions = vec![mission(60_000, Some(300.0), true), mission(40_000, Some(100.0), false)];
        let stats = mission_stats(&missions).unwrap();
        assert_eq!(stats.total_missions, 2);
        assert_eq!(stats.total_earnings, 1_000.0);
        assert_eq!(stats.earnings_per_mile, 2.5);

        let no_miles = mission_stats(&[mission(10_000, None, false)]).unwrap();
        assert_eq!(no_miles.earnings_per_mile, 0.0);
        assert_eq!(mission_stats(&[]), None);
    }

    #[test]
    fn test_earnings_summary_splits_paid() {
        let missions = vec![
            mission(60_000, Some(300.0), true),
            mission(40_000, Some(100.0), false),
            mission(12_550, Some(50.0), false),
        ];
        let summary = earnings_summary(2, 1, &missions);
        assert_eq!(summary.active_missions, 2);
        assert_eq!(summary.pending_pod, 1);
        assert_eq!(summary.paid_earnings, 600.0);
        assert!((summary.unpaid_earnings - 525.5).abs() < 1e-9);
    }
}

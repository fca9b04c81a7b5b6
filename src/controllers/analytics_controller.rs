use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::analytics::{EarningsSummary, EfficiencyTrend, FleetReadinessReport, MpgPoint, VehicleAnalytics};
use crate::models::mission::MissionStatus;
use crate::repositories::{FuelLogRepository, MissionRepository, VehicleRepository};
use crate::services::efficiency_trend::chart_efficiency_trend;
use crate::services::mission_economics;
use crate::services::FleetReadinessService;
use crate::utils::errors::{not_found_error, AppError};

pub struct AnalyticsController {
    readiness: FleetReadinessService,
    vehicles: VehicleRepository,
    fuel_logs: FuelLogRepository,
    missions: MissionRepository,
}

impl AnalyticsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            readiness: FleetReadinessService::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            fuel_logs: FuelLogRepository::new(pool.clone()),
            missions: MissionRepository::new(pool),
        }
    }

    pub async fn fleet_readiness(&self, user_id: Uuid) -> Result<FleetReadinessReport, AppError> {
        self.readiness.fleet_readiness(user_id, Utc::now()).await
    }

    /// Gráfica de MPG, tendencia 3-vs-3 y resúmenes de costo de un vehículo
    pub async fn vehicle_analytics(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
        previous_trend: EfficiencyTrend,
    ) -> Result<VehicleAnalytics, AppError> {
        self.vehicles
            .find_for_user(vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let (samples, fuel_logs, finished) = futures::try_join!(
            self.fuel_logs.mpg_samples_for_vehicle(vehicle_id, user_id),
            self.fuel_logs.list_for_vehicle(vehicle_id, user_id),
            self.missions.finished_for_vehicle(vehicle_id, user_id),
        )?;

        let mpgs: Vec<f64> = samples.iter().map(|s| s.mpg).collect();
        let mpg_chart = samples
            .iter()
            .map(|s| MpgPoint {
                date: s.created_at,
                mpg: s.mpg,
            })
            .collect();

        Ok(VehicleAnalytics {
            vehicle_id,
            mpg_chart,
            trend: chart_efficiency_trend(&mpgs, previous_trend),
            cpm: mission_economics::cpm_summary(&fuel_logs, &finished),
            fuel_stats: mission_economics::fuel_log_stats(&fuel_logs),
            mission_stats: mission_economics::mission_stats(&finished),
        })
    }

    pub async fn earnings(&self, user_id: Uuid) -> Result<EarningsSummary, AppError> {
        let (active, pending_pod, finished) = futures::try_join!(
            self.missions.count_by_status(user_id, MissionStatus::Active),
            self.missions.count_by_status(user_id, MissionStatus::PendingPod),
            self.missions.finished_for_user(user_id),
        )?;

        Ok(mission_economics::earnings_summary(active, pending_pod, &finished))
    }
}

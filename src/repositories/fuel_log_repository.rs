use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fuel_log::{FuelLog, MpgSample, NewFuelLog};
use crate::utils::errors::AppError;

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lectura más reciente del vehículo, base para calcular el viaje
    pub async fn latest_for_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Option<FuelLog>, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND user_id = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(log)
    }

    /// Registros del vehículo, más recientes primero
    pub async fn list_for_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND user_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Registros del vehículo en orden cronológico (el scorer toma el último)
    pub async fn list_chronological(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND user_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<FuelLog>, AppError> {
        let log = sqlx::query_as::<_, FuelLog>("SELECT * FROM vextor_fuel_logs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(log)
    }

    /// Vecinos cronológicos de un registro: (anterior, siguiente)
    pub async fn neighbours(&self, log: &FuelLog) -> Result<(Option<FuelLog>, Option<FuelLog>), AppError> {
        let previous = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND created_at < $2 AND id <> $3
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(log.vehicle_id)
        .bind(log.created_at)
        .bind(log.id)
        .fetch_optional(&self.pool)
        .await?;

        let next = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND created_at > $2 AND id <> $3
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(log.vehicle_id)
        .bind(log.created_at)
        .bind(log.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok((previous, next))
    }

    pub async fn insert(&self, user_id: Uuid, new_log: NewFuelLog) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO vextor_fuel_logs
                (id, user_id, vehicle_id, odometer_reading, gallons_added, total_cost,
                 trip_miles, mpg, reference, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(new_log.vehicle_id)
        .bind(new_log.odometer_reading)
        .bind(new_log.gallons_added)
        .bind(new_log.total_cost)
        .bind(new_log.trip_miles)
        .bind(new_log.mpg)
        .bind(new_log.reference)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        odometer_reading: i64,
        gallons_added: Option<f64>,
        total_cost: Option<Decimal>,
        trip_miles: Option<i64>,
        mpg: Option<f64>,
        reference: Option<String>,
    ) -> Result<Option<FuelLog>, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            UPDATE vextor_fuel_logs
            SET odometer_reading = $3, gallons_added = $4, total_cost = $5,
                trip_miles = $6, mpg = $7, reference = $8
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(odometer_reading)
        .bind(gallons_added)
        .bind(total_cost)
        .bind(trip_miles)
        .bind(mpg)
        .bind(reference)
        .fetch_optional(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vextor_fuel_logs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// MPG de toda la flota del usuario desde `since`, en orden cronológico
    pub async fn recent_mpg_for_user(&self, user_id: Uuid, since: DateTime<Utc>) -> Result<Vec<MpgSample>, AppError> {
        let samples = sqlx::query_as::<_, MpgSample>(
            r#"
            SELECT mpg, created_at FROM vextor_fuel_logs
            WHERE user_id = $1 AND created_at >= $2 AND mpg IS NOT NULL
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(samples)
    }

    /// Serie de MPG de un vehículo para la gráfica
    pub async fn mpg_samples_for_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vec<MpgSample>, AppError> {
        let samples = sqlx::query_as::<_, MpgSample>(
            r#"
            SELECT mpg, created_at FROM vextor_fuel_logs
            WHERE vehicle_id = $1 AND user_id = $2 AND mpg IS NOT NULL
            ORDER BY created_at ASC
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(samples)
    }
}

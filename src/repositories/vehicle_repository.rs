use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vextor_vehicles WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserta un vehículo; el último cambio de aceite arranca en el odómetro actual
    pub async fn create(&self, user_id: Uuid, new_vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vextor_vehicles
                (id, user_id, name, year, make, model, vehicle_type, usage_type,
                 current_odometer, oil_change_interval, last_oil_change_odometer, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $9, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(new_vehicle.name)
        .bind(new_vehicle.year)
        .bind(new_vehicle.make)
        .bind(new_vehicle.model)
        .bind(new_vehicle.vehicle_type)
        .bind(new_vehicle.usage_type)
        .bind(new_vehicle.current_odometer)
        .bind(new_vehicle.oil_change_interval)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vextor_vehicles WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vextor_vehicles WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: VehicleChanges,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vextor_vehicles
            SET name = COALESCE($3, name),
                year = COALESCE($4, year),
                make = COALESCE($5, make),
                model = COALESCE($6, model),
                vehicle_type = COALESCE($7, vehicle_type),
                usage_type = COALESCE($8, usage_type),
                current_odometer = COALESCE($9, current_odometer),
                oil_change_interval = COALESCE($10, oil_change_interval)
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.name)
        .bind(changes.year)
        .bind(changes.make)
        .bind(changes.model)
        .bind(changes.vehicle_type)
        .bind(changes.usage_type)
        .bind(changes.current_odometer)
        .bind(changes.oil_change_interval)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Marca el cambio de aceite en `odometer` (o en el odómetro actual)
    pub async fn record_oil_change(
        &self,
        id: Uuid,
        user_id: Uuid,
        odometer: Option<i64>,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vextor_vehicles
            SET last_oil_change_odometer = COALESCE($3, current_odometer),
                current_odometer = GREATEST(current_odometer, COALESCE($3, current_odometer))
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(odometer)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn update_odometer(&self, id: Uuid, user_id: Uuid, odometer: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE vextor_vehicles SET current_odometer = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(odometer)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Devuelve `false` si el vehículo no existe o no es del usuario
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vextor_vehicles WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

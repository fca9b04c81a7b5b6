use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mission::{Mission, MissionStatus, NewMission};
use crate::services::mission_economics::Completion;
use crate::utils::errors::AppError;

pub struct MissionRepository {
    pool: PgPool,
}

impl MissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, new_mission: NewMission) -> Result<Mission, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            INSERT INTO vextor_missions
                (id, user_id, vehicle_id, origin, destination, offer_amount, estimated_miles,
                 cost_per_mile, status, pod_required, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(new_mission.vehicle_id)
        .bind(new_mission.origin)
        .bind(new_mission.destination)
        .bind(new_mission.offer_amount)
        .bind(new_mission.estimated_miles)
        .bind(new_mission.cost_per_mile)
        .bind(MissionStatus::Active.as_str())
        .bind(new_mission.pod_required)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(mission)
    }

    /// Lista con filtros opcionales por vehículo y estado
    pub async fn list(
        &self,
        user_id: Uuid,
        vehicle_id: Option<Uuid>,
        status: Option<MissionStatus>,
    ) -> Result<Vec<Mission>, AppError> {
        let missions = sqlx::query_as::<_, Mission>(
            r#"
            SELECT * FROM vextor_missions
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR vehicle_id = $2)
              AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>("SELECT * FROM vextor_missions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(mission)
    }

    pub async fn update_estimate(
        &self,
        id: Uuid,
        user_id: Uuid,
        offer_amount: Decimal,
        estimated_miles: f64,
        cost_per_mile: f64,
    ) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE vextor_missions
            SET offer_amount = $3, estimated_miles = $4, cost_per_mile = $5
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(offer_amount)
        .bind(estimated_miles)
        .bind(cost_per_mile)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mission)
    }

    /// Cierra una misión activa; `None` si ya no estaba activa
    pub async fn complete(&self, id: Uuid, user_id: Uuid, completion: &Completion) -> Result<Option<Mission>, AppError> {
        let now = Utc::now();
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE vextor_missions
            SET actual_miles = $3, status = $4, delivery_timestamp = $5, completed_at = $5
            WHERE id = $1 AND user_id = $2 AND status = $6
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(completion.actual_miles)
        .bind(completion.status.as_str())
        .bind(now)
        .bind(MissionStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(mission)
    }

    /// Adjunta la prueba de entrega y mueve pending_pod a history
    pub async fn attach_proof(&self, id: Uuid, user_id: Uuid, proof_image_url: &str) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE vextor_missions
            SET proof_uploaded = TRUE, proof_image_url = $3, status = $4
            WHERE id = $1 AND user_id = $2 AND status = $5
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(proof_image_url)
        .bind(MissionStatus::History.as_str())
        .bind(MissionStatus::PendingPod.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(mission)
    }

    pub async fn reassign(&self, id: Uuid, user_id: Uuid, vehicle_id: Uuid) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            "UPDATE vextor_missions SET vehicle_id = $3 WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mission)
    }

    pub async fn toggle_paid(&self, id: Uuid, user_id: Uuid) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            "UPDATE vextor_missions SET is_paid = NOT is_paid WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mission)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vextor_missions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Misiones completed + history de un vehículo
    pub async fn finished_for_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vec<Mission>, AppError> {
        let finished: Vec<String> = MissionStatus::finished().iter().map(|s| s.to_string()).collect();
        let missions = sqlx::query_as::<_, Mission>(
            r#"
            SELECT * FROM vextor_missions
            WHERE vehicle_id = $1 AND user_id = $2 AND status = ANY($3)
            ORDER BY completed_at DESC NULLS LAST
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .bind(finished)
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    /// Misiones completed + history de toda la flota del usuario
    pub async fn finished_for_user(&self, user_id: Uuid) -> Result<Vec<Mission>, AppError> {
        let finished: Vec<String> = MissionStatus::finished().iter().map(|s| s.to_string()).collect();
        let missions = sqlx::query_as::<_, Mission>(
            "SELECT * FROM vextor_missions WHERE user_id = $1 AND status = ANY($2)",
        )
        .bind(user_id)
        .bind(finished)
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    pub async fn count_by_status(&self, user_id: Uuid, status: MissionStatus) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM vextor_missions WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

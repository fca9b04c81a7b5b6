use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::expense_dto::CreateExpenseRequest;
use crate::models::expense::Expense;
use crate::repositories::{ExpenseRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct ExpenseController {
    expenses: ExpenseRepository,
    vehicles: VehicleRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, user_id: Uuid, request: CreateExpenseRequest) -> Result<ApiResponse<Expense>, AppError> {
        let new_expense = request.into_new_expense()?;

        self.vehicles
            .find_for_user(new_expense.vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &new_expense.vehicle_id.to_string()))?;

        let expense = self.expenses.create(user_id, new_expense).await?;
        info!("💸 Gasto {} ({}) registrado", expense.id, expense.category);

        Ok(ApiResponse::success_with_message(expense, "Expense logged".to_string()))
    }

    pub async fn list(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<Vec<Expense>, AppError> {
        self.expenses.list_recent_for_vehicle(vehicle_id, user_id).await
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !self.expenses.delete(id, user_id).await? {
            return Err(not_found_error("Expense", &id.to_string()));
        }
        Ok(())
    }
}

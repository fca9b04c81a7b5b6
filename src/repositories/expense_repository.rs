use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::expense::{Expense, NewExpense};
use crate::utils::errors::AppError;

/// Tope de filas en la vista de gastos por vehículo
pub const EXPENSE_LIST_LIMIT: i64 = 10;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, new_expense: NewExpense) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO vextor_expenses (id, user_id, vehicle_id, category, amount, expense_date, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(new_expense.vehicle_id)
        .bind(new_expense.category)
        .bind(new_expense.amount)
        .bind(new_expense.expense_date)
        .bind(new_expense.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn list_recent_for_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM vextor_expenses
            WHERE vehicle_id = $1 AND user_id = $2
            ORDER BY expense_date DESC, created_at DESC
            LIMIT $3
            "#,
        )
        .bind(vehicle_id)
        .bind(user_id)
        .bind(EXPENSE_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vextor_expenses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

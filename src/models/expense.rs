//! Modelo de Expense

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categorías de gasto aceptadas
pub const EXPENSE_CATEGORIES: [&str; 5] = ["Maintenance", "Tolls", "Insurance", "Permits", "Other"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub vehicle_id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub notes: Option<String>,
}

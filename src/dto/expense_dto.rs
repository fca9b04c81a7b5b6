use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::expense::NewExpense;
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::{validate_date, validate_expense_category, validate_positive};

// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub vehicle_id: Uuid,
    #[validate(custom = "validate_expense_category")]
    pub category: String,
    #[validate(custom = "validate_positive")]
    pub amount: Decimal,
    /// YYYY-MM-DD, hoy si falta
    pub expense_date: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl CreateExpenseRequest {
    pub fn into_new_expense(self) -> AppResult<NewExpense> {
        let expense_date = match self.expense_date.as_deref() {
            Some(raw) => parse_expense_date(raw)?,
            None => Utc::now().date_naive(),
        };

        Ok(NewExpense {
            vehicle_id: self.vehicle_id,
            category: self.category,
            amount: self.amount,
            expense_date,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

fn parse_expense_date(raw: &str) -> AppResult<NaiveDate> {
    validate_date(raw).map_err(|_| bad_request_error("expense_date must use the YYYY-MM-DD format"))
}

#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    pub vehicle_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, amount: Decimal, date: Option<&str>) -> CreateExpenseRequest {
        CreateExpenseRequest {
            vehicle_id: Uuid::new_v4(),
            category: category.to_string(),
            amount,
            expense_date: date.map(str::to_string),
            notes: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_expense_validation() {
        assert!(request("Tolls", Decimal::new(1250, 2), None).validate().is_ok());
        assert!(request("Snacks", Decimal::new(1250, 2), None).validate().is_err());
        assert!(request("Tolls", Decimal::ZERO, None).validate().is_err());
    }

    #[test]
    fn test_into_new_expense() {
        let expense = request("Permits", Decimal::new(9900, 2), Some("2024-03-01"))
            .into_new_expense()
            .unwrap();
        assert_eq!(expense.expense_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(expense.notes, None);

        assert!(request("Permits", Decimal::ONE, Some("03/01/2024"))
            .into_new_expense()
            .is_err());
    }
}

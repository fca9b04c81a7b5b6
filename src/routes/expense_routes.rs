use axum::{
    extract::{Path, Query, State},
    routing::{delete, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::ExpenseController;
use crate::dto::api_response::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, ExpenseQuery};
use crate::middleware::AuthSession;
use crate::models::expense::Expense;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense).get(list_expenses))
        .route("/:id", delete(delete_expense))
}

async fn create_expense(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    request.validate()?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(session.user_id, request).await?;
    Ok(Json(response))
}

async fn list_expenses(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<ExpenseQuery>,
) -> Result<Json<ApiResponse<Vec<Expense>>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let expenses = controller.list(session.user_id, query.vehicle_id).await?;
    Ok(Json(ApiResponse::success(expenses)))
}

async fn delete_expense(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    controller.delete(id, session.user_id).await?;
    Ok(Json(ApiResponse::message_only("Expense deleted".to_string())))
}

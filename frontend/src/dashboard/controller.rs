//! The dashboard's request flows.
//!
//! Each flow reports state changes through `dispatch` as they happen, so the
//! form closes as soon as a save succeeds and the re-fetched list lands when
//! it arrives. Failures are logged; mutation failures are also alerted.

use serde::de::IgnoredAny;
use serde_json::Value;

use crate::{
    dialogs::Dialogs,
    error::ApiError,
    http::{ApiClient, Transport},
    models::{Expense, ExpenseDraft},
};

use super::DashboardAction;

pub const EXPENSES_PATH: &str = "/expenses";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this expense?";
pub const ADD_FAILED: &str = "Failed to add expense";
pub const UPDATE_FAILED: &str = "Failed to update expense";
pub const DELETE_FAILED: &str = "Failed to delete expense";

pub fn expense_path(id: &str) -> String {
    format!("{EXPENSES_PATH}/{id}")
}

pub async fn fetch_expenses<T: Transport>(client: &ApiClient<T>) -> DashboardAction {
    match client.get::<Vec<Value>>(EXPENSES_PATH).await {
        Ok(records) => DashboardAction::Loaded(decode_expenses(records)),
        Err(error) => {
            tracing::error!("Error fetching expenses: {error}");
            DashboardAction::LoadFailed
        }
    }
}

/// Decodes each record on its own so one malformed record does not hide the
/// rest. Skipped records are logged.
fn decode_expenses(records: Vec<Value>) -> Vec<Expense> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Expense>(record) {
            Ok(expense) => Some(expense),
            Err(error) => {
                tracing::warn!("skipping unreadable expense: {error}");
                None
            }
        })
        .collect()
}

/// Creates `draft`, or updates `editing` with it. The form stays open on
/// failure so the user can correct it.
pub async fn save_expense<T: Transport>(
    client: &ApiClient<T>,
    dialogs: &dyn Dialogs,
    editing: Option<&Expense>,
    draft: &ExpenseDraft,
    dispatch: &dyn Fn(DashboardAction),
) {
    let (result, fallback) = match editing {
        Some(expense) => (
            client
                .put::<_, IgnoredAny>(&expense_path(&expense.id), draft)
                .await,
            UPDATE_FAILED,
        ),
        None => (
            client.post::<_, IgnoredAny>(EXPENSES_PATH, draft).await,
            ADD_FAILED,
        ),
    };

    match result {
        Ok(_) => {
            dispatch(DashboardAction::CloseForm);
            dispatch(fetch_expenses(client).await);
        }
        Err(error) => report_failure(dialogs, &error, fallback),
    }
}

/// Deletes the expense `id` once the user confirms.
pub async fn delete_expense<T: Transport>(
    client: &ApiClient<T>,
    dialogs: &dyn Dialogs,
    id: &str,
    dispatch: &dyn Fn(DashboardAction),
) {
    if !dialogs.confirm(DELETE_CONFIRMATION) {
        return;
    }

    match client.delete(&expense_path(id)).await {
        Ok(_) => dispatch(fetch_expenses(client).await),
        Err(error) => report_failure(dialogs, &error, DELETE_FAILED),
    }
}

fn report_failure(dialogs: &dyn Dialogs, error: &ApiError, fallback: &str) {
    tracing::error!("{fallback}: {error}");
    dialogs.alert(error.user_message(fallback));
}

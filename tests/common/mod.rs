#![allow(dead_code)]

use expenseflow::ExpenseStore;
use expenseflow::models::{Expense, NewExpense, PublicUser};
use expenseflow::users::PlainText;
use tempfile::TempDir;

/// Opens a fresh store in a temporary directory. The `TempDir` must be kept
/// alive for the duration of the test.
pub async fn open_test_store() -> (ExpenseStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let data_path = temp_dir
        .path()
        .to_str()
        .expect("Failed to convert path to string")
        .to_string();

    let store = ExpenseStore::open(&data_path, Box::new(PlainText))
        .await
        .unwrap_or_else(|e| panic!("Failed to open store at {}: {}", data_path, e));

    (store, temp_dir)
}

/// Re-opens a store on an existing data directory, simulating an app restart.
pub async fn reopen_store(data_path: &str) -> ExpenseStore {
    ExpenseStore::open(data_path, Box::new(PlainText))
        .await
        .unwrap_or_else(|e| panic!("Failed to reopen store at {}: {}", data_path, e))
}

pub async fn seed_user(store: &mut ExpenseStore, username: &str, password: &str) -> PublicUser {
    store
        .add_user(username, password)
        .await
        .unwrap_or_else(|e| panic!("Failed to seed user '{}': {}", username, e))
}

pub async fn seed_expense(
    store: &mut ExpenseStore,
    user_id: &str,
    amount: f64,
    category_id: &str,
    description: &str,
    date: &str,
) -> Expense {
    store
        .add_expense(NewExpense {
            user_id: user_id.to_string(),
            amount,
            category_id: category_id.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        })
        .await
        .unwrap_or_else(|e| panic!("Failed to seed expense '{}': {}", description, e))
}

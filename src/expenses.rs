use std::collections::HashMap;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use uuid::Uuid;

use crate::categories;
use crate::constants::*;
use crate::error::StoreError;
use crate::models::{Expense, NewExpense};
use crate::store::ExpenseStore;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an expense date (`YYYY-MM-DD`). Dates carry no time component.
pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, DATE_FORMAT)
}

impl ExpenseStore {
    /// Creates an expense with a freshly generated id. All fields are
    /// validated up front; a `Validation` error names every failing field
    /// rather than stopping at the first.
    pub async fn add_expense(&mut self, new: NewExpense) -> Result<Expense, StoreError> {
        self.validate_expense_fields(&new.user_id, new.amount, &new.category_id, &new.date)?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            amount: new.amount,
            category_id: new.category_id,
            description: new.description,
            date: new.date,
        };

        let mut next = self.expenses.clone();
        next.push(expense.clone());
        self.flush_expenses(&next).await?;
        self.expenses = next;

        Ok(expense)
    }

    /// All expenses belonging to `user_id`, in insertion order. Sorting and
    /// display filtering are the caller's concern.
    pub fn expenses_for_user(&self, user_id: &str) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Whole-record replace by id. Returns `NotFound` (collection untouched)
    /// when the id does not exist; there are no partial-update semantics.
    pub async fn update_expense(&mut self, updated: Expense) -> Result<Expense, StoreError> {
        let Some(pos) = self.expenses.iter().position(|e| e.id == updated.id) else {
            return Err(StoreError::NotFound(format!("expense {}", updated.id)));
        };
        self.validate_expense_fields(
            &updated.user_id,
            updated.amount,
            &updated.category_id,
            &updated.date,
        )?;

        let mut next = self.expenses.clone();
        next[pos] = updated.clone();
        self.flush_expenses(&next).await?;
        self.expenses = next;

        Ok(updated)
    }

    /// Removes the expense if present. Deleting a missing id is not an
    /// error; the return value reports whether anything was removed.
    pub async fn delete_expense(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(pos) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let mut next = self.expenses.clone();
        next.remove(pos);
        self.flush_expenses(&next).await?;
        self.expenses = next;

        Ok(true)
    }

    /// Sum of the user's expense amounts grouped by category id. Categories
    /// with no expenses are absent from the map, not present with 0.
    pub fn expenses_by_category(&self, user_id: &str) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for expense in self.expenses.iter().filter(|e| e.user_id == user_id) {
            *totals.entry(expense.category_id.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Inclusive calendar-date range filter over the user's expenses. Stored
    /// dates that no longer parse are skipped with a warning.
    pub fn expenses_by_date_range(&self, user_id: &str, start: Date, end: Date) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| match parse_date(&e.date) {
                Ok(date) => date >= start && date <= end,
                Err(err) => {
                    log::warn!("skipping expense {} with unparseable date: {}", e.id, err);
                    false
                }
            })
            .cloned()
            .collect()
    }

    /// Total spend for the user; 0.0 when they have no expenses.
    pub fn total_expenses(&self, user_id: &str) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.amount)
            .sum()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    fn validate_expense_fields(
        &self,
        user_id: &str,
        amount: f64,
        category_id: &str,
        date: &str,
    ) -> Result<(), StoreError> {
        let mut failing = Vec::new();
        if !amount.is_finite() || amount < 0.0 {
            failing.push(FIELD_AMOUNT.to_string());
        }
        if !categories::exists(category_id) {
            failing.push(FIELD_CATEGORY.to_string());
        }
        if !self.users.iter().any(|u| u.id == user_id) {
            failing.push(FIELD_USER_ID.to_string());
        }
        if parse_date(date).is_err() {
            failing.push(FIELD_DATE.to_string());
        }
        if failing.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(failing))
        }
    }
}

//! Category filtering and the totals shown on the stat cards.

use crate::models::{Category, Expense};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_VALUE: &'static str = "all";

    /// Parses a `<select>` value. Anything that is not a category means "all".
    pub fn from_value(value: &str) -> Self {
        value
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => expense.category == *category,
        }
    }
}

/// The expenses passing `filter`, in their original order.
pub fn filter_expenses(expenses: &[Expense], filter: CategoryFilter) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpenseSummary {
    pub total_amount: f64,
    pub count: usize,
}

impl ExpenseSummary {
    pub fn formatted_total(&self) -> String {
        format_currency(self.total_amount)
    }
}

pub fn summarize(expenses: &[&Expense]) -> ExpenseSummary {
    ExpenseSummary {
        total_amount: expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.amount),
        count: expenses.len(),
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

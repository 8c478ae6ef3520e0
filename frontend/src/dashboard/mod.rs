//! Dashboard state: the fetched list, the category filter, and the form.
//!
//! The list and the totals are always derived from the last fetched list and
//! the current filter; nothing is cached between renders.

pub mod controller;
pub mod filter;

use std::rc::Rc;

use yew::Reducible;

use crate::models::Expense;

pub use filter::{format_currency, CategoryFilter, ExpenseSummary};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    Edit(Expense),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub filter: CategoryFilter,
    pub form: FormMode,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            loading: true,
            filter: CategoryFilter::All,
            form: FormMode::Hidden,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    /// A list fetch succeeded; replaces the whole list.
    Loaded(Vec<Expense>),
    /// A list fetch failed; the previous list stays.
    LoadFailed,
    SetFilter(CategoryFilter),
    OpenCreate,
    OpenEdit(Expense),
    CloseForm,
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Loaded(expenses) => {
                self.expenses = expenses;
                self.loading = false;
            }
            DashboardAction::LoadFailed => self.loading = false,
            DashboardAction::SetFilter(filter) => self.filter = filter,
            DashboardAction::OpenCreate => self.form = FormMode::Create,
            DashboardAction::OpenEdit(expense) => self.form = FormMode::Edit(expense),
            DashboardAction::CloseForm => self.form = FormMode::Hidden,
        }
    }

    pub fn visible_expenses(&self) -> Vec<&Expense> {
        filter::filter_expenses(&self.expenses, self.filter)
    }

    pub fn summary(&self) -> ExpenseSummary {
        filter::summarize(&self.visible_expenses())
    }

    pub fn editing(&self) -> Option<&Expense> {
        match &self.form {
            FormMode::Edit(expense) => Some(expense),
            _ => None,
        }
    }

    pub fn is_form_visible(&self) -> bool {
        self.form != FormMode::Hidden
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

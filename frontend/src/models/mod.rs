pub mod expense;
pub mod session;

pub use expense::{Category, Expense, ExpenseDate, ExpenseDraft};
pub use session::{Session, UserProfile};

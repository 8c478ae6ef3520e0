mod app;
mod auth_screen;
mod dashboard;
mod expense_form;
mod icons;

pub use app::App;

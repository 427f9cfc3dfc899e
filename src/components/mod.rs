//! UI Components Module

mod date_field;
mod delete_confirm_dialog;
mod status_banner;
mod task_form;
mod task_row;
mod task_table;

pub use date_field::DateField;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use status_banner::StatusBanner;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
pub use task_table::TaskTable;

pub mod categories;
pub mod config;
pub mod constants;
pub mod error;
pub mod expenses;
pub mod models;
pub mod session;
pub mod store;
pub mod users;

pub use error::StoreError;
pub use session::{SessionManager, SessionState};
pub use store::ExpenseStore;

pub mod account_api;

pub use account_api::{AccountApi, AccountApiError, AccountDto};

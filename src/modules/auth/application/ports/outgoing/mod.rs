pub mod account_query;

pub use account_query::{AccountQuery, AccountQueryError};

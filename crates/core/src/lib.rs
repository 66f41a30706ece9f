//! Optimach core types and utilities

pub mod calc;
pub mod error;
pub mod session;
pub mod store;
pub mod token;

pub use error::{CoreError, CoreResult};
pub use session::{Gender, Session, UserSnapshot};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

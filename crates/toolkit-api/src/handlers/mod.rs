//! API request handlers.

pub mod health;
pub mod telegram;
pub mod tools;

pub use health::*;
pub use telegram::*;
pub use tools::*;

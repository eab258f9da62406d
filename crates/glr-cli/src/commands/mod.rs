//! Command implementations.

pub mod extract;
pub mod fill;
pub mod placeholders;

pub use self::extract::execute_extract;
pub use self::fill::execute_fill;
pub use self::placeholders::execute_placeholders;

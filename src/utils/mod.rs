// Shared utilities

pub mod constants;
pub mod storage;
pub mod timezone;

pub use constants::*;
pub use storage::*;
pub use timezone::resolve_timezone;

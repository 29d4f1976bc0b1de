pub mod error;
pub mod judge;
pub mod paged;
pub mod user;

pub use error::ErrorMessage;
pub use judge::JudgeResult;
pub use paged::PagedData;
pub use user::{Activity, LanguageCount, Overview, Role, User, UserInfo};

pub mod session_context;
pub mod use_session;

pub use session_context::{use_session, SessionContextProvider, SessionContextProviderProps};
pub use use_session::{use_session_store, UseSessionHandle};

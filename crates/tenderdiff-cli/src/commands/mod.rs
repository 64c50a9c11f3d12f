//! Command implementations.

pub mod ask;
pub mod compare;
pub mod extract;
pub mod session;

pub use self::ask::{execute_ask, question_text};
pub use self::compare::execute_compare;
pub use self::extract::execute_extract;
pub use self::session::execute_session;

//! SeaORM entities.
//!
//! Only `interview_sessions` is owned here; the others are mapped just far
//! enough to traverse relationships from a session.

pub mod domain;
pub mod interview_session;
pub mod response;
pub mod user;
pub mod user_question;

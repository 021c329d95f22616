//! Repository layer for data access.

pub mod entities;
mod session_repository;

pub use session_repository::{InterviewSessionRepository, SessionStore};

//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage mapping for these types lives in the session service.

pub mod constants;
pub mod error;
pub mod interview_session;
pub mod password;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use interview_session::{
    DomainRef, InterviewSession, InterviewSessionRecord, NewInterviewSession, ResponseRef,
    UserQuestionRef, UserRef,
};
pub use password::{verify_password, HashingParams, Password};

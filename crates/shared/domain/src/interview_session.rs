//! Interview session domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// One interview attempt by a user within a subject-matter domain.
///
/// A passive record: persistence and relationship loading belong to the
/// storage layer. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub domain_id: i64,
    pub started_at: DateTime<Utc>,
    /// Completion timestamp (None = not recorded yet)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Interview session creation data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewInterviewSession {
    /// Owning user
    pub user_id: Uuid,
    /// Interview subject-matter category
    pub domain_id: i64,
    /// Free-text description (required)
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Session start timestamp
    pub started_at: DateTime<Utc>,
}

impl NewInterviewSession {
    /// Build and validate creation data, starting the session now.
    ///
    /// # Errors
    /// Returns a validation error if `description` is empty.
    pub fn new(
        user_id: Uuid,
        domain_id: i64,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let session = Self {
            user_id,
            domain_id,
            description: description.into(),
            started_at: Utc::now(),
        };
        session.check()?;
        Ok(session)
    }

    /// Override the start timestamp.
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Run field validation.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|e| DomainError::validation(format_validation_errors(&e)))
    }
}

/// Reference to the owning user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
}

/// Reference to the interview domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRef {
    pub id: i64,
}

/// Reference to a question asked during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuestionRef {
    pub id: Uuid,
    pub session_id: Uuid,
}

/// Reference to a response given during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRef {
    pub id: Uuid,
    pub session_id: Uuid,
}

/// A session together with its traversed relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSessionRecord {
    pub session: InterviewSession,
    pub user: Option<UserRef>,
    pub domain: Option<DomainRef>,
    pub user_questions: Vec<UserQuestionRef>,
    pub responses: Vec<ResponseRef>,
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

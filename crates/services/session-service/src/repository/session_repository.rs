//! Interview session repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::{
    domain as domain_entity, interview_session,
    interview_session::{ActiveModel, Entity as SessionEntity},
    response, user, user_question,
};
use common::{AppError, AppResult, OptionExt};
use domain::{InterviewSession, InterviewSessionRecord, NewInterviewSession};

/// Interview session repository trait for dependency injection.
///
/// Referential integrity of `user_id`/`domain_id` is left to the database.
#[async_trait]
pub trait InterviewSessionRepository: Send + Sync {
    /// Insert a new session; the store assigns the id
    async fn create(&self, session: NewInterviewSession) -> AppResult<InterviewSession>;

    /// Find session by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InterviewSession>>;

    /// Find session by ID with its user, domain, questions and responses
    async fn find_record(&self, id: Uuid) -> AppResult<Option<InterviewSessionRecord>>;

    /// List a user's sessions, most recently started first
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<InterviewSession>>;

    /// Record the completion timestamp
    async fn set_completed_at(
        &self,
        id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> AppResult<InterviewSession>;

    /// Permanently delete a session
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of InterviewSessionRepository
pub struct SessionStore {
    db: Arc<DatabaseConnection>,
}

impl SessionStore {
    /// Create new repository instance over a shared connection handle
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterviewSessionRepository for SessionStore {
    async fn create(&self, session: NewInterviewSession) -> AppResult<InterviewSession> {
        session.check()?;

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(session.user_id),
            description: Set(session.description),
            domain_id: Set(session.domain_id),
            started_at: Set(session.started_at),
            completed_at: Set(None),
        };

        let model = active_model.insert(&*self.db).await?;
        tracing::info!(
            session_id = %model.id,
            user_id = %model.user_id,
            "Interview session created"
        );

        Ok(InterviewSession::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InterviewSession>> {
        let result = SessionEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(InterviewSession::from))
    }

    async fn find_record(&self, id: Uuid) -> AppResult<Option<InterviewSessionRecord>> {
        let Some(session) = SessionEntity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let user = session
            .find_related(user::Entity)
            .one(&*self.db)
            .await?;
        let domain = session
            .find_related(domain_entity::Entity)
            .one(&*self.db)
            .await?;
        let user_questions = session
            .find_related(user_question::Entity)
            .all(&*self.db)
            .await?;
        let responses = session
            .find_related(response::Entity)
            .all(&*self.db)
            .await?;

        tracing::debug!(
            session_id = %id,
            questions = user_questions.len(),
            responses = responses.len(),
            "Loaded interview session relations"
        );

        Ok(Some(InterviewSessionRecord {
            session: InterviewSession::from(session),
            user: user.map(Into::into),
            domain: domain.map(Into::into),
            user_questions: user_questions.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }))
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<InterviewSession>> {
        let models = SessionEntity::find()
            .filter(interview_session::Column::UserId.eq(user_id))
            .order_by_desc(interview_session::Column::StartedAt)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(InterviewSession::from).collect())
    }

    async fn set_completed_at(
        &self,
        id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> AppResult<InterviewSession> {
        let session = SessionEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = session.into();
        active.completed_at = Set(Some(completed_at));

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        tracing::info!(session_id = %id, "Interview session completion recorded");

        Ok(InterviewSession::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = SessionEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(session_id = %id, "Interview session deleted");
        Ok(())
    }
}

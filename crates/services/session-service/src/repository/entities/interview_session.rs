//! Interview session database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::InterviewSession;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interview_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub domain_id: i64,
    pub started_at: DateTimeUtc,
    /// Completion timestamp (NULL = not recorded)
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::domain::Entity",
        from = "Column::DomainId",
        to = "super::domain::Column::Id"
    )]
    Domain,
    #[sea_orm(has_many = "super::user_question::Entity")]
    UserQuestions,
    #[sea_orm(has_many = "super::response::Entity")]
    Responses,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}

impl Related<super::user_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserQuestions.def()
    }
}

impl Related<super::response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for InterviewSession {
    fn from(model: Model) -> Self {
        InterviewSession {
            id: model.id,
            user_id: model.user_id,
            description: model.description,
            domain_id: model.domain_id,
            started_at: model.started_at,
            completed_at: model.completed_at,
        }
    }
}

//! Owning user, mapped only as far as the session relation needs.

use sea_orm::entity::prelude::*;

use domain::UserRef;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::interview_session::Entity")]
    InterviewSessions,
}

impl Related<super::interview_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserRef {
    fn from(model: Model) -> Self {
        UserRef { id: model.id }
    }
}

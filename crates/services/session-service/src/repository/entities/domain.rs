//! Interview domain (subject-matter category) reference entity.

use sea_orm::entity::prelude::*;

use domain::DomainRef;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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

impl From<Model> for DomainRef {
    fn from(model: Model) -> Self {
        DomainRef { id: model.id }
    }
}

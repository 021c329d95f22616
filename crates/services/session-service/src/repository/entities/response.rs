use sea_orm::entity::prelude::*;

use domain::ResponseRef;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "responses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub session_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interview_session::Entity",
        from = "Column::SessionId",
        to = "super::interview_session::Column::Id"
    )]
    Session,
}

impl Related<super::interview_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResponseRef {
    fn from(model: Model) -> Self {
        ResponseRef {
            id: model.id,
            session_id: model.session_id,
        }
    }
}

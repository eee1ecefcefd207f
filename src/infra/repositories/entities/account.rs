//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AccountId, StoredAccount};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Hashed form only
    pub password: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for StoredAccount {
    fn from(model: Model) -> Self {
        StoredAccount {
            id: AccountId::from(model.id),
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}

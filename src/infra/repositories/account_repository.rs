//! Account repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::account::ActiveModel;
use crate::domain::{AccountCreationInput, StoredAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account persistence capability.
///
/// `add` assigns a fresh identifier. The input password must already be
/// hashed; the repository stores whatever it is given.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    async fn add(&self, input: AccountCreationInput) -> AppResult<StoredAccount>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: Arc<DatabaseConnection>,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn add(&self, input: AccountCreationInput) -> AppResult<StoredAccount> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            password: Set(input.password),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&*self.db).await.map_err(AppError::from)?;
        Ok(StoredAccount::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::entities::account::Model;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    fn input() -> AccountCreationInput {
        AccountCreationInput {
            name: "any_name".to_string(),
            email: "any_email@email.com".to_string(),
            password: "any_password".to_string(),
        }
    }

    fn row(id: Uuid) -> Model {
        Model {
            id,
            name: "any_name".to_string(),
            email: "any_email@email.com".to_string(),
            password: "any_password".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_returns_account_on_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(id)]])
            .into_connection();

        let store = AccountStore::new(Arc::new(db));
        let account = store.add(input()).await.unwrap();

        assert_eq!(account.id.as_str(), id.to_string());
        assert_eq!(account.name, "any_name");
        assert_eq!(account.email, "any_email@email.com");
        assert_eq!(account.password, "any_password");
    }

    #[tokio::test]
    async fn test_add_assigns_fresh_id_per_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(Uuid::new_v4())], vec![row(Uuid::new_v4())]])
            .into_connection();
        let db = Arc::new(db);

        let store = AccountStore::new(Arc::clone(&db));
        store.add(input()).await.unwrap();
        store.add(input()).await.unwrap();
        drop(store);

        let log = Arc::try_unwrap(db)
            .map_err(|_| "connection still shared")
            .unwrap()
            .into_transaction_log();
        let inserted: Vec<Uuid> = log
            .iter()
            .flat_map(|txn| txn.statements())
            .filter_map(|stmt| stmt.values.as_ref())
            .filter_map(|values| {
                values.0.iter().find_map(|value| match value {
                    Value::Uuid(Some(id)) => Some(**id),
                    _ => None,
                })
            })
            .collect();

        assert_eq!(inserted.len(), 2);
        assert_ne!(inserted[0], inserted[1]);
    }

    #[tokio::test]
    async fn test_add_propagates_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let store = AccountStore::new(Arc::new(db));
        let result = store.add(input()).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}

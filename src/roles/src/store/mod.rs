//! Role persistence
//!
//! The binding layer talks to storage only through [`RoleStore`]: roles
//! keyed by their identity triple, a unique (user, role) join relation, and
//! the one-to-many link between an authorizable object and its scoped roles.
//!
//! Backends:
//! - [`MemoryRoleStore`]: process-local maps, for tests and development
//! - [`PostgresRoleStore`]: sqlx connection pool (feature `postgres`)

use crate::config::{StoreBackend, StoreSection};
use crate::error::{RoleError, Result};
use crate::role::{Role, RoleKey};
use crate::types::{AuthorizableId, RoleId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryRoleStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRoleStore;

/// Role store trait
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Find the role with exactly this identity triple
    async fn find_role(&self, key: &RoleKey) -> Result<Option<Role>>;

    /// All roles with this name, whatever their scope
    async fn find_roles_named(&self, name: &str) -> Result<Vec<Role>>;

    /// Insert a role, or return the existing record when the triple is taken
    async fn insert_role(&self, key: RoleKey) -> Result<Role>;

    /// Delete a role record together with the join rows referencing it
    async fn delete_role(&self, role_id: RoleId) -> Result<()>;

    /// Roles bound to a user
    async fn roles_of_user(&self, user_id: UserId) -> Result<Vec<Role>>;

    /// Whether the (user, role) pair exists
    async fn user_holds_role(&self, user_id: UserId, role_id: RoleId) -> Result<bool>;

    /// Bind a role to a user. Returns `false` if the pair already existed.
    /// Fails if the role record no longer exists.
    async fn add_user_role(&self, user_id: UserId, role_id: RoleId) -> Result<bool>;

    /// Unbind one role from a user
    async fn remove_user_role(&self, user_id: UserId, role_id: RoleId) -> Result<()>;

    /// Unbind every role from a user
    async fn remove_user_roles(&self, user_id: UserId) -> Result<()>;

    /// Number of users bound to a role
    async fn count_role_users(&self, role_id: RoleId) -> Result<usize>;

    /// Delete every join row referencing a role
    async fn delete_role_assignments(&self, role_id: RoleId) -> Result<()>;

    /// Roles scoped to one object
    async fn roles_for_authorizable(
        &self,
        authorizable_type: &str,
        authorizable_id: AuthorizableId,
    ) -> Result<Vec<Role>>;

    /// Distinct users holding any role scoped to one object
    async fn users_for_authorizable(
        &self,
        authorizable_type: &str,
        authorizable_id: AuthorizableId,
    ) -> Result<Vec<UserId>>;
}

/// Build the store selected by configuration
pub async fn connect(section: &StoreSection) -> Result<Arc<dyn RoleStore>> {
    match section.backend {
        StoreBackend::Memory => {
            info!("Using in-memory role store");
            Ok(Arc::new(MemoryRoleStore::new()))
        }
        #[cfg(feature = "postgres")]
        StoreBackend::Postgres => {
            let url = section.database_url.as_deref().ok_or_else(|| {
                RoleError::Configuration("postgres backend requires database_url".to_string())
            })?;
            let store = PostgresRoleStore::connect(url, section).await?;
            if section.run_migrations {
                store.run_migrations().await?;
            }
            info!("Using PostgreSQL role store");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        StoreBackend::Postgres => Err(RoleError::Configuration(
            "postgres backend requires the `postgres` feature".to_string(),
        )),
    }
}

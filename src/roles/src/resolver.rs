//! Role resolution
//!
//! Maps a (name, scope) pair to the unique role record with that identity
//! triple, creating it on demand for grant paths.

use crate::error::{RoleError, Result};
use crate::role::{Role, RoleKey};
use crate::store::RoleStore;
use crate::types::RoleScope;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves role names under a scope descriptor
#[derive(Clone)]
pub struct RoleResolver {
    store: Arc<dyn RoleStore>,
}

impl RoleResolver {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Find the role `name` resolves to under `scope`.
    ///
    /// - `Global`: null type, null id
    /// - `Class(type)`: matching type, null id
    /// - `Instance(type, id)`: matching type and id
    pub async fn resolve(&self, name: &str, scope: &RoleScope) -> Result<Option<Role>> {
        let role = self.store.find_role(&RoleKey::new(name, scope)).await?;
        debug!(
            "Resolved role '{}' on {}: {}",
            name,
            scope,
            role.as_ref().map_or("none".to_string(), |r| r.id.to_string())
        );
        Ok(role)
    }

    /// Resolve `name` under `scope`, creating the record if it does not exist.
    ///
    /// Creation goes through [`RoleStore::insert_role`], which returns the
    /// existing record when a concurrent caller inserted the same key first.
    pub async fn resolve_or_create(&self, name: &str, scope: &RoleScope) -> Result<Role> {
        if let Some(role) = self.resolve(name, scope).await? {
            return Ok(role);
        }

        if name.trim().is_empty() {
            return Err(RoleError::InvalidArgument(
                "Role name cannot be empty".to_string(),
            ));
        }

        let role = self.store.insert_role(RoleKey::new(name, scope)).await?;
        info!("Created role '{}' on {} (id={})", role.name, scope, role.id);
        Ok(role)
    }
}

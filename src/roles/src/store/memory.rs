//! In-memory role store
//!
//! State lives in maps guarded by a single `tokio::sync::RwLock`, so every
//! mutation (including find-or-insert of a role) is serialized within the
//! process. Nothing is durable.

use super::RoleStore;
use crate::error::{RoleError, Result};
use crate::role::{Role, RoleKey};
use crate::types::{AuthorizableId, RoleId, UserId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    next_id: RoleId,
    roles: BTreeMap<RoleId, Role>,
    keys: HashMap<RoleKey, RoleId>,
    /// (user_id, role_id) join rows
    assignments: BTreeSet<(UserId, RoleId)>,
}

impl State {
    fn user_range(user_id: UserId) -> std::ops::RangeInclusive<(UserId, RoleId)> {
        (user_id, RoleId::MIN)..=(user_id, RoleId::MAX)
    }

    fn scoped_role_ids(
        &self,
        authorizable_type: &str,
        authorizable_id: AuthorizableId,
    ) -> BTreeSet<RoleId> {
        self.roles
            .values()
            .filter(|r| {
                r.authorizable_type.as_deref() == Some(authorizable_type)
                    && r.authorizable_id == Some(authorizable_id)
            })
            .map(|r| r.id)
            .collect()
    }
}

/// In-memory role store implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleStore {
    state: Arc<RwLock<State>>,
}

impl MemoryRoleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of role records
    pub async fn role_count(&self) -> usize {
        self.state.read().await.roles.len()
    }

    /// Number of join rows
    pub async fn assignment_count(&self) -> usize {
        self.state.read().await.assignments.len()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn find_role(&self, key: &RoleKey) -> Result<Option<Role>> {
        let state = self.state.read().await;
        Ok(state.keys.get(key).and_then(|id| state.roles.get(id)).cloned())
    }

    async fn find_roles_named(&self, name: &str) -> Result<Vec<Role>> {
        let state = self.state.read().await;
        Ok(state
            .roles
            .values()
            .filter(|r| r.name == name)
            .cloned()
            .collect())
    }

    async fn insert_role(&self, key: RoleKey) -> Result<Role> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.keys.get(&key).and_then(|id| state.roles.get(id)) {
            return Ok(existing.clone());
        }

        state.next_id += 1;
        let role = Role {
            id: state.next_id,
            name: key.name.clone(),
            authorizable_type: key.authorizable_type.clone(),
            authorizable_id: key.authorizable_id,
            created_at: Utc::now(),
        };
        state.keys.insert(key, role.id);
        state.roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn delete_role(&self, role_id: RoleId) -> Result<()> {
        let mut state = self.state.write().await;
        if let Some(role) = state.roles.remove(&role_id) {
            state.keys.remove(&role.key());
        }
        state.assignments.retain(|(_, r)| *r != role_id);
        Ok(())
    }

    async fn roles_of_user(&self, user_id: UserId) -> Result<Vec<Role>> {
        let state = self.state.read().await;
        Ok(state
            .assignments
            .range(State::user_range(user_id))
            .filter_map(|(_, role_id)| state.roles.get(role_id))
            .cloned()
            .collect())
    }

    async fn user_holds_role(&self, user_id: UserId, role_id: RoleId) -> Result<bool> {
        Ok(self.state.read().await.assignments.contains(&(user_id, role_id)))
    }

    async fn add_user_role(&self, user_id: UserId, role_id: RoleId) -> Result<bool> {
        let mut state = self.state.write().await;
        if !state.roles.contains_key(&role_id) {
            return Err(RoleError::DatabaseError(format!(
                "Failed to bind role to user: role {} does not exist",
                role_id
            )));
        }
        Ok(state.assignments.insert((user_id, role_id)))
    }

    async fn remove_user_role(&self, user_id: UserId, role_id: RoleId) -> Result<()> {
        self.state.write().await.assignments.remove(&(user_id, role_id));
        Ok(())
    }

    async fn remove_user_roles(&self, user_id: UserId) -> Result<()> {
        self.state
            .write()
            .await
            .assignments
            .retain(|(u, _)| *u != user_id);
        Ok(())
    }

    async fn count_role_users(&self, role_id: RoleId) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state
            .assignments
            .iter()
            .filter(|(_, r)| *r == role_id)
            .count())
    }

    async fn delete_role_assignments(&self, role_id: RoleId) -> Result<()> {
        self.state
            .write()
            .await
            .assignments
            .retain(|(_, r)| *r != role_id);
        Ok(())
    }

    async fn roles_for_authorizable(
        &self,
        authorizable_type: &str,
        authorizable_id: AuthorizableId,
    ) -> Result<Vec<Role>> {
        let state = self.state.read().await;
        let role_ids = state.scoped_role_ids(authorizable_type, authorizable_id);
        let roles = role_ids
            .iter()
            .filter_map(|id| state.roles.get(id))
            .cloned()
            .collect();
        Ok(roles)
    }

    async fn users_for_authorizable(
        &self,
        authorizable_type: &str,
        authorizable_id: AuthorizableId,
    ) -> Result<Vec<UserId>> {
        let state = self.state.read().await;
        let role_ids = state.scoped_role_ids(authorizable_type, authorizable_id);
        let users: BTreeSet<UserId> = state
            .assignments
            .iter()
            .filter(|(_, r)| role_ids.contains(r))
            .map(|(u, _)| *u)
            .collect();
        Ok(users.into_iter().collect())
    }
}

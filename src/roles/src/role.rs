//! Role entity and its identity key

use crate::types::{AuthorizableId, RoleId, RoleScope};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored role record
///
/// A role is a name plus an optional reference to the object (or type) it
/// is scoped to. Names are unique only within a scope; see [`RoleKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Role {
    /// Record identifier
    pub id: RoleId,

    /// Role name (e.g. "admin", "editor")
    pub name: String,

    /// Root type of the scoping object, `None` for global roles
    pub authorizable_type: Option<String>,

    /// Scoping object, `None` for global and type-level roles
    pub authorizable_id: Option<AuthorizableId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Identity triple of this record
    pub fn key(&self) -> RoleKey {
        RoleKey {
            name: self.name.clone(),
            authorizable_type: self.authorizable_type.clone(),
            authorizable_id: self.authorizable_id,
        }
    }

    /// Scope descriptor this record was created under
    pub fn scope(&self) -> RoleScope {
        scope_of(self.authorizable_type.as_deref(), self.authorizable_id)
    }

    /// Whether this record falls under `scope`
    pub fn in_scope(&self, scope: &RoleScope) -> bool {
        scope.covers(self.authorizable_type.as_deref(), self.authorizable_id)
    }
}

/// The (name, authorizable_type, authorizable_id) triple identifying a role.
/// At most one [`Role`] exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleKey {
    pub name: String,
    pub authorizable_type: Option<String>,
    pub authorizable_id: Option<AuthorizableId>,
}

impl RoleKey {
    /// Key a role name resolves to under `scope`
    pub fn new(name: impl Into<String>, scope: &RoleScope) -> Self {
        Self {
            name: name.into(),
            authorizable_type: scope.authorizable_type().map(str::to_string),
            authorizable_id: scope.authorizable_id(),
        }
    }

    pub fn scope(&self) -> RoleScope {
        scope_of(self.authorizable_type.as_deref(), self.authorizable_id)
    }
}

fn scope_of(authorizable_type: Option<&str>, authorizable_id: Option<AuthorizableId>) -> RoleScope {
    match (authorizable_type, authorizable_id) {
        (Some(authorizable_type), Some(id)) => RoleScope::instance(authorizable_type, id),
        (Some(authorizable_type), None) => RoleScope::class(authorizable_type),
        (None, _) => RoleScope::Global,
    }
}

//! Core role-binding types: identifiers, scope descriptors and the
//! capabilities an entity implements to take part in role binding.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role record identifier
pub type RoleId = i64;

/// User identifier
pub type UserId = i64;

/// Identifier of an authorizable domain object
pub type AuthorizableId = i64;

/// Which role triple a role name resolves to.
///
/// - `Global`: no scoping object (`authorizable_type` and `authorizable_id` both null)
/// - `Class(type)`: scoped to a whole type (`authorizable_id` null)
/// - `Instance(type, id)`: scoped to one object
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoleScope {
    #[default]
    Global,
    Class {
        #[serde(rename = "type")]
        authorizable_type: String,
    },
    Instance {
        #[serde(rename = "type")]
        authorizable_type: String,
        id: AuthorizableId,
    },
}

impl RoleScope {
    /// Scope covering a whole type
    pub fn class(authorizable_type: impl Into<String>) -> Self {
        Self::Class {
            authorizable_type: authorizable_type.into(),
        }
    }

    /// Scope covering a single object
    pub fn instance(authorizable_type: impl Into<String>, id: AuthorizableId) -> Self {
        Self::Instance {
            authorizable_type: authorizable_type.into(),
            id,
        }
    }

    /// Scope of a concrete authorizable object, keyed by its root type
    pub fn of<A: Authorizable + ?Sized>(object: &A) -> Self {
        Self::instance(object.authorizable_type(), object.authorizable_id())
    }

    /// The `authorizable_type` column value this scope stores
    pub fn authorizable_type(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Class { authorizable_type } | Self::Instance { authorizable_type, .. } => {
                Some(authorizable_type)
            }
        }
    }

    /// The `authorizable_id` column value this scope stores
    pub fn authorizable_id(&self) -> Option<AuthorizableId> {
        match self {
            Self::Instance { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Whether a role with the given scope columns falls under this descriptor.
    ///
    /// `Global` covers every role not bound to an object, so type-level
    /// roles are included alongside global ones.
    pub fn covers(
        &self,
        authorizable_type: Option<&str>,
        authorizable_id: Option<AuthorizableId>,
    ) -> bool {
        match self {
            Self::Global => authorizable_id.is_none(),
            _ => {
                self.authorizable_type() == authorizable_type
                    && self.authorizable_id() == authorizable_id
            }
        }
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Class { authorizable_type } => write!(f, "{}", authorizable_type),
            Self::Instance {
                authorizable_type,
                id,
            } => write!(f, "{}#{}", authorizable_type, id),
        }
    }
}

/// Who holds a role: a user, or a type acting as a role-template registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holder {
    User(UserId),
    Type(String),
}

impl Holder {
    pub fn user(id: UserId) -> Self {
        Self::User(id)
    }

    pub fn of_type(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{}", id),
            Self::Type(name) => write!(f, "type:{}", name),
        }
    }
}

/// Capability of an entity that can hold roles
pub trait RoleHolder {
    fn holder(&self) -> Holder;
}

impl RoleHolder for Holder {
    fn holder(&self) -> Holder {
        self.clone()
    }
}

/// Capability of a domain object that can be the target of scoped roles
pub trait Authorizable {
    /// Root type name. Subtypes must return their base type so they share
    /// one role namespace.
    fn authorizable_type(&self) -> &str;

    /// Primary key of the object
    fn authorizable_id(&self) -> AuthorizableId;
}

/// Anything a role can be accepted on: an authorizable object, or an
/// explicit scope descriptor for type-level acceptance
pub trait RoleTarget {
    fn role_scope(&self) -> RoleScope;
}

impl<A: Authorizable + ?Sized> RoleTarget for A {
    fn role_scope(&self) -> RoleScope {
        RoleScope::of(self)
    }
}

impl RoleTarget for RoleScope {
    fn role_scope(&self) -> RoleScope {
        self.clone()
    }
}

/// Loads authorizable objects of one root type by identifier
#[async_trait]
pub trait AuthorizableFinder: Send + Sync {
    /// Loaded object type
    type Object: Send;

    /// Root type name the finder loads
    fn authorizable_type(&self) -> &str;

    /// Load the objects that exist among `ids`; missing ids are skipped
    async fn find_by_ids(&self, ids: &[AuthorizableId]) -> Result<Vec<Self::Object>>;
}

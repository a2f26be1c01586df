//! # Object Roles
//!
//! Role-based access control with optionally object-scoped roles.
//!
//! A role is a name plus an optional scope: global, a whole type
//! (`Class`), or one object of that type (`Instance`). Users are bound to
//! roles through a unique join relation; domain objects expose the same
//! operations from their side and cascade-delete their scoped roles when
//! destroyed.
//!
//! ## Example
//!
//! ```rust
//! use object_roles::{
//!     Authorizable, AuthorizableBindings, AuthorizableId, Holder, MemoryRoleStore, RoleScope,
//! };
//! use std::sync::Arc;
//!
//! struct Post {
//!     id: AuthorizableId,
//! }
//!
//! impl Authorizable for Post {
//!     fn authorizable_type(&self) -> &str {
//!         "Post"
//!     }
//!
//!     fn authorizable_id(&self) -> AuthorizableId {
//!         self.id
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> object_roles::Result<()> {
//! let objects = AuthorizableBindings::from_store(Arc::new(MemoryRoleStore::new()));
//! let alice = Holder::user(1);
//! let post = Post { id: 42 };
//!
//! objects.accept_role(&post, "editor", &alice).await?;
//! assert!(objects
//!     .bindings()
//!     .has_role(&alice, "editor", &RoleScope::instance("Post", 42))
//!     .await?);
//!
//! objects.remove_accepted_roles(&post).await?;
//! assert!(!objects.accepts_role(&post, "editor", &alice).await?);
//! # Ok(())
//! # }
//! ```

pub mod authorizable;
pub mod bindings;
pub mod config;
pub mod error;
pub mod resolver;
pub mod role;
pub mod store;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use authorizable::AuthorizableBindings;
pub use bindings::RoleBindings;
pub use config::{LoggingSection, RolesConfig, StoreBackend, StoreSection};
pub use error::{Result, RoleError};
pub use resolver::RoleResolver;
pub use role::{Role, RoleKey};
pub use store::{MemoryRoleStore, RoleStore};
pub use types::{
    Authorizable, AuthorizableFinder, AuthorizableId, Holder, RoleHolder, RoleId, RoleScope,
    RoleTarget, UserId,
};

#[cfg(feature = "postgres")]
pub use store::PostgresRoleStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

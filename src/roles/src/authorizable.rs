//! Authorizable-object binding API
//!
//! The object-side view of role binding. Every query and grant forwards to
//! [`RoleBindings`] with the object (or an explicit type scope) as target.
//! [`AuthorizableBindings::remove_accepted_roles`] is the destroy hook:
//! it deletes every role scoped to the object regardless of who still
//! holds it.

use crate::bindings::RoleBindings;
use crate::error::Result;
use crate::role::Role;
use crate::store::RoleStore;
use crate::types::{Authorizable, AuthorizableFinder, RoleHolder, RoleScope, RoleTarget, UserId};
use std::sync::Arc;
use tracing::{debug, info};

/// Role binding operations seen from the scoping object
#[derive(Clone)]
pub struct AuthorizableBindings {
    bindings: RoleBindings,
}

impl AuthorizableBindings {
    pub fn new(bindings: RoleBindings) -> Self {
        Self { bindings }
    }

    /// Build bindings over a store
    pub fn from_store(store: Arc<dyn RoleStore>) -> Self {
        Self::new(RoleBindings::new(store))
    }

    /// User-side bindings these delegate to
    pub fn bindings(&self) -> &RoleBindings {
        &self.bindings
    }

    /// Whether `user` has role `name` on `target`
    pub async fn accepts_role<T, U>(&self, target: &T, name: &str, user: &U) -> Result<bool>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.bindings.has_role(user, name, &target.role_scope()).await
    }

    /// Grant `user` role `name` on `target`
    pub async fn accept_role<T, U>(&self, target: &T, name: &str, user: &U) -> Result<Role>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.bindings.add_role(user, name, &target.role_scope()).await
    }

    /// Revoke role `name` on `target` from `user`
    pub async fn reject_role<T, U>(&self, target: &T, name: &str, user: &U) -> Result<bool>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.bindings.remove_role(user, name, &target.role_scope()).await
    }

    /// Whether `user` holds any role on `target`
    pub async fn accepts_roles_by<T, U>(&self, target: &T, user: &U) -> Result<bool>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.bindings.has_roles_for(user, &target.role_scope()).await
    }

    /// Alias of [`AuthorizableBindings::accepts_roles_by`]
    pub async fn accepts_role_by<T, U>(&self, target: &T, user: &U) -> Result<bool>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.accepts_roles_by(target, user).await
    }

    /// Roles `user` holds on `target`
    pub async fn accepted_roles_by<T, U>(&self, target: &T, user: &U) -> Result<Vec<Role>>
    where
        T: RoleTarget + ?Sized,
        U: RoleHolder + ?Sized,
    {
        self.bindings.roles_for(user, &target.role_scope()).await
    }

    /// Objects of the finder's type on which `user` holds any role
    pub async fn authorizables_by<F, U>(&self, finder: &F, user: &U) -> Result<Vec<F::Object>>
    where
        F: AuthorizableFinder + ?Sized,
        U: RoleHolder + ?Sized,
    {
        let target = RoleScope::class(finder.authorizable_type());
        self.bindings.authorizables_for(user, &target, finder).await
    }

    /// Distinct users holding any role on `object`
    pub async fn users<A>(&self, object: &A) -> Result<Vec<UserId>>
    where
        A: Authorizable + ?Sized,
    {
        self.bindings
            .store()
            .users_for_authorizable(object.authorizable_type(), object.authorizable_id())
            .await
    }

    /// Destroy hook: delete every role scoped to `object` and the join rows
    /// referencing them. Call before deleting the object itself.
    ///
    /// Unlike orphan cleanup this does not look at who still holds the roles.
    pub async fn remove_accepted_roles<A>(&self, object: &A) -> Result<Vec<Role>>
    where
        A: Authorizable + ?Sized,
    {
        let store = self.bindings.store();
        let roles = store
            .roles_for_authorizable(object.authorizable_type(), object.authorizable_id())
            .await?;

        for role in &roles {
            store.delete_role_assignments(role.id).await?;
            store.delete_role(role.id).await?;
            debug!("Deleted role '{}' (id={})", role.name, role.id);
        }

        info!(
            "Removed {} roles scoped to {}",
            roles.len(),
            RoleScope::of(object)
        );
        Ok(roles)
    }
}

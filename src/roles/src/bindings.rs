//! User-role binding API
//!
//! Grants, revokes and queries roles for a [`RoleHolder`]. A holder is
//! either a user, whose roles live in the `roles_users` join relation, or a
//! type acting as a registry of role templates (roles are created but never
//! bound).
//!
//! Revocation runs orphan cleanup: a role whose last bound user was removed
//! is deleted. This is distinct from the unconditional cascade run when an
//! authorizable object is destroyed (see [`crate::authorizable`]).

use crate::error::{RoleError, Result};
use crate::resolver::RoleResolver;
use crate::role::Role;
use crate::store::RoleStore;
use crate::types::{AuthorizableFinder, AuthorizableId, Holder, RoleHolder, RoleScope, UserId};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Role binding operations for users and type-level holders
#[derive(Clone)]
pub struct RoleBindings {
    store: Arc<dyn RoleStore>,
    resolver: RoleResolver,
}

impl RoleBindings {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        let resolver = RoleResolver::new(store.clone());
        Self { store, resolver }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn RoleStore> {
        &self.store
    }

    pub fn resolver(&self) -> &RoleResolver {
        &self.resolver
    }

    /// Whether `holder` has role `name` under `scope`.
    ///
    /// With a scope, true iff the holder is bound to exactly the resolved
    /// role. Without one (`RoleScope::Global`) the check is permissive: a
    /// user passes when they hold any role at all, or when a global role
    /// named `name` exists in the store. A type-level holder passes when any
    /// role named `name` exists.
    pub async fn has_role<H>(&self, holder: &H, name: &str, scope: &RoleScope) -> Result<bool>
    where
        H: RoleHolder + ?Sized,
    {
        let held = match (holder.holder(), scope) {
            (Holder::User(user_id), RoleScope::Global) => {
                !self.store.roles_of_user(user_id).await?.is_empty()
                    || self.resolver.resolve(name, scope).await?.is_some()
            }
            (Holder::Type(_), RoleScope::Global) => {
                !self.store.find_roles_named(name).await?.is_empty()
            }
            (Holder::User(user_id), _) => match self.resolver.resolve(name, scope).await? {
                Some(role) => self.store.user_holds_role(user_id, role.id).await?,
                None => false,
            },
            (Holder::Type(_), _) => self.resolver.resolve(name, scope).await?.is_some(),
        };
        Ok(held)
    }

    /// Grant role `name` under `scope`, creating the role if needed.
    ///
    /// Users are bound at most once per role. Type-level holders only
    /// register the role.
    pub async fn add_role<H>(&self, holder: &H, name: &str, scope: &RoleScope) -> Result<Role>
    where
        H: RoleHolder + ?Sized,
    {
        let role = self.resolver.resolve_or_create(name, scope).await?;

        match holder.holder() {
            Holder::User(user_id) => {
                if self.store.add_user_role(user_id, role.id).await? {
                    info!("Granted role '{}' on {} to user {}", name, scope, user_id);
                } else {
                    debug!("User {} already holds role '{}' on {}", user_id, name, scope);
                }
            }
            Holder::Type(type_name) => {
                debug!("Registered role '{}' on {} for type {}", name, scope, type_name);
            }
        }

        Ok(role)
    }

    /// Revoke role `name` under `scope`.
    ///
    /// For a user, unbinds the role and deletes it if no user holds it any
    /// more. For a type-level holder, deletes the role record. Returns
    /// `false` when the name did not resolve to a role.
    pub async fn remove_role<H>(&self, holder: &H, name: &str, scope: &RoleScope) -> Result<bool>
    where
        H: RoleHolder + ?Sized,
    {
        let Some(role) = self.resolver.resolve(name, scope).await? else {
            debug!("No role '{}' on {} to remove", name, scope);
            return Ok(false);
        };

        match holder.holder() {
            Holder::User(user_id) => {
                self.store.remove_user_role(user_id, role.id).await?;
                debug!("Removed role '{}' on {} from user {}", name, scope, user_id);
                self.delete_role_if_orphaned(&role).await?;
            }
            Holder::Type(type_name) => {
                self.store.delete_role(role.id).await?;
                info!("Deleted role '{}' on {} registered by type {}", name, scope, type_name);
            }
        }

        Ok(true)
    }

    /// Whether the user holds at least one role under `scope`
    pub async fn has_roles_for<H>(&self, holder: &H, scope: &RoleScope) -> Result<bool>
    where
        H: RoleHolder + ?Sized,
    {
        Ok(!self.roles_for(holder, scope).await?.is_empty())
    }

    /// Alias of [`RoleBindings::has_roles_for`]
    pub async fn has_role_for<H>(&self, holder: &H, scope: &RoleScope) -> Result<bool>
    where
        H: RoleHolder + ?Sized,
    {
        self.has_roles_for(holder, scope).await
    }

    /// The user's roles that fall under `scope`
    pub async fn roles_for<H>(&self, holder: &H, scope: &RoleScope) -> Result<Vec<Role>>
    where
        H: RoleHolder + ?Sized,
    {
        let user_id = user_of(holder)?;
        let roles = self
            .store
            .roles_of_user(user_id)
            .await?
            .into_iter()
            .filter(|r| r.in_scope(scope))
            .collect();
        Ok(roles)
    }

    /// Unbind every role under `scope` from the user, then clean up the
    /// roles left without users. Returns the unbound roles.
    pub async fn remove_roles_for<H>(&self, holder: &H, scope: &RoleScope) -> Result<Vec<Role>>
    where
        H: RoleHolder + ?Sized,
    {
        let user_id = user_of(holder)?;
        let removed = self.roles_for(holder, scope).await?;

        for role in &removed {
            self.store.remove_user_role(user_id, role.id).await?;
        }
        for role in &removed {
            self.delete_role_if_orphaned(role).await?;
        }

        debug!("Removed {} roles on {} from user {}", removed.len(), scope, user_id);
        Ok(removed)
    }

    /// Unbind every role from the user, then clean up orphaned roles.
    /// Returns the unbound roles.
    pub async fn remove_all_roles<H>(&self, holder: &H) -> Result<Vec<Role>>
    where
        H: RoleHolder + ?Sized,
    {
        let user_id = user_of(holder)?;
        let removed = self.store.roles_of_user(user_id).await?;

        self.store.remove_user_roles(user_id).await?;
        for role in &removed {
            self.delete_role_if_orphaned(role).await?;
        }

        debug!("Removed all {} roles from user {}", removed.len(), user_id);
        Ok(removed)
    }

    /// Drop the user's join rows ahead of deleting the user itself.
    ///
    /// Roles left without users are kept; use
    /// [`RoleBindings::remove_all_roles`] to clean them up as well.
    pub async fn remove_user<H>(&self, holder: &H) -> Result<()>
    where
        H: RoleHolder + ?Sized,
    {
        let user_id = user_of(holder)?;
        self.store.remove_user_roles(user_id).await?;
        debug!("Dropped role bindings of user {}", user_id);
        Ok(())
    }

    /// Objects of the type `target` names on which the user holds any role.
    ///
    /// `target` must be `RoleScope::Class` and name the same root type as
    /// `finder`, otherwise `InvalidArgument` is returned. If any referenced
    /// object no longer exists the result is empty.
    pub async fn authorizables_for<H, F>(
        &self,
        holder: &H,
        target: &RoleScope,
        finder: &F,
    ) -> Result<Vec<F::Object>>
    where
        H: RoleHolder + ?Sized,
        F: AuthorizableFinder + ?Sized,
    {
        let RoleScope::Class { authorizable_type } = target else {
            return Err(RoleError::InvalidArgument(format!(
                "'{}'. You must provide a type here",
                target
            )));
        };

        if authorizable_type != finder.authorizable_type() {
            return Err(RoleError::InvalidArgument(format!(
                "type '{}' does not match finder type '{}'",
                authorizable_type,
                finder.authorizable_type()
            )));
        }

        let user_id = user_of(holder)?;
        let ids: Vec<AuthorizableId> = self
            .store
            .roles_of_user(user_id)
            .await?
            .into_iter()
            .filter(|r| r.authorizable_type.as_deref() == Some(authorizable_type.as_str()))
            .filter_map(|r| r.authorizable_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let objects = finder.find_by_ids(&ids).await?;
        if objects.len() < ids.len() {
            warn!(
                "{} of {} {} objects referenced by roles of user {} no longer exist",
                ids.len() - objects.len(),
                ids.len(),
                authorizable_type,
                user_id
            );
            return Ok(Vec::new());
        }

        Ok(objects)
    }

    /// Delete `role` if no user holds it any more
    async fn delete_role_if_orphaned(&self, role: &Role) -> Result<()> {
        if self.store.count_role_users(role.id).await? == 0 {
            self.store.delete_role(role.id).await?;
            info!("Deleted orphaned role '{}' (id={})", role.name, role.id);
        }
        Ok(())
    }
}

fn user_of<H: RoleHolder + ?Sized>(holder: &H) -> Result<UserId> {
    match holder.holder() {
        Holder::User(user_id) => Ok(user_id),
        Holder::Type(type_name) => Err(RoleError::InvalidArgument(format!(
            "type '{}' has no role collection",
            type_name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRoleStore;

    fn bindings() -> (RoleBindings, MemoryRoleStore) {
        let store = MemoryRoleStore::new();
        (RoleBindings::new(Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_add_role_then_has_role() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);

        bindings.add_role(&user, "admin", &RoleScope::Global).await.unwrap();

        assert!(bindings.has_role(&user, "admin", &RoleScope::Global).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_role_is_idempotent() {
        let (bindings, store) = bindings();
        let user = Holder::user(1);
        let scope = RoleScope::instance("Post", 42);

        let first = bindings.add_role(&user, "editor", &scope).await.unwrap();
        let second = bindings.add_role(&user, "editor", &scope).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.assignment_count().await, 1);
        assert_eq!(store.count_role_users(first.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unscoped_check_is_permissive() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);

        assert!(!bindings.has_role(&user, "admin", &RoleScope::Global).await.unwrap());

        // Any held role satisfies an unscoped check, whatever its name
        bindings
            .add_role(&user, "editor", &RoleScope::instance("Post", 1))
            .await
            .unwrap();
        assert!(bindings.has_role(&user, "admin", &RoleScope::Global).await.unwrap());

        // So does the mere existence of a global role of that name
        let other = Holder::user(2);
        bindings.add_role(&Holder::user(3), "auditor", &RoleScope::Global).await.unwrap();
        assert!(bindings.has_role(&other, "auditor", &RoleScope::Global).await.unwrap());
        assert!(!bindings.has_role(&other, "admin", &RoleScope::Global).await.unwrap());
    }

    #[tokio::test]
    async fn test_scoped_check_is_exact() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);

        bindings
            .add_role(&user, "editor", &RoleScope::instance("Post", 42))
            .await
            .unwrap();

        assert!(bindings
            .has_role(&user, "editor", &RoleScope::instance("Post", 42))
            .await
            .unwrap());
        assert!(!bindings
            .has_role(&user, "editor", &RoleScope::instance("Post", 43))
            .await
            .unwrap());
        assert!(!bindings
            .has_role(&user, "editor", &RoleScope::class("Post"))
            .await
            .unwrap());
        assert!(!bindings
            .has_role(&Holder::user(2), "editor", &RoleScope::instance("Post", 42))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_shared_global_role_cleanup() {
        let (bindings, store) = bindings();
        let u = Holder::user(1);
        let v = Holder::user(2);

        let from_u = bindings.add_role(&u, "admin", &RoleScope::Global).await.unwrap();
        let from_v = bindings.add_role(&v, "admin", &RoleScope::Global).await.unwrap();
        assert_eq!(from_u.id, from_v.id);

        assert!(bindings.remove_role(&u, "admin", &RoleScope::Global).await.unwrap());
        assert!(bindings
            .resolver()
            .resolve("admin", &RoleScope::Global)
            .await
            .unwrap()
            .is_some());

        assert!(bindings.remove_role(&v, "admin", &RoleScope::Global).await.unwrap());
        assert!(bindings
            .resolver()
            .resolve("admin", &RoleScope::Global)
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.role_count().await, 0);
    }

    #[tokio::test]
    async fn test_remove_unknown_role() {
        let (bindings, _) = bindings();
        assert!(!bindings
            .remove_role(&Holder::user(1), "ghost", &RoleScope::Global)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_remove_role_not_held_keeps_other_holders() {
        let (bindings, store) = bindings();
        bindings
            .add_role(&Holder::user(1), "moderator", &RoleScope::class("Post"))
            .await
            .unwrap();

        // User 2 never held it; the role survives because user 1 still does
        assert!(bindings
            .remove_role(&Holder::user(2), "moderator", &RoleScope::class("Post"))
            .await
            .unwrap());
        assert_eq!(store.role_count().await, 1);
    }

    #[tokio::test]
    async fn test_type_holder_registers_without_binding() {
        let (bindings, store) = bindings();
        let post_type = Holder::of_type("Post");

        let role = bindings
            .add_role(&post_type, "moderator", &RoleScope::class("Post"))
            .await
            .unwrap();

        assert_eq!(store.role_count().await, 1);
        assert_eq!(store.assignment_count().await, 0);
        assert_eq!(store.count_role_users(role.id).await.unwrap(), 0);

        assert!(bindings
            .has_role(&post_type, "moderator", &RoleScope::class("Post"))
            .await
            .unwrap());
        assert!(bindings
            .has_role(&post_type, "moderator", &RoleScope::Global)
            .await
            .unwrap());
        assert!(!bindings
            .has_role(&post_type, "owner", &RoleScope::Global)
            .await
            .unwrap());

        assert!(bindings
            .remove_role(&post_type, "moderator", &RoleScope::class("Post"))
            .await
            .unwrap());
        assert_eq!(store.role_count().await, 0);
    }

    #[tokio::test]
    async fn test_type_holder_has_no_collection() {
        let (bindings, _) = bindings();
        let result = bindings
            .roles_for(&Holder::of_type("Post"), &RoleScope::Global)
            .await;
        assert!(matches!(result, Err(RoleError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_roles_for_filters_by_scope() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);

        let global = bindings.add_role(&user, "admin", &RoleScope::Global).await.unwrap();
        let class = bindings
            .add_role(&user, "moderator", &RoleScope::class("Post"))
            .await
            .unwrap();
        let instance = bindings
            .add_role(&user, "editor", &RoleScope::instance("Post", 42))
            .await
            .unwrap();
        bindings
            .add_role(&user, "editor", &RoleScope::instance("Comment", 42))
            .await
            .unwrap();

        assert_eq!(
            bindings.roles_for(&user, &RoleScope::Global).await.unwrap(),
            vec![global, class.clone()]
        );
        assert_eq!(
            bindings.roles_for(&user, &RoleScope::class("Post")).await.unwrap(),
            vec![class]
        );
        assert_eq!(
            bindings
                .roles_for(&user, &RoleScope::instance("Post", 42))
                .await
                .unwrap(),
            vec![instance]
        );

        assert!(bindings.has_roles_for(&user, &RoleScope::class("Post")).await.unwrap());
        assert!(!bindings.has_role_for(&user, &RoleScope::class("Comment")).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_roles_for_scope() {
        let (bindings, store) = bindings();
        let u = Holder::user(1);
        let v = Holder::user(2);
        let post = RoleScope::instance("Post", 42);

        bindings.add_role(&u, "editor", &post).await.unwrap();
        bindings.add_role(&u, "reviewer", &post).await.unwrap();
        bindings.add_role(&v, "reviewer", &post).await.unwrap();
        bindings.add_role(&u, "admin", &RoleScope::Global).await.unwrap();

        let removed = bindings.remove_roles_for(&u, &post).await.unwrap();
        assert_eq!(removed.len(), 2);

        assert!(!bindings.has_roles_for(&u, &post).await.unwrap());
        assert!(bindings.has_role(&v, "reviewer", &post).await.unwrap());
        assert!(bindings.has_role(&u, "admin", &RoleScope::Global).await.unwrap());
        // "editor" lost its only user, "reviewer" is still held by v
        assert!(bindings.resolver().resolve("editor", &post).await.unwrap().is_none());
        assert_eq!(store.role_count().await, 2);
    }

    /// Store whose role records are deleted by a concurrent cleanup right
    /// before each bind
    struct CleanupRaceStore {
        inner: MemoryRoleStore,
    }

    #[async_trait::async_trait]
    impl RoleStore for CleanupRaceStore {
        async fn find_role(&self, key: &crate::role::RoleKey) -> Result<Option<Role>> {
            self.inner.find_role(key).await
        }

        async fn find_roles_named(&self, name: &str) -> Result<Vec<Role>> {
            self.inner.find_roles_named(name).await
        }

        async fn insert_role(&self, key: crate::role::RoleKey) -> Result<Role> {
            self.inner.insert_role(key).await
        }

        async fn delete_role(&self, role_id: crate::types::RoleId) -> Result<()> {
            self.inner.delete_role(role_id).await
        }

        async fn roles_of_user(&self, user_id: UserId) -> Result<Vec<Role>> {
            self.inner.roles_of_user(user_id).await
        }

        async fn user_holds_role(&self, user_id: UserId, role_id: crate::types::RoleId) -> Result<bool> {
            self.inner.user_holds_role(user_id, role_id).await
        }

        async fn add_user_role(&self, user_id: UserId, role_id: crate::types::RoleId) -> Result<bool> {
            self.inner.delete_role(role_id).await?;
            self.inner.add_user_role(user_id, role_id).await
        }

        async fn remove_user_role(&self, user_id: UserId, role_id: crate::types::RoleId) -> Result<()> {
            self.inner.remove_user_role(user_id, role_id).await
        }

        async fn remove_user_roles(&self, user_id: UserId) -> Result<()> {
            self.inner.remove_user_roles(user_id).await
        }

        async fn count_role_users(&self, role_id: crate::types::RoleId) -> Result<usize> {
            self.inner.count_role_users(role_id).await
        }

        async fn delete_role_assignments(&self, role_id: crate::types::RoleId) -> Result<()> {
            self.inner.delete_role_assignments(role_id).await
        }

        async fn roles_for_authorizable(
            &self,
            authorizable_type: &str,
            authorizable_id: AuthorizableId,
        ) -> Result<Vec<Role>> {
            self.inner
                .roles_for_authorizable(authorizable_type, authorizable_id)
                .await
        }

        async fn users_for_authorizable(
            &self,
            authorizable_type: &str,
            authorizable_id: AuthorizableId,
        ) -> Result<Vec<UserId>> {
            self.inner
                .users_for_authorizable(authorizable_type, authorizable_id)
                .await
        }
    }

    #[tokio::test]
    async fn test_add_role_fails_when_role_deleted_before_bind() {
        let inner = MemoryRoleStore::new();
        let bindings = RoleBindings::new(Arc::new(CleanupRaceStore {
            inner: inner.clone(),
        }));
        let user = Holder::user(1);
        let scope = RoleScope::class("Post");

        let result = bindings.add_role(&user, "moderator", &scope).await;

        assert!(matches!(result, Err(RoleError::DatabaseError(_))));
        assert!(!bindings.has_role(&user, "moderator", &scope).await.unwrap());
        assert_eq!(inner.assignment_count().await, 0);
    }

    #[tokio::test]
    async fn test_global_scope_includes_type_level_roles() {
        let (bindings, store) = bindings();
        let u = Holder::user(1);

        let moderator = bindings
            .add_role(&u, "moderator", &RoleScope::class("Post"))
            .await
            .unwrap();
        bindings
            .add_role(&u, "editor", &RoleScope::instance("Post", 42))
            .await
            .unwrap();

        assert_eq!(
            bindings.roles_for(&u, &RoleScope::Global).await.unwrap(),
            vec![moderator.clone()]
        );
        assert!(bindings.has_roles_for(&u, &RoleScope::Global).await.unwrap());

        let removed = bindings.remove_roles_for(&u, &RoleScope::Global).await.unwrap();
        assert_eq!(removed, vec![moderator]);
        assert!(!bindings.has_roles_for(&u, &RoleScope::Global).await.unwrap());
        // The instance role is untouched
        assert!(bindings
            .has_roles_for(&u, &RoleScope::instance("Post", 42))
            .await
            .unwrap());
        assert_eq!(store.role_count().await, 1);
    }

    #[tokio::test]
    async fn test_remove_all_roles() {
        let (bindings, store) = bindings();
        let u = Holder::user(1);
        let v = Holder::user(2);

        bindings.add_role(&u, "admin", &RoleScope::Global).await.unwrap();
        bindings.add_role(&u, "moderator", &RoleScope::class("Post")).await.unwrap();
        bindings.add_role(&v, "admin", &RoleScope::Global).await.unwrap();

        let removed = bindings.remove_all_roles(&u).await.unwrap();
        assert_eq!(removed.len(), 2);
        assert!(bindings.roles_for(&u, &RoleScope::Global).await.unwrap().is_empty());
        assert_eq!(store.role_count().await, 1);
        assert!(bindings.has_role(&v, "admin", &RoleScope::Global).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_user_keeps_roles() {
        let (bindings, store) = bindings();
        let u = Holder::user(1);
        bindings.add_role(&u, "moderator", &RoleScope::class("Post")).await.unwrap();

        bindings.remove_user(&u).await.unwrap();

        assert_eq!(store.assignment_count().await, 0);
        assert_eq!(store.role_count().await, 1);
    }

    struct PostFinder {
        existing: Vec<AuthorizableId>,
    }

    #[async_trait::async_trait]
    impl AuthorizableFinder for PostFinder {
        type Object = AuthorizableId;

        fn authorizable_type(&self) -> &str {
            "Post"
        }

        async fn find_by_ids(&self, ids: &[AuthorizableId]) -> Result<Vec<AuthorizableId>> {
            Ok(ids.iter().copied().filter(|id| self.existing.contains(id)).collect())
        }
    }

    #[tokio::test]
    async fn test_authorizables_for() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);
        let finder = PostFinder { existing: vec![1, 2, 3] };

        bindings.add_role(&user, "editor", &RoleScope::instance("Post", 2)).await.unwrap();
        bindings.add_role(&user, "reviewer", &RoleScope::instance("Post", 2)).await.unwrap();
        bindings.add_role(&user, "editor", &RoleScope::instance("Post", 3)).await.unwrap();
        bindings.add_role(&user, "moderator", &RoleScope::class("Post")).await.unwrap();
        bindings
            .add_role(&user, "editor", &RoleScope::instance("Comment", 1))
            .await
            .unwrap();

        let posts = bindings
            .authorizables_for(&user, &RoleScope::class("Post"), &finder)
            .await
            .unwrap();
        assert_eq!(posts, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_authorizables_for_rejects_non_type_target() {
        let (bindings, _) = bindings();
        let finder = PostFinder { existing: vec![] };

        for target in [RoleScope::Global, RoleScope::instance("Post", 1), RoleScope::class("Comment")] {
            let result = bindings
                .authorizables_for(&Holder::user(1), &target, &finder)
                .await;
            assert!(matches!(result, Err(RoleError::InvalidArgument(_))));
        }
    }

    #[tokio::test]
    async fn test_authorizables_for_tolerates_stale_ids() {
        let (bindings, _) = bindings();
        let user = Holder::user(1);
        let finder = PostFinder { existing: vec![1] };

        assert!(bindings
            .authorizables_for(&user, &RoleScope::class("Post"), &finder)
            .await
            .unwrap()
            .is_empty());

        bindings.add_role(&user, "editor", &RoleScope::instance("Post", 1)).await.unwrap();
        bindings.add_role(&user, "editor", &RoleScope::instance("Post", 99)).await.unwrap();

        let posts = bindings
            .authorizables_for(&user, &RoleScope::class("Post"), &finder)
            .await
            .unwrap();
        assert!(posts.is_empty());
    }
}

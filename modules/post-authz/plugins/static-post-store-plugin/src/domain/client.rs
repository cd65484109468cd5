//! Collaborator trait implementations for the static post store.

use async_trait::async_trait;
use post_authz_sdk::{
    Actor, CollaboratorError, FormAccessPolicy, FormAccessResolver, FormId, ParentResolver,
    Permission, PermissionChecker, Post,
};
use uuid::Uuid;

use super::service::Service;

#[async_trait]
impl PermissionChecker for Service {
    async fn has_permission(
        &self,
        actor: &Actor,
        permission: Permission,
    ) -> Result<bool, CollaboratorError> {
        Ok(self.role_has_permission(actor.role.as_ref(), permission))
    }
}

#[async_trait]
impl ParentResolver for Service {
    async fn get(&self, id: Uuid) -> Result<Option<Post>, CollaboratorError> {
        Ok(self.post(id).cloned())
    }
}

#[async_trait]
impl FormAccessResolver for Service {
    async fn create_roles(
        &self,
        form_id: FormId,
    ) -> Result<Option<FormAccessPolicy>, CollaboratorError> {
        Ok(self.form_policy(form_id).cloned())
    }
}

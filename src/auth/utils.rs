use crate::{auth::claims::Claims, errors::AuthError};

/// Final two steps of the authorization chain: the `permissions` claim must
/// be present, and it must contain the endpoint's required permission.
/// Callers run this before touching any repository.
pub fn require_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let permissions = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsMissing)?;

    if !permissions.iter().any(|granted| granted == permission) {
        return Err(AuthError::PermissionNotFound);
    }

    Ok(())
}

use super::prelude::*;

/// A signed-in user with at least the given role.
pub fn authorize_min_role<'a>(
    user: Option<&'a SessionUser>,
    min_required_role: Role,
) -> Result<&'a SessionUser> {
    let user = user.ok_or(Error::Unauthorized)?;
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

/// Exactly the given role, no admin override. Reviews are tourist-only:
/// companies rate their own listings otherwise.
pub fn authorize_exact_role<'a>(user: Option<&'a SessionUser>, role: Role) -> Result<&'a SessionUser> {
    let user = user.ok_or(Error::Unauthorized)?;
    if user.role != role {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

/// The record's creator, or an admin.
pub fn authorize_owner_or_admin<'a>(
    user: Option<&'a SessionUser>,
    created_by: &str,
) -> Result<&'a SessionUser> {
    let user = user.ok_or(Error::Unauthorized)?;
    if user.role != Role::Admin && user.email != created_by {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

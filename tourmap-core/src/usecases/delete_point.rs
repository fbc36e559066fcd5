use log::warn;

use super::prelude::*;

/// Deletes a point and, best-effort, all reviews about it.
///
/// The review cascade is a cleanup, not part of the contract: a failure is
/// logged and the deletion still succeeds. Orphaned reviews are invisible
/// because lookups always go through the owning item.
pub fn delete_point<R>(
    repo: &R,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    id: &Id,
) -> Result<()>
where
    R: PointRepo + ReviewRepo,
{
    authorize_min_role(user, Role::Admin)?;
    repo.delete_point(id)?;
    if let Err(err) = repo.delete_reviews_of_item(ItemKind::Point, id) {
        warn!("Review cascade for point {id} failed: {err}");
    }
    store.remove_point(id);
    store.remove_reviews_of(ItemKind::Point, id);
    Ok(())
}

use log::warn;

use super::prelude::*;

pub fn delete_establishment<R>(
    repo: &R,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    id: &Id,
) -> Result<()>
where
    R: EstablishmentRepo + ReviewRepo,
{
    let establishment = store
        .establishments()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;
    authorize_owner_or_admin(user, &establishment.created_by)?;
    repo.delete_establishment(id)?;
    if let Err(err) = repo.delete_reviews_of_item(ItemKind::Establishment, id) {
        warn!("Review cascade for establishment {id} failed: {err}");
    }
    store.remove_establishment(id);
    store.remove_reviews_of(ItemKind::Establishment, id);
    Ok(())
}

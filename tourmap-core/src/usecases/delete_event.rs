use log::warn;

use super::prelude::*;

pub fn delete_event<R>(
    repo: &R,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    id: &Id,
) -> Result<()>
where
    R: EventRepo + ReviewRepo,
{
    let event = store
        .events()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;
    authorize_owner_or_admin(user, &event.created_by)?;
    repo.delete_event(id)?;
    if let Err(err) = repo.delete_reviews_of_item(ItemKind::Event, id) {
        warn!("Review cascade for event {id} failed: {err}");
    }
    store.remove_event(id);
    store.remove_reviews_of(ItemKind::Event, id);
    Ok(())
}

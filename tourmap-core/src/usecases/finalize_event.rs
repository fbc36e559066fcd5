use super::prelude::*;

/// One-way `Active -> Finalized` transition, stamped with actor and time.
///
/// Rejected client-side when the event is already final so that a double
/// click never produces a second stamp.
pub fn finalize_event<R: EventRepo>(
    repo: &R,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    id: &Id,
) -> Result<()> {
    let mut event = store
        .events()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;
    let user = authorize_owner_or_admin(user, &event.created_by)?;
    if event.is_finalized() {
        return Err(Error::EventAlreadyFinalized);
    }
    event.status = EventStatus::Finalized;
    event.finalized_at = Some(now);
    event.finalized_by = Some(user.email.clone());

    repo.update_event(&event)?;
    store.upsert_event(event);
    Ok(())
}

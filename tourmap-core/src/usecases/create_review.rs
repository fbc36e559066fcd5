use super::prelude::*;

#[derive(Debug)]
pub struct NewReview {
    pub item_kind: ItemKind,
    pub item_id: Id,
    pub rating: u8,
    pub comment: String,
}

/// Tourist-only: companies must not rate listings, their own or anyone
/// else's, and admins curate rather than review.
pub fn create_review<R: ReviewRepo>(
    repo: &R,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    new: NewReview,
) -> Result<Id> {
    let user = authorize_exact_role(user, Role::Tourist)?;
    let rating = RatingValue::try_from(new.rating)?;
    let comment = new.comment.trim().to_string();
    if comment.is_empty() {
        return Err(Error::EmptyComment);
    }
    let mut review = Review {
        id: Id::new(),
        item_kind: new.item_kind,
        item_id: new.item_id,
        rating,
        comment,
        created_by: user.email.clone(),
        created_at: now,
    };
    review.id = repo.add_review(&review)?;
    let id = review.id.clone();
    store.upsert_review(review);
    Ok(id)
}

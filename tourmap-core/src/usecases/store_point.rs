use super::prelude::*;
use crate::gateways::image_upload::{ImageFile, ImageUploadGateway};

#[derive(Debug, Default)]
pub struct NewPoint {
    pub name: String,
    pub description: String,
    pub category: PointCategory,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub images: Vec<ImageFile>,
}

/// Field patch for an existing point. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct PointChange {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<PointCategory>,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub images: Option<Vec<ImageFile>>,
}

pub fn create_point<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    new: NewPoint,
) -> Result<Id>
where
    R: PointRepo,
    G: ImageUploadGateway,
{
    let user = authorize_min_role(user, Role::Admin)?;
    let name = required_text("name", &new.name)?;
    let pos = new.pos.map(|(lat, lng)| parse_position(lat, lng)).transpose()?;
    let images = upload_images(uploader, &new.images)?;

    let mut point = PointOfInterest {
        id: Id::new(),
        name,
        description: new.description.trim().to_string(),
        category: new.category,
        pos,
        address: new.address.filter(|a| !a.is_empty()),
        images,
        created_by: user.email.clone(),
        created_at: now,
        updated_at: None,
    };
    point.id = repo.add_point(&point)?;
    let id = point.id.clone();
    store.upsert_point(point);
    Ok(id)
}

pub fn update_point<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    id: &Id,
    change: PointChange,
) -> Result<()>
where
    R: PointRepo,
    G: ImageUploadGateway,
{
    authorize_min_role(user, Role::Admin)?;
    let mut point = store
        .points()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;

    if let Some(name) = change.name {
        point.name = required_text("name", &name)?;
    }
    if let Some(description) = change.description {
        point.description = description.trim().to_string();
    }
    if let Some(category) = change.category {
        point.category = category;
    }
    if let Some((lat, lng)) = change.pos {
        point.pos = Some(parse_position(lat, lng)?);
    }
    if let Some(address) = change.address {
        point.address = Some(address).filter(|a| !a.is_empty());
    }
    if let Some(files) = change.images {
        point.images = upload_images(uploader, &files)?;
    }
    point.updated_at = Some(now);

    repo.update_point(&point)?;
    store.upsert_point(point);
    Ok(())
}

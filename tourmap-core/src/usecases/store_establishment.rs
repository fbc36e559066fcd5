use super::prelude::*;
use crate::gateways::image_upload::{ImageFile, ImageUploadGateway};

#[derive(Debug, Default)]
pub struct NewEstablishment {
    pub name: String,
    pub description: String,
    pub category: EstablishmentCategory,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub has_certification: bool,
    pub certification_number: Option<String>,
    pub images: Vec<ImageFile>,
}

#[derive(Debug, Default)]
pub struct EstablishmentChange {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<EstablishmentCategory>,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub certification: Option<Certification>,
    pub images: Option<Vec<ImageFile>>,
}

/// Single-slot buffer for an establishment whose creator declared no
/// tourism-board registration. The record is parked here until the user
/// decides how to proceed.
#[derive(Debug, Default)]
pub struct PendingEstablishment {
    draft: Option<Establishment>,
}

impl PendingEstablishment {
    pub fn is_occupied(&self) -> bool {
        self.draft.is_some()
    }

    pub fn clear(&mut self) {
        self.draft = None;
    }
}

#[derive(Debug, PartialEq)]
pub enum StoreEstablishmentOutcome {
    Stored(Id),
    /// The payload is parked; the caller must resolve the choice.
    CertificationChoiceRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationChoice {
    /// Publish without a Cadastur number.
    ProceedUncertified,
    /// Hand the draft back so the number can be filled in.
    ProvideCertification,
}

#[derive(Debug, PartialEq)]
pub enum CertificationResolution {
    Stored(Id),
    DraftReturned(Establishment),
}

pub fn create_establishment<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    pending: &mut PendingEstablishment,
    user: Option<&SessionUser>,
    now: Timestamp,
    new: NewEstablishment,
) -> Result<StoreEstablishmentOutcome>
where
    R: EstablishmentRepo,
    G: ImageUploadGateway,
{
    let user = authorize_min_role(user, Role::Company)?;
    if pending.is_occupied() {
        return Err(Error::PendingEstablishmentExists);
    }
    let name = required_text("name", &new.name)?;
    let pos = new.pos.map(|(lat, lng)| parse_position(lat, lng)).transpose()?;
    let email = optional_email(new.email.as_deref())?;
    let website = optional_url(new.website.as_deref())?;
    let phone = new.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
    let images = upload_images(uploader, &new.images)?;

    let contact = Contact {
        phone,
        email,
        website,
    };
    let establishment = Establishment {
        id: Id::new(),
        name,
        description: new.description.trim().to_string(),
        category: new.category,
        pos,
        address: new.address.filter(|a| !a.is_empty()),
        contact: Some(contact).filter(|c| !c.is_empty()),
        images,
        certification: Certification {
            has_certification: new.has_certification,
            number: new.certification_number,
        },
        created_by: user.email.clone(),
        created_at: now,
        updated_at: None,
    };

    // A set flag without a usable number is treated like no certification:
    // the record is parked until the user proceeds or supplies the number.
    if !establishment.certification.is_verified() {
        pending.draft = Some(establishment);
        return Ok(StoreEstablishmentOutcome::CertificationChoiceRequired);
    }
    let id = add_establishment(repo, store, establishment)?;
    Ok(StoreEstablishmentOutcome::Stored(id))
}

/// Resolves the parked payload. `ProceedUncertified` performs exactly one
/// remote add; `ProvideCertification` empties the slot and returns the
/// draft for editing. Either way the slot is free afterwards.
pub fn resolve_certification_choice<R: EstablishmentRepo>(
    repo: &R,
    store: &mut CollectionStore,
    pending: &mut PendingEstablishment,
    choice: CertificationChoice,
) -> Result<CertificationResolution> {
    let draft = pending.draft.take().ok_or(Error::NoPendingEstablishment)?;
    match choice {
        CertificationChoice::ProceedUncertified => {
            let id = add_establishment(repo, store, draft)?;
            Ok(CertificationResolution::Stored(id))
        }
        CertificationChoice::ProvideCertification => {
            Ok(CertificationResolution::DraftReturned(draft))
        }
    }
}

fn add_establishment<R: EstablishmentRepo>(
    repo: &R,
    store: &mut CollectionStore,
    mut establishment: Establishment,
) -> Result<Id> {
    establishment.id = repo.add_establishment(&establishment)?;
    let id = establishment.id.clone();
    store.upsert_establishment(establishment);
    Ok(id)
}

pub fn update_establishment<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    id: &Id,
    change: EstablishmentChange,
) -> Result<()>
where
    R: EstablishmentRepo,
    G: ImageUploadGateway,
{
    let mut establishment = store
        .establishments()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;
    authorize_owner_or_admin(user, &establishment.created_by)?;

    if let Some(name) = change.name {
        establishment.name = required_text("name", &name)?;
    }
    if let Some(description) = change.description {
        establishment.description = description.trim().to_string();
    }
    if let Some(category) = change.category {
        establishment.category = category;
    }
    if let Some((lat, lng)) = change.pos {
        establishment.pos = Some(parse_position(lat, lng)?);
    }
    if let Some(address) = change.address {
        establishment.address = Some(address).filter(|a| !a.is_empty());
    }
    if change.phone.is_some() || change.email.is_some() || change.website.is_some() {
        let mut contact = establishment.contact.take().unwrap_or_default();
        if let Some(phone) = change.phone {
            contact.phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        }
        if let Some(email) = change.email {
            contact.email = optional_email(Some(&email))?;
        }
        if let Some(website) = change.website {
            contact.website = optional_url(Some(&website))?;
        }
        establishment.contact = Some(contact).filter(|c| !c.is_empty());
    }
    if let Some(certification) = change.certification {
        establishment.certification = certification;
    }
    if let Some(files) = change.images {
        establishment.images = upload_images(uploader, &files)?;
    }
    establishment.updated_at = Some(now);

    repo.update_establishment(&establishment)?;
    store.upsert_establishment(establishment);
    Ok(())
}

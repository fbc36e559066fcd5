use super::prelude::*;
use crate::gateways::image_upload::{ImageFile, ImageUploadGateway};

#[derive(Debug, Default)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub category: PointCategory,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub images: Vec<ImageFile>,
}

#[derive(Debug, Default)]
pub struct EventChange {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<PointCategory>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub pos: Option<(f64, f64)>,
    pub address: Option<Address>,
    pub images: Option<Vec<ImageFile>>,
}

pub fn create_event<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    new: NewEvent,
) -> Result<Id>
where
    R: EventRepo,
    G: ImageUploadGateway,
{
    let user = authorize_min_role(user, Role::Company)?;
    let name = required_text("name", &new.name)?;
    let date = parse_event_date(&required_text("date", &new.date)?)?;
    let time = parse_event_time(&required_text("time", &new.time)?)?;
    let pos = new.pos.map(|(lat, lng)| parse_position(lat, lng)).transpose()?;
    let images = upload_images(uploader, &new.images)?;

    let mut event = Event {
        id: Id::new(),
        name,
        description: new.description.trim().to_string(),
        category: new.category,
        date,
        time,
        status: EventStatus::Active,
        pos,
        address: new.address.filter(|a| !a.is_empty()),
        images,
        created_by: user.email.clone(),
        created_at: now,
        updated_at: None,
        finalized_at: None,
        finalized_by: None,
    };
    event.id = repo.add_event(&event)?;
    let id = event.id.clone();
    store.upsert_event(event);
    Ok(id)
}

pub fn update_event<R, G>(
    repo: &R,
    uploader: &G,
    store: &mut CollectionStore,
    user: Option<&SessionUser>,
    now: Timestamp,
    id: &Id,
    change: EventChange,
) -> Result<()>
where
    R: EventRepo,
    G: ImageUploadGateway,
{
    let mut event = store
        .events()
        .get(id)
        .cloned()
        .ok_or(Error::Repo(crate::repositories::Error::NotFound))?;
    authorize_owner_or_admin(user, &event.created_by)?;

    if let Some(name) = change.name {
        event.name = required_text("name", &name)?;
    }
    if let Some(description) = change.description {
        event.description = description.trim().to_string();
    }
    if let Some(category) = change.category {
        event.category = category;
    }
    if let Some(date) = change.date {
        event.date = parse_event_date(&date)?;
    }
    if let Some(time) = change.time {
        event.time = parse_event_time(&time)?;
    }
    if let Some((lat, lng)) = change.pos {
        event.pos = Some(parse_position(lat, lng)?);
    }
    if let Some(address) = change.address {
        event.address = Some(address).filter(|a| !a.is_empty());
    }
    if let Some(files) = change.images {
        event.images = upload_images(uploader, &files)?;
    }
    event.updated_at = Some(now);

    repo.update_event(&event)?;
    store.upsert_event(event);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;
    use tourmap_entities::builders::*;

    fn new_event() -> NewEvent {
        NewEvent {
            name: "Festival do Peixe".into(),
            date: "2026-09-07".into(),
            time: "18:30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn tourists_cannot_create_events() {
        let repo = MockRepo::default();
        let uploader = MockUploader::default();
        let mut store = CollectionStore::default();
        let result = create_event(&repo, &uploader, &mut store, Some(&tourist()), t0(), new_event());
        assert!(matches!(result, Err(Error::Forbidden)));
    }

    #[test]
    fn companies_create_active_events() {
        let repo = MockRepo::default();
        let uploader = MockUploader::default();
        let mut store = CollectionStore::default();
        let id =
            create_event(&repo, &uploader, &mut store, Some(&company()), t0(), new_event()).unwrap();
        let event = store.events().get(&id).expect("event");
        assert_eq!(event.status, EventStatus::Active);
        assert_eq!(event.created_by, company().email);
    }

    #[test]
    fn malformed_schedule_is_rejected() {
        let repo = MockRepo::default();
        let uploader = MockUploader::default();
        let mut store = CollectionStore::default();
        let mut new = new_event();
        new.date = "07/09/2026".into();
        let result = create_event(&repo, &uploader, &mut store, Some(&company()), t0(), new);
        assert!(matches!(result, Err(Error::Date)));
    }

    #[test]
    fn only_the_creator_or_an_admin_updates() {
        let repo = MockRepo::default();
        let uploader = MockUploader::default();
        let mut store = CollectionStore::default();
        store.upsert_event(Event::build().id("e1").created_by(&company().email).finish());

        let other = SessionUser {
            email: "other@example.com".into(),
            role: Role::Company,
        };
        let result = update_event(
            &repo,
            &uploader,
            &mut store,
            Some(&other),
            t0(),
            &"e1".into(),
            EventChange::default(),
        );
        assert!(matches!(result, Err(Error::Forbidden)));

        update_event(
            &repo,
            &uploader,
            &mut store,
            Some(&admin()),
            t0(),
            &"e1".into(),
            EventChange {
                name: Some("Festival".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(store.events().get(&"e1".into()).expect("event").name, "Festival");
    }
}

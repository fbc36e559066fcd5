// Shared fixtures for the mutation pipeline tests.

use std::cell::{Cell, RefCell};

use crate::{
    collections::CollectionStore,
    entities::*,
    gateways::image_upload::{ImageFile, ImageUploadError, ImageUploadGateway},
    repositories::*,
};

type RepoResult<T> = std::result::Result<T, Error>;

pub fn t0() -> Timestamp {
    Timestamp::from_milliseconds(1_756_000_000_000)
}

pub fn tourist() -> SessionUser {
    SessionUser {
        email: "tourist@example.com".into(),
        role: Role::Tourist,
    }
}

pub fn company() -> SessionUser {
    SessionUser {
        email: "company@example.com".into(),
        role: Role::Company,
    }
}

pub fn admin() -> SessionUser {
    SessionUser {
        email: "admin@example.com".into(),
        role: Role::Admin,
    }
}

/// In-memory stand-in for the remote document store.
#[derive(Debug, Default)]
pub struct MockRepo {
    pub points: RefCell<Vec<PointOfInterest>>,
    pub events: RefCell<Vec<Event>>,
    pub establishments: RefCell<Vec<Establishment>>,
    pub reviews: RefCell<Vec<Review>>,
    pub surveys: RefCell<Vec<SurveyResponse>>,
    pub fail_writes: Cell<bool>,
    pub fail_review_cascade: Cell<bool>,
}

impl MockRepo {
    /// Mirrors the store's current content into the mock remote.
    pub fn seed_from(&self, store: &CollectionStore) {
        *self.points.borrow_mut() = store.points().iter().cloned().collect();
        *self.events.borrow_mut() = store.events().iter().cloned().collect();
        *self.establishments.borrow_mut() = store.establishments().iter().cloned().collect();
        *self.reviews.borrow_mut() = store.reviews().iter().cloned().collect();
    }

    fn check_write(&self) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(Error::Other(anyhow::anyhow!("write rejected")));
        }
        Ok(())
    }
}

fn delete_by_id<T>(items: &RefCell<Vec<T>>, id: &Id, id_of: impl Fn(&T) -> Id) -> RepoResult<()> {
    let mut items = items.borrow_mut();
    let before = items.len();
    items.retain(|i| id_of(i) != *id);
    if items.len() == before {
        return Err(Error::NotFound);
    }
    Ok(())
}

impl PointRepo for MockRepo {
    fn fetch_all_points(&self, _force_refresh: bool) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self.points.borrow().clone())
    }

    fn add_point(&self, point: &PointOfInterest) -> RepoResult<Id> {
        self.check_write()?;
        let mut stored = point.clone();
        stored.id = Id::new();
        let id = stored.id.clone();
        self.points.borrow_mut().push(stored);
        Ok(id)
    }

    fn update_point(&self, point: &PointOfInterest) -> RepoResult<()> {
        self.check_write()?;
        let mut points = self.points.borrow_mut();
        match points.iter_mut().find(|p| p.id == point.id) {
            Some(stored) => {
                *stored = point.clone();
                Ok(())
            }
            None => {
                // Optimistic updates may target records the mock never saw.
                points.push(point.clone());
                Ok(())
            }
        }
    }

    fn delete_point(&self, id: &Id) -> RepoResult<()> {
        self.check_write()?;
        delete_by_id(&self.points, id, |p| p.id.clone())
    }
}

impl EventRepo for MockRepo {
    fn fetch_all_events(&self, _force_refresh: bool) -> RepoResult<Vec<Event>> {
        Ok(self.events.borrow().clone())
    }

    fn add_event(&self, event: &Event) -> RepoResult<Id> {
        self.check_write()?;
        let mut stored = event.clone();
        stored.id = Id::new();
        let id = stored.id.clone();
        self.events.borrow_mut().push(stored);
        Ok(id)
    }

    fn update_event(&self, event: &Event) -> RepoResult<()> {
        self.check_write()?;
        let mut events = self.events.borrow_mut();
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(stored) => {
                *stored = event.clone();
                Ok(())
            }
            None => {
                // Optimistic updates may target records the mock never saw.
                events.push(event.clone());
                Ok(())
            }
        }
    }

    fn delete_event(&self, id: &Id) -> RepoResult<()> {
        self.check_write()?;
        delete_by_id(&self.events, id, |e| e.id.clone())
    }
}

impl EstablishmentRepo for MockRepo {
    fn fetch_all_establishments(&self, _force_refresh: bool) -> RepoResult<Vec<Establishment>> {
        Ok(self.establishments.borrow().clone())
    }

    fn add_establishment(&self, establishment: &Establishment) -> RepoResult<Id> {
        self.check_write()?;
        let mut stored = establishment.clone();
        stored.id = Id::new();
        let id = stored.id.clone();
        self.establishments.borrow_mut().push(stored);
        Ok(id)
    }

    fn update_establishment(&self, establishment: &Establishment) -> RepoResult<()> {
        self.check_write()?;
        let mut establishments = self.establishments.borrow_mut();
        match establishments.iter_mut().find(|e| e.id == establishment.id) {
            Some(stored) => {
                *stored = establishment.clone();
                Ok(())
            }
            None => {
                establishments.push(establishment.clone());
                Ok(())
            }
        }
    }

    fn delete_establishment(&self, id: &Id) -> RepoResult<()> {
        self.check_write()?;
        delete_by_id(&self.establishments, id, |e| e.id.clone())
    }
}

impl ReviewRepo for MockRepo {
    fn fetch_all_reviews(&self, _force_refresh: bool) -> RepoResult<Vec<Review>> {
        Ok(self.reviews.borrow().clone())
    }

    fn add_review(&self, review: &Review) -> RepoResult<Id> {
        self.check_write()?;
        let mut stored = review.clone();
        stored.id = Id::new();
        let id = stored.id.clone();
        self.reviews.borrow_mut().push(stored);
        Ok(id)
    }

    fn delete_reviews_of_item(&self, kind: ItemKind, item_id: &Id) -> RepoResult<usize> {
        if self.fail_review_cascade.get() {
            return Err(Error::Other(anyhow::anyhow!("batch delete failed")));
        }
        let mut reviews = self.reviews.borrow_mut();
        let before = reviews.len();
        reviews.retain(|r| !r.is_about(kind, item_id));
        Ok(before - reviews.len())
    }
}

impl SurveyRepo for MockRepo {
    fn add_survey_response(&self, response: &SurveyResponse) -> RepoResult<Id> {
        self.check_write()?;
        let mut stored = response.clone();
        stored.id = Id::new();
        let id = stored.id.clone();
        self.surveys.borrow_mut().push(stored);
        Ok(id)
    }

    fn fetch_all_survey_responses(&self) -> RepoResult<Vec<SurveyResponse>> {
        Ok(self.surveys.borrow().clone())
    }
}

/// Image host double. Successful uploads mint a URL from the file name.
#[derive(Debug, Default)]
pub struct MockUploader {
    fail_all: bool,
    fail_names: Vec<String>,
    uploads: Cell<usize>,
}

impl MockUploader {
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_names: vec![name.into()],
            ..Default::default()
        }
    }

    /// How many uploads actually reached the host.
    pub fn upload_count(&self) -> usize {
        self.uploads.get()
    }
}

impl ImageUploadGateway for MockUploader {
    fn upload_image(&self, file: &ImageFile) -> Result<Url, ImageUploadError> {
        self.uploads.set(self.uploads.get() + 1);
        if self.fail_all || self.fail_names.contains(&file.file_name) {
            return Err(ImageUploadError::Api("host unavailable".into()));
        }
        Ok(format!("https://img.example/{}", file.file_name)
            .parse()
            .unwrap())
    }
}

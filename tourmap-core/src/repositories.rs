// Access traits for the remote document store.
// Each repository is responsible for a single collection and its
// relationships. Related documents are only referenced by their id and
// never modified or loaded by another repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested document could not be found")]
    NotFound,
    #[error("The document already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PointRepo {
    /// `force_refresh` bypasses any read cache of the remote store.
    fn fetch_all_points(&self, force_refresh: bool) -> Result<Vec<PointOfInterest>>;

    /// Returns the server-assigned id.
    fn add_point(&self, point: &PointOfInterest) -> Result<Id>;

    /// Merges the given fields into the stored document; fields absent from
    /// the patch are preserved.
    fn update_point(&self, point: &PointOfInterest) -> Result<()>;

    fn delete_point(&self, id: &Id) -> Result<()>;
}

pub trait EventRepo {
    fn fetch_all_events(&self, force_refresh: bool) -> Result<Vec<Event>>;
    fn add_event(&self, event: &Event) -> Result<Id>;
    fn update_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &Id) -> Result<()>;
}

pub trait EstablishmentRepo {
    fn fetch_all_establishments(&self, force_refresh: bool) -> Result<Vec<Establishment>>;
    fn add_establishment(&self, establishment: &Establishment) -> Result<Id>;
    fn update_establishment(&self, establishment: &Establishment) -> Result<()>;
    fn delete_establishment(&self, id: &Id) -> Result<()>;
}

pub trait ReviewRepo {
    fn fetch_all_reviews(&self, force_refresh: bool) -> Result<Vec<Review>>;
    fn add_review(&self, review: &Review) -> Result<Id>;

    /// Batched cascade deletion of all reviews about the given item.
    /// Returns how many documents were deleted.
    fn delete_reviews_of_item(&self, kind: ItemKind, item_id: &Id) -> Result<usize>;
}

pub trait SurveyRepo {
    fn add_survey_response(&self, response: &SurveyResponse) -> Result<Id>;

    /// Only read through the administrative aggregation view.
    fn fetch_all_survey_responses(&self) -> Result<Vec<SurveyResponse>>;
}

/// Everything the session layer needs from the remote store.
pub trait DirectoryRepo:
    PointRepo + EventRepo + EstablishmentRepo + ReviewRepo + SurveyRepo
{
}

impl<T> DirectoryRepo for T where
    T: PointRepo + EventRepo + EstablishmentRepo + ReviewRepo + SurveyRepo
{
}

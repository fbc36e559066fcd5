use thiserror::Error;

use crate::{gateways::image_upload::ImageUploadError, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid date")]
    Date,
    #[error("Invalid time")]
    Time,
    #[error("The event is already finalized")]
    EventAlreadyFinalized,
    #[error("There is no pending establishment")]
    NoPendingEstablishment,
    #[error("Another establishment is awaiting a certification choice")]
    PendingEstablishmentExists,
    #[error(transparent)]
    Upload(#[from] ImageUploadError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<tourmap_entities::review::InvalidRatingValue> for Error {
    fn from(_: tourmap_entities::review::InvalidRatingValue) -> Self {
        Self::RatingValue
    }
}

// The mutation pipeline. Every operation follows the same shape:
// authorize, validate, optional image upload, remote write, optimistic
// local patch. The session layer requests re-renders afterwards.

mod authorize;
mod create_review;
mod delete_establishment;
mod delete_event;
mod delete_point;
mod error;
mod finalize_event;
mod store_establishment;
mod store_event;
mod store_point;
mod submit_survey;
mod survey_statistics;
mod upload_images;
mod validate;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_review::*, delete_establishment::*, delete_event::*, delete_point::*,
    error::Error, finalize_event::*, store_establishment::*, store_event::*, store_point::*,
    submit_survey::*, survey_statistics::*, upload_images::*, validate::*,
};

mod prelude {
    pub use super::{authorize::*, error::Error, upload_images::*, validate::*};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{collections::CollectionStore, entities::*, repositories::*};
}

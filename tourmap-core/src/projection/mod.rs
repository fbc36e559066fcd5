// Read-only renderings derived from the collection store. Projections never
// mutate the store; they are rebuilt from a snapshot plus the filter state.

pub mod list;
pub mod map;

use crate::{entities::*, rating::RatingCache};

/// Everything a popup or card shows about one item.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub category: String,
    pub description: String,
    pub images: ImageList,
    pub rating: AvgRating,
    /// Extra lines: event schedule, verification badge, contact details.
    pub details: Vec<String>,
}

pub(crate) fn event_schedule(event: &Event) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        event.date.year(),
        u8::from(event.date.month()),
        event.date.day(),
        event.time.hour(),
        event.time.minute()
    )
}

pub(crate) fn popup_for_point(
    now: Timestamp,
    point: &PointOfInterest,
    reviews: &crate::collections::Collection<Review>,
    ratings: &mut RatingCache,
) -> PopupContent {
    PopupContent {
        title: point.name.clone(),
        category: point.category.to_string(),
        description: point.description.clone(),
        images: point.images.clone(),
        rating: ratings.get(now, reviews, ItemKind::Point, &point.id),
        details: Vec::new(),
    }
}

pub(crate) fn popup_for_event(
    now: Timestamp,
    event: &Event,
    reviews: &crate::collections::Collection<Review>,
    ratings: &mut RatingCache,
) -> PopupContent {
    PopupContent {
        title: event.name.clone(),
        category: event.category.to_string(),
        description: event.description.clone(),
        images: event.images.clone(),
        rating: ratings.get(now, reviews, ItemKind::Event, &event.id),
        details: vec![event_schedule(event)],
    }
}

pub(crate) fn popup_for_establishment(
    now: Timestamp,
    establishment: &Establishment,
    reviews: &crate::collections::Collection<Review>,
    ratings: &mut RatingCache,
) -> PopupContent {
    let mut details = Vec::new();
    if establishment.is_verified() {
        details.push("Cadastur verified".to_string());
    }
    if let Some(contact) = &establishment.contact {
        details.extend(contact.phone.iter().cloned());
        details.extend(contact.email.iter().cloned());
        details.extend(contact.website.iter().map(|url| url.to_string()));
    }
    PopupContent {
        title: establishment.name.clone(),
        category: establishment.category.to_string(),
        description: establishment.description.clone(),
        images: establishment.images.clone(),
        rating: ratings.get(now, reviews, ItemKind::Establishment, &establishment.id),
        details,
    }
}

// Card list rendering. Synchronous, no debounce: the list is cheap to
// rebuild and users expect search results to track their keystrokes.

use crate::{
    collections::CollectionStore,
    entities::*,
    filter::{filtered_view, FilterState},
    projection::event_schedule,
    rating::RatingCache,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ListCard {
    pub item: ItemRef,
    pub title: String,
    pub category: String,
    pub rating: AvgRating,
    /// `Some` for establishments only.
    pub verified: Option<bool>,
    /// `Some` for events only, formatted `YYYY-MM-DD HH:MM`.
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The store holds no visible items at all.
    NoItems,
    /// Items exist but none matched the search term.
    NoMatches { term: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListRendering {
    Cards(Vec<ListCard>),
    Empty(EmptyReason),
}

pub fn render_list(
    now: Timestamp,
    store: &CollectionStore,
    filter: &FilterState,
    ratings: &mut RatingCache,
) -> ListRendering {
    let view = filtered_view(store, filter);
    if view.is_empty() {
        let reason = match filter.search_term() {
            Some(term) => EmptyReason::NoMatches { term: term.into() },
            None => EmptyReason::NoItems,
        };
        return ListRendering::Empty(reason);
    }

    let reviews = store.reviews();
    let mut cards = Vec::new();
    for point in view.points {
        cards.push(ListCard {
            item: ItemRef::new(ItemKind::Point, point.id.clone()),
            title: point.name.clone(),
            category: point.category.to_string(),
            rating: ratings.get(now, reviews, ItemKind::Point, &point.id),
            verified: None,
            schedule: None,
        });
    }
    for event in view.events {
        cards.push(ListCard {
            item: ItemRef::new(ItemKind::Event, event.id.clone()),
            title: event.name.clone(),
            category: event.category.to_string(),
            rating: ratings.get(now, reviews, ItemKind::Event, &event.id),
            verified: None,
            schedule: Some(event_schedule(event)),
        });
    }
    for establishment in view.establishments {
        cards.push(ListCard {
            item: ItemRef::new(ItemKind::Establishment, establishment.id.clone()),
            title: establishment.name.clone(),
            category: establishment.category.to_string(),
            rating: ratings.get(now, reviews, ItemKind::Establishment, &establishment.id),
            verified: Some(establishment.is_verified()),
            schedule: None,
        });
    }
    ListRendering::Cards(cards)
}

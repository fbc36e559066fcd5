// Filter, search and sort predicates shared by the map and list projections.

use crate::{collections::CollectionStore, entities::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Points,
    Events,
    Establishments,
}

impl TypeFilter {
    pub fn shows_points(self) -> bool {
        matches!(self, Self::All | Self::Points)
    }

    pub fn shows_events(self) -> bool {
        matches!(self, Self::All | Self::Events)
    }

    pub fn shows_establishments(self) -> bool {
        matches!(self, Self::All | Self::Establishments)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    search_term: Option<String>,
    pub establishment_category: Option<EstablishmentCategory>,
}

impl FilterState {
    /// Stores the search input trimmed and lowercased; whitespace-only input
    /// counts as "no search term".
    pub fn set_search_term(&mut self, raw: &str) {
        let term = raw.trim().to_lowercase();
        self.search_term = if term.is_empty() { None } else { Some(term) };
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }
}

/// Case-insensitive substring search over an item's visible fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;

    fn matches_search(&self, term: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}

fn address_fields(address: Option<&Address>, fields: &mut Vec<String>) {
    if let Some(address) = address {
        fields.push(address.to_query_string());
        if let Some(postal_code) = &address.postal_code {
            fields.push(postal_code.clone());
        }
    }
}

impl Searchable for PointOfInterest {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.description.clone(),
            self.category.to_string(),
        ];
        address_fields(self.address.as_ref(), &mut fields);
        fields
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.description.clone(),
            self.category.to_string(),
            format!("{:02}:{:02}", self.time.hour(), self.time.minute()),
        ];
        address_fields(self.address.as_ref(), &mut fields);
        fields
    }
}

impl Searchable for Establishment {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.description.clone(),
            self.category.to_string(),
        ];
        address_fields(self.address.as_ref(), &mut fields);
        if let Some(contact) = &self.contact {
            fields.extend(contact.phone.iter().cloned());
            fields.extend(contact.email.iter().cloned());
            fields.extend(contact.website.iter().map(|url| url.to_string()));
        }
        fields
    }
}

fn passes_search<T: Searchable>(item: &T, filter: &FilterState) -> bool {
    match filter.search_term() {
        None => true,
        Some(term) => item.matches_search(term),
    }
}

/// The filtered and sorted projection input, borrowed from the store.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub points: Vec<&'a PointOfInterest>,
    pub events: Vec<&'a Event>,
    pub establishments: Vec<&'a Establishment>,
}

impl FilteredView<'_> {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.events.is_empty() && self.establishments.is_empty()
    }
}

/// Applies the shared predicates to a store snapshot.
///
/// Finalized events are excluded unconditionally. Establishments honor the
/// category-equality filter and sort verified-first (stable otherwise), which
/// governs visual priority only.
pub fn filtered_view<'a>(store: &'a CollectionStore, filter: &FilterState) -> FilteredView<'a> {
    let points = if filter.type_filter.shows_points() {
        store
            .points()
            .iter()
            .filter(|p| passes_search(*p, filter))
            .collect()
    } else {
        Vec::new()
    };

    let events = if filter.type_filter.shows_events() {
        store
            .events()
            .iter()
            .filter(|e| !e.is_finalized())
            .filter(|e| passes_search(*e, filter))
            .collect()
    } else {
        Vec::new()
    };

    let establishments = if filter.type_filter.shows_establishments() {
        let mut establishments: Vec<_> = store
            .establishments()
            .iter()
            .filter(|e| {
                filter
                    .establishment_category
                    .is_none_or(|category| e.category == category)
            })
            .filter(|e| passes_search(*e, filter))
            .collect();
        establishments.sort_by_key(|e| !e.is_verified());
        establishments
    } else {
        Vec::new()
    };

    FilteredView {
        points,
        events,
        establishments,
    }
}

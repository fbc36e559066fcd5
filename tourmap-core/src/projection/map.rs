// Marker layer with a debounced rebuild.

use std::collections::{HashMap, HashSet};

use time::Duration;

use crate::{
    collections::CollectionStore,
    entities::*,
    filter::{filtered_view, FilterState},
    projection::{popup_for_establishment, popup_for_event, popup_for_point, PopupContent},
    rating::RatingCache,
    schedule::DebouncedTask,
};

pub const DEFAULT_MAP_DEBOUNCE: Duration = Duration::milliseconds(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Point,
    Event,
    VerifiedEstablishment,
    UnverifiedEstablishment,
}

impl MarkerIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Point => "marker-point",
            Self::Event => "marker-event",
            Self::VerifiedEstablishment => "marker-establishment-verified",
            Self::UnverifiedEstablishment => "marker-establishment",
        }
    }
}

/// One map marker. The `item` reference is what click handlers resolve
/// against; coordinates are display-only.
#[derive(Debug, Clone)]
pub struct Marker {
    pub item: ItemRef,
    pub pos: MapPoint,
    pub icon: MarkerIcon,
    popup: Option<PopupContent>,
    popup_open: bool,
    // Rating-cache generation the cached popup was built against.
    popup_generation: u64,
}

impl Marker {
    fn new(item: ItemRef, pos: MapPoint, icon: MarkerIcon) -> Self {
        Self {
            item,
            pos,
            icon,
            popup: None,
            popup_open: false,
            popup_generation: 0,
        }
    }

    pub fn popup(&self) -> Option<&PopupContent> {
        self.popup.as_ref()
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }
}

/// The marker set, rebuilt at most once per debounce window.
///
/// Bursts of render requests (one per collection delivery, plus filter
/// changes) collapse into a single rebuild on the trailing edge.
#[derive(Debug)]
pub struct MapProjection {
    markers: Vec<Marker>,
    debounce: DebouncedTask,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_DEBOUNCE)
    }
}

impl MapProjection {
    pub fn new(window: Duration) -> Self {
        Self {
            markers: Vec::new(),
            debounce: DebouncedTask::new(window),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, item: &ItemRef) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.item == item)
    }

    fn marker_mut(&mut self, item: &ItemRef) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| &m.item == item)
    }

    /// Schedules a rebuild; any pending one is superseded.
    pub fn request_render(&mut self, now: Timestamp) {
        self.debounce.schedule(now);
    }

    pub fn has_pending_render(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Rebuilds the marker set if the debounce deadline has passed.
    /// Returns whether a rebuild happened.
    pub fn tick(
        &mut self,
        now: Timestamp,
        store: &CollectionStore,
        filter: &FilterState,
        ratings: &mut RatingCache,
    ) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        self.rebuild(now, store, filter, ratings);
        true
    }

    fn rebuild(
        &mut self,
        now: Timestamp,
        store: &CollectionStore,
        filter: &FilterState,
        ratings: &mut RatingCache,
    ) {
        // Cached popups and their open state survive a rebuild; content of
        // open popups is refreshed below.
        let mut carried: HashMap<ItemRef, (Option<PopupContent>, bool, u64)> = self
            .markers
            .drain(..)
            .map(|m| (m.item, (m.popup, m.popup_open, m.popup_generation)))
            .collect();

        let view = filtered_view(store, filter);
        let mut seen = HashSet::new();

        // Items without valid coordinates are skipped silently; they remain
        // reachable through the list.
        for point in view.points {
            let Some(pos) = point.pos else { continue };
            let item = ItemRef::new(ItemKind::Point, point.id.clone());
            if seen.insert(item.clone()) {
                self.markers.push(Marker::new(item, pos, MarkerIcon::Point));
            }
        }
        for event in view.events {
            let Some(pos) = event.pos else { continue };
            let item = ItemRef::new(ItemKind::Event, event.id.clone());
            if seen.insert(item.clone()) {
                self.markers.push(Marker::new(item, pos, MarkerIcon::Event));
            }
        }
        for establishment in view.establishments {
            let Some(pos) = establishment.pos else { continue };
            let item = ItemRef::new(ItemKind::Establishment, establishment.id.clone());
            let icon = if establishment.is_verified() {
                MarkerIcon::VerifiedEstablishment
            } else {
                MarkerIcon::UnverifiedEstablishment
            };
            if seen.insert(item.clone()) {
                self.markers.push(Marker::new(item, pos, icon));
            }
        }

        for marker in &mut self.markers {
            if let Some((popup, open, generation)) = carried.remove(&marker.item) {
                marker.popup = popup;
                marker.popup_open = open;
                marker.popup_generation = generation;
            }
        }
        self.refresh_open_popups(now, store, ratings);
    }

    /// Builds the popup content on first interaction and caches it on the
    /// marker; later calls reuse the cache unless the rating cache was
    /// cleared in between. Returns whether a marker for the item exists.
    pub fn open_popup(
        &mut self,
        now: Timestamp,
        item: &ItemRef,
        store: &CollectionStore,
        ratings: &mut RatingCache,
    ) -> bool {
        let Some(idx) = self.markers.iter().position(|m| &m.item == item) else {
            return false;
        };
        let stale = self.markers[idx].popup_generation != ratings.generation();
        if self.markers[idx].popup.is_none() || stale {
            self.markers[idx].popup = build_popup(now, item, store, ratings);
            self.markers[idx].popup_generation = ratings.generation();
        }
        self.markers[idx].popup_open = true;
        true
    }

    pub fn close_popup(&mut self, item: &ItemRef) {
        if let Some(marker) = self.marker_mut(item) {
            marker.popup_open = false;
        }
    }

    /// Regenerates content for every popup that is currently displayed,
    /// e.g. after the review collection changed.
    pub fn refresh_open_popups(
        &mut self,
        now: Timestamp,
        store: &CollectionStore,
        ratings: &mut RatingCache,
    ) {
        for idx in 0..self.markers.len() {
            if !self.markers[idx].popup_open {
                continue;
            }
            let item = self.markers[idx].item.clone();
            self.markers[idx].popup = build_popup(now, &item, store, ratings);
            self.markers[idx].popup_generation = ratings.generation();
        }
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.debounce.cancel();
    }
}

fn build_popup(
    now: Timestamp,
    item: &ItemRef,
    store: &CollectionStore,
    ratings: &mut RatingCache,
) -> Option<PopupContent> {
    let reviews = store.reviews();
    match item.kind {
        ItemKind::Point => store
            .points()
            .get(&item.id)
            .map(|p| popup_for_point(now, p, reviews, ratings)),
        ItemKind::Event => store
            .events()
            .get(&item.id)
            .map(|e| popup_for_event(now, e, reviews, ratings)),
        ItemKind::Establishment => store
            .establishments()
            .get(&item.id)
            .map(|e| popup_for_establishment(now, e, reviews, ratings)),
    }
}

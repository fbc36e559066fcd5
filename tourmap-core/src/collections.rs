// In-memory mirrors of the remote collections.
//
// The store exclusively owns the authoritative in-memory sequences. Only the
// realtime sync manager and the mutation pipeline's optimistic-patch step
// mutate them; projections read a snapshot by shared reference.

use std::collections::HashSet;

use strum::{Display, EnumIter, IntoStaticStr};

use crate::entities::*;

/// The four remotely persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKind {
    Points,
    Events,
    Establishments,
    Reviews,
}

pub trait Keyed {
    fn id(&self) -> &Id;
}

impl Keyed for PointOfInterest {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Keyed for Event {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Keyed for Establishment {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Keyed for Review {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// An ordered sequence keyed by unique id.
///
/// Exposed as a sequence for iteration but treated as a set keyed by id:
/// insertion order carries no meaning.
#[derive(Debug, Clone)]
pub struct Collection<T: Keyed> {
    items: Vec<T>,
}

// Not derived: the derive would demand `T: Default`.
impl<T: Keyed> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Collection<T> {
    /// Full replacement, used by realtime snapshots and the initial load.
    /// The last item wins when the input repeats an id.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        let mut seen = HashSet::new();
        // Iterate back to front so that the latest duplicate survives.
        for idx in (0..self.items.len()).rev() {
            if !seen.insert(self.items[idx].id().clone()) {
                self.items.remove(idx);
            }
        }
    }

    /// Replaces the entry with the same id or appends.
    ///
    /// This is the idempotent-merge contract that lets the optimistic local
    /// patch and the later realtime echo coexist: same id, overwrite.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, id: &Id) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        before != self.items.len()
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.items.retain(f);
    }

    pub fn get(&self, id: &Id) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The authoritative in-memory copy of all four remote collections.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    points: Collection<PointOfInterest>,
    events: Collection<Event>,
    establishments: Collection<Establishment>,
    reviews: Collection<Review>,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self {
            points: Collection::default(),
            events: Collection::default(),
            establishments: Collection::default(),
            reviews: Collection::default(),
        }
    }
}

impl CollectionStore {
    pub fn points(&self) -> &Collection<PointOfInterest> {
        &self.points
    }

    pub fn events(&self) -> &Collection<Event> {
        &self.events
    }

    pub fn establishments(&self) -> &Collection<Establishment> {
        &self.establishments
    }

    pub fn reviews(&self) -> &Collection<Review> {
        &self.reviews
    }

    pub fn replace_points(&mut self, items: Vec<PointOfInterest>) {
        self.points.replace_all(items);
    }

    pub fn replace_events(&mut self, items: Vec<Event>) {
        self.events.replace_all(items);
    }

    pub fn replace_establishments(&mut self, items: Vec<Establishment>) {
        self.establishments.replace_all(items);
    }

    pub fn replace_reviews(&mut self, items: Vec<Review>) {
        self.reviews.replace_all(items);
    }

    pub fn upsert_point(&mut self, point: PointOfInterest) {
        self.points.upsert(point);
    }

    pub fn upsert_event(&mut self, event: Event) {
        self.events.upsert(event);
    }

    pub fn upsert_establishment(&mut self, establishment: Establishment) {
        self.establishments.upsert(establishment);
    }

    pub fn upsert_review(&mut self, review: Review) {
        self.reviews.upsert(review);
    }

    pub fn remove_point(&mut self, id: &Id) -> bool {
        self.points.remove(id)
    }

    pub fn remove_event(&mut self, id: &Id) -> bool {
        self.events.remove(id)
    }

    pub fn remove_establishment(&mut self, id: &Id) -> bool {
        self.establishments.remove(id)
    }

    /// Local counterpart of the remote cascade: drops all reviews of the
    /// given item. Returns how many were removed.
    pub fn remove_reviews_of(&mut self, kind: ItemKind, item_id: &Id) -> usize {
        let before = self.reviews.len();
        self.reviews.retain(|r| !r.is_about(kind, item_id));
        before - self.reviews.len()
    }

    /// Resolves the position of a map-able item, e.g. to center the map on it.
    pub fn position_of(&self, kind: ItemKind, id: &Id) -> Option<MapPoint> {
        match kind {
            ItemKind::Point => self.points.get(id).and_then(|p| p.pos),
            ItemKind::Event => self.events.get(id).and_then(|e| e.pos),
            ItemKind::Establishment => self.establishments.get(id).and_then(|e| e.pos),
        }
    }

    pub fn clear(&mut self) {
        self.points = Default::default();
        self.events = Default::default();
        self.establishments = Default::default();
        self.reviews = Default::default();
    }
}

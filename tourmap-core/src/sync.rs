// Realtime synchronization of the collection store with the remote
// push-update streams, one independent state machine per collection.

use log::warn;

use crate::{
    collections::{CollectionKind, CollectionStore},
    entities::*,
    gateways::realtime::{RealtimeGateway, RealtimeSubscription},
    rating::RatingCache,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Unsubscribed,
    Subscribing,
    Active,
}

/// A change reported alongside a snapshot delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocChange {
    Added(Id),
    Modified(Id),
    Removed(Id),
}

/// One push delivery: the full materialized document set of a collection
/// plus the changes since the previous delivery.
#[derive(Debug, Clone)]
pub struct SnapshotDelivery<T> {
    pub docs: Vec<T>,
    pub changes: Vec<DocChange>,
}

impl<T> SnapshotDelivery<T> {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Delivery {
    Points(SnapshotDelivery<PointOfInterest>),
    Events(SnapshotDelivery<Event>),
    Establishments(SnapshotDelivery<Establishment>),
    Reviews(SnapshotDelivery<Review>),
}

impl Delivery {
    pub fn collection(&self) -> CollectionKind {
        match self {
            Self::Points(_) => CollectionKind::Points,
            Self::Events(_) => CollectionKind::Events,
            Self::Establishments(_) => CollectionKind::Establishments,
            Self::Reviews(_) => CollectionKind::Reviews,
        }
    }

    fn has_changes(&self) -> bool {
        match self {
            Self::Points(d) => d.has_changes(),
            Self::Events(d) => d.has_changes(),
            Self::Establishments(d) => d.has_changes(),
            Self::Reviews(d) => d.has_changes(),
        }
    }
}

/// What the projections must do after a delivery was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderEffect {
    pub map: bool,
    pub list: bool,
    pub popups: bool,
}

impl RenderEffect {
    pub const NONE: Self = Self {
        map: false,
        list: false,
        popups: false,
    };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(Debug)]
struct CollectionSync {
    kind: CollectionKind,
    state: SyncState,
    delivered: bool,
    subscription: Option<Box<dyn RealtimeSubscription>>,
}

impl CollectionSync {
    fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            state: SyncState::Unsubscribed,
            delivered: false,
            subscription: None,
        }
    }

    /// Tears down any existing subscription before opening a new one, so
    /// that a restart never accumulates duplicate listeners.
    fn start(&mut self, gateway: &dyn RealtimeGateway) {
        self.stop();
        self.state = SyncState::Subscribing;
        match gateway.subscribe(self.kind) {
            Ok(subscription) => {
                self.subscription = Some(subscription);
            }
            Err(err) => {
                warn!("Failed to subscribe to {}: {err}", self.kind);
                self.state = SyncState::Unsubscribed;
            }
        }
    }

    fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.state = SyncState::Unsubscribed;
        self.delivered = false;
    }

    /// The first delivery after `start()` always counts as a change (first
    /// paint must be correct even with zero prior local state); later
    /// deliveries with an empty change set are no-ops.
    fn accept(&mut self, has_changes: bool) -> bool {
        let first = !self.delivered;
        self.delivered = true;
        self.state = SyncState::Active;
        first || has_changes
    }

    /// Subscription errors fail open: the previous in-memory state is
    /// retained rather than blanked.
    fn fail(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.state = SyncState::Unsubscribed;
    }
}

/// The four per-collection sync state machines.
#[derive(Debug)]
pub struct SyncManager {
    points: CollectionSync,
    events: CollectionSync,
    establishments: CollectionSync,
    reviews: CollectionSync,
}

impl Default for SyncManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncManager {
    pub fn new() -> Self {
        Self {
            points: CollectionSync::new(CollectionKind::Points),
            events: CollectionSync::new(CollectionKind::Events),
            establishments: CollectionSync::new(CollectionKind::Establishments),
            reviews: CollectionSync::new(CollectionKind::Reviews),
        }
    }

    fn slot(&mut self, kind: CollectionKind) -> &mut CollectionSync {
        match kind {
            CollectionKind::Points => &mut self.points,
            CollectionKind::Events => &mut self.events,
            CollectionKind::Establishments => &mut self.establishments,
            CollectionKind::Reviews => &mut self.reviews,
        }
    }

    pub fn state(&self, kind: CollectionKind) -> SyncState {
        match kind {
            CollectionKind::Points => self.points.state,
            CollectionKind::Events => self.events.state,
            CollectionKind::Establishments => self.establishments.state,
            CollectionKind::Reviews => self.reviews.state,
        }
    }

    /// (Re-)subscribes all four collections. Idempotent: existing
    /// subscriptions are cancelled first.
    pub fn start(&mut self, gateway: &dyn RealtimeGateway) {
        self.points.start(gateway);
        self.events.start(gateway);
        self.establishments.start(gateway);
        self.reviews.start(gateway);
    }

    /// Cancels all subscriptions. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.points.stop();
        self.events.stop();
        self.establishments.stop();
        self.reviews.stop();
    }

    /// Reconciles one delivery into the store and reports which projections
    /// must re-render.
    ///
    /// Every reviews delivery clears the rating cache: an insertion, update
    /// or deletion of any review invalidates cached averages globally.
    pub fn handle_delivery(
        &mut self,
        store: &mut CollectionStore,
        ratings: &mut RatingCache,
        delivery: Delivery,
    ) -> RenderEffect {
        let has_changes = delivery.has_changes();
        let render = self.slot(delivery.collection()).accept(has_changes);
        match delivery {
            Delivery::Points(d) => {
                store.replace_points(d.docs);
                RenderEffect {
                    map: render,
                    list: render,
                    popups: false,
                }
            }
            Delivery::Events(d) => {
                store.replace_events(d.docs);
                RenderEffect {
                    map: render,
                    list: render,
                    popups: false,
                }
            }
            Delivery::Establishments(d) => {
                store.replace_establishments(d.docs);
                RenderEffect {
                    map: render,
                    list: render,
                    popups: false,
                }
            }
            Delivery::Reviews(d) => {
                store.replace_reviews(d.docs);
                ratings.clear();
                // Markers do not encode ratings; refreshing popups and the
                // list is sufficient.
                RenderEffect {
                    map: false,
                    list: render,
                    popups: render,
                }
            }
        }
    }

    /// Reports a transport error for one collection. The in-memory state is
    /// left untouched.
    pub fn handle_error(&mut self, kind: CollectionKind, err: &anyhow::Error) {
        warn!("Realtime subscription error on {kind}: {err}");
        self.slot(kind).fail();
    }
}

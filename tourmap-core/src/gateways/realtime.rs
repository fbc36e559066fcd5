use std::fmt;

use crate::collections::CollectionKind;

/// Handle of an open push subscription. Cancelling is idempotent.
pub trait RealtimeSubscription: fmt::Debug {
    fn cancel(&mut self);
}

/// The remote store's push-update transport.
///
/// Deliveries are serialized per collection (in-order) but unordered across
/// collections; the embedding event loop forwards each one to the sync
/// manager.
pub trait RealtimeGateway {
    fn subscribe(
        &self,
        collection: CollectionKind,
    ) -> Result<Box<dyn RealtimeSubscription>, anyhow::Error>;
}

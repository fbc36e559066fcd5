use std::collections::HashMap;

use time::Duration;

use crate::{collections::Collection, entities::*};

/// Arithmetic mean of all ratings about the given item, 0 if there are none.
pub fn avg_rating_of<'a>(
    reviews: impl IntoIterator<Item = &'a Review>,
    kind: ItemKind,
    item_id: &Id,
) -> AvgRating {
    reviews
        .into_iter()
        .filter(|r| r.is_about(kind, item_id))
        .fold(AvgRatingBuilder::default(), |mut acc, r| {
            acc += r.rating;
            acc
        })
        .build()
}

pub const DEFAULT_RATING_TTL: Duration = Duration::seconds(60);

#[derive(Debug, Clone, Copy)]
struct CachedRating {
    value: AvgRating,
    computed_at: Timestamp,
}

/// Memoized average ratings per item with time-based expiry.
///
/// `clear()` must run whenever the review collection is replaced wholesale:
/// reviews can be deleted as well as added, so a stale average is a
/// correctness bug, not merely a staleness cost.
#[derive(Debug)]
pub struct RatingCache {
    entries: HashMap<ItemRef, CachedRating>,
    ttl: Duration,
    generation: u64,
}

impl Default for RatingCache {
    fn default() -> Self {
        Self::new(DEFAULT_RATING_TTL)
    }
}

impl RatingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            generation: 0,
        }
    }

    /// Bumped on every `clear()`. Consumers that cache derived values (the
    /// popup content) compare generations to detect invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the cached average while it is fresh, otherwise recomputes
    /// from the given review collection and restamps the entry.
    pub fn get(
        &mut self,
        now: Timestamp,
        reviews: &Collection<Review>,
        kind: ItemKind,
        item_id: &Id,
    ) -> AvgRating {
        let key = ItemRef::new(kind, item_id.clone());
        if let Some(cached) = self.entries.get(&key) {
            if now - cached.computed_at < self.ttl {
                return cached.value;
            }
        }
        let value = avg_rating_of(reviews, kind, item_id);
        self.entries.insert(
            key,
            CachedRating {
                value,
                computed_at: now,
            },
        );
        value
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

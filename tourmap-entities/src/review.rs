use thiserror::Error;

use crate::{id::*, item::*, time::*};

/// An integer rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Error)]
#[error("Rating value out of range: {0}")]
pub struct InvalidRatingValue(u8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = InvalidRatingValue;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        if (Self::min().0..=Self::max().0).contains(&from) {
            Ok(Self(from))
        } else {
            Err(InvalidRatingValue(from))
        }
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Arithmetic mean of the ratings of an item.
///
/// Zero reviews yield the default of 0.0, rendered as "no ratings".
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub fn is_rated(self) -> bool {
        self.0 > 0.0
    }

    pub fn stars(self) -> u8 {
        self.0.round() as u8
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: RatingValue) {
        self.acc += u64::from(u8::from(val));
        self.cnt += 1;
    }

    pub fn build(self) -> AvgRating {
        if self.cnt > 0 {
            AvgRating::from(self.acc as f64 / self.cnt as f64)
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id         : Id,
    pub item_kind  : ItemKind,
    pub item_id    : Id,
    pub rating     : RatingValue,
    pub comment    : String,
    pub created_by : String,
    pub created_at : Timestamp,
}

impl Review {
    pub fn is_about(&self, kind: ItemKind, id: &Id) -> bool {
        self.item_kind == kind && self.item_id == *id
    }
}

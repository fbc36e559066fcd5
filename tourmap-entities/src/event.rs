use strum::{Display, EnumString, IntoStaticStr};
use time::{Date, Time};

use crate::{address::*, category::*, geo::*, id::*, image::*, time::*};

/// Lifecycle status of an event.
///
/// `Finalized` is a one-way terminal transition: the event disappears from
/// active views but remains retrievable from the collection as history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EventStatus {
    Active,
    Finalized,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id           : Id,
    pub name         : String,
    pub description  : String,
    pub category     : PointCategory,
    pub date         : Date,
    pub time         : Time,
    pub status       : EventStatus,
    pub pos          : Option<MapPoint>,
    pub address      : Option<Address>,
    pub images       : ImageList,
    pub created_by   : String,
    pub created_at   : Timestamp,
    pub updated_at   : Option<Timestamp>,
    pub finalized_at : Option<Timestamp>,
    pub finalized_by : Option<String>,
}

impl Event {
    pub fn is_finalized(&self) -> bool {
        self.status == EventStatus::Finalized
    }

    pub fn is_mappable(&self) -> bool {
        self.pos.is_some()
    }
}

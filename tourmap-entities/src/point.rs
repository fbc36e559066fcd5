use crate::{address::*, category::*, geo::*, id::*, image::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub category    : PointCategory,
    pub pos         : Option<MapPoint>,
    pub address     : Option<Address>,
    pub images      : ImageList,
    pub created_by  : String,
    pub created_at  : Timestamp,
    pub updated_at  : Option<Timestamp>,
}

impl PointOfInterest {
    pub fn is_mappable(&self) -> bool {
        self.pos.is_some()
    }
}

use crate::{address::*, category::*, contact::*, geo::*, id::*, image::*, time::*};

/// Tourism-board (Cadastur) registration of an establishment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certification {
    pub has_certification: bool,
    pub number: Option<String>,
}

impl Certification {
    /// Verified iff the certification flag is set and the number is non-empty.
    pub fn is_verified(&self) -> bool {
        self.has_certification
            && self
                .number
                .as_deref()
                .is_some_and(|number| !number.trim().is_empty())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Establishment {
    pub id            : Id,
    pub name          : String,
    pub description   : String,
    pub category      : EstablishmentCategory,
    pub pos           : Option<MapPoint>,
    pub address       : Option<Address>,
    pub contact       : Option<Contact>,
    pub images        : ImageList,
    pub certification : Certification,
    pub created_by    : String,
    pub created_at    : Timestamp,
    pub updated_at    : Option<Timestamp>,
}

impl Establishment {
    pub fn is_verified(&self) -> bool {
        self.certification.is_verified()
    }

    pub fn is_mappable(&self) -> bool {
        self.pos.is_some()
    }
}

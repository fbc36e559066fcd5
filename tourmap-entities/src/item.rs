use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::id::Id;

/// The three map-able entity kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemKind {
    Point,
    Event,
    Establishment,
}

/// A stable reference to a map-able item.
///
/// Carried on every marker so that UI interactions resolve back to the
/// domain item directly instead of correlating by coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: Id,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<Id>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn item_kind_from_str() {
        assert_eq!(ItemKind::from_str("point").unwrap(), ItemKind::Point);
        assert_eq!(ItemKind::from_str("Event").unwrap(), ItemKind::Event);
        assert_eq!(
            ItemKind::from_str("establishment").unwrap(),
            ItemKind::Establishment
        );
        assert!(ItemKind::from_str("survey").is_err());
    }
}

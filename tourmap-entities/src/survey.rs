use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{id::*, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VisitStatus {
    Visiting,
    Planning,
    Resident,
}

/// Free-form visitor feedback, not tied to any map item.
///
/// Write-only from the client's perspective; only read back through the
/// administrative aggregation view.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurveyResponse {
    pub id           : Id,
    pub visit_status : Option<VisitStatus>,
    pub reason       : Option<String>,
    pub origin       : Option<String>,
    pub companions   : Option<String>,
    pub stay         : Option<String>,
    pub author       : Option<String>,
    pub created_at   : Option<Timestamp>,
}

impl SurveyResponse {
    /// A response with no answered question carries no information and is
    /// dropped before any write.
    pub fn is_empty(&self) -> bool {
        self.visit_status.is_none()
            && self.reason.is_none()
            && self.origin.is_none()
            && self.companions.is_none()
            && self.stay.is_none()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street      : Option<String>,
    pub district    : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub postal_code : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.district.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
    }

    /// Single-line rendering used for geocoding queries and search.
    pub fn to_query_string(&self) -> String {
        [
            self.street.as_deref(),
            self.district.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
        ]
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

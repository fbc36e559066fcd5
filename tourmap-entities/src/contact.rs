use crate::url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// A phone number to get in contact
    pub phone: Option<String>,

    /// An e-mail address to get in contact
    pub email: Option<String>,

    /// The public website
    pub website: Option<Url>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.website.is_none()
    }
}

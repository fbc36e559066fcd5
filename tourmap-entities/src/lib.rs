#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tourmap-entities
//!
//! Reusable, agnostic domain entities for the tourism directory.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod category;
pub mod contact;
pub mod establishment;
pub mod event;
pub mod geo;
pub mod id;
pub mod image;
pub mod item;
pub mod point;
pub mod review;
pub mod survey;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;

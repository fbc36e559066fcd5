//! # tourmap
//!
//! Session layer of the tourism directory client: wires the sync core,
//! projections and mutation pipeline from `tourmap-core` to the HTTP
//! gateways in `tourmap-gateways` behind a single [`session::Session`]
//! facade.

pub mod cfg;
pub mod session;

pub use tourmap_core::{collections, entities, filter, projection, rating, sync, usecases};

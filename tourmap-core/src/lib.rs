#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tourmap-core
//!
//! Client-side data synchronization and rendering core of the tourism
//! directory: in-memory mirrors of the remote collections, realtime sync
//! state machines, rating cache, shared filter predicates, map and list
//! projections, and the mutation pipeline.

pub mod collections;
pub mod entities;
pub mod filter;
pub mod gateways;
pub mod projection;
pub mod rating;
pub mod repositories;
pub mod schedule;
pub mod sync;
pub mod usecases;

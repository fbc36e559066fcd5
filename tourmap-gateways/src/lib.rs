//! # tourmap-gateways
//!
//! HTTP implementations of the external service gateways: the imgbb image
//! host, the ViaCEP postal code lookup and the Nominatim geocoder.
//! All of them degrade gracefully: lookups return `None` on any failure,
//! uploads surface a typed error per file.

pub mod imgbb;
pub mod nominatim;
pub mod viacep;

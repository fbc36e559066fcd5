// Interfaces of the external collaborators. Implementations live in
// tourmap-gateways or are provided by the embedding application.

pub mod auth;
pub mod geocode;
pub mod image_upload;
pub mod postal;
pub mod realtime;

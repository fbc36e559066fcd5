use crate::entities::Address;

/// Postal-code (CEP) to address resolution.
///
/// Lookup failures of any kind degrade to `None`: the surrounding form
/// falls back to manual coordinate entry and is never blocked.
pub trait PostalCodeGateway {
    fn resolve_postal_code(&self, code: &str) -> Option<Address>;
}

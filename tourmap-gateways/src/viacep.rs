use log::warn;
use reqwest::blocking::Client;
use serde::Deserialize;

use tourmap_core::gateways::postal::PostalCodeGateway;
use tourmap_entities::address::Address;

pub const DEFAULT_API_URL: &str = "https://viacep.com.br/ws";

/// Brazilian postal code (CEP) lookup via <https://viacep.com.br>.
#[derive(Debug, Clone)]
pub struct ViaCep {
    api_url: String,
    client: Client,
}

impl ViaCep {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: Client::new(),
        }
    }
}

/// ViaCEP replies `200 OK` with `{"erro": true}` for unknown codes.
#[derive(Debug, Deserialize)]
struct CepResponse {
    #[serde(default)]
    erro: bool,
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
}

impl CepResponse {
    fn into_address(self, postal_code: &str) -> Option<Address> {
        if self.erro {
            return None;
        }
        let non_empty = |field: Option<String>| field.filter(|value| !value.is_empty());
        Some(Address {
            street: non_empty(self.logradouro),
            district: non_empty(self.bairro),
            city: non_empty(self.localidade),
            state: non_empty(self.uf),
            postal_code: Some(postal_code.to_string()),
        })
    }
}

impl PostalCodeGateway for ViaCep {
    fn resolve_postal_code(&self, postal_code: &str) -> Option<Address> {
        let url = format!("{}/{}/json/", self.api_url, postal_code.trim());
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => {
                warn!("CEP lookup for {postal_code} failed: {err}");
                return None;
            }
        };
        let parsed: CepResponse = match response.json() {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Unexpected CEP response for {postal_code}: {err}");
                return None;
            }
        };
        parsed.into_address(postal_code)
    }
}

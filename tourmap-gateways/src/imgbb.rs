use anyhow::anyhow;
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;

use tourmap_core::gateways::image_upload::{ImageFile, ImageUploadError, ImageUploadGateway};
use tourmap_entities::url::Url;

pub const DEFAULT_API_URL: &str = "https://api.imgbb.com/1/upload";

/// Image host client for <https://api.imgbb.com>.
#[derive(Debug, Clone)]
pub struct ImgBb {
    api_url: String,
    api_key: String,
    client: Client,
}

impl ImgBb {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    data: Option<UploadData>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl UploadResponse {
    fn into_url(self) -> Result<Url, ImageUploadError> {
        if let Some(error) = self.error {
            return Err(ImageUploadError::Api(error.message));
        }
        let data = self
            .data
            .filter(|_| self.success)
            .ok_or_else(|| ImageUploadError::Api("no image data in response".into()))?;
        data.url
            .parse()
            .map_err(|err| ImageUploadError::Other(anyhow!("invalid image URL: {err}")))
    }
}

impl ImageUploadGateway for ImgBb {
    fn upload_image(&self, file: &ImageFile) -> Result<Url, ImageUploadError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|err| ImageUploadError::Other(anyhow!(err)))?;
        let form = multipart::Form::new().part("image", part);
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .map_err(|err| ImageUploadError::Other(anyhow!(err)))?;
        let parsed: UploadResponse = response
            .json()
            .map_err(|err| ImageUploadError::Api(err.to_string()))?;
        parsed.into_url()
    }
}

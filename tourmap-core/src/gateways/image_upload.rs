use thiserror::Error;

use crate::entities::Url;

pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

pub const ALLOWED_IMAGE_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ImageUploadError {
    #[error("Image too large (max 32MB): {0}")]
    TooLarge(String),
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("Image host rejected the upload: {0}")]
    Api(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Checked client-side before any upload is attempted.
pub fn validate_image(file: &ImageFile) -> Result<(), ImageUploadError> {
    if file.bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageUploadError::TooLarge(file.file_name.clone()));
    }
    if !ALLOWED_IMAGE_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ImageUploadError::UnsupportedType(file.file_name.clone()));
    }
    Ok(())
}

pub trait ImageUploadGateway {
    fn upload_image(&self, file: &ImageFile) -> Result<Url, ImageUploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str, len: usize) -> ImageFile {
        ImageFile {
            file_name: "photo.jpg".into(),
            mime_type: mime.into(),
            bytes: vec![0; len],
        }
    }

    #[test]
    fn validates_size_and_mime_type() {
        assert!(validate_image(&file("image/png", 1024)).is_ok());
        assert!(matches!(
            validate_image(&file("image/png", MAX_IMAGE_BYTES + 1)),
            Err(ImageUploadError::TooLarge(_))
        ));
        assert!(matches!(
            validate_image(&file("application/pdf", 1024)),
            Err(ImageUploadError::UnsupportedType(_))
        ));
    }
}

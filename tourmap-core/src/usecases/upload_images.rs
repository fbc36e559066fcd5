use log::warn;

use super::prelude::*;
use crate::gateways::image_upload::{validate_image, ImageFile, ImageUploadError, ImageUploadGateway};

/// Uploads a selection of images, one request per file.
///
/// Files are independent: a failed upload drops that file and keeps the
/// rest. Only when every file of a non-empty selection fails does the
/// operation abort, so a flaky image host cannot block the record itself.
pub fn upload_images<G: ImageUploadGateway + ?Sized>(
    gateway: &G,
    files: &[ImageFile],
) -> Result<ImageList> {
    if files.is_empty() {
        return Ok(ImageList::default());
    }
    let mut urls = Vec::new();
    let mut last_error: Option<ImageUploadError> = None;
    for file in files {
        let uploaded = validate_image(file).and_then(|()| gateway.upload_image(file));
        match uploaded {
            Ok(url) => urls.push(url),
            Err(err) => {
                warn!("Upload of {} failed: {err}", file.file_name);
                last_error = Some(err);
            }
        }
    }
    if urls.is_empty() {
        if let Some(err) = last_error {
            return Err(Error::Upload(err));
        }
    }
    Ok(urls.into_iter().collect())
}

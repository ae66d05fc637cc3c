use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};

/// A single piece of art
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub artist_avatar_url: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub is_liked: bool,
    /// Locked artworks belong to a paid collection the viewer has not bought
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Artwork {
    /// Thumbnail when the backend generated one
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }
}

/// Metadata sent alongside an uploaded image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkUpload {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub collection_id: Option<String>,
}

pub async fn get_artwork(id: &str) -> Result<Artwork, ApiError> {
    ApiClient::new().get(&format!("/art/{}", urlencoding::encode(id))).await
}

pub async fn artist_artworks(artist_id: &str, page: u32, limit: u32) -> Result<Page<Artwork>, ApiError> {
    ApiClient::new()
        .get(&format!(
            "/artists/{}/art{}",
            urlencoding::encode(artist_id),
            page_query(page, limit, &[])
        ))
        .await
}

pub async fn artworks_by_tag(tag: &str, page: u32, limit: u32) -> Result<Page<Artwork>, ApiError> {
    ApiClient::new()
        .get(&format!("/art{}", page_query(page, limit, &[("tag", tag)])))
        .await
}

pub async fn like_artwork(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .post_empty(&format!("/art/{}/like", urlencoding::encode(id)))
        .await
}

pub async fn unlike_artwork(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .delete(&format!("/art/{}/like", urlencoding::encode(id)))
        .await
}

pub async fn delete_artwork(id: &str) -> Result<(), ApiError> {
    ApiClient::new().delete(&format!("/art/{}", urlencoding::encode(id))).await
}

/// Multipart upload of an image file plus its metadata
#[cfg(target_family = "wasm")]
pub async fn upload_artwork(file: web_sys::File, meta: &ArtworkUpload) -> Result<Artwork, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::transport(format!("FormData unavailable: {:?}", e)))?;
    let append = |key: &str, value: &str| {
        form.append_with_str(key, value)
            .map_err(|e| ApiError::transport(format!("Failed to add {}: {:?}", key, e)))
    };

    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ApiError::transport(format!("Failed to attach file: {:?}", e)))?;
    append("title", &meta.title)?;
    if let Some(description) = &meta.description {
        append("description", description)?;
    }
    for tag in &meta.tags {
        append("tags[]", tag)?;
    }
    if let Some(collection_id) = &meta.collection_id {
        append("collectionId", collection_id)?;
    }

    log::info!("Uploading artwork {} ({} bytes)", meta.title, file.size());
    ApiClient::new().post_form("/art", form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_url_fallback() {
        let mut art: Artwork = serde_json::from_value(json!({
            "id": "a1",
            "title": "Tide",
            "imageUrl": "https://cdn/full.png",
            "artistId": "u1"
        }))
        .unwrap();
        assert_eq!(art.preview_url(), "https://cdn/full.png");

        art.thumbnail_url = Some("https://cdn/thumb.png".into());
        assert_eq!(art.preview_url(), "https://cdn/thumb.png");
        assert!(!art.is_locked);
        assert_eq!(art.like_count, 0);
    }
}

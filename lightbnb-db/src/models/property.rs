//! Property rows, search results and the insert payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_non_negative, require_text};
use super::ValidationError;

const MAX_TEXT_LEN: usize = 255;

/// Property record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Property with its average review rating, as returned by search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// Unvalidated property fields, as submitted by a listing form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

/// Validated property ready for insert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PropertyDraft", into = "PropertyDraft")]
pub struct NewProperty(PropertyDraft);

impl NewProperty {
    /// Validate a draft.
    ///
    /// # Rules
    /// - Title, photo URLs and address fields are required, max 255 chars
    /// - cost_per_night and the room/parking counts must not be negative
    pub fn new(draft: PropertyDraft) -> Result<Self, ValidationError> {
        require_text("title", &draft.title, MAX_TEXT_LEN)?;
        require_text("thumbnail_photo_url", &draft.thumbnail_photo_url, MAX_TEXT_LEN)?;
        require_text("cover_photo_url", &draft.cover_photo_url, MAX_TEXT_LEN)?;
        require_text("street", &draft.street, MAX_TEXT_LEN)?;
        require_text("city", &draft.city, MAX_TEXT_LEN)?;
        require_text("province", &draft.province, MAX_TEXT_LEN)?;
        require_text("post_code", &draft.post_code, MAX_TEXT_LEN)?;
        require_text("country", &draft.country, MAX_TEXT_LEN)?;

        require_non_negative("cost_per_night", draft.cost_per_night)?;
        require_non_negative("parking_spaces", draft.parking_spaces)?;
        require_non_negative("number_of_bathrooms", draft.number_of_bathrooms)?;
        require_non_negative("number_of_bedrooms", draft.number_of_bedrooms)?;

        Ok(Self(draft))
    }

    pub fn fields(&self) -> &PropertyDraft {
        &self.0
    }

    pub fn into_draft(self) -> PropertyDraft {
        self.0
    }
}

impl TryFrom<PropertyDraft> for NewProperty {
    type Error = ValidationError;

    fn try_from(draft: PropertyDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

impl From<NewProperty> for PropertyDraft {
    fn from(property: NewProperty) -> Self {
        property.0
    }
}

#[cfg(test)]
pub(crate) fn sample_draft() -> PropertyDraft {
    PropertyDraft {
        owner_id: 1,
        title: "Speed lamp".to_owned(),
        description: "description".to_owned(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_owned(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_owned(),
        cost_per_night: 93_061,
        street: "536 Namsub Highway".to_owned(),
        city: "Sotboske".to_owned(),
        province: "Quebec".to_owned(),
        post_code: "28142".to_owned(),
        country: "Canada".to_owned(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}

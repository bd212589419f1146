//! Tourist booking record model and related types.
//!
//! The full `Tourist` document doubles as the single-record API
//! projection: `_id` is stored as a native ObjectId and serialized to
//! clients as a hex string under `id`. The list projection
//! (`TouristShort`) omits the `touristCode` shared secret.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

fn serialize_object_id<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

fn serialize_object_id_required<S>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&id.to_hex())
}

/// Tourist booking record as stored in the `tourists` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tourist {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_object_id",
        default
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub tourist_name: String,
    pub tourist_email: String,
    pub tourist_phone: String,
    /// Shared secret checked on comment updates; excluded from list views
    pub tourist_code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub otel: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

/// List projection of a tourist record, without the `touristCode` secret
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TouristShort {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        serialize_with = "serialize_object_id_required"
    )]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub tourist_name: String,
    pub tourist_email: String,
    pub tourist_phone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub otel: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

/// Payload for creating a tourist record.
/// A supplied `images` value is accepted but discarded: the gallery is
/// always initialized empty until uploads complete.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourist {
    #[validate(length(min = 1, message = "touristName must not be empty"))]
    pub tourist_name: String,
    #[validate(email(message = "touristEmail must be a valid email address"))]
    pub tourist_email: String,
    #[validate(length(min = 1, message = "touristPhone must not be empty"))]
    pub tourist_phone: String,
    #[validate(length(min = 1, message = "touristCode must not be empty"))]
    pub tourist_code: String,
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub otel: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub cost: f64,
    pub link: Option<String>,
    pub comment: Option<String>,
}

/// Payload for updating the destination fields of a record
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTourist {
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    #[serde(default)]
    pub country_id: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "otel must not be empty"))]
    pub otel: String,
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: String,
    pub cost: f64,
}

/// Payload for the code-gated comment update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    #[validate(length(min = 1, message = "comment must not be empty"))]
    pub comment: String,
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(length(min = 1, message = "touristCode must not be empty"))]
    pub tourist_code: String,
}

/// Target record and replacement gallery for a gallery update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryInfo {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    pub images: Vec<String>,
}

/// Payload for replacing a record's gallery; the target id travels
/// inside the info object
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryRequest {
    #[validate(nested)]
    pub tourist_info: GalleryInfo,
}

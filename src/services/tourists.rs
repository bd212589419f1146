//! Tourist record management service

use mongodb::bson::oid::ObjectId;

use crate::{
    error::{AppError, AppResult},
    models::tourist::{CreateTourist, GalleryInfo, Tourist, TouristShort, UpdateComment, UpdateTourist},
    repository::Repository,
};

#[derive(Clone)]
pub struct TouristsService {
    repository: Repository,
}

impl TouristsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a tourist record by id
    pub async fn get(&self, id: &str) -> AppResult<Tourist> {
        let oid = parse_object_id(id)?;
        self.repository
            .tourists
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a tourist for the provided id".to_string()))
    }

    /// List all tourist records, without the `touristCode` secret
    pub async fn list(&self) -> AppResult<Vec<TouristShort>> {
        self.repository.tourists.find_all().await
    }

    /// Create a tourist record. The gallery is always initialized empty,
    /// whatever the caller supplied: images are linked in only after the
    /// upload endpoints have received them.
    pub async fn create(&self, payload: CreateTourist) -> AppResult<Tourist> {
        let tourist = Tourist {
            id: None,
            tourist_name: payload.tourist_name,
            tourist_email: payload.tourist_email,
            tourist_phone: payload.tourist_phone,
            tourist_code: payload.tourist_code,
            image: payload.image,
            images: Vec::new(),
            country: payload.country,
            country_id: payload.country_id,
            city: payload.city,
            otel: payload.otel,
            date: payload.date,
            cost: payload.cost,
            link: payload.link,
            comment: payload.comment,
        };
        self.repository.tourists.insert(tourist).await
    }

    /// Overwrite the destination fields of an existing record
    pub async fn update_destination(&self, id: &str, fields: UpdateTourist) -> AppResult<Tourist> {
        let oid = parse_object_id(id)?;
        self.repository
            .tourists
            .update_destination(oid, &fields)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a tourist for the provided id".to_string()))
    }

    /// Overwrite the comment and image fields of an existing record,
    /// gated by an exact match on the stored `touristCode`.
    pub async fn update_comment(&self, id: &str, payload: UpdateComment) -> AppResult<Tourist> {
        let oid = parse_object_id(id)?;
        let existing = self
            .repository
            .tourists
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a tourist for the provided id".to_string()))?;

        if existing.tourist_code != payload.tourist_code {
            return Err(AppError::Forbidden("Code is not correct".to_string()));
        }

        self.repository
            .tourists
            .update_comment(oid, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a tourist for the provided id".to_string()))
    }

    /// Replace the gallery of the record named inside the info object
    pub async fn update_gallery(&self, info: GalleryInfo) -> AppResult<Tourist> {
        let oid = parse_object_id(&info.id)?;
        self.repository
            .tourists
            .update_images(oid, &info.images)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a tourist for the provided id".to_string()))
    }

    /// Delete a tourist record. Deleting an id with no matching record
    /// succeeds (delete-by-filter matching zero documents).
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let oid = parse_object_id(id)?;
        let deleted = self.repository.tourists.delete(oid).await?;
        if deleted == 0 {
            tracing::debug!("Delete matched no tourist for id {}", id);
        }
        Ok(())
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid tourist id: {}", id)))
}

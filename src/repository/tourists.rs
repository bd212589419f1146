//! Tourists repository for document-store operations

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Collection, Database,
};

use crate::{
    error::AppResult,
    models::tourist::{Tourist, TouristShort, UpdateComment, UpdateTourist},
};

const COLLECTION: &str = "tourists";

#[derive(Clone)]
pub struct TouristsRepository {
    collection: Collection<Tourist>,
}

impl TouristsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Tourist>(COLLECTION),
        }
    }

    /// Fetch a single record by id
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Tourist>> {
        let tourist = self.collection.find_one(doc! { "_id": id }, None).await?;
        Ok(tourist)
    }

    /// Fetch all records with the `touristCode` secret excluded at the
    /// store level. Order is not guaranteed.
    pub async fn find_all(&self) -> AppResult<Vec<TouristShort>> {
        let options = FindOptions::builder()
            .projection(doc! { "touristCode": 0 })
            .build();
        let cursor = self
            .collection
            .clone_with_type::<TouristShort>()
            .find(doc! {}, options)
            .await?;
        let tourists = cursor.try_collect().await?;
        Ok(tourists)
    }

    /// Insert a new record and return it with its store-assigned id
    pub async fn insert(&self, mut tourist: Tourist) -> AppResult<Tourist> {
        let result = self.collection.insert_one(&tourist, None).await?;
        tourist.id = result.inserted_id.as_object_id();
        Ok(tourist)
    }

    /// Overwrite the destination fields of a record, returning the
    /// updated document, or `None` when no record matches the id.
    pub async fn update_destination(
        &self,
        id: ObjectId,
        fields: &UpdateTourist,
    ) -> AppResult<Option<Tourist>> {
        let update = doc! {
            "$set": {
                "country": &fields.country,
                "countryId": &fields.country_id,
                "city": &fields.city,
                "otel": &fields.otel,
                "date": &fields.date,
                "cost": fields.cost,
            }
        };
        self.apply_update(id, update).await
    }

    /// Overwrite the comment and image fields of a record
    pub async fn update_comment(
        &self,
        id: ObjectId,
        fields: &UpdateComment,
    ) -> AppResult<Option<Tourist>> {
        let update = doc! {
            "$set": {
                "comment": &fields.comment,
                "image": fields.image.clone(),
                "images": fields.images.clone(),
            }
        };
        self.apply_update(id, update).await
    }

    /// Replace the gallery with the supplied sequence (never a merge)
    pub async fn update_images(&self, id: ObjectId, images: &[String]) -> AppResult<Option<Tourist>> {
        let update = doc! { "$set": { "images": images.to_vec() } };
        self.apply_update(id, update).await
    }

    /// Delete a record by id. Matching zero documents is not an error.
    pub async fn delete(&self, id: ObjectId) -> AppResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn apply_update(
        &self,
        id: ObjectId,
        update: mongodb::bson::Document,
    ) -> AppResult<Option<Tourist>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let tourist = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update, options)
            .await?;
        Ok(tourist)
    }
}

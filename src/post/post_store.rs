use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

use crate::post::post_model::Post;
use crate::utils::error::CustomError;

/// Document store for posts. Every mutation goes through `save`, which
/// writes the whole post document back.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Posts ordered newest first by `created_at`, truncated to `limit`.
    async fn find_all(&self, limit: i64) -> Result<Vec<Post>, CustomError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Post>, CustomError>;

    /// Posts whose `type` equals `post_type`, store order, truncated to `limit`.
    async fn find_by_type(&self, post_type: &str, limit: i64) -> Result<Vec<Post>, CustomError>;

    async fn save(&self, post: &Post) -> Result<(), CustomError>;
}

pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(client: &Client) -> Self {
        let collection = client
            .database("social_feed_db")
            .collection::<Post>("posts");
        MongoPostStore { collection }
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find_all(&self, limit: i64) -> Result<Vec<Post>, CustomError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to fetch posts".into()))?;

        cursor
            .try_collect()
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to collect posts".into()))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Post>, CustomError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to fetch post".into()))
    }

    async fn find_by_type(&self, post_type: &str, limit: i64) -> Result<Vec<Post>, CustomError> {
        let cursor = self
            .collection
            .find(doc! { "type": post_type })
            .limit(limit)
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to fetch posts".into()))?;

        cursor
            .try_collect()
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to collect posts".into()))
    }

    async fn save(&self, post: &Post) -> Result<(), CustomError> {
        self.collection
            .replace_one(doc! { "_id": post.id }, post)
            .upsert(true)
            .await
            .map_err(|_| CustomError::InternalServerError("Failed to save post".into()))?;

        Ok(())
    }
}

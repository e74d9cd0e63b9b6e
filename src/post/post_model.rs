use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A feed post with its embedded interaction state. Likes and comments live
/// inside the post document and only change by saving the whole document back.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub name: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub user: ObjectId,
    pub created_at: DateTime<Utc>,
    /// Newest first, at most one entry per user.
    pub likes: Vec<Like>,
    /// Newest first.
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Like {
    pub user: ObjectId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub user: ObjectId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub text: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub post_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

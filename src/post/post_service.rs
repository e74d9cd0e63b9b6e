use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::post::post_model::{Comment, CreateCommentRequest, CreatePostRequest, Like, Post};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use crate::utils::validation::validate_post_input;

/// Newest-first feed truncation.
const FEED_LIMIT: i64 = 20;
/// Per-type listing truncation.
const TYPE_LIMIT: i64 = 10;

/// State-transition logic for a post's embedded likes and comments. Each
/// operation is one fetch plus, for mutations, one whole-document save.
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        PostService { store }
    }

    pub async fn create_post(
        &self,
        author: ObjectId,
        input: CreatePostRequest,
    ) -> Result<Post, CustomError> {
        let outcome = validate_post_input(input.text.as_deref());
        if !outcome.is_valid {
            return Err(CustomError::ValidationError(outcome.errors));
        }

        let post = Post {
            id: ObjectId::new(),
            text: input.text.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            post_type: input.post_type.unwrap_or_default(),
            user: author,
            created_at: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        };

        self.store.save(&post).await?;

        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        self.store
            .find_all(FEED_LIMIT)
            .await
            .map_err(|_| CustomError::NotFoundError("No posts found".into()))
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, CustomError> {
        let post_id = parse_post_id(id)?;

        self.store
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| CustomError::NotFoundError("No post found with that id".into()))
    }

    pub async fn list_posts_by_type(&self, post_type: &str) -> Result<Vec<Post>, CustomError> {
        self.store
            .find_by_type(post_type, TYPE_LIMIT)
            .await
            .map_err(|_| CustomError::NotFoundError("No post is with that type".into()))
    }

    /// A second like by the same user is rejected, not silently ignored.
    pub async fn like_post(&self, user: ObjectId, post_id: &str) -> Result<Post, CustomError> {
        let mut post = self.get_post(post_id).await?;

        if post.likes.iter().any(|like| like.user == user) {
            return Err(CustomError::AlreadyLikedError(
                "the post is already liked".into(),
            ));
        }

        post.likes.insert(0, Like { user });
        self.store.save(&post).await?;

        Ok(post)
    }

    pub async fn unlike_post(&self, user: ObjectId, post_id: &str) -> Result<Post, CustomError> {
        let mut post = self.get_post(post_id).await?;

        // Presence check doubles as the removal index, so the removal
        // cannot be out of range.
        let Some(index) = post.likes.iter().position(|like| like.user == user) else {
            return Err(CustomError::NotLikedError("not liked before".into()));
        };
        post.likes.remove(index);
        self.store.save(&post).await?;

        Ok(post)
    }

    pub async fn add_comment(
        &self,
        user: ObjectId,
        post_id: &str,
        input: CreateCommentRequest,
    ) -> Result<Post, CustomError> {
        // Validation runs before the post lookup.
        let outcome = validate_post_input(input.text.as_deref());
        if !outcome.is_valid {
            return Err(CustomError::ValidationError(outcome.errors));
        }

        let mut post = self.get_post(post_id).await?;

        let comment = Comment {
            id: ObjectId::new(),
            text: input.text.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            avatar: input.avatar.unwrap_or_default(),
            user,
            created_at: Utc::now(),
        };
        post.comments.insert(0, comment);
        self.store.save(&post).await?;

        Ok(post)
    }

    /// Only the comment's author may remove it.
    pub async fn remove_comment(
        &self,
        user: ObjectId,
        post_id: &str,
        comment_id: &str,
    ) -> Result<Post, CustomError> {
        let mut post = self.get_post(post_id).await?;

        let comment_id = ObjectId::parse_str(comment_id)
            .map_err(|_| CustomError::CommentNotFoundError("Comment does not exist".into()))?;

        let Some(index) = post
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
        else {
            return Err(CustomError::CommentNotFoundError(
                "Comment does not exist".into(),
            ));
        };
        if post.comments[index].user != user {
            return Err(CustomError::UnauthorizedError(
                "Only the comment author can remove it".into(),
            ));
        }

        post.comments.remove(index);
        self.store.save(&post).await?;

        Ok(post)
    }
}

/// Ids are opaque at the boundary: anything unparseable names no post.
fn parse_post_id(id: &str) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(id)
        .map_err(|_| CustomError::NotFoundError("No post found with that id".into()))
}

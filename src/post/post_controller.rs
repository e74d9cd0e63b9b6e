use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::auth::authenticated_identity;
use crate::post::post_model::{CreateCommentRequest, CreatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;

pub async fn create_post(
    post_service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let author = authenticated_identity(&req)?;

    let post = post_service
        .create_post(author, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Post created successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

pub async fn list_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "posts": posts
    })))
}

pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post(&post_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Post fetched successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

pub async fn list_posts_by_type(
    post_type: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts = post_service
        .list_posts_by_type(&post_type.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "posts": posts
    })))
}

pub async fn like_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let user = authenticated_identity(&req)?;

    let post = post_service.like_post(user, &post_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Post liked successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

pub async fn unlike_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let user = authenticated_identity(&req)?;

    let post = post_service
        .unlike_post(user, &post_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Post unliked successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

pub async fn add_comment(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    payload: web::Json<CreateCommentRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let user = authenticated_identity(&req)?;

    let post = post_service
        .add_comment(user, &post_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Comment added successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

pub async fn remove_comment(
    path: web::Path<(String, String)>,
    post_service: web::Data<PostService>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let user = authenticated_identity(&req)?;
    let (post_id, comment_id) = path.into_inner();

    let post = post_service
        .remove_comment(user, &post_id, &comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Comment removed successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};

    use crate::middleware::auth::create_token;
    use crate::post::post_index::post_routes;
    use crate::post::post_service::PostService;
    use crate::post::post_store::memory::MemoryPostStore;

    macro_rules! app {
        () => {{
            let store = Arc::new(MemoryPostStore::default());
            let service = web::Data::new(PostService::new(store));
            test::init_service(App::new().app_data(service).configure(post_routes)).await
        }};
    }

    macro_rules! create_post {
        ($app:expr, $user:expr) => {{
            let req = test::TestRequest::post()
                .uri("/posts")
                .insert_header(bearer($user))
                .set_json(post_body())
                .to_request();
            let body: Value = test::call_and_read_body_json($app, req).await;
            body
        }};
    }

    fn bearer(user: &ObjectId) -> (&'static str, String) {
        let token = create_token(&user.to_hex()).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    fn post_body() -> Value {
        json!({
            "text": "Hello world, this is ten+ chars",
            "name": "Ada",
            "type": "news"
        })
    }

    fn oid_of(value: &Value) -> String {
        value["$oid"].as_str().unwrap().to_string()
    }

    #[actix_web::test]
    async fn create_requires_a_bearer_token() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(post_body())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_then_fetch_roundtrip() {
        let app = app!();
        let user = ObjectId::new();

        let created = create_post!(&app, &user);
        assert_eq!(created["success"], json!(true));
        let id = oid_of(&created["post"]["_id"]);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/i/{id}"))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched["post"]["text"], created["post"]["text"]);
        assert_eq!(fetched["post"]["likes"], json!([]));
        assert_eq!(fetched["post"]["comments"], json!([]));
    }

    #[actix_web::test]
    async fn invalid_create_payload_returns_the_field_errors() {
        let app = app!();
        let user = ObjectId::new();

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(bearer(&user))
            .set_json(json!({ "text": "short" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("VALIDATION_ERROR"));
        assert_eq!(
            body["errors"]["text"],
            json!("post length must be between 10 and 300")
        );
    }

    #[actix_web::test]
    async fn double_like_returns_already_liked() {
        let app = app!();
        let user = ObjectId::new();

        let created = create_post!(&app, &user);
        let id = oid_of(&created["post"]["_id"]);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/like/{id}"))
            .insert_header(bearer(&user))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/like/{id}"))
            .insert_header(bearer(&user))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("ALREADY_LIKED_ERROR"));
    }

    #[actix_web::test]
    async fn unknown_post_returns_not_found() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri(&format!("/posts/i/{}", ObjectId::new().to_hex()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("NOT_FOUND_ERROR"));
    }

    #[actix_web::test]
    async fn comment_lifecycle_over_http() {
        let app = app!();
        let author = ObjectId::new();
        let stranger = ObjectId::new();

        let created = create_post!(&app, &author);
        let id = oid_of(&created["post"]["_id"]);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/comment/{id}"))
            .insert_header(bearer(&author))
            .set_json(json!({ "text": "a comment with enough text", "name": "Ada" }))
            .to_request();
        let commented: Value = test::call_and_read_body_json(&app, req).await;
        let comment_id = oid_of(&commented["post"]["comments"][0]["_id"]);

        // A stranger cannot remove someone else's comment.
        let req = test::TestRequest::delete()
            .uri(&format!("/posts/comment/{id}/{comment_id}"))
            .insert_header(bearer(&stranger))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::delete()
            .uri(&format!("/posts/comment/{id}/{comment_id}"))
            .insert_header(bearer(&author))
            .to_request();
        let removed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(removed["post"]["comments"], json!([]));
    }

    #[actix_web::test]
    async fn listing_is_public() {
        let app = app!();
        let user = ObjectId::new();
        let _ = create_post!(&app, &user);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["posts"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/posts/t/news").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    }
}

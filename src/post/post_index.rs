use super::post_controller::{
    add_comment, create_post, get_post, like_post, list_posts, list_posts_by_type, remove_comment,
    unlike_post,
};
use crate::middleware::auth::verify_token;
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            // Public reads. The GET guard on the bare path lets POSTs fall
            // through to the authenticated scope below.
            .route("/i/{id}", web::get().to(get_post))
            .route("/t/{type}", web::get().to(list_posts_by_type))
            .service(
                web::resource("")
                    .guard(guard::Get())
                    .route(web::get().to(list_posts)),
            )
            // Mutations require a bearer token.
            .service(
                web::scope("")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route("", web::post().to(create_post))
                    .route("/like/{id}", web::post().to(like_post))
                    .route("/unlike/{id}", web::post().to(unlike_post))
                    .route("/comment/{id}", web::post().to(add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(remove_comment),
                    ),
            ),
    );
}

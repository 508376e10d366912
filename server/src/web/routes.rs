// owlconnect_server/src/web/routes.rs

use actix_web::web;

// Simple health check. In a real deployment this might also probe the
// database pool.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Landing page content (static marketing payload)
      .route("/landing", web::get().to(crate::web::handlers::landing_handlers::landing_content_handler))
      // Feed Routes
      .service(
        web::scope("/feed")
          .route("", web::get().to(crate::web::handlers::feed_handlers::list_feed_handler))
          .route("/posts", web::post().to(crate::web::handlers::feed_handlers::create_post_handler))
          .route(
            "/posts/{post_id}/like",
            web::post().to(crate::web::handlers::feed_handlers::like_post_handler),
          )
          .route(
            "/posts/{post_id}/comments",
            web::post().to(crate::web::handlers::feed_handlers::add_comment_handler),
          ),
      )
      // Post Detail Routes
      .service(
        web::scope("/posts")
          .route("/{post_id}", web::get().to(crate::web::handlers::post_handlers::get_post_handler))
          .route(
            "/{post_id}/like",
            web::post().to(crate::web::handlers::post_handlers::like_post_handler),
          )
          .route(
            "/{post_id}/comments",
            web::post().to(crate::web::handlers::post_handlers::add_comment_handler),
          )
          .route(
            "/{post_id}/share-link",
            web::get().to(crate::web::handlers::post_handlers::share_link_handler),
          )
          .route(
            "/{post_id}/report",
            web::post().to(crate::web::handlers::post_handlers::report_post_handler),
          ),
      )
      // Marketplace Routes
      .service(
        web::scope("/marketplace")
          .route(
            "/products",
            web::get().to(crate::web::handlers::marketplace_handlers::list_products_handler),
          )
          .route(
            "/products",
            web::post().to(crate::web::handlers::marketplace_handlers::create_listing_handler),
          )
          .route(
            "/products/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          )
          .route(
            "/products/{product_id}/contact",
            web::post().to(crate::web::handlers::marketplace_handlers::contact_seller_handler),
          )
          .route(
            "/products/{product_id}/purchase",
            web::post().to(crate::web::handlers::product_handlers::purchase_product_handler),
          )
          .route(
            "/products/{product_id}/messages",
            web::post().to(crate::web::handlers::product_handlers::message_seller_handler),
          )
          .route(
            "/products/{product_id}/orders",
            web::get().to(crate::web::handlers::product_handlers::list_orders_handler),
          ),
      )
      // Merchandise Store Routes
      .service(
        web::scope("/store")
          .route("", web::get().to(crate::web::handlers::store_handlers::store_overview_handler))
          .route(
            "/merchandise/{merch_id}/purchase",
            web::post().to(crate::web::handlers::store_handlers::purchase_merch_handler),
          )
          .route(
            "/merchandise/{merch_id}/customize",
            web::post().to(crate::web::handlers::store_handlers::customize_merch_handler),
          ),
      ),
  );
  // Uploaded media is served outside the API scope, at the URLs the
  // object store mints.
  cfg.route(
    "/uploads/{stored_name}",
    web::get().to(crate::web::handlers::upload_handlers::serve_upload_handler),
  );
}

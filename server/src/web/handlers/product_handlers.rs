// owlconnect_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentUser;
use crate::web::handlers::require_text;
use owlconnect_data::{NewMessage, NewOrder, OrderTarget, ProductWithSeller};

#[derive(Deserialize, Debug)]
pub struct MessageSellerPayload {
  pub content: String,
}

async fn product_or_not_found(app_state: &AppState, product_id: &str) -> Result<ProductWithSeller, AppError> {
  match app_state.data.products().find_by_id(product_id).await? {
    Some(product) => Ok(product),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = product_or_not_found(&app_state, &product_id).await?;

  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "product": product })))
}

#[instrument(name = "handler::purchase_product", skip(app_state, path, user), fields(product_id = %path.as_ref()))]
pub async fn purchase_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: Option<CurrentUser>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  // The page shows its own login prompt instead of the generic 401 text.
  let user = user.ok_or_else(|| AppError::Auth("Please login to purchase".to_string()))?;
  let product = product_or_not_found(&app_state, &product_id).await?;

  if product.user_id == user.id {
    return Err(AppError::Validation("You cannot purchase your own listing".to_string()));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  // The order snapshots the listed price at purchase time.
  let order = app_state
    .data
    .orders()
    .create(NewOrder {
      buyer_id: user.id.clone(),
      seller_id: product.user_id.clone(),
      amount: product.price.clone(),
      target: OrderTarget::Product(product.id.clone()),
    })
    .await?;
  info!("User {} placed order {} for product {}.", user.id, order.id, product_id);

  let orders = app_state.data.orders().find_for_participant(&user.id, &product_id).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Order placed successfully",
    "order": order,
    "orders": orders
  })))
}

#[instrument(
  name = "handler::message_seller",
  skip(app_state, path, payload, user),
  fields(product_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn message_seller_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<MessageSellerPayload>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let content = require_text(&payload.content, "Please enter a message")?;

  let product = product_or_not_found(&app_state, &product_id).await?;
  if product.user_id == user.id {
    return Err(AppError::Validation("You cannot message your own listing".to_string()));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let message = app_state
    .data
    .messages()
    .create(NewMessage {
      content,
      product_id: product.id.clone(),
      sender_id: user.id.clone(),
      receiver_id: product.user_id.clone(),
    })
    .await?;
  info!("User {} messaged the seller of product {}.", user.id, product_id);

  Ok(HttpResponse::Created().json(json!({
    "message": "Message sent successfully",
    "sent": message
  })))
}

// Order history for the detail page: the one disjunctive query in the app.
// The viewer sees orders where they are the buyer or the seller, scoped to
// this product.
#[instrument(
  name = "handler::list_orders",
  skip(app_state, path, user),
  fields(product_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  product_or_not_found(&app_state, &product_id).await?;

  let orders = app_state.data.orders().find_for_participant(&user.id, &product_id).await?;
  info!("Fetched {} orders for product {}.", orders.len(), product_id);

  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

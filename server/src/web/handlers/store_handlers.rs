// owlconnect_server/src/web/handlers/store_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentUser;
use crate::web::handlers::MediaUpload;
use owlconnect_data::{Merchandise, NewOrder, Order, OrderTarget};

#[derive(Deserialize, Debug)]
pub struct CustomizePayload {
  pub images: Vec<MediaUpload>,
}

async fn merch_or_not_found(app_state: &AppState, merch_id: &str) -> Result<Merchandise, AppError> {
  match app_state.data.merchandise().find_by_id(merch_id).await? {
    Some(item) => Ok(item),
    None => {
      warn!("Merchandise with ID {} not found.", merch_id);
      Err(AppError::NotFound(format!("Merchandise with ID {} not found.", merch_id)))
    }
  }
}

async fn balance_for(app_state: &AppState, user_id: &str) -> Result<Decimal, AppError> {
  match app_state.data.tokens().balance_for(user_id).await? {
    Some(record) => Ok(record.balance_decimal()?),
    None => Ok(Decimal::ZERO),
  }
}

/// The token-gated purchase shared by the plain and customize flows:
/// balance must cover the price, the buyer and the seller are both the
/// purchaser, and the balance is left untouched afterwards.
async fn place_merch_order(
  app_state: &AppState,
  user: &CurrentUser,
  item: &Merchandise,
) -> Result<Order, AppError> {
  let balance = balance_for(app_state, &user.id).await?;
  let price = item.price_decimal()?;
  if balance < price {
    warn!("User {} has {} tokens but item {} costs {}.", user.id, balance, item.id, price);
    return Err(AppError::InsufficientTokens("Insufficient tokens".to_string()));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let order = app_state
    .data
    .orders()
    .create(NewOrder {
      buyer_id: user.id.clone(),
      seller_id: user.id.clone(),
      amount: item.price.clone(),
      target: OrderTarget::Merchandise(item.id.clone()),
    })
    .await?;
  info!("User {} purchased merchandise {} (order {}).", user.id, item.id, order.id);
  Ok(order)
}

#[instrument(name = "handler::store_overview", skip(app_state, user))]
pub async fn store_overview_handler(
  app_state: web::Data<AppState>,
  user: Option<CurrentUser>,
) -> Result<HttpResponse, AppError> {
  let merchandise = app_state.data.merchandise().find_many().await?;

  // Anonymous visitors browse with a zero balance, same as users who have
  // never been granted tokens.
  let balance = match &user {
    Some(user) => app_state
      .data
      .tokens()
      .balance_for(&user.id)
      .await?
      .map(|record| record.balance)
      .unwrap_or_else(|| "0".to_string()),
    None => "0".to_string(),
  };

  info!("Fetched {} merchandise items.", merchandise.len());
  Ok(HttpResponse::Ok().json(json!({
    "merchandise": merchandise,
    "balance": balance
  })))
}

#[instrument(name = "handler::purchase_merch", skip(app_state, path, user), fields(merch_id = %path.as_ref()))]
pub async fn purchase_merch_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: Option<CurrentUser>,
) -> Result<HttpResponse, AppError> {
  let merch_id = path.into_inner();

  let user = user.ok_or_else(|| AppError::Auth("Please login to make a purchase".to_string()))?;
  let item = merch_or_not_found(&app_state, &merch_id).await?;

  let order = place_merch_order(&app_state, &user, &item).await?;

  // Refetch: the page shows the catalog and the (undebited) balance.
  let merchandise = app_state.data.merchandise().find_many().await?;
  let balance = balance_for(&app_state, &user.id).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Purchase successful!",
    "order": order,
    "merchandise": merchandise,
    "balance": balance.to_string()
  })))
}

#[instrument(
  name = "handler::customize_merch",
  skip(app_state, path, payload, user),
  fields(merch_id = %path.as_ref(), image_count = payload.images.len())
)]
pub async fn customize_merch_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<CustomizePayload>,
  user: Option<CurrentUser>,
) -> Result<HttpResponse, AppError> {
  let merch_id = path.into_inner();
  let payload = payload.into_inner();

  if payload.images.is_empty() {
    return Err(AppError::Validation("Please upload an image".to_string()));
  }
  if payload.images.len() > 1 {
    return Err(AppError::Validation("Please upload exactly one image".to_string()));
  }
  let image = &payload.images[0];

  // The image is uploaded before the purchase checks run, mirroring the
  // original flow where the upload preceded the login and balance gates.
  let stored = app_state.uploads.put(&image.file_name, &image.decode()?).await?;

  let user = user.ok_or_else(|| AppError::Auth("Please login to make a purchase".to_string()))?;
  let item = merch_or_not_found(&app_state, &merch_id).await?;
  if !item.is_customizable {
    return Err(AppError::Validation("This item cannot be customized".to_string()));
  }

  let order = place_merch_order(&app_state, &user, &item).await?;

  // The customization URL is reported back but not attached to the order.
  let merchandise = app_state.data.merchandise().find_many().await?;
  let balance = balance_for(&app_state, &user.id).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Purchase successful!",
    "order": order,
    "customization_url": stored.url,
    "merchandise": merchandise,
    "balance": balance.to_string()
  })))
}

// owlconnect_server/src/web/handlers/marketplace_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentUser;
use crate::web::handlers::{require_text, MediaUpload};
use owlconnect_data::{NewMessage, NewProduct, ProductFilter, BREEDS, CATEGORIES};

/// The list page's filter context. Select widgets submit empty strings for
/// "All Categories"/"All Breeds"; those mean "no filter".
#[derive(Deserialize, Debug, Default)]
pub struct ProductListQuery {
  pub search: Option<String>,
  pub category: Option<String>,
  pub breed: Option<String>,
}

impl ProductListQuery {
  fn to_filter(&self) -> ProductFilter {
    let clean = |value: &Option<String>| {
      value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    };
    ProductFilter {
      search: clean(&self.search),
      category: clean(&self.category),
      breed: clean(&self.breed),
    }
  }
}

#[derive(Deserialize, Debug)]
pub struct CreateListingPayload {
  pub title: String,
  pub description: String,
  pub price: String,
  pub category: String,
  pub breed: Option<String>,
  pub image: Option<MediaUpload>,
}

#[instrument(name = "handler::list_products", skip(app_state, query))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = query.to_filter();
  let products = app_state.data.products().find_many(&filter).await?;

  info!("Fetched {} marketplace products.", products.len());
  Ok(HttpResponse::Ok().json(json!({
    "products": products,
    "categories": CATEGORIES,
    "breeds": BREEDS
  })))
}

#[instrument(
  name = "handler::create_listing",
  skip(app_state, payload, query, user),
  fields(user_id = %user.id, has_image = payload.image.is_some())
)]
pub async fn create_listing_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateListingPayload>,
  query: web::Query<ProductListQuery>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let title = require_text(&payload.title, "Title is required")?;
  let description = require_text(&payload.description, "Description is required")?;
  let category = require_text(&payload.category, "Category is required")?;

  // Prices travel as decimal strings; floats never enter the flow.
  let price: Decimal = payload
    .price
    .trim()
    .parse()
    .map_err(|_| AppError::Validation("Price must be a valid number".to_string()))?;
  if price.is_sign_negative() {
    return Err(AppError::Validation("Price cannot be negative".to_string()));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let image_url = match &payload.image {
    Some(image) => Some(app_state.uploads.put(&image.file_name, &image.decode()?).await?.url),
    None => None,
  };

  let breed = payload.breed.as_deref().map(str::trim).filter(|b| !b.is_empty()).map(str::to_string);
  let product = app_state
    .data
    .products()
    .create(NewProduct {
      title,
      description,
      price: price.to_string(),
      category,
      breed,
      image_url,
      user_id: user.id.clone(),
    })
    .await?;
  info!("User {} listed product {}.", user.id, product.id);

  let products = app_state.data.products().find_many(&query.to_filter()).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Listing created successfully!",
    "product": product,
    "products": products
  })))
}

// The list page's contact button sends a canned greeting; the free-text
// conversation lives on the detail page.
#[instrument(
  name = "handler::contact_seller",
  skip(app_state, path, user),
  fields(product_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn contact_seller_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product = match app_state.data.products().find_by_id(&product_id).await? {
    Some(product) => product,
    None => {
      warn!("Product with ID {} not found.", product_id);
      return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
    }
  };

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let message = app_state
    .data
    .messages()
    .create(NewMessage {
      content: "Hi, I am interested in your product!".to_string(),
      product_id: product.id.clone(),
      sender_id: user.id.clone(),
      receiver_id: product.user_id.clone(),
    })
    .await?;
  info!("User {} contacted the seller of product {}.", user.id, product_id);

  // Nothing on the list page changes after this, so there is no refetch.
  Ok(HttpResponse::Created().json(json!({
    "message": "Message sent successfully!",
    "sent": message
  })))
}

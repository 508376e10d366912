// owlconnect_data/examples/marketplace_orders.rs

use owlconnect_data::{
  DataError, Database, NewMessage, NewOrder, NewProduct, OrderStatus, OrderTarget, ProductFilter,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), DataError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Marketplace Orders Example ---");

  // 1. Open an in-memory database
  let db = Database::open_in_memory().await?;

  // 2. One seller, one buyer
  db.users().upsert("seller-1", "Owlbert", None).await?;
  db.users().upsert("buyer-1", "Minerva", None).await?;

  // 3. The seller lists a product
  let listing = db
    .products()
    .create(NewProduct {
      title: "Hand-carved owl perch".to_string(),
      description: "Oak perch, suits medium breeds.".to_string(),
      price: "45.50".to_string(),
      category: "Accessories".to_string(),
      breed: Some("Barn Owl".to_string()),
      image_url: None,
      user_id: "seller-1".to_string(),
    })
    .await?;
  info!("Listed '{}' at {} tokens", listing.title, listing.price);

  // 4. The buyer finds it through a filtered search
  let filter = ProductFilter {
    search: Some("perch".to_string()),
    category: Some("Accessories".to_string()),
    breed: None,
  };
  let hits = db.products().find_many(&filter).await?;
  info!("Search returned {} listing(s)", hits.len());

  // 5. First contact goes through the product's message thread
  db.messages()
    .create(NewMessage {
      content: "Hi, I am interested in your product!".to_string(),
      product_id: listing.id.clone(),
      sender_id: "buyer-1".to_string(),
      receiver_id: "seller-1".to_string(),
    })
    .await?;

  // 6. Place the order; the amount snapshots the listing price
  let order = db
    .orders()
    .create(NewOrder {
      buyer_id: "buyer-1".to_string(),
      seller_id: "seller-1".to_string(),
      amount: listing.price.clone(),
      target: OrderTarget::Product(listing.id.clone()),
    })
    .await?;
  info!("Order {} is {:?} for {} tokens", order.id, order.status, order.amount);

  // 7. Both sides see the same history for this product
  let buyer_view = db.orders().find_for_participant("buyer-1", &listing.id).await?;
  let seller_view = db.orders().find_for_participant("seller-1", &listing.id).await?;
  let thread = db.messages().for_product(&listing.id).await?;

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].seller_name, "Owlbert");
  assert_eq!(order.status, OrderStatus::Pending);
  assert_eq!(order.amount, "45.50");
  assert_eq!(buyer_view.len(), 1);
  assert_eq!(seller_view.len(), 1);
  assert_eq!(thread.len(), 1);

  Ok(())
}

// tests/query_contract_tests.rs
mod common; // Reference the common module

use common::*;
use owlconnect_data::{NewProduct, PostOrder, ProductFilter};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_feed_recent_orders_newest_first() {
  let db = test_db().await;
  seed_user(&db, "u1", "Olivia").await;

  let first = db.posts().create(new_post("u1", "first post")).await.unwrap();
  tick().await;
  let second = db.posts().create(new_post("u1", "second post")).await.unwrap();
  tick().await;
  let third = db.posts().create(new_post("u1", "third post")).await.unwrap();

  let feed = db.posts().find_many(PostOrder::Recent).await.unwrap();
  let ids: Vec<&str> = feed.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);
}

#[tokio::test]
#[serial]
async fn test_feed_popular_orders_by_likes() {
  let db = test_db().await;
  seed_user(&db, "u1", "Olivia").await;

  let quiet = db.posts().create(new_post("u1", "quiet")).await.unwrap();
  tick().await;
  let liked_once = db.posts().create(new_post("u1", "liked once")).await.unwrap();
  tick().await;
  let liked_twice = db.posts().create(new_post("u1", "liked twice")).await.unwrap();

  db.posts().add_like(&liked_once.id).await.unwrap();
  db.posts().add_like(&liked_twice.id).await.unwrap();
  db.posts().add_like(&liked_twice.id).await.unwrap();

  let feed = db.posts().find_many(PostOrder::Popular).await.unwrap();
  let ids: Vec<&str> = feed.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(
    ids,
    vec![liked_twice.id.as_str(), liked_once.id.as_str(), quiet.id.as_str()]
  );
}

#[tokio::test]
#[serial]
async fn test_feed_attaches_author_info() {
  let db = test_db().await;
  db.users()
    .upsert("u1", "Olivia Hoot", Some("https://example.com/olivia.jpg"))
    .await
    .unwrap();

  db.posts().create(new_post("u1", "hello")).await.unwrap();

  let feed = db.posts().find_many(PostOrder::Recent).await.unwrap();
  assert_eq!(feed.len(), 1);
  assert_eq!(feed[0].author_name, "Olivia Hoot");
  assert_eq!(
    feed[0].author_picture_url.as_deref(),
    Some("https://example.com/olivia.jpg")
  );
}

#[tokio::test]
#[serial]
async fn test_product_search_is_case_insensitive_substring() {
  let db = test_db().await;
  seed_user(&db, "u1", "Seller").await;

  db.products()
    .create(new_product("u1", "Snowy Owl Plush", "25", "Accessories"))
    .await
    .unwrap();
  db.products()
    .create(new_product("u1", "Cage Cleaning Kit", "18", "Cages"))
    .await
    .unwrap();

  let filter = ProductFilter {
    search: Some("OWL".to_string()),
    ..Default::default()
  };
  let found = db.products().find_many(&filter).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].title, "Snowy Owl Plush");
}

#[tokio::test]
#[serial]
async fn test_product_search_treats_like_metacharacters_literally() {
  let db = test_db().await;
  seed_user(&db, "u1", "Seller").await;

  db.products()
    .create(new_product("u1", "100% Organic Owl Food", "12", "Food"))
    .await
    .unwrap();
  db.products()
    .create(new_product("u1", "1000 Pellet Pack", "9", "Food"))
    .await
    .unwrap();

  // "%" must match only the literal percent sign, not act as a wildcard.
  let filter = ProductFilter {
    search: Some("100%".to_string()),
    ..Default::default()
  };
  let found = db.products().find_many(&filter).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].title, "100% Organic Owl Food");
}

#[tokio::test]
#[serial]
async fn test_product_filters_are_conjunctive() {
  let db = test_db().await;
  seed_user(&db, "u1", "Seller").await;

  db.products()
    .create(NewProduct {
      breed: Some("Barn Owl".to_string()),
      ..new_product("u1", "Barn Owl Juvenile", "250", "Live Owls")
    })
    .await
    .unwrap();
  db.products()
    .create(NewProduct {
      breed: Some("Snowy Owl".to_string()),
      ..new_product("u1", "Snowy Owl Juvenile", "400", "Live Owls")
    })
    .await
    .unwrap();
  db.products()
    .create(NewProduct {
      breed: Some("Barn Owl".to_string()),
      ..new_product("u1", "Barn Owl Poster", "15", "Accessories")
    })
    .await
    .unwrap();

  let filter = ProductFilter {
    search: Some("owl".to_string()),
    category: Some("Live Owls".to_string()),
    breed: Some("Barn Owl".to_string()),
  };
  let found = db.products().find_many(&filter).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].title, "Barn Owl Juvenile");

  // Relaxing one predicate widens the result set.
  let filter = ProductFilter {
    category: Some("Live Owls".to_string()),
    ..Default::default()
  };
  assert_eq!(db.products().find_many(&filter).await.unwrap().len(), 2);

  // No predicates returns everything.
  let all = db.products().find_many(&ProductFilter::default()).await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
#[serial]
async fn test_empty_search_matches_everything() {
  let db = test_db().await;
  seed_user(&db, "u1", "Seller").await;

  db.products()
    .create(new_product("u1", "Perch Stand", "30", "Accessories"))
    .await
    .unwrap();

  let filter = ProductFilter {
    search: Some(String::new()),
    ..Default::default()
  };
  assert_eq!(db.products().find_many(&filter).await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_thread_query_returns_comments_oldest_first() {
  let db = test_db().await;
  seed_user(&db, "u1", "Olivia").await;
  seed_user(&db, "u2", "Barnaby").await;

  let post = db.posts().create(new_post("u1", "threaded post")).await.unwrap();
  db.comments()
    .create(new_comment("u2", &post.id, "first comment"))
    .await
    .unwrap();
  tick().await;
  db.comments()
    .create(new_comment("u1", &post.id, "second comment"))
    .await
    .unwrap();

  let thread = db.posts().find_thread(&post.id).await.unwrap().unwrap();
  assert_eq!(thread.post.id, post.id);
  assert_eq!(thread.comments.len(), 2);
  assert_eq!(thread.comments[0].content, "first comment");
  assert_eq!(thread.comments[0].author_name, "Barnaby");
  assert_eq!(thread.comments[1].content, "second comment");
}

#[tokio::test]
#[serial]
async fn test_thread_query_for_missing_post_is_none() {
  let db = test_db().await;
  let thread = db.posts().find_thread("no-such-post").await.unwrap();
  assert!(thread.is_none());
}

#[tokio::test]
#[serial]
async fn test_order_history_is_scoped_to_participant_and_product() {
  let db = test_db().await;
  seed_user(&db, "seller", "Seller").await;
  seed_user(&db, "buyer", "Buyer").await;
  seed_user(&db, "bystander", "Bystander").await;

  let listed = db
    .products()
    .create(new_product("seller", "Barn Owl Juvenile", "250", "Live Owls"))
    .await
    .unwrap();
  let other = db
    .products()
    .create(new_product("seller", "Perch Stand", "30", "Accessories"))
    .await
    .unwrap();

  let order = db
    .orders()
    .create(owlconnect_data::NewOrder {
      buyer_id: "buyer".to_string(),
      seller_id: "seller".to_string(),
      amount: listed.price.clone(),
      target: owlconnect_data::OrderTarget::Product(listed.id.clone()),
    })
    .await
    .unwrap();
  db.orders()
    .create(owlconnect_data::NewOrder {
      buyer_id: "buyer".to_string(),
      seller_id: "seller".to_string(),
      amount: other.price.clone(),
      target: owlconnect_data::OrderTarget::Product(other.id.clone()),
    })
    .await
    .unwrap();

  // Both sides of the trade see the order; a third party does not.
  let for_buyer = db.orders().find_for_participant("buyer", &listed.id).await.unwrap();
  assert_eq!(for_buyer.len(), 1);
  assert_eq!(for_buyer[0].id, order.id);

  let for_seller = db.orders().find_for_participant("seller", &listed.id).await.unwrap();
  assert_eq!(for_seller.len(), 1);

  let for_bystander = db
    .orders()
    .find_for_participant("bystander", &listed.id)
    .await
    .unwrap();
  assert!(for_bystander.is_empty());

  // The product scope keeps the other listing's order out.
  assert_eq!(db.orders().find_for_participant("buyer", &other.id).await.unwrap().len(), 1);
}

// owlconnect_server/src/seed.rs

//! Demo content for local development, gated behind `SEED_DB=true`.
//! Seeding is idempotent: if the first demo user already exists, the whole
//! pass is skipped.

use tracing::{info, instrument};

use crate::errors::Result as AppResult;
use owlconnect_data::{Database, NewComment, NewMerchandise, NewPost, NewProduct};

const DEMO_USERS: &[(&str, &str, Option<&str>)] = &[
  ("demo-flo", "Florence Nightowl", Some("https://randomuser.me/api/portraits/women/6.jpg")),
  ("demo-barney", "Barney Barnes", Some("https://randomuser.me/api/portraits/men/7.jpg")),
  ("demo-sage", "Sage Plume", None),
];

#[instrument(name = "seed::demo_data", skip(db))]
pub async fn seed_demo_data(db: &Database) -> AppResult<()> {
  if db.users().find_by_id(DEMO_USERS[0].0).await?.is_some() {
    info!("Demo data already present, skipping seed.");
    return Ok(());
  }

  for (id, name, picture_url) in DEMO_USERS {
    db.users().upsert(id, name, *picture_url).await?;
  }

  let first_post = db
    .posts()
    .create(NewPost {
      content: "Welcome to OwlConnect! Share your owls, trade gear, and meet fellow enthusiasts.".to_string(),
      media_url: None,
      media_type: None,
      user_id: "demo-flo".to_string(),
    })
    .await?;
  db.posts()
    .create(NewPost {
      content: "Barn owl feeding schedule that finally worked for us, ask me anything.".to_string(),
      media_url: None,
      media_type: None,
      user_id: "demo-barney".to_string(),
    })
    .await?;

  // A few likes so the popular sort has something to show.
  for _ in 0..3 {
    db.posts().add_like(&first_post.id).await?;
  }
  db.comments()
    .create(NewComment {
      content: "Great to be here!".to_string(),
      post_id: first_post.id.clone(),
      user_id: "demo-sage".to_string(),
    })
    .await?;

  db.products()
    .create(NewProduct {
      title: "Hand-carved oak perch".to_string(),
      description: "Solid oak perch, suits medium breeds.".to_string(),
      price: "45.50".to_string(),
      category: "Accessories".to_string(),
      breed: Some("Barn Owl".to_string()),
      image_url: None,
      user_id: "demo-barney".to_string(),
    })
    .await?;
  db.products()
    .create(NewProduct {
      title: "Premium owl pellets, 5kg".to_string(),
      description: "High-protein pellets for growing owls.".to_string(),
      price: "19.99".to_string(),
      category: "Food".to_string(),
      breed: None,
      image_url: None,
      user_id: "demo-flo".to_string(),
    })
    .await?;
  db.products()
    .create(NewProduct {
      title: "Walk-in aviary cage".to_string(),
      description: "Weatherproof aviary, easy assembly.".to_string(),
      price: "320".to_string(),
      category: "Cages".to_string(),
      breed: Some("Great Horned Owl".to_string()),
      image_url: None,
      user_id: "demo-sage".to_string(),
    })
    .await?;

  db.merchandise()
    .create(NewMerchandise {
      name: "Owl Plush Toy".to_string(),
      description: "Soft plush owl, 30cm.".to_string(),
      price: "25".to_string(),
      image_url: None,
      is_customizable: false,
    })
    .await?;
  db.merchandise()
    .create(NewMerchandise {
      name: "Custom Owl T-Shirt".to_string(),
      description: "Printed with a photo of your owl.".to_string(),
      price: "30".to_string(),
      image_url: None,
      is_customizable: true,
    })
    .await?;
  db.merchandise()
    .create(NewMerchandise {
      name: "Owl Mug".to_string(),
      description: "Ceramic mug with an owl motif.".to_string(),
      price: "15".to_string(),
      image_url: None,
      is_customizable: false,
    })
    .await?;

  db.tokens().set_balance("demo-flo", "100").await?;
  db.tokens().set_balance("demo-barney", "20").await?;

  info!("Seeded demo users, posts, products, merchandise and token balances.");
  Ok(())
}

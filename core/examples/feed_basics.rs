// owlconnect_data/examples/feed_basics.rs

use owlconnect_data::{DataError, Database, NewComment, NewPost, PostOrder};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), DataError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Feed Basics Example ---");

  // 1. Open an in-memory database (migrations run automatically)
  let db = Database::open_in_memory().await?;

  // 2. Register a couple of community members
  db.users().upsert("hoot-1", "Hedwig", Some("https://cdn.example.com/hedwig.png")).await?;
  db.users().upsert("hoot-2", "Archimedes", None).await?;

  // 3. Publish two posts
  let first = db
    .posts()
    .create(NewPost {
      content: "Just spotted a barn owl at dusk!".to_string(),
      media_url: None,
      media_type: None,
      user_id: "hoot-1".to_string(),
    })
    .await?;
  let second = db
    .posts()
    .create(NewPost {
      content: "My snowy owl finally learned to perch on my glove.".to_string(),
      media_url: None,
      media_type: None,
      user_id: "hoot-2".to_string(),
    })
    .await?;
  info!("Created posts {} and {}", first.id, second.id);

  // 4. Like the older post twice; the counter lives in the database
  let likes = db.posts().add_like(&first.id).await?;
  let likes = db.posts().add_like(&first.id).await?.max(likes);
  info!("Post {} now has {} likes", first.id, likes);

  // 5. Read the feed in both orders
  let recent = db.posts().find_many(PostOrder::Recent).await?;
  info!("Recent feed:");
  for post in &recent {
    info!("- [{} likes] {}: {}", post.likes, post.author_name, post.content);
  }

  let popular = db.posts().find_many(PostOrder::Popular).await?;
  info!("Popular feed leader: {}", popular[0].content);

  // 6. Comment on the liked post and read the full thread
  db.comments()
    .create(NewComment {
      content: "Beautiful sighting!".to_string(),
      post_id: first.id.clone(),
      user_id: "hoot-2".to_string(),
    })
    .await?;

  let thread = db.posts().find_thread(&first.id).await?;
  let thread = match thread {
    Some(t) => t,
    None => unreachable!("the post was just created"),
  };
  info!("Thread for {}: {} comment(s)", thread.post.id, thread.comments.len());

  // Recent puts the newest post first; popular puts the liked one first.
  assert_eq!(recent[0].id, second.id);
  assert_eq!(popular[0].id, first.id);
  assert_eq!(likes, 2);
  assert_eq!(thread.comments.len(), 1);
  assert_eq!(thread.comments[0].author_name, "Archimedes");

  Ok(())
}

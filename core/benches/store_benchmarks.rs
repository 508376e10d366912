use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use owlconnect_data::{Database, NewPost, NewProduct, PostOrder, ProductFilter};
use tokio::runtime::Runtime;

// --- Helpers: seeded databases of varying size ---

async fn db_with_posts(count: usize) -> Database {
  let db = Database::open_in_memory().await.unwrap();
  db.users().upsert("bench-user", "Bench User", None).await.unwrap();
  for i in 0..count {
    let post = db
      .posts()
      .create(NewPost {
        content: format!("post number {}", i),
        media_url: None,
        media_type: None,
        user_id: "bench-user".to_string(),
      })
      .await
      .unwrap();
    // Spread the like counts so the popular sort has real work to do.
    for _ in 0..(i % 5) {
      db.posts().add_like(&post.id).await.unwrap();
    }
  }
  db
}

async fn db_with_products(count: usize) -> Database {
  let db = Database::open_in_memory().await.unwrap();
  db.users().upsert("bench-seller", "Bench Seller", None).await.unwrap();
  let categories = ["Live Owls", "Accessories", "Food", "Cages", "Other"];
  for i in 0..count {
    db.products()
      .create(NewProduct {
        title: format!("Owl Product {}", i),
        description: "bench listing".to_string(),
        price: format!("{}", 10 + (i % 90)),
        category: categories[i % categories.len()].to_string(),
        breed: None,
        image_url: None,
        user_id: "bench-seller".to_string(),
      })
      .await
      .unwrap();
  }
  db
}

// --- Benchmark Functions ---

fn bench_feed_query(c: &mut Criterion) {
  let mut group = c.benchmark_group("FeedQuery");
  let rt = Runtime::new().unwrap();

  for size in [10usize, 100, 500].iter() {
    let db = rt.block_on(db_with_posts(*size));
    group.throughput(Throughput::Elements(*size as u64));

    let db_recent = db.clone();
    group.bench_with_input(BenchmarkId::new("recent", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let db = db_recent.clone();
        async move { db.posts().find_many(PostOrder::Recent).await.unwrap() }
      });
    });

    let db_popular = db.clone();
    group.bench_with_input(BenchmarkId::new("popular", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let db = db_popular.clone();
        async move { db.posts().find_many(PostOrder::Popular).await.unwrap() }
      });
    });
  }
  group.finish();
}

fn bench_product_search(c: &mut Criterion) {
  let mut group = c.benchmark_group("ProductSearch");
  let rt = Runtime::new().unwrap();

  for size in [10usize, 100, 500].iter() {
    let db = rt.block_on(db_with_products(*size));
    group.throughput(Throughput::Elements(*size as u64));

    let db_search = db.clone();
    group.bench_with_input(BenchmarkId::new("substring", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let db = db_search.clone();
        async move {
          let filter = ProductFilter {
            search: Some("product 1".to_string()),
            ..Default::default()
          };
          db.products().find_many(&filter).await.unwrap()
        }
      });
    });

    let db_filtered = db.clone();
    group.bench_with_input(BenchmarkId::new("category_and_substring", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let db = db_filtered.clone();
        async move {
          let filter = ProductFilter {
            search: Some("owl".to_string()),
            category: Some("Accessories".to_string()),
            breed: None,
          };
          db.products().find_many(&filter).await.unwrap()
        }
      });
    });
  }
  group.finish();
}

fn bench_like_increment(c: &mut Criterion) {
  let mut group = c.benchmark_group("LikeIncrement");
  let rt = Runtime::new().unwrap();

  let db = rt.block_on(db_with_posts(1));
  let post_id = rt.block_on(async {
    db.posts().find_many(PostOrder::Recent).await.unwrap()[0].id.clone()
  });

  group.throughput(Throughput::Elements(1));
  group.bench_function("add_like", |b| {
    b.to_async(&rt).iter(|| {
      let db = db.clone();
      let id = post_id.clone();
      async move { db.posts().add_like(&id).await.unwrap() }
    });
  });
  group.finish();
}

criterion_group!(benches, bench_feed_query, bench_product_search, bench_like_increment);
criterion_main!(benches);

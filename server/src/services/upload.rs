// owlconnect_server/src/services/upload.rs
use crate::errors::{AppError, Result as AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use uuid::Uuid;

/// What the store hands back after a successful write. The `url` is what
/// clients embed in posts and listings; `content_type` drives the
/// image/video distinction.
#[derive(Debug, Clone)]
pub struct StoredObject {
  pub stored_name: String,
  pub url: String,
  pub content_type: String,
}

/// Where uploaded media lives. The server runs on the local filesystem;
/// tests swap in the in-memory variant.
#[async_trait]
pub trait ObjectStore: Send + Sync {
  async fn put(&self, file_name: &str, bytes: &[u8]) -> AppResult<StoredObject>;
  async fn get(&self, stored_name: &str) -> AppResult<Option<(Vec<u8>, String)>>;
}

/// Client file names are untrusted. Keep only the final path component and
/// never let an empty name through.
fn sanitize_file_name(file_name: &str) -> String {
  Path::new(file_name)
    .file_name()
    .and_then(|name| name.to_str())
    .filter(|name| !name.is_empty())
    .unwrap_or("upload.bin")
    .to_string()
}

fn content_type_for(stored_name: &str) -> String {
  mime_guess::from_path(stored_name).first_or_octet_stream().to_string()
}

// --- Filesystem-backed store ---

pub struct LocalObjectStore {
  dir: PathBuf,
  base_url: String,
}

impl LocalObjectStore {
  /// Creates the uploads directory if it does not exist yet.
  pub async fn init(dir: &str, base_url: &str) -> AppResult<Self> {
    tokio::fs::create_dir_all(dir)
      .await
      .map_err(|e| AppError::Upload(format!("Cannot create uploads directory '{}': {}", dir, e)))?;
    info!("Uploads directory ready at '{}'.", dir);
    Ok(Self {
      dir: PathBuf::from(dir),
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
  #[instrument(name = "uploads::put", skip(self, bytes), fields(file_name = %file_name, size = bytes.len()))]
  async fn put(&self, file_name: &str, bytes: &[u8]) -> AppResult<StoredObject> {
    // Prefix with a fresh id so two uploads of `owl.png` never collide.
    let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name));
    let path = self.dir.join(&stored_name);
    tokio::fs::write(&path, bytes)
      .await
      .map_err(|e| AppError::Upload(format!("Cannot write '{}': {}", path.display(), e)))?;

    info!("Stored upload as '{}'.", stored_name);
    Ok(StoredObject {
      url: format!("{}/uploads/{}", self.base_url, stored_name),
      content_type: content_type_for(&stored_name),
      stored_name,
    })
  }

  #[instrument(name = "uploads::get", skip(self))]
  async fn get(&self, stored_name: &str) -> AppResult<Option<(Vec<u8>, String)>> {
    // Re-sanitize: the name comes straight from the request path.
    let safe_name = sanitize_file_name(stored_name);
    let path = self.dir.join(&safe_name);
    match tokio::fs::read(&path).await {
      Ok(bytes) => Ok(Some((bytes, content_type_for(&safe_name)))),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(AppError::Upload(format!("Cannot read '{}': {}", path.display(), e))),
    }
  }
}

// --- In-memory store (tests) ---

#[derive(Default)]
pub struct MemoryObjectStore {
  objects: parking_lot::RwLock<HashMap<String, (Vec<u8>, String)>>,
  base_url: String,
}

impl MemoryObjectStore {
  pub fn new(base_url: &str) -> Self {
    Self {
      objects: parking_lot::RwLock::new(HashMap::new()),
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
  async fn put(&self, file_name: &str, bytes: &[u8]) -> AppResult<StoredObject> {
    let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name));
    let content_type = content_type_for(&stored_name);
    self
      .objects
      .write()
      .insert(stored_name.clone(), (bytes.to_vec(), content_type.clone()));
    Ok(StoredObject {
      url: format!("{}/uploads/{}", self.base_url, stored_name),
      content_type,
      stored_name,
    })
  }

  async fn get(&self, stored_name: &str) -> AppResult<Option<(Vec<u8>, String)>> {
    Ok(self.objects.read().get(stored_name).cloned())
  }
}

// owlconnect_data/src/store/mod.rs

//! Per-entity stores over the shared connection pool.
//!
//! Every page talks to these directly: queries return JOINed read models,
//! mutations insert and then read the row back, so callers always see what
//! the database committed rather than what they sent.

mod comments;
mod merchandise;
mod messages;
mod orders;
mod posts;
mod products;
mod reports;
mod tokens;
mod users;

pub use comments::CommentStore;
pub use merchandise::MerchandiseStore;
pub use messages::MessageStore;
pub use orders::OrderStore;
pub use posts::PostStore;
pub use products::ProductStore;
pub use reports::ReportStore;
pub use tokens::TokenStore;
pub use users::UserStore;

/// Escapes LIKE metacharacters so a search term matches as a literal
/// substring. The query must carry `ESCAPE '\'`.
pub(crate) fn escape_like(term: &str) -> String {
  let mut escaped = String::with_capacity(term.len());
  for ch in term.chars() {
    if matches!(ch, '%' | '_' | '\\') {
      escaped.push('\\');
    }
    escaped.push(ch);
  }
  escaped
}

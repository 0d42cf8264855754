//! URL validation and query composition.
//!
//! - Syntactic validation through the `url` parser
//! - Raw component decomposition and reassembly
//! - Appending query parameters while keeping fragments in place

pub mod parts;
pub mod query;
pub mod validator;

pub use parts::UriParts;
pub use query::append_query;
pub use validator::is_valid_url;

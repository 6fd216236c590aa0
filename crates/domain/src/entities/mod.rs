//! Domain entities - The records a retrieval chain produces

mod combined_result;
mod comment;
mod post;
mod profile;

pub use combined_result::CombinedResult;
pub use comment::Comment;
pub use post::Post;
pub use profile::Profile;

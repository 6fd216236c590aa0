//! Value Objects - Immutable, identity-less domain primitives

mod email_address;
mod record_ids;
mod resource_kind;
mod run_id;

pub use email_address::EmailAddress;
pub use record_ids::{CommentId, PostId, ProfileId};
pub use resource_kind::ResourceKind;
pub use run_id::RunId;

//! Blog Types
//!
//! Request and response bodies for the blogging resources, together with the
//! field-level rules applied to incoming bodies before anything touches the
//! database.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs      - Module exports
//! ├── fields.rs   - Shared field rules (text, optional updates)
//! ├── group.rs    - Group representation and validation
//! ├── post.rs     - Post representation and payload
//! ├── comment.rs  - Comment representation and payload
//! └── follow.rs   - Follow representation, payload and search
//! ```

pub mod fields;
pub mod group;
pub mod post;
pub mod comment;
pub mod follow;

pub use group::{Group, NewGroup};
pub use post::{Post, PostChanges, PostPayload};
pub use comment::{Comment, CommentPayload};
pub use follow::{CreateFollowRequest, Follow, FollowSearch};

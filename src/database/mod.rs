pub mod memory;
pub mod models;
pub mod object_id;
pub mod postgres;
pub mod store;

pub use memory::MemoryCommentStore;
pub use models::Comment;
pub use object_id::ObjectId;
pub use postgres::PgCommentStore;
pub use store::{CommentStore, StoreError};

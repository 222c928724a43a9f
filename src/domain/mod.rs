pub mod feed;
pub mod item;
pub mod snapshot;

pub use feed::{FeedDocument, MAX_ENTRIES};
pub use item::ExtractedItem;
pub use snapshot::{PageSnapshot, RenderRequest, DEFAULT_RENDER_TIMEOUT};

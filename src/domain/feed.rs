use url::Url;

use crate::domain::ExtractedItem;

/// Upper bound on the number of entries a feed document carries.
pub const MAX_ENTRIES: usize = 20;

/// Channel metadata plus the entries, in source document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub channel_title: String,
    pub channel_link: Url,
    pub channel_description: String,
    entries: Vec<ExtractedItem>,
}

impl FeedDocument {
    /// Entries past [`MAX_ENTRIES`] are discarded, keeping the first ones.
    pub fn new(
        channel_title: String,
        channel_link: Url,
        channel_description: String,
        mut entries: Vec<ExtractedItem>,
    ) -> Self {
        entries.truncate(MAX_ENTRIES);
        Self {
            channel_title,
            channel_link,
            channel_description,
            entries,
        }
    }

    pub fn entries(&self) -> &[ExtractedItem] {
        &self.entries
    }
}

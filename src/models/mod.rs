pub mod base_url;
pub mod exclusion;
pub mod source_entry;

pub use base_url::BaseUrl;
pub use exclusion::ExclusionSet;
pub use source_entry::SourceEntry;

pub mod requests;
pub mod responses;

pub use requests::{DeleteRequest, InsertRequest, RecordType};
pub use responses::{CacheEntry, CacheListing, EntryRow, HealthResponse};

mod error;
mod keys;
mod requests;
mod types;

pub use error::RequestError;
pub use keys::{id_from_key, key_from_id, new_key};
pub use requests::{ids_match, parse_thing_data, CreatedResponse, ErrorResponse, RequestIdResponse};
pub use types::{StorageKey, ThingData, ThingRecord, PARTITION_KEY, SORT_KEY};

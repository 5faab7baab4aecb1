//! Character reference handling

pub mod codec;
pub mod table;

pub use codec::{decode_entities, encode_entities};
pub use table::{ENTITIES, EntityRecord, entity_by_char, entity_by_name};

//! Block domain entities
//!
//! The entities themselves live in `shared-types`; this module adds the
//! wire decoding used at the validation boundary.

pub use shared_types::{Block, ChainName, ChildHeader, HeadersByChain, U256};

use super::ValidationResult;

/// Decode a block from its JSON wire form.
///
/// Missing fields and type mismatches surface as
/// [`ValidationError::Decode`](super::ValidationError::Decode), never as an
/// invalid block.
pub fn decode_block(json: &[u8]) -> ValidationResult<Block> {
    Ok(serde_json::from_slice(json)?)
}

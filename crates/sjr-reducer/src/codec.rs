//! Codec seam between raw documents and the in-memory tree.

use serde_json::Value;

/// Decodes raw bytes into a tree and encodes a tree back to bytes.
pub trait Codec: Send + Sync {
    fn decode(&self, input: &[u8]) -> anyhow::Result<Value>;
    fn encode(&self, tree: &Value) -> anyhow::Result<Vec<u8>>;
}

/// Compact JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode(&self, input: &[u8]) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(input)?)
    }

    fn encode(&self, tree: &Value) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(tree)?)
    }
}

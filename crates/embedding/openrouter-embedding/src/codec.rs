//! Base64 wire form of float32 vectors: a contiguous little-endian IEEE-754 buffer.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use embedding::{EmbeddingError, EmbeddingVector};

const F32_BYTES: usize = std::mem::size_of::<f32>();

/// Decodes a base64 buffer of little-endian f32 values. Length = byte length / 4.
pub fn decode_f32_le(encoded: &str) -> Result<EmbeddingVector, EmbeddingError> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| EmbeddingError::Decoding(format!("malformed base64 embedding: {}", e)))?;

    if bytes.len() % F32_BYTES != 0 {
        return Err(EmbeddingError::Decoding(format!(
            "embedding buffer length {} is not a multiple of {}",
            bytes.len(),
            F32_BYTES
        )));
    }

    Ok(bytes
        .chunks_exact(F32_BYTES)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Encodes f32 values the same way the provider does.
pub fn encode_f32_le(values: &[f32]) -> String {
    let mut bytes = Vec::with_capacity(values.len() * F32_BYTES);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    BASE64.encode(bytes)
}

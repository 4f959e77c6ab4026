//! Text transport for envelopes
//!
//! Titles, blog bodies and other string fields travel through JSON, so
//! their envelopes are carried as standard base64. Some upstream producers
//! hand back the decoded buffer instead, serialized the Node.js way as
//! `{"type": "Buffer", "data": [..]}`; [`Transport`] accepts both.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

use super::codec::EnvelopeCodec;

/// An encrypted text payload as it arrives from upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TransportRepr", into = "TransportRepr")]
pub enum Transport {
    /// Base64 transport string
    Text(String),
    /// Envelope bytes that were already decoded
    RawBytes(Vec<u8>),
}

impl Transport {
    /// Resolve either variant to the base64 transport string
    pub fn into_transport_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::RawBytes(bytes) => encode_transport(&bytes),
        }
    }
}

impl From<String> for Transport {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Transport {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Transport {
    fn from(bytes: Vec<u8>) -> Self {
        Self::RawBytes(bytes)
    }
}

/// Wire shapes accepted for [`Transport`]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TransportRepr {
    Text(String),
    Buffer(NodeBuffer),
}

#[derive(Serialize, Deserialize)]
struct NodeBuffer {
    #[serde(rename = "type")]
    kind: BufferKind,
    data: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
enum BufferKind {
    Buffer,
}

impl From<TransportRepr> for Transport {
    fn from(repr: TransportRepr) -> Self {
        match repr {
            TransportRepr::Text(text) => Self::Text(text),
            TransportRepr::Buffer(buffer) => Self::RawBytes(buffer.data),
        }
    }
}

impl From<Transport> for TransportRepr {
    fn from(transport: Transport) -> Self {
        match transport {
            Transport::Text(text) => Self::Text(text),
            Transport::RawBytes(data) => Self::Buffer(NodeBuffer {
                kind: BufferKind::Buffer,
                data,
            }),
        }
    }
}

/// Encode envelope bytes for a text channel
pub fn encode_transport(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a transport string back to envelope bytes
pub fn decode_transport(text: &str) -> CodecResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CodecError::TransportDecode(e.to_string()))
}

impl EnvelopeCodec {
    /// Encrypt a string into a base64 envelope
    pub fn encrypt_text(&self, plaintext: &str, secret: &[u8]) -> CodecResult<String> {
        let envelope = self.encrypt_bytes(plaintext.as_bytes(), secret)?;
        Ok(encode_transport(envelope.as_bytes()))
    }

    /// Decrypt a text payload back to a string
    pub fn decrypt_text(
        &self,
        transport: impl Into<Transport>,
        secret: &[u8],
    ) -> CodecResult<String> {
        let envelope = match transport.into() {
            Transport::Text(text) => decode_transport(&text)?,
            Transport::RawBytes(bytes) => bytes,
        };
        let plaintext = self.decrypt_bytes(&envelope, secret)?;

        String::from_utf8(plaintext).map_err(|e| CodecError::Encoding(e.to_string()))
    }
}

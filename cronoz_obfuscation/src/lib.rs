//! Keyless, reversible obfuscation of chat message bodies.
//!
//! Bodies are stored as standard padded base64 of their UTF-8 bytes. Anyone
//! holding a stored body can read it: this only keeps text from being
//! readable at a glance and provides no confidentiality. Changing the scheme
//! changes the stored format, so existing bodies must keep decoding.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObfuscationError {
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn encode(plaintext: &str) -> String {
    STANDARD.encode(plaintext.as_bytes())
}

pub fn try_decode(obfuscated: &str) -> Result<String, ObfuscationError> {
    let bytes = STANDARD.decode(obfuscated)?;
    Ok(String::from_utf8(bytes)?)
}

/// Reverses [`encode`]. Input that was never encoded comes back unchanged.
pub fn decode(obfuscated: &str) -> String {
    match try_decode(obfuscated) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            log::debug!("Showing message body as stored, it does not decode: {e}");
            obfuscated.to_string()
        }
    }
}

/// A message body in its stored, obfuscated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObfuscatedText(String);

impl ObfuscatedText {
    pub fn obfuscate(plaintext: &str) -> Self {
        Self(encode(plaintext))
    }

    pub fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn reveal(&self) -> String {
        decode(&self.0)
    }
}

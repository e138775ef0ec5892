//! Content-derived identifiers for headwords.
//!
//! A [`WordId`] is the first [`ID_LENGTH`] hex digits of the SHA-256 digest
//! of a normalized word. It is stable across runs and used for lookup only;
//! collisions across a vocabulary are a known limitation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Number of hex characters in a word id.
pub const ID_LENGTH: usize = 16;

/// Identifier of a normalized headword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    /// Derives the id of `word`, which must already be normalized.
    #[must_use]
    pub fn derive(word: &str) -> Self {
        let mut hex = hex::encode(Sha256::digest(word.as_bytes()));
        hex.truncate(ID_LENGTH);
        Self(hex)
    }

    /// Parses an id from its textual form.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() == ID_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(Error::InvalidId(s.to_string()))
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

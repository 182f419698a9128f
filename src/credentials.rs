// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Coinsweep Contributors

//! Signing credentials and the sealed-credential collaborator.
//!
//! A [`SigningCredential`] holds the raw secret (hex private key or BIP-39
//! mnemonic) in memory only for the duration of one sweep call and is wiped
//! on drop. It never appears in `Debug` output, log lines, or error messages.
//!
//! [`SealedCredential`] is the at-rest form: AES-256-GCM over the raw secret
//! with a caller-held key, encoded as base64(nonce || ciphertext). Unsealing
//! is scoped per call; there is no process-wide table of decrypted secrets.

use std::fmt;

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use alloy::{
    primitives::Address,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// AES-GCM nonce length in bytes.
const NONCE_LEN: usize = 12;

/// Errors from credential parsing, sealing, and unsealing.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("malformed private key: {0}")]
    InvalidKey(String),

    #[error("malformed mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("sealed blob corrupt: {0}")]
    MalformedBlob(String),

    #[error("credential decryption failed: key mismatch or corrupted blob")]
    Decryption,

    #[error("encryption failed: {0}")]
    Encryption(String),
}

/// A signing secret for one managed account.
///
/// Accepts either a hex-encoded secp256k1 private key (with or without the
/// `0x` prefix) or a BIP-39 mnemonic phrase (first derivation index).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningCredential {
    secret: String,
}

impl SigningCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Derive the signer for this credential.
    pub fn signer(&self) -> Result<PrivateKeySigner, CredentialError> {
        let raw = self.secret.trim();
        let hex_candidate = raw.strip_prefix("0x").unwrap_or(raw);

        if hex_candidate.len() == 64 && hex_candidate.chars().all(|c| c.is_ascii_hexdigit()) {
            let key_bytes = Zeroizing::new(
                alloy::hex::decode(hex_candidate)
                    .map_err(|e| CredentialError::InvalidKey(e.to_string()))?,
            );
            PrivateKeySigner::from_slice(&key_bytes)
                .map_err(|e| CredentialError::InvalidKey(e.to_string()))
        } else {
            MnemonicBuilder::<English>::default()
                .phrase(raw)
                .index(0)
                .map_err(|e| CredentialError::InvalidMnemonic(e.to_string()))?
                .build()
                .map_err(|e| CredentialError::InvalidMnemonic(e.to_string()))
        }
    }

    /// Derive the account address without keeping the signer around.
    pub fn address(&self) -> Result<Address, CredentialError> {
        Ok(self.signer()?.address())
    }
}

// The secret must never leak through formatting.
impl fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningCredential(<redacted>)")
    }
}

/// 32-byte key for sealing credentials at rest.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SealingKey {
    key: [u8; 32],
}

impl SealingKey {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    fn cipher(&self) -> Result<Aes256Gcm, CredentialError> {
        Aes256Gcm::new_from_slice(&self.key).map_err(|e| CredentialError::Encryption(e.to_string()))
    }
}

/// An encrypted credential blob: base64(nonce || ciphertext).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SealedCredential {
    blob: String,
}

impl SealedCredential {
    /// Seal a raw secret under the given key.
    pub fn seal(secret: &str, key: &SealingKey) -> Result<Self, CredentialError> {
        let cipher = key.cipher()?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, secret.as_bytes())
            .map_err(|e| CredentialError::Encryption(e.to_string()))?;

        let mut bytes = nonce.to_vec();
        bytes.extend_from_slice(&ciphertext);

        Ok(Self {
            blob: BASE64.encode(bytes),
        })
    }

    /// Reconstruct from a previously sealed base64 blob.
    pub fn from_blob(blob: impl Into<String>) -> Self {
        Self { blob: blob.into() }
    }

    /// Unseal into an in-memory credential.
    ///
    /// Fails with [`CredentialError::Decryption`] on key mismatch or a
    /// tampered blob; never yields a partially-decrypted value.
    pub fn unseal(&self, key: &SealingKey) -> Result<SigningCredential, CredentialError> {
        let bytes = BASE64
            .decode(&self.blob)
            .map_err(|e| CredentialError::MalformedBlob(e.to_string()))?;

        if bytes.len() < NONCE_LEN {
            return Err(CredentialError::MalformedBlob(
                "blob shorter than nonce".to_string(),
            ));
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let cipher = key.cipher()?;

        let plaintext = Zeroizing::new(
            cipher
                .decrypt(Nonce::from_slice(nonce), ciphertext)
                .map_err(|_| CredentialError::Decryption)?,
        );

        let secret = String::from_utf8(plaintext.to_vec())
            .map_err(|_| CredentialError::MalformedBlob("secret is not UTF-8".to_string()))?;

        Ok(SigningCredential::new(secret))
    }
}

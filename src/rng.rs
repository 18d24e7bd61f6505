//! Pseudo-random word streams for scrambling, generated with AES-128-CTR.

use aes::Aes128;
use aes::cipher::{generic_array::GenericArray, StreamCipher, KeyIvInit};
use ctr::Ctr128BE;

use crate::error::Error;
use crate::hash::shake256_seed_key;
use crate::params::SEED_BYTES;

/// Source of random words for scrambling a box. The implementation is
/// injected by the caller, so tests can replay an exact scramble.
pub trait ScrambleRng {
    fn next_u32(&mut self) -> u32;
}

/// Deterministic generator reading an AES-128-CTR keystream.
/// A standard zero IV is used for the start of the counter, so the whole
/// stream is a function of the 16-byte key alone.
pub struct KeystreamRng {
    cipher: Ctr128BE<Aes128>,
}

impl KeystreamRng {
    /// Builds a generator from an explicit key. Equal keys yield equal
    /// toggle streams.
    pub fn from_seed(key_bytes: &[u8; SEED_BYTES]) -> Self {
        let key = GenericArray::from_slice(key_bytes);
        let iv = GenericArray::from_slice(&[0u8; 16]);
        Self {
            cipher: Ctr128BE::<Aes128>::new(key, iv),
        }
    }

    /// Builds a generator from arbitrary-length seed material, squeezed to
    /// a key through SHAKE256.
    pub fn from_seed_material(material: &[u8]) -> Self {
        Self::from_seed(&shake256_seed_key(material))
    }

    /// Builds a generator keyed with fresh operating-system entropy.
    pub fn from_entropy() -> Result<Self, Error> {
        let mut key = [0u8; SEED_BYTES];
        getrandom::getrandom(&mut key).map_err(|_| Error::Entropy)?;
        Ok(Self::from_seed(&key))
    }
}

impl ScrambleRng for KeystreamRng {
    fn next_u32(&mut self) -> u32 {
        let mut word = [0u8; 4];
        self.cipher.apply_keystream(&mut word);
        u32::from_be_bytes(word)
    }
}

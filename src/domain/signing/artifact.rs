// SPDX-License-Identifier: MPL-2.0
//! The immutable output of a completed signing flow.

use crate::domain::media::EncodedImage;
use chrono::{DateTime, Utc};

/// Photo and signature bound together at the moment of signing.
///
/// Fields are private and there are no setters: once built, the artifact is
/// only read or moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningArtifact {
    photo: EncodedImage,
    signature: EncodedImage,
    signed_at: DateTime<Utc>,
}

impl SigningArtifact {
    #[must_use]
    pub fn new(photo: EncodedImage, signature: EncodedImage, signed_at: DateTime<Utc>) -> Self {
        Self {
            photo,
            signature,
            signed_at,
        }
    }

    #[must_use]
    pub fn photo(&self) -> &EncodedImage {
        &self.photo
    }

    #[must_use]
    pub fn signature(&self) -> &EncodedImage {
        &self.signature
    }

    #[must_use]
    pub fn signed_at(&self) -> DateTime<Utc> {
        self.signed_at
    }

    /// Content hash over both images, for tamper checks by the caller.
    ///
    /// Each payload is length-prefixed so that moving bytes between the two
    /// images changes the hash.
    #[must_use]
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for image in [&self.photo, &self.signature] {
            hasher.update(&(image.len() as u64).to_le_bytes());
            hasher.update(image.bytes());
        }
        hasher.finalize()
    }

    /// Splits the artifact into `(photo, signature)`.
    #[must_use]
    pub fn into_parts(self) -> (EncodedImage, EncodedImage) {
        (self.photo, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(photo: &[u8], signature: &[u8]) -> SigningArtifact {
        SigningArtifact::new(
            EncodedImage::from_bytes(photo.to_vec()),
            EncodedImage::from_bytes(signature.to_vec()),
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    #[test]
    fn accessors_return_inputs() {
        let a = artifact(b"photo", b"sig");
        assert_eq!(a.photo().bytes(), b"photo");
        assert_eq!(a.signature().bytes(), b"sig");
        assert_eq!(a.signed_at(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(
            artifact(b"a", b"b").fingerprint(),
            artifact(b"a", b"b").fingerprint()
        );
    }

    #[test]
    fn fingerprint_separates_payload_boundaries() {
        assert_ne!(
            artifact(b"ab", b"c").fingerprint(),
            artifact(b"a", b"bc").fingerprint()
        );
    }

    #[test]
    fn into_parts_moves_both_images() {
        let (photo, signature) = artifact(b"p", b"s").into_parts();
        assert_eq!(photo.bytes(), b"p");
        assert_eq!(signature.bytes(), b"s");
    }
}

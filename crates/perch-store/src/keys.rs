use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

const KEY_BYTES: usize = 16;

/// Generate an opaque secret key: 16 random bytes, URL-safe base64
/// without padding. Issued once at record creation and never rotated;
/// presenting it is the sole proof of ownership.
pub fn generate_key() -> String {
    let mut bytes = [0u8; KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

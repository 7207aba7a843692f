use tiny_keccak::{Hasher, Keccak};

/// Hash of `message` as produced by an Ethereum wallet's `personal_sign`.
pub fn hash_message(message: &str) -> [u8; 32] {
    let prefixed = format!("\x19Ethereum Signed Message:\n{}{}", message.len(), message);
    let mut hasher = Keccak::v256();
    hasher.update(prefixed.as_bytes());
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

use sha2::{Digest, Sha256};

pub(crate) fn hex_upper(bytes: impl AsRef<[u8]>) -> String {
    bytes
        .as_ref()
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect()
}

pub(crate) fn content_digest(bytes: &[u8]) -> String {
    hex_upper(Sha256::digest(bytes))
}

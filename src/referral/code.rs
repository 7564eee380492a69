use rand::Rng;
use std::sync::Arc;

/// Uppercase letters and digits without the easily confused 0/O and 1/I.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const CODE_LENGTH: usize = 8;

/// Draws allowed before giving up on finding an unused code.
pub const MAX_CODE_ATTEMPTS: u32 = 5;

/// Source of candidate codes. Swappable so collisions can be forced in tests.
pub type CodeGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Draw a random code from the thread-local RNG.
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

pub(crate) fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Canonical form used for lookups: trimmed and uppercased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

pub(crate) fn default_generator() -> CodeGenerator {
    Arc::new(generate_code)
}

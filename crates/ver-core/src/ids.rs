//! ID prefixes and generation.
//!
//! IDs are `{prefix}-{8 lowercase hex}` (e.g. `eng-3fa81c0d`).

use crate::errors::CoreError;

pub const PREFIX_ENGAGEMENT: &str = "eng";
pub const PREFIX_AUDIT: &str = "audit";

/// Generate a fresh ID with the given prefix from 4 random bytes.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate {prefix} id: {e}")))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix_and_hex_suffix() {
        let id = generate_id(PREFIX_ENGAGEMENT).unwrap();
        let (prefix, suffix) = id.split_once('-').unwrap();
        assert_eq!(prefix, "eng");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ids_are_distinct() {
        let a = generate_id(PREFIX_AUDIT).unwrap();
        let b = generate_id(PREFIX_AUDIT).unwrap();
        assert_ne!(a, b);
    }
}

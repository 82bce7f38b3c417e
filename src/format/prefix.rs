use crate::core::{CodeError, Result};

/// Derive a short code prefix from a record's display name.
///
/// Takes the first three characters of the trimmed name, uppercased; a
/// shorter name contributes all of its characters. An empty or
/// whitespace-only name is rejected so that records never end up with a
/// blank prefix.
///
/// # Examples
///
/// ```
/// use seqcode::derive_prefix;
///
/// assert_eq!(derive_prefix("Laptop").unwrap(), "LAP");
/// assert_eq!(derive_prefix("TV").unwrap(), "TV");
/// assert!(derive_prefix("   ").is_err());
/// ```
pub fn derive_prefix(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CodeError::EmptyName);
    }

    Ok(trimmed.chars().take(3).collect::<String>().to_uppercase())
}

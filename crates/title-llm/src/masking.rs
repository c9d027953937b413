pub const MASK: &str = "[MASKED]";

/// Replace every occurrence of `secret` in `text` with a fixed mask.
pub fn mask_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    text.replace(secret, MASK)
}

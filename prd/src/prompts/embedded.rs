//! Embedded prompt templates
//!
//! Compiled-in defaults so the binary works without a prompts directory.

use tracing::debug;

/// The PRD generation prompt
pub const PRD: &str = include_str!("../../prompts/prd.pmt");

/// Get an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "prd" => {
            debug!("get_embedded: matched prd");
            Some(PRD)
        }
        _ => {
            debug!(%name, "get_embedded: no match");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_prd() {
        let content = get_embedded("prd").unwrap();
        assert!(content.contains("Project Manager"));
        assert!(content.contains("Sprint Plans"));
        assert!(content.contains("{{project_name}}"));
        assert!(content.contains("{{user_flow}}"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("nonexistent").is_none());
    }
}

//! Instruction template sent to the completion service.

/// Wraps `query` in the fixed request for 15 to 20 rows of medical and
/// pharmaceutical data formatted as CSV.
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"
    Please provide reliable and accurate medical and pharmaceutical data related to the following query.
    The data should include at least 15 to 20 entries and be formatted as a CSV for the medical and pharmaceutical domain only.
    The data must be accurate and trustworthy.

    Query: {query}

    The result should be in CSV format with headers and rows.
    "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query_line() {
        let prompt = build_prompt("common antihypertensive drugs");
        assert!(prompt.contains("\n    Query: common antihypertensive drugs\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("statins"), build_prompt("statins"));
        assert_ne!(build_prompt("statins"), build_prompt("insulin"));
    }

    #[test]
    fn test_prompt_keeps_instructions() {
        let prompt = build_prompt("vaccines");
        assert!(prompt.starts_with('\n'));
        assert!(prompt.contains("at least 15 to 20 entries"));
        assert!(prompt.contains("medical and pharmaceutical domain only"));
        assert!(prompt.contains("The result should be in CSV format with headers and rows."));
    }

    #[test]
    fn test_prompt_does_not_interpret_braces() {
        let prompt = build_prompt("{dose} in mg");
        assert!(prompt.contains("Query: {dose} in mg"));
    }
}

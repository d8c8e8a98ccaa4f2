//! Unit tests for the text normalizer.

#[cfg(test)]
mod normalizer_tests {
    use crate::answer::normalizer::*;
    use serde_json::json;

    fn structured(value: serde_json::Value) -> Normalized {
        match value {
            serde_json::Value::Object(map) => Normalized::Structured(map),
            other => panic!("expected object, got {}", other),
        }
    }

    // ============= Structured Answers =============

    #[test]
    fn test_fenced_answer_is_parsed() {
        let result = normalize("```{\"answer\":[{\"AAPL\":229.35}]}```");
        assert_eq!(result, structured(json!({"answer": [{"AAPL": 229.35}]})));
    }

    #[test]
    fn test_fenced_answer_with_trailing_newline() {
        let result = normalize("```{\"answer\":[{\"AAPL\":229.35}]}```\n");
        assert_eq!(result, structured(json!({"answer": [{"AAPL": 229.35}]})));
    }

    #[test]
    fn test_plain_answer_object() {
        let result = normalize(r#"{"answer":[{"AAPL":229.35},{"PETR4":129.98}]}"#);
        assert_eq!(
            result,
            structured(json!({"answer": [{"AAPL": 229.35}, {"PETR4": 129.98}]}))
        );
    }

    #[test]
    fn test_multiline_answer_object() {
        let raw = "{\r\n  \"answer\": [\n    {\"MSFT\": 415.1}\n  ]\r\n}";
        let result = normalize(raw);
        assert_eq!(result, structured(json!({"answer": [{"MSFT": 415.1}]})));
    }

    #[test]
    fn test_single_backticks_removed_before_parse() {
        let result = normalize("`{\"answer\": 1}`");
        assert_eq!(result, structured(json!({"answer": 1})));
    }

    #[test]
    fn test_answer_shape_not_validated() {
        let result = normalize(r#"{"answer":"it went up","extra":true}"#);
        assert_eq!(result, structured(json!({"answer": "it went up", "extra": true})));
    }

    #[test]
    fn test_escaped_newline_inside_string_value_removed() {
        let result = normalize(r#"{"answer":"a\nb"}"#);
        assert_eq!(result, structured(json!({"answer": "ab"})));
    }

    // ============= Text Fallbacks =============

    #[test]
    fn test_not_json_unchanged() {
        assert_eq!(
            normalize("not json at all"),
            Normalized::Text("not json at all".to_string())
        );
    }

    #[test]
    fn test_all_newline_forms_removed_without_separator() {
        let result = normalize("plain text with\\nnewline and\nreal newline");
        assert_eq!(
            result,
            Normalized::Text("plain text withnewline andreal newline".to_string())
        );
    }

    #[test]
    fn test_carriage_returns_removed() {
        let result = normalize("line one\r\nline two");
        assert_eq!(result, Normalized::Text("line oneline two".to_string()));
    }

    #[test]
    fn test_error_object_returned_as_text() {
        let raw = r#"{"error":"bad"}"#;
        assert_eq!(normalize(raw), Normalized::Text(raw.to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), Normalized::Text(String::new()));
        assert_eq!(normalize("  \n\t "), Normalized::Text(String::new()));
    }

    #[test]
    fn test_bare_fence_is_empty() {
        assert_eq!(normalize("```"), Normalized::Text(String::new()));
    }

    #[test]
    fn test_non_object_json_returns_cleaned_text() {
        assert_eq!(normalize(" 42 "), Normalized::Text("42".to_string()));
        assert_eq!(
            normalize("[{\"AAPL\":1}]"),
            Normalized::Text("[{\"AAPL\":1}]".to_string())
        );
        assert_eq!(normalize("\"answer\""), Normalized::Text("\"answer\"".to_string()));
    }

    #[test]
    fn test_language_tagged_fence_keeps_tag() {
        // Only backticks are stripped from fence ends, so the tag sticks to the JSON
        let result = normalize("```json\n{\"answer\":[]}\n```");
        assert_eq!(result, Normalized::Text("json{\"answer\":[]}".to_string()));
    }

    #[test]
    fn test_unbalanced_fence_only_loses_backticks() {
        let result = normalize("```{\"answer\":[]}");
        assert_eq!(result, structured(json!({"answer": []})));
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(normalize("hello").as_text(), Some("hello"));
        assert_eq!(normalize("{\"answer\":1}").as_text(), None);
    }

    // ============= clean() =============

    #[test]
    fn test_clean_inner_whitespace_preserved() {
        assert_eq!(clean("  a  b  "), "a  b");
    }

    #[test]
    fn test_clean_fence_with_padding() {
        assert_eq!(clean("\n```  {\"a\":1}  ```\n"), "{\"a\":1}");
    }

    #[test]
    fn test_clean_never_panics_on_odd_input() {
        for raw in ["`", "``", "````", "\\", "\\n\\n", "\u{feff}", "🦀```🦀", "```\u{0}```"] {
            let _ = normalize(raw);
        }
    }
}

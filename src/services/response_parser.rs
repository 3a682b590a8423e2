use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{mcq::OPTION_COUNT, AnswerKey, Mcq},
};

static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([^']*)'").expect("SINGLE_QUOTED is a valid regex pattern"));

static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("DOUBLE_QUOTED is a valid regex pattern"));

/// Shape of the model's JSON payload before normalization. `options`
/// may arrive as an array or as a single bracketed string.
#[derive(Debug, Deserialize)]
struct RawMcq {
    question: String,
    options: Value,
    answer: String,
    explanation: String,
    #[serde(default)]
    complexity: Option<Value>,
}

/// Isolates the outermost balanced brace span in free-form text.
///
/// The model is asked for a bare JSON object but may wrap it in
/// markdown fences or prose. The scan is string- and escape-aware so
/// braces inside string values do not end the span early.
pub fn extract_json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in content[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Normalizes the `options` field into a list of strings.
///
/// A string value is split into up to four tokens using the quote
/// patterns the model is known to produce; a string with no quoted
/// tokens is kept whole as a single option.
fn normalize_options(options: &Value) -> AppResult<Vec<String>> {
    match options {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| AppError::Parse("options must be strings".to_string()))
            })
            .collect(),
        Value::String(text) => {
            let single: Vec<String> = SINGLE_QUOTED
                .captures_iter(text)
                .take(OPTION_COUNT)
                .map(|c| c[1].to_string())
                .collect();
            if !single.is_empty() {
                return Ok(single);
            }

            let double: Vec<String> = DOUBLE_QUOTED
                .captures_iter(text)
                .take(OPTION_COUNT)
                .map(|c| c[1].to_string())
                .collect();
            if !double.is_empty() {
                return Ok(double);
            }

            Ok(vec![text.clone()])
        }
        other => Err(AppError::Parse(format!(
            "options must be an array or string, got {}",
            other
        ))),
    }
}

fn normalize_complexity(complexity: Option<&Value>) -> Option<u8> {
    let value = complexity?;
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses a raw completion into an [`Mcq`], treating any deviation
/// from the schema as a single parse error.
pub fn parse_mcq(content: &str) -> AppResult<Mcq> {
    let json_str = extract_json_span(content).unwrap_or_else(|| content.trim());

    let raw: RawMcq = serde_json::from_str(json_str)?;

    if raw.question.trim().is_empty() {
        return Err(AppError::Parse("question must not be empty".to_string()));
    }

    let options = normalize_options(&raw.options)?;
    if options.len() != OPTION_COUNT {
        return Err(AppError::Parse(format!(
            "expected exactly {} options, got {}",
            OPTION_COUNT,
            options.len()
        )));
    }

    let answer: AnswerKey = raw.answer.parse().map_err(AppError::Parse)?;

    Ok(Mcq {
        question: raw.question,
        options,
        answer,
        explanation: raw.explanation,
        complexity: normalize_complexity(raw.complexity.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn parses_bare_json_object() {
        let mcq = parse_mcq(&fixtures::valid_mcq_json()).unwrap();

        assert_eq!(mcq.question, "Which pigment absorbs light for photosynthesis?");
        assert_eq!(mcq.options.len(), 4);
        assert_eq!(mcq.answer, AnswerKey::B);
        assert_eq!(mcq.complexity, Some(2));
    }

    #[test]
    fn parses_json_wrapped_in_markdown_fences() {
        let wrapped = format!("```json\n{}\n```", fixtures::valid_mcq_json());
        let mcq = parse_mcq(&wrapped).unwrap();

        assert_eq!(mcq.answer, AnswerKey::B);
    }

    #[test]
    fn parses_json_surrounded_by_prose() {
        let wrapped = format!(
            "Here is your question:\n{}\nLet me know if you need another one.",
            fixtures::valid_mcq_json()
        );
        let mcq = parse_mcq(&wrapped).unwrap();

        assert_eq!(mcq.options.len(), 4);
    }

    #[test]
    fn extract_span_ignores_braces_inside_strings() {
        let content = r#"note {"question": "What does {x} mean?", "answer": "A"} trailing"#;
        let span = extract_json_span(content).unwrap();

        assert_eq!(span, r#"{"question": "What does {x} mean?", "answer": "A"}"#);
    }

    #[test]
    fn extract_span_returns_none_without_object() {
        assert!(extract_json_span("no json here").is_none());
    }

    #[test]
    fn normalizes_single_quoted_options_string() {
        let response = r#"{
            "question": "Which gas do plants absorb?",
            "options": "['A. Oxygen', 'B. Carbon dioxide', 'C. Nitrogen', 'D. Helium']",
            "answer": "B",
            "explanation": "Plants absorb carbon dioxide."
        }"#;
        let mcq = parse_mcq(response).unwrap();

        assert_eq!(mcq.options.len(), 4);
        assert_eq!(mcq.options[1], "B. Carbon dioxide");
    }

    #[test]
    fn normalizes_double_quoted_options_string() {
        let response = r#"{
            "question": "Which gas do plants absorb?",
            "options": "[\"A. Oxygen\", \"B. Carbon dioxide\", \"C. Nitrogen\", \"D. Helium\"]",
            "answer": "B",
            "explanation": "Plants absorb carbon dioxide."
        }"#;
        let mcq = parse_mcq(response).unwrap();

        assert_eq!(mcq.options.len(), 4);
        assert_eq!(mcq.options[3], "D. Helium");
    }

    #[test]
    fn rejects_wrong_option_count() {
        let response = r#"{
            "question": "Which gas do plants absorb?",
            "options": ["A. Oxygen", "B. Carbon dioxide"],
            "answer": "B",
            "explanation": "Plants absorb carbon dioxide."
        }"#;
        let err = parse_mcq(response).unwrap_err();

        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_answer_letter() {
        let response = r#"{
            "question": "Which gas do plants absorb?",
            "options": ["A. Oxygen", "B. Carbon dioxide", "C. Nitrogen", "D. Helium"],
            "answer": "E",
            "explanation": "Plants absorb carbon dioxide."
        }"#;
        let err = parse_mcq(response).unwrap_err();

        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejects_empty_question() {
        let response = r#"{
            "question": "   ",
            "options": ["A. 1", "B. 2", "C. 3", "D. 4"],
            "answer": "A",
            "explanation": "x"
        }"#;
        let err = parse_mcq(response).unwrap_err();

        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejects_plain_prose() {
        let err = parse_mcq("I could not generate a question this time.").unwrap_err();

        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn tolerates_string_complexity() {
        let response = r#"{
            "question": "Which gas do plants absorb?",
            "options": ["A. Oxygen", "B. Carbon dioxide", "C. Nitrogen", "D. Helium"],
            "answer": "B",
            "explanation": "Plants absorb carbon dioxide.",
            "complexity": "3"
        }"#;
        let mcq = parse_mcq(response).unwrap();

        assert_eq!(mcq.complexity, Some(3));
    }
}

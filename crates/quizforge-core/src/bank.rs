//! JSON question bank loader.
//!
//! Loads the bank once at startup; it is read-only afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuizError;
use crate::model::{Category, Question};

/// In-memory collection of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuizError::NotFound(path.to_path_buf())
            } else {
                QuizError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let bank = Self::from_json_str(&content, &path.display().to_string())?;
        tracing::debug!(
            "loaded {} question(s) from {}",
            bank.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Parse a bank from a JSON string (useful for testing).
    pub fn from_json_str(content: &str, source_name: &str) -> Result<Self, QuizError> {
        let parse_error = |message: String| QuizError::Parse {
            source_name: source_name.to_string(),
            message,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        // The usual layout wraps the list in a `questions` key; a bare array works too.
        let list = match value {
            Value::Object(mut map) => map
                .remove("questions")
                .ok_or_else(|| parse_error("missing `questions` key".to_string()))?,
            other => other,
        };

        let questions: Vec<Question> =
            serde_json::from_value(list).map_err(|e| parse_error(e.to_string()))?;
        Ok(Self { questions })
    }

    /// All questions, in file order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions tagged with `category`, in file order.
    pub fn by_category(&self, category: &Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| &q.category == category)
            .collect()
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&&q.category) {
                seen.push(&q.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK_JSON: &str = r#"
{
    "questions": [
        {
            "question": "Which number comes next: 2, 4, 8, 16?",
            "category": "Cognitive",
            "options": ["18", "24", "32", "64"],
            "answer": "32"
        },
        {
            "question": "What does HTTP stand for?",
            "category": "Skills",
            "options": ["HyperText Transfer Protocol", "High Transfer Text Protocol",
                        "Host Transfer Protocol", "Hyper Terminal Protocol"],
            "answer": "HyperText Transfer Protocol",
            "difficulty": 2
        },
        {
            "question": "Which word is the odd one out?",
            "category": "Cognitive",
            "options": ["Apple", "Banana", "Carrot", "Cherry"],
            "answer": "Carrot"
        }
    ]
}
"#;

    #[test]
    fn parse_wrapped_bank() {
        let bank = QuestionBank::from_json_str(BANK_JSON, "test").unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.questions()[1].difficulty.get(), 2);
    }

    #[test]
    fn parse_bare_array() {
        let json = r#"[{"question": "q", "category": "Skills",
            "options": ["a", "b", "c", "d"], "answer": "d"}]"#;
        let bank = QuestionBank::from_json_str(json, "bare").unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].category, Category::Skills);
    }

    #[test]
    fn filter_by_category_keeps_order() {
        let bank = QuestionBank::from_json_str(BANK_JSON, "test").unwrap();
        let cognitive = bank.by_category(&Category::Cognitive);
        assert_eq!(cognitive.len(), 2);
        assert!(cognitive[0].text.starts_with("Which number"));
        assert!(cognitive[1].text.starts_with("Which word"));
        assert!(bank.by_category(&Category::Other("None".into())).is_empty());
        assert_eq!(
            bank.categories(),
            vec![&Category::Cognitive, &Category::Skills]
        );
    }

    #[test]
    fn malformed_bank_is_parse_error() {
        let err = QuestionBank::from_json_str("{ not json", "bad.json").unwrap_err();
        assert!(matches!(err, QuizError::Parse { ref source_name, .. } if source_name == "bad.json"));
    }

    #[test]
    fn object_without_questions_key_is_parse_error() {
        let err = QuestionBank::from_json_str(r#"{"items": []}"#, "x").unwrap_err();
        assert!(err.to_string().contains("missing `questions` key"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuestionBank::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuizError::NotFound(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, BANK_JSON).unwrap();

        let bank = QuestionBank::load(&path).unwrap();
        assert_eq!(bank.by_category(&Category::Skills).len(), 1);
    }
}

//! Builders for in-memory quiz documents used across unit tests.

use serde_json::{Value, json};

use super::QuizDocument;

pub fn question(department: &str, has_image: bool) -> Value {
    json!({
        "department": department,
        "type": "zamknięte",
        "question": format!("Zadanie z działu {}", department),
        "options": { "A": "tak", "B": "nie" },
        "correctAnswer": "A",
        "explanation": "Bo tak.",
        "hasImage": has_image
    })
}

pub fn document_json(questions: Vec<Value>) -> Value {
    json!({
        "metadata": {
            "title": "T",
            "description": "Opis testowy",
            "totalQuestions": questions.len(),
            "maxPoints": 10,
            "year": 2024
        },
        "questions": questions
    })
}

pub fn document(questions: &[(&str, bool)]) -> QuizDocument {
    let questions = questions
        .iter()
        .map(|(department, has_image)| question(department, *has_image))
        .collect();
    serde_json::from_value(document_json(questions)).unwrap()
}

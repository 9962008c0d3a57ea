use std::collections::BTreeMap;

use crate::models::{FieldError, QuizDocument};

/// Aggregate counts over the questions of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStats {
    /// Question count per department. Keys iterate in ascending order.
    pub departments: BTreeMap<String, usize>,
    /// Number of questions flagged as having an image.
    pub with_images: usize,
    /// Number of questions in the document, regardless of the declared count.
    pub total: usize,
}

impl QuizStats {
    pub fn from_document(document: &QuizDocument) -> Result<Self, FieldError> {
        let mut departments = BTreeMap::new();
        let mut with_images = 0;

        for summary in document.summaries() {
            let summary = summary?;
            *departments.entry(summary.department).or_insert(0) += 1;
            if summary.has_image {
                with_images += 1;
            }
        }

        Ok(Self {
            departments,
            with_images,
            total: document.total_questions(),
        })
    }
}

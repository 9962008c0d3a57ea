//! Plain-text rendering of a quiz report.

use std::io::{self, Write};

use crate::ReportError;
use crate::models::{Question, QuizDocument, QuizMetadata};

use super::QuizStats;

/// Number of questions shown in the sample section.
pub const SAMPLE_SIZE: usize = 3;

/// Text report over a loaded document: metadata, sample questions,
/// per-department counts and the image count, in that order.
///
/// Sections are written one at a time. If a record is missing a field the
/// report stops there and everything before it stays written.
pub struct Report<'a> {
    document: &'a QuizDocument,
}

impl<'a> Report<'a> {
    pub fn new(document: &'a QuizDocument) -> Self {
        Self { document }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let result = self.write_sections(out);
        out.flush()?;
        result
    }

    /// Renders the whole report into a string.
    pub fn render(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_sections<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let metadata = self.document.metadata()?;
        render_metadata(out, &metadata)?;

        writeln!(out, "\n=== PRZYKŁADOWE PYTANIA ===")?;
        for (i, question) in self.document.sample(SAMPLE_SIZE).enumerate() {
            render_question(out, i + 1, &question?)?;
        }

        writeln!(out, "\n=== STATYSTYKI ===")?;
        let stats = QuizStats::from_document(self.document)?;
        render_stats(out, &stats)?;

        Ok(())
    }
}

fn render_metadata<W: Write>(out: &mut W, metadata: &QuizMetadata) -> io::Result<()> {
    writeln!(out, "=== METADANE QUIZU ===")?;
    writeln!(out, "Tytuł: {}", metadata.title)?;
    writeln!(out, "Opis: {}", metadata.description)?;
    writeln!(out, "Liczba pytań: {}", metadata.total_questions)?;
    writeln!(out, "Maksymalna liczba punktów: {}", metadata.max_points)?;
    writeln!(out, "Rok: {}", metadata.year)
}

fn render_question<W: Write>(out: &mut W, number: usize, question: &Question) -> io::Result<()> {
    writeln!(out, "\nPytanie {}:", number)?;
    writeln!(out, "  Dział: {}", question.department)?;
    writeln!(out, "  Typ: {}", question.kind)?;
    writeln!(out, "  Treść: {}", question.text)?;
    writeln!(out, "  Odpowiedzi:")?;
    for (key, value) in &question.options {
        writeln!(out, "    {}) {}", key, value)?;
    }
    writeln!(out, "  Poprawna odpowiedź: {}", question.correct_answer)?;
    writeln!(out, "  Wyjaśnienie: {}", question.explanation)
}

fn render_stats<W: Write>(out: &mut W, stats: &QuizStats) -> io::Result<()> {
    writeln!(out, "Pytania według działów:")?;
    for (department, count) in &stats.departments {
        writeln!(out, "  {}: {} pytań", department, count)?;
    }

    writeln!(out, "\nPytania z obrazkami: {}/{}", stats.with_images, stats.total)
}

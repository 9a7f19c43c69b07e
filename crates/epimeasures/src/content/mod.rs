//! Static explainer content: section notes, practice questions, glossary
//! and references.

pub mod glossary;
pub mod quiz;
pub mod sections;

pub use glossary::{GLOSSARY, GlossaryTerm};
pub use quiz::{QUESTIONS, Question};
pub use sections::{Note, REFERENCES, SECTIONS, Section, notes_for, sections_for};

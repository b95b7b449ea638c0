//! Data model for Bible content
//!
//! These types mirror the shapes the upstream provider returns for passage
//! queries. The raw-text fetch path carries plain strings instead; the typed
//! path deserializes into [`BibleResponse`] and rejects malformed payloads.

use serde::{Deserialize, Serialize};

/// A single verse within a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleVerse {
    pub id: u32,
    pub text: String,
    pub chapter: u32,
    pub verse: u32,
}

/// A book of the Bible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleBook {
    pub id: u32,
    pub name: String,
    /// Number of chapters in the book
    pub chapters: u32,
}

/// A Bible translation (e.g. NVI, ARC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleTranslation {
    pub id: u32,
    pub name: String,
    pub language: Language,
}

/// A book paired with its verses, in scripture order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleResponse {
    pub book: BibleBook,
    pub verses: Vec<BibleVerse>,
}

/// Target language for a Bible fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
    Es,
}

impl Language {
    /// Two-letter code used as the upstream `language` query value
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

/// Request descriptor for a passage fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchBibleParams {
    /// Book name as it appears in passage references (e.g. "João")
    pub book: String,
    pub chapter: u32,
    pub language: Language,
    /// Translation version code (e.g. "ARC")
    pub version: String,
}

impl FetchBibleParams {
    /// Format the passage reference the upstream provider expects
    pub fn passage(&self) -> String {
        format!("{} {}", self.book, self.chapter)
    }
}

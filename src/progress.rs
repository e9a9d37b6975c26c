use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog;

pub const VERSE_XP: u32 = 10;
pub const QUIZ_XP: u32 = 50;

/// chapter -> verse -> completed
pub type ChapterMap = BTreeMap<u32, BTreeMap<u32, bool>>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub current_book: String,
    pub current_chapter: u32,
    pub current_verse: u32,
    pub completed_verses: BTreeMap<String, ChapterMap>,
    pub completed_quizzes: BTreeMap<String, bool>,
    pub streak: u32,
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    pub achievements: Vec<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        UserProgress {
            current_book: catalog::BIBLE_BOOKS[0].to_string(),
            current_chapter: 1,
            current_verse: 1,
            completed_verses: BTreeMap::new(),
            completed_quizzes: BTreeMap::new(),
            streak: 0,
            total_xp: 0,
            achievements: Vec::new(),
        }
    }
}

pub fn quiz_key(book: &str, chapter_group: u32) -> String {
    format!("{}-{}", book, chapter_group)
}

impl UserProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_verse_completed(&self, book: &str, chapter: u32, verse: u32) -> bool {
        self.completed_verses
            .get(book)
            .and_then(|chapters| chapters.get(&chapter))
            .and_then(|verses| verses.get(&verse))
            .copied()
            .unwrap_or(false)
    }

    /// Records the verse as completed. XP is only awarded the first time;
    /// returns whether this call did the awarding.
    pub fn mark_verse_completed(&mut self, book: &str, chapter: u32, verse: u32) -> bool {
        if self.is_verse_completed(book, chapter, verse) {
            return false;
        }
        self.completed_verses
            .entry(book.to_string())
            .or_default()
            .entry(chapter)
            .or_default()
            .insert(verse, true);
        self.total_xp += VERSE_XP;
        tracing::info!(book, chapter, verse, total_xp = self.total_xp, "verse completed");
        true
    }

    pub fn is_quiz_completed(&self, book: &str, chapter_group: u32) -> bool {
        self.completed_quizzes
            .get(&quiz_key(book, chapter_group))
            .copied()
            .unwrap_or(false)
    }

    /// Records a passed quiz. The bonus is only awarded for the first pass
    /// of a chapter group; returns whether this call awarded it.
    pub fn record_quiz_passed(&mut self, book: &str, chapter_group: u32) -> bool {
        if self.is_quiz_completed(book, chapter_group) {
            return false;
        }
        self.completed_quizzes.insert(quiz_key(book, chapter_group), true);
        self.total_xp += QUIZ_XP;
        tracing::info!(book, chapter_group, total_xp = self.total_xp, "quiz passed");
        true
    }

    /// A book counts as completed once any verse has been recorded under it.
    pub fn is_book_completed(&self, book: &str) -> bool {
        self.completed_verses
            .get(book)
            .map_or(false, |chapters| !chapters.is_empty())
    }

    pub fn is_chapter_completed(&self, book: &str, chapter: u32) -> bool {
        self.completed_verses
            .get(book)
            .and_then(|chapters| chapters.get(&chapter))
            .map_or(false, |verses| !verses.is_empty())
    }

    /// Number of books with an entry in the completed map.
    pub fn books_started(&self) -> usize {
        self.completed_verses.len()
    }

    pub fn verses_completed(&self) -> usize {
        self.completed_verses
            .values()
            .flat_map(|chapters| chapters.values())
            .map(|verses| verses.len())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

pub fn achievements(progress: &UserProgress) -> [Achievement; 4] {
    [
        Achievement {
            name: "First Steps",
            description: "Complete your first verse",
            unlocked: progress.total_xp > 0,
        },
        Achievement {
            name: "Dedicated",
            description: "3 day streak",
            unlocked: progress.streak >= 3,
        },
        Achievement {
            name: "Scholar",
            description: "100 XP earned",
            unlocked: progress.total_xp >= 100,
        },
        Achievement {
            name: "Faithful",
            description: "7 day streak",
            unlocked: progress.streak >= 7,
        },
    ]
}

//! Per-verse notes and highlights, keyed by `book-chapter-verse`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseKey {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(book: &str, chapter: u32, verse: u32) -> Self {
        VerseKey {
            book: book.to_string(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.book, self.chapter, self.verse)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Yellow,
    Green,
    Blue,
    Pink,
    Purple,
}

impl HighlightColor {
    pub const PALETTE: [HighlightColor; 5] = [
        HighlightColor::Yellow,
        HighlightColor::Green,
        HighlightColor::Blue,
        HighlightColor::Pink,
        HighlightColor::Purple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HighlightColor::Yellow => "yellow",
            HighlightColor::Green => "green",
            HighlightColor::Blue => "blue",
            HighlightColor::Pink => "pink",
            HighlightColor::Purple => "purple",
        }
    }

    pub fn from_name(name: &str) -> Option<HighlightColor> {
        HighlightColor::PALETTE.into_iter().find(|c| c.name() == name)
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            HighlightColor::Yellow => [250, 204, 21],
            HighlightColor::Green => [74, 222, 128],
            HighlightColor::Blue => [96, 165, 250],
            HighlightColor::Pink => [244, 114, 182],
            HighlightColor::Purple => [192, 132, 252],
        }
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        HighlightColor::Yellow
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct UserNotes(pub BTreeMap<String, String>);

impl UserNotes {
    pub fn get(&self, key: &VerseKey) -> Option<&str> {
        self.0.get(&key.to_string()).map(String::as_str)
    }

    /// Blank text removes the note; anything else is stored verbatim.
    pub fn save(&mut self, key: &VerseKey, text: &str) {
        if text.trim().is_empty() {
            self.0.remove(&key.to_string());
        } else {
            self.0.insert(key.to_string(), text.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct UserHighlights(pub BTreeMap<String, HighlightColor>);

/// Colour names outside the palette are dropped per entry so one bad value
/// does not discard the rest of the stored highlights.
impl<'de> Deserialize<'de> for UserHighlights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (key, name) in raw {
            match HighlightColor::from_name(&name) {
                Some(color) => {
                    map.insert(key, color);
                }
                None => tracing::warn!(verse = %key, color = %name, "dropping highlight with unknown colour"),
            }
        }
        Ok(UserHighlights(map))
    }
}

impl UserHighlights {
    pub fn get(&self, key: &VerseKey) -> Option<HighlightColor> {
        self.0.get(&key.to_string()).copied()
    }

    /// Applying the colour already on the verse clears it; any other colour
    /// replaces it. Returns the resulting highlight.
    pub fn toggle(&mut self, key: &VerseKey, color: HighlightColor) -> Option<HighlightColor> {
        let k = key.to_string();
        if self.0.get(&k) == Some(&color) {
            self.0.remove(&k);
            None
        } else {
            self.0.insert(k, color);
            Some(color)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

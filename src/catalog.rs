//! The fixed book catalogue and per-book chapter counts.

pub const BIBLE_BOOKS: [&str; 66] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles", "Ezra",
    "Nehemiah", "Esther", "Job", "Psalms", "Proverbs",
    "Ecclesiastes", "Song of Solomon", "Isaiah", "Jeremiah", "Lamentations",
    "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk",
    "Zephaniah", "Haggai", "Zechariah", "Malachi", "Matthew",
    "Mark", "Luke", "John", "Acts", "Romans",
    "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians", "Philippians",
    "Colossians", "1 Thessalonians", "2 Thessalonians", "1 Timothy", "2 Timothy",
    "Titus", "Philemon", "Hebrews", "James", "1 Peter",
    "2 Peter", "1 John", "2 John", "3 John", "Jude", "Revelation",
];

pub const BOOKS_PER_ROW: usize = 8;
pub const DEFAULT_CHAPTER_COUNT: u32 = 25;

const CHAPTER_COUNT_OVERRIDES: [(&str, u32); 5] = [
    ("Genesis", 50),
    ("Exodus", 40),
    ("Psalms", 150),
    ("Matthew", 28),
    ("John", 21),
];

pub fn book_index(book: &str) -> Option<usize> {
    BIBLE_BOOKS.iter().position(|b| *b == book)
}

pub fn chapter_count(book: &str) -> u32 {
    CHAPTER_COUNT_OVERRIDES
        .iter()
        .find(|(name, _)| *name == book)
        .map(|(_, count)| *count)
        .unwrap_or(DEFAULT_CHAPTER_COUNT)
}

/// Positional lock: a book is locked when it sits after the current book.
/// An unknown current book counts as the first one.
pub fn is_book_locked(book: &str, current_book: &str) -> bool {
    let current = book_index(current_book).unwrap_or(0);
    match book_index(book) {
        Some(idx) => idx > current,
        None => false,
    }
}

/// Catalogue split into rows of `BOOKS_PER_ROW`, in catalogue order.
pub fn book_rows() -> Vec<&'static [&'static str]> {
    BIBLE_BOOKS.chunks(BOOKS_PER_ROW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(BIBLE_BOOKS.len(), 66);
        assert_eq!(book_index("Genesis"), Some(0));
        assert_eq!(book_index("Revelation"), Some(65));
        assert_eq!(book_index("Hezekiah"), None);

        let rows = book_rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[8], &["Jude", "Revelation"][..]);
    }

    #[test]
    fn test_chapter_counts() {
        assert_eq!(chapter_count("Psalms"), 150);
        assert_eq!(chapter_count("John"), 21);
        assert_eq!(chapter_count("Ruth"), DEFAULT_CHAPTER_COUNT);
    }

    #[test]
    fn test_locking_is_positional() {
        for (idx, book) in BIBLE_BOOKS.iter().enumerate() {
            assert_eq!(is_book_locked(book, "Ruth"), idx > 7, "{}", book);
        }
        assert!(is_book_locked("Exodus", "Genesis"));
        assert!(!is_book_locked("Genesis", "Genesis"));
        assert!(!is_book_locked("Genesis", "Nowhere"));
    }
}

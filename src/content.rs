//! Hard-coded sample content: verses, quiz templates and chat replies.

const SAMPLE_VERSES: &[(&str, u32, u32, &str)] = &[
    ("Genesis", 1, 1, "In the beginning God created the heavens and the earth."),
    ("Genesis", 1, 2, "Now the earth was formless and empty, darkness was over the surface of the deep, and the Spirit of God was hovering over the waters."),
    ("Genesis", 1, 3, "And God said, 'Let there be light,' and there was light."),
    ("Genesis", 1, 4, "God saw that the light was good, and he separated the light from the darkness."),
    ("Genesis", 1, 5, "God called the light 'day,' and the darkness he called 'night.' And there was evening, and there was morning\u{2014}the first day."),
    ("John", 3, 16, "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life."),
    ("John", 3, 17, "For God did not send his Son into the world to condemn the world, but to save the world through him."),
    ("Psalms", 23, 1, "The Lord is my shepherd, I lack nothing."),
    ("Psalms", 23, 2, "He makes me lie down in green pastures, he leads me beside quiet waters,"),
    ("Psalms", 23, 3, "he refreshes my soul. He guides me along the right paths for his name's sake."),
    ("Psalms", 23, 4, "Even though I walk through the darkest valley, I will fear no evil, for you are with me; your rod and your staff, they comfort me."),
];

pub fn sample_verse(book: &str, chapter: u32, verse: u32) -> Option<&'static str> {
    SAMPLE_VERSES
        .iter()
        .find(|(b, c, v, _)| *b == book && *c == chapter && *v == verse)
        .map(|(_, _, _, text)| *text)
}

/// Verse text, or the demonstration placeholder when the verse is unknown.
pub fn verse_text(book: &str, chapter: u32, verse: u32) -> String {
    match sample_verse(book, chapter, verse) {
        Some(text) => text.to_string(),
        None => format!(
            "This is verse {} of {} chapter {}. (Sample text for demonstration)",
            verse, book, chapter
        ),
    }
}

pub const CHAT_REPLIES: [&str; 5] = [
    "This verse speaks about God's love and faithfulness. Consider how it applies to your life today.",
    "The historical context of this passage shows us God's plan unfolding through history.",
    "This verse connects to many other scriptures. Would you like to explore cross-references?",
    "The original Hebrew/Greek word here has deeper meaning. It emphasizes God's character.",
    "This teaching from Jesus shows us how to live according to God's will.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

pub const QUESTIONS_PER_QUIZ: usize = 5;

struct QuestionTemplate {
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

// `{book}`, `{start}` and `{end}` are substituted per chapter group.
const QUESTION_TEMPLATES: [QuestionTemplate; QUESTIONS_PER_QUIZ] = [
    QuestionTemplate {
        text: "What important themes appear in {book} chapters {start}-{end}?",
        options: [
            "God's creation and sovereignty",
            "Human wisdom and knowledge",
            "Political power and warfare",
            "Economic prosperity",
        ],
        correct: 0,
        explanation: "These chapters focus on God's fundamental nature and His relationship with creation.",
    },
    QuestionTemplate {
        text: "In {book}, what lesson can we learn from the events in these chapters?",
        options: [
            "Trust in human strength",
            "Faith and obedience to God",
            "Worldly success matters most",
            "Isolation from others",
        ],
        correct: 1,
        explanation: "The Bible consistently teaches the importance of faith and obedience to God's will.",
    },
    QuestionTemplate {
        text: "How do these chapters in {book} apply to modern life?",
        options: [
            "They are only historical accounts",
            "They provide timeless spiritual principles",
            "They are irrelevant today",
            "They only apply to ancient cultures",
        ],
        correct: 1,
        explanation: "Biblical principles are timeless and applicable to all generations.",
    },
    QuestionTemplate {
        text: "What character quality is emphasized in {book} chapters {start}-{end}?",
        options: [
            "Pride and self-reliance",
            "Humility and dependence on God",
            "Anger and revenge",
            "Materialism and greed",
        ],
        correct: 1,
        explanation: "The Bible consistently emphasizes humility and our need to depend on God.",
    },
    QuestionTemplate {
        text: "What is the main message of these chapters in {book}?",
        options: [
            "Human achievement is most important",
            "God is faithful and loving",
            "Life has no meaning",
            "Only the strong survive",
        ],
        correct: 1,
        explanation: "Throughout Scripture, God's faithfulness and love for humanity is the central message.",
    },
];

/// The five questions for the chapter group ending at `chapter_group`.
/// The range start is not clamped, so a group below 5 yields a start <= 0.
pub fn quiz_questions(book: &str, chapter_group: i64) -> Vec<QuizQuestion> {
    let start = (chapter_group - 4).to_string();
    let end = chapter_group.to_string();
    QUESTION_TEMPLATES
        .iter()
        .map(|t| QuizQuestion {
            question: t
                .text
                .replace("{book}", book)
                .replace("{start}", &start)
                .replace("{end}", &end),
            options: t.options,
            correct: t.correct,
            explanation: t.explanation,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_placeholder_verses() {
        assert_eq!(verse_text("Psalms", 23, 1), "The Lord is my shepherd, I lack nothing.");
        assert_eq!(
            verse_text("Genesis", 1, 6),
            "This is verse 6 of Genesis chapter 1. (Sample text for demonstration)"
        );
        assert!(sample_verse("John", 3, 16).is_some());
        assert!(sample_verse("John", 16, 3).is_none());
    }

    #[test]
    fn test_quiz_interpolation() {
        let qs = quiz_questions("Exodus", 10);
        assert_eq!(qs.len(), QUESTIONS_PER_QUIZ);
        assert_eq!(qs[0].question, "What important themes appear in Exodus chapters 6-10?");
        assert_eq!(qs[3].question, "What character quality is emphasized in Exodus chapters 6-10?");
        let correct: Vec<usize> = qs.iter().map(|q| q.correct).collect();
        assert_eq!(correct, vec![0, 1, 1, 1, 1]);
    }
}

use regex::Regex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Book { book: String },
    Study { book: String, chapter: u32, verse: u32 },
    Quiz { book: String, chapter_group: u32 },
    Profile,
}

pub const ROUTE_PATTERNS: [&str; 5] = [
    "/",
    "/book/:bookName",
    "/study/:bookName/:chapter/:verse",
    "/quiz/:bookName/:chapterGroup",
    "/profile",
];

struct Patterns {
    book: Regex,
    study: Regex,
    quiz: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        book: Regex::new(r"^/book/([^/]+)/?$").expect("static pattern"),
        study: Regex::new(r"^/study/([^/]+)/(\d+)/(\d+)/?$").expect("static pattern"),
        quiz: Regex::new(r"^/quiz/([^/]+)/(\d+)/?$").expect("static pattern"),
    })
}

fn decode_segment(segment: &str) -> String {
    segment.replace("%20", " ")
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let p = patterns();
        match path {
            "/" | "" => return Some(Route::Home),
            "/profile" | "/profile/" => return Some(Route::Profile),
            _ => {}
        }
        if let Some(caps) = p.study.captures(path) {
            return Some(Route::Study {
                book: decode_segment(&caps[1]),
                chapter: caps[2].parse().ok()?,
                verse: caps[3].parse().ok()?,
            });
        }
        if let Some(caps) = p.quiz.captures(path) {
            return Some(Route::Quiz {
                book: decode_segment(&caps[1]),
                chapter_group: caps[2].parse().ok()?,
            });
        }
        if let Some(caps) = p.book.captures(path) {
            return Some(Route::Book {
                book: decode_segment(&caps[1]),
            });
        }
        None
    }

    /// Parses a path, falling back to Home for anything unrecognised.
    pub fn parse_or_home(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|| {
            tracing::warn!(path, "unknown route, showing home");
            Route::Home
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Book { book } => write!(f, "/book/{}", book),
            Route::Study { book, chapter, verse } => write!(f, "/study/{}/{}/{}", book, chapter, verse),
            Route::Quiz { book, chapter_group } => write!(f, "/quiz/{}/{}", book, chapter_group),
            Route::Profile => write!(f, "/profile"),
        }
    }
}

/// Oldest entries are dropped once the back stack holds this many routes.
pub const HISTORY_LIMIT: usize = 64;

impl Route {
    /// Both routes are verses of the same chapter.
    pub fn same_chapter(&self, other: &Route) -> bool {
        match (self, other) {
            (
                Route::Study { book: a, chapter: ca, .. },
                Route::Study { book: b, chapter: cb, .. },
            ) => a == b && ca == cb,
            _ => false,
        }
    }
}

/// Current route plus the ones navigated away from.
#[derive(Debug, Clone)]
pub struct History {
    current: Route,
    back: VecDeque<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        History {
            current: start,
            back: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Stepping between verses of one chapter replaces the current entry,
    /// so Back leaves the chapter instead of walking every verse.
    pub fn navigate(&mut self, to: Route) {
        tracing::info!(from = %self.current, to = %to, "navigate");
        let same_chapter = self.current.same_chapter(&to);
        let prev = std::mem::replace(&mut self.current, to);
        if same_chapter {
            return;
        }
        if self.back.len() == HISTORY_LIMIT {
            self.back.pop_front();
        }
        self.back.push_back(prev);
    }

    pub fn depth(&self) -> usize {
        self.back.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn go_back(&mut self) -> bool {
        match self.back.pop_back() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/profile"), Some(Route::Profile));
        assert_eq!(
            Route::parse("/book/1 Samuel"),
            Some(Route::Book { book: "1 Samuel".into() })
        );
        assert_eq!(
            Route::parse("/book/Song%20of%20Solomon"),
            Some(Route::Book { book: "Song of Solomon".into() })
        );
        assert_eq!(
            Route::parse("/study/John/3/16"),
            Some(Route::Study { book: "John".into(), chapter: 3, verse: 16 })
        );
        assert_eq!(
            Route::parse("/quiz/Genesis/10"),
            Some(Route::Quiz { book: "Genesis".into(), chapter_group: 10 })
        );
    }

    #[test]
    fn test_reject_malformed() {
        assert_eq!(Route::parse("/study/John/three/16"), None);
        assert_eq!(Route::parse("/quiz/Genesis"), None);
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse_or_home("/settings"), Route::Home);
    }

    #[test]
    fn test_display_round_trips_book_names() {
        let r = Route::Study { book: "2 Kings".into(), chapter: 2, verse: 11 };
        assert_eq!(r.to_string(), "/study/2 Kings/2/11");
        assert_eq!(Route::parse(&r.to_string()), Some(r));
    }

    #[test]
    fn test_history() {
        let mut h = History::new(Route::Home);
        assert!(!h.go_back());
        h.navigate(Route::Profile);
        assert!(h.can_go_back());
        assert!(h.go_back());
        assert_eq!(h.current(), &Route::Home);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut h = History::new(Route::Home);
        for i in 0..500 {
            let book = if i % 2 == 0 { "Genesis" } else { "Exodus" };
            h.navigate(Route::Book { book: book.into() });
        }
        assert_eq!(h.depth(), HISTORY_LIMIT);
        while h.go_back() {}
        assert_ne!(h.current(), &Route::Home);
    }

    #[test]
    fn test_verse_steps_do_not_stack() {
        let mut h = History::new(Route::Book { book: "Genesis".into() });
        for verse in 1..=30 {
            h.navigate(Route::Study { book: "Genesis".into(), chapter: 1, verse });
        }
        assert_eq!(h.depth(), 1);
        assert_eq!(h.current(), &Route::Study { book: "Genesis".into(), chapter: 1, verse: 30 });

        h.navigate(Route::Study { book: "Genesis".into(), chapter: 2, verse: 1 });
        assert_eq!(h.depth(), 2);
        assert!(h.go_back());
        assert_eq!(h.current(), &Route::Study { book: "Genesis".into(), chapter: 1, verse: 30 });
        assert!(h.go_back());
        assert_eq!(h.current(), &Route::Book { book: "Genesis".into() });
    }
}

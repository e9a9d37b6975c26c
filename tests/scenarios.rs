use sheeplingo::annotations::{HighlightColor, VerseKey};
use sheeplingo::catalog::{self, BIBLE_BOOKS};
use sheeplingo::progress::UserProgress;
use sheeplingo::quiz::{QuizPhase, QuizSession};
use sheeplingo::storage::{AppState, KeyValueStore, MemoryStore, HIGHLIGHTS_KEY, NOTES_KEY, PROGRESS_KEY};
use sheeplingo::views::home::{book_state, BookState};

#[test]
fn fresh_state_then_first_verse() {
    let mut state = AppState::in_memory();
    assert_eq!(state.progress().total_xp, 0);
    assert_eq!(state.progress().streak, 0);

    state.update_progress(|p| p.mark_verse_completed("Genesis", 1, 1));

    assert_eq!(state.progress().total_xp, 10);
    assert_eq!(state.progress().completed_verses["Genesis"][&1][&1], true);
}

#[test]
fn exodus_unlocks_only_when_current_book_advances() {
    let mut progress = UserProgress::default();
    assert_eq!(progress.current_book, "Genesis");
    assert_eq!(book_state("Exodus", &progress), BookState::Locked);

    progress.current_book = "Exodus".into();
    assert_eq!(book_state("Exodus", &progress), BookState::Current);
}

#[test]
fn locked_iff_after_current_book() {
    for current in BIBLE_BOOKS {
        let ci = catalog::book_index(current).unwrap();
        for book in BIBLE_BOOKS {
            let bi = catalog::book_index(book).unwrap();
            assert_eq!(catalog::is_book_locked(book, current), bi > ci);
        }
    }
}

#[test]
fn notes_and_highlights_survive_reload() {
    let mut state = AppState::in_memory();
    let key = VerseKey::new("Psalms", 23, 1);
    state.update_notes(|n| n.save(&key, "The Lord is my shepherd"));
    state.update_highlights(|h| h.toggle(&key, HighlightColor::Green));
    state.update_progress(|p| p.mark_verse_completed("Psalms", 23, 1));

    let mut copy = MemoryStore::default();
    for k in [PROGRESS_KEY, NOTES_KEY, HIGHLIGHTS_KEY] {
        let raw = state.store().get(k).unwrap().unwrap();
        copy.set(k, &raw).unwrap();
    }

    let reloaded = AppState::load(Box::new(copy));
    assert_eq!(reloaded.notes().get(&key), Some("The Lord is my shepherd"));
    assert_eq!(reloaded.highlights().get(&key), Some(HighlightColor::Green));
    assert!(reloaded.progress().is_verse_completed("Psalms", 23, 1));
}

#[test]
fn perfect_quiz_awards_fifty_once() {
    let mut state = AppState::in_memory();
    let mut quiz = QuizSession::new("Genesis", 10);
    while quiz.phase() != QuizPhase::Completed {
        let correct = quiz.current_question().correct;
        quiz.select(correct);
        quiz.submit();
        quiz.advance();
    }
    assert_eq!(quiz.score(), 5);

    assert_eq!(state.update_progress(|p| quiz.finalize(p)), Some(true));
    assert_eq!(state.update_progress(|p| quiz.finalize(p)), None);
    assert_eq!(state.progress().total_xp, 50);
    assert_eq!(state.progress().completed_quizzes.get("Genesis-10"), Some(&true));
}

//! Playing the quiz through to the score screen.

use orrery::quiz::{FEEDBACK_SECS, QUESTIONS, QuizPhase, QuizSession, final_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Answer every question with the option `pick` chooses, returning the session.
fn play(pick: impl Fn(&QuizSession) -> usize) -> QuizSession {
    let mut rng = StdRng::seed_from_u64(21);
    let mut session = QuizSession::new(&QUESTIONS, &mut rng);
    let mut now = 0.0;
    while !session.is_finished() {
        let index = pick(&session);
        session.answer(index, now).unwrap();
        now += FEEDBACK_SECS;
        assert!(session.tick(now, &mut rng));
    }
    session
}

fn correct_index(session: &QuizSession) -> usize {
    (0..4).find(|&i| session.is_correct(i)).unwrap()
}

#[test]
fn test_all_correct_is_perfect() {
    let session = play(correct_index);
    assert_eq!(session.score(), 5);
    assert_eq!(
        final_message(session.score(), session.total()),
        "Excellent! your are perfect"
    );
}

#[test]
fn test_all_wrong_is_game_over() {
    let session = play(|s| (correct_index(s) + 1) % 4);
    assert_eq!(session.score(), 0);
    assert_eq!(
        final_message(session.score(), session.total()),
        "Game Over! Your score: 0/5"
    );
}

#[test]
fn test_questions_keep_their_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = QuizSession::new(&QUESTIONS, &mut rng);
    for (i, expected) in QUESTIONS.iter().enumerate() {
        assert_eq!(session.question(), Some(expected));
        assert_eq!(session.progress(), (i + 1) as f32 / 5.0);
        session.answer(0, i as f64 * 2.0).unwrap();
        assert!(matches!(session.phase(), QuizPhase::Revealing { selected: 0, .. }));
        assert!(session.tick(i as f64 * 2.0 + 1.5, &mut rng));
    }
    assert!(session.is_finished());
    assert_eq!(session.question(), None);
}

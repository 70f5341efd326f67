//! Five-question multiple-choice quiz about the planets.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Seconds the answer feedback stays up before the next question.
pub const FEEDBACK_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub category: &'static str,
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        category: "1",
        text: "What is the largest planet in our solar system?",
        options: ["Mercury", "Mars", "Jupiter", "Saturn"],
        answer: "Jupiter",
    },
    Question {
        category: "2",
        text: "Which planet is known as the Red Planet?",
        options: ["Venus", "Mars", "Neptune", "Jupiter"],
        answer: "Mars",
    },
    Question {
        category: "3",
        text: "What is the coldest planet in our solar system?",
        options: ["Mars", "Neptune", "Uranus", "Mercury"],
        answer: "Uranus",
    },
    Question {
        category: "4",
        text: "What is the brightest planet in our solar system?",
        options: ["Saturn", "Mercury", "Venus", "Earth"],
        answer: "Venus",
    },
    Question {
        category: "5",
        text: "Which planet is the closest to the sun?",
        options: ["Uranus", "Earth", "Neptune", "Mercury"],
        answer: "Mercury",
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {0} does not exist")]
    NoSuchOption(usize),
    #[error("not accepting answers right now")]
    NotAccepting,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizPhase {
    Answering,
    /// Feedback for the chosen option is on screen.
    Revealing { selected: usize, answered_at: f64 },
    Finished,
}

/// Progress through one play of the quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    options: [&'static str; 4],
    phase: QuizPhase,
}

impl QuizSession {
    /// Start at the first question with its options shuffled.
    pub fn new<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> Self {
        let mut session = Self {
            questions: questions.to_vec(),
            current: 0,
            score: 0,
            options: [""; 4],
            phase: QuizPhase::Finished,
        };
        session.load_question(rng);
        session
    }

    fn load_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.questions.get(self.current) {
            Some(question) => {
                self.options = question.options;
                self.options.shuffle(rng);
                self.phase = QuizPhase::Answering;
            }
            None => self.phase = QuizPhase::Finished,
        }
    }

    pub fn question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    /// Options of the current question in display order.
    pub fn options(&self) -> &[&'static str; 4] {
        &self.options
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Fill fraction of the progress bar: `(index + 1) / total`.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        ((self.current + 1).min(self.questions.len())) as f32 / self.questions.len() as f32
    }

    /// Whether option `index` is the right answer to the current question.
    pub fn is_correct(&self, index: usize) -> bool {
        match (self.question(), self.options.get(index)) {
            (Some(question), Some(option)) => *option == question.answer,
            _ => false,
        }
    }

    /// Choose option `index` at time `now`, returning whether it was right.
    pub fn answer(&mut self, index: usize, now: f64) -> Result<bool, QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::NotAccepting);
        }
        if index >= self.options.len() {
            return Err(QuizError::NoSuchOption(index));
        }
        let correct = self.is_correct(index);
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealing {
            selected: index,
            answered_at: now,
        };
        Ok(correct)
    }

    /// Move on once the feedback delay has passed. Returns true on advance.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        let QuizPhase::Revealing { answered_at, .. } = self.phase else {
            return false;
        };
        if now - answered_at < FEEDBACK_SECS {
            return false;
        }
        self.current += 1;
        self.load_question(rng);
        true
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }
}

/// Closing message for a final score.
pub fn final_message(score: u32, total: usize) -> String {
    if score == 5 {
        "Excellent! your are perfect".to_string()
    } else if score > 3 {
        format!("Be focus, your score {}", score)
    } else if score == 0 {
        format!("Game Over! Your score: {}/{}", score, total)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_options_are_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = QuizSession::new(&QUESTIONS, &mut rng);
        let mut shown = session.options().to_vec();
        let mut expected = QUESTIONS[0].options.to_vec();
        shown.sort();
        expected.sort();
        assert_eq!(shown, expected);
    }

    #[test]
    fn test_second_answer_is_rejected_during_feedback() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new(&QUESTIONS, &mut rng);
        session.answer(0, 0.0).unwrap();
        assert_eq!(session.answer(1, 0.1), Err(QuizError::NotAccepting));
    }

    #[test]
    fn test_feedback_delay() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new(&QUESTIONS, &mut rng);
        session.answer(2, 10.0).unwrap();
        assert!(!session.tick(10.5, &mut rng));
        assert!(session.tick(11.0, &mut rng));
        assert_eq!(session.question(), Some(&QUESTIONS[1]));
        assert_eq!(session.progress(), 0.4);
    }

    #[test]
    fn test_out_of_range_option() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new(&QUESTIONS, &mut rng);
        assert_eq!(session.answer(4, 0.0), Err(QuizError::NoSuchOption(4)));
    }

    #[test]
    fn test_message_thresholds() {
        assert_eq!(final_message(5, 5), "Excellent! your are perfect");
        assert_eq!(final_message(4, 5), "Be focus, your score 4");
        assert_eq!(final_message(0, 5), "Game Over! Your score: 0/5");
        assert_eq!(final_message(2, 5), "");
        assert_eq!(final_message(3, 5), "");
    }
}

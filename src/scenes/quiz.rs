//! Quiz scene: hosts a [`QuizSession`] and moves it along after each answer.

use bevy::prelude::*;

use super::menu::spawn_overlay_camera;
use crate::quiz::{QUESTIONS, QuizSession, final_message};
use crate::types::{AppScene, despawn_scene_entities};

const SCENE: AppScene = AppScene::Quiz;

/// The quiz being played in the current visit to the scene.
#[derive(Resource, Debug, Clone)]
pub struct ActiveQuiz(pub QuizSession);

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SCENE), (spawn_overlay_camera(SCENE), start_quiz))
            .add_systems(OnExit(SCENE), (despawn_scene_entities(SCENE), end_quiz))
            .add_systems(
                Update,
                advance_quiz.run_if(in_state(SCENE).and(resource_exists::<ActiveQuiz>)),
            );
    }
}

fn start_quiz(mut commands: Commands) {
    let session = QuizSession::new(&QUESTIONS, &mut rand::thread_rng());
    info!("Quiz started with {} questions", session.total());
    commands.insert_resource(ActiveQuiz(session));
}

fn end_quiz(mut commands: Commands) {
    commands.remove_resource::<ActiveQuiz>();
}

/// Load the next question once the answer feedback has been up long enough.
fn advance_quiz(time: Res<Time<Real>>, mut quiz: ResMut<ActiveQuiz>) {
    let session = &mut quiz.0;
    if !session.tick(time.elapsed_secs_f64(), &mut rand::thread_rng()) {
        return;
    }
    if session.is_finished() {
        info!(
            "Quiz finished: {}/{} ({:?})",
            session.score(),
            session.total(),
            final_message(session.score(), session.total())
        );
    }
}

//! Quiz card: question, shuffled options, feedback and the score modal.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::quiz::{QuizPhase, final_message};
use crate::scenes::quiz::ActiveQuiz;
use crate::types::AppScene;

pub fn quiz_panel_system(
    mut contexts: EguiContexts,
    time: Res<Time<Real>>,
    mut quiz: ResMut<ActiveQuiz>,
    mut next_scene: ResMut<NextState<AppScene>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let session = &mut quiz.0;

    if session.is_finished() {
        egui::Window::new("quiz_score")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(card_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(icons::icon_colored(icons::TROPHY, 36.0, colors::ACCENT));
                    ui.label(
                        egui::RichText::new(format!(
                            "Score: {}/{}",
                            session.score(),
                            session.total()
                        ))
                        .strong()
                        .size(22.0)
                        .color(colors::TEXT),
                    );
                    let message = final_message(session.score(), session.total());
                    if !message.is_empty() {
                        ui.label(egui::RichText::new(message).size(16.0));
                    }
                    ui.add_space(12.0);
                    if ui
                        .add(egui::Button::new("Back to menu").min_size(egui::vec2(140.0, 32.0)))
                        .clicked()
                    {
                        next_scene.set(AppScene::Menu);
                    }
                });
            });
        return;
    }

    let Some(question) = session.question().copied() else {
        return;
    };
    let revealed = match session.phase() {
        QuizPhase::Revealing { selected, .. } => Some(selected),
        _ => None,
    };
    let mut chosen = None;

    egui::Window::new("quiz_card")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(card_frame())
        .show(ctx, |ui| {
            ui.set_width(420.0);
            ui.add(egui::ProgressBar::new(session.progress()).desired_width(420.0));
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Question {}", question.category))
                    .size(12.0)
                    .color(colors::MUTED),
            );
            ui.label(egui::RichText::new(question.text).strong().size(18.0).color(colors::TEXT));
            ui.add_space(12.0);

            for (index, option) in session.options().iter().enumerate() {
                let mut text = egui::RichText::new(*option).size(15.0);
                if let Some(selected) = revealed {
                    if session.is_correct(index) {
                        text = egui::RichText::new(format!("{}  {}", icons::CORRECT, option))
                            .size(15.0)
                            .color(colors::SUCCESS)
                            .strong();
                    } else if index == selected {
                        text = egui::RichText::new(format!("{}  {}", icons::WRONG, option))
                            .size(15.0)
                            .color(colors::DANGER);
                    }
                }
                let button = egui::Button::new(text).min_size(egui::vec2(420.0, 36.0));
                if ui.add_enabled(revealed.is_none(), button).clicked() {
                    chosen = Some(index);
                }
            }
        });

    if let Some(index) = chosen {
        match session.answer(index, time.elapsed_secs_f64()) {
            Ok(correct) => debug!("Answered {}: {}", index, if correct { "right" } else { "wrong" }),
            Err(err) => warn!("Quiz answer rejected: {}", err),
        }
    }
}

fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(colors::PANEL_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(24))
}

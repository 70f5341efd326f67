//! The narrow interface through which scene logic reaches the UI.

use bevy::prelude::*;

/// Callbacks the camera director issues toward the UI layer.
pub trait UiPort {
    /// A focus flight landed on `body`; show its info card.
    fn on_focus_complete(&mut self, body: &str);
    fn hide_info_panel(&mut self);
    /// Mark the menu button for `body` as active, or clear the mark.
    fn highlight_body(&mut self, body: Option<&str>);
}

/// What the info card and planet menu currently display.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Body whose info card is open.
    pub info_body: Option<String>,
    /// Body whose menu button is highlighted.
    pub highlighted: Option<String>,
}

impl UiPort for PanelState {
    fn on_focus_complete(&mut self, body: &str) {
        self.info_body = Some(body.to_string());
    }

    fn hide_info_panel(&mut self) {
        self.info_body = None;
    }

    fn highlight_body(&mut self, body: Option<&str>) {
        self.highlighted = body.map(str::to_string);
    }
}

/// A single call made through [`UiPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FocusComplete(String),
    HideInfo,
    Highlight(Option<String>),
}

/// Port that records every call, for inspecting director behavior.
#[derive(Default, Debug)]
pub struct RecordingPort {
    pub events: Vec<UiEvent>,
}

impl RecordingPort {
    /// Bodies reported through `on_focus_complete`, in order.
    pub fn focused(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::FocusComplete(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl UiPort for RecordingPort {
    fn on_focus_complete(&mut self, body: &str) {
        self.events.push(UiEvent::FocusComplete(body.to_string()));
    }

    fn hide_info_panel(&mut self) {
        self.events.push(UiEvent::HideInfo);
    }

    fn highlight_body(&mut self, body: Option<&str>) {
        self.events.push(UiEvent::Highlight(body.map(str::to_string)));
    }
}

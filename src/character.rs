//! The animated guide character shown in the learning scenes.

use bevy::prelude::*;

use crate::types::{AppScene, SceneEntity};

/// Root of a guide character scene.
#[derive(Component)]
pub struct GuideCharacter;

/// Animation graph of the active scene's character, one node per clip.
#[derive(Resource, Clone, Debug)]
pub struct CharacterAnimations {
    pub graph: Handle<AnimationGraph>,
    pub nodes: Vec<AnimationNodeIndex>,
}

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            start_character_animation.run_if(resource_exists::<CharacterAnimations>),
        );
    }
}

/// Spawn the character from `path` and register its first `clips` animations.
pub fn spawn_character(
    commands: &mut Commands,
    asset_server: &AssetServer,
    graphs: &mut Assets<AnimationGraph>,
    path: &'static str,
    clips: usize,
    transform: Transform,
    scene: AppScene,
) {
    let (graph, nodes) = AnimationGraph::from_clips(
        (0..clips).map(|i| asset_server.load(GltfAssetLabel::Animation(i).from_asset(path))),
    );
    commands.insert_resource(CharacterAnimations {
        graph: graphs.add(graph),
        nodes,
    });
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(path))),
        transform,
        GuideCharacter,
        SceneEntity(scene),
    ));
}

/// Loop the first clip on every animation player inside a character.
fn start_character_animation(
    mut commands: Commands,
    animations: Res<CharacterAnimations>,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
    parents: Query<&ChildOf>,
    characters: Query<(), With<GuideCharacter>>,
) {
    let Some(&first) = animations.nodes.first() else {
        return;
    };
    for (entity, mut player) in players.iter_mut() {
        if !belongs_to_character(entity, &parents, &characters) {
            continue;
        }
        player.play(first).repeat();
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(animations.graph.clone()));
        debug!("Character animation started on {:?}", entity);
    }
}

fn belongs_to_character(
    entity: Entity,
    parents: &Query<&ChildOf>,
    characters: &Query<(), With<GuideCharacter>>,
) -> bool {
    let mut current = entity;
    loop {
        if characters.contains(current) {
            return true;
        }
        match parents.get(current) {
            Ok(child_of) => current = child_of.parent(),
            Err(_) => return false,
        }
    }
}

/// Replace whatever the character plays with a single run of clip `index`.
///
/// Only players that were handed the character graph are affected.
pub fn play_clip_once(
    animations: &CharacterAnimations,
    players: &mut Query<&mut AnimationPlayer, With<AnimationGraphHandle>>,
    index: usize,
) {
    let Some(&node) = animations.nodes.get(index) else {
        warn!("Character has no animation {}", index);
        return;
    };
    for mut player in players.iter_mut() {
        player.stop_all();
        player.play(node);
    }
}

/// One-shot timer for swapping the character's animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSwitch {
    pub after_secs: f64,
    fired: bool,
}

impl AnimationSwitch {
    pub fn new(after_secs: f64) -> Self {
        Self {
            after_secs,
            fired: false,
        }
    }

    /// True exactly once, on the first call at or past the deadline.
    pub fn poll(&mut self, elapsed_secs: f64) -> bool {
        if self.fired || elapsed_secs < self.after_secs {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_fires_once() {
        let mut switch = AnimationSwitch::new(30.0);
        assert!(!switch.poll(29.9));
        assert!(switch.poll(30.0));
        assert!(!switch.poll(31.0));
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::animation::{BOB_DURATION, HEAD_SEEK_EPSILON};

/// Complete scene configuration as a Bevy asset. Mirrors the JSON structure
/// exactly; loaded once at startup and inserted as a resource.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneConfig {
    pub planet: PlanetConfig,
    pub neuron: NeuronConfig,
}

/// Glowing interactive planet parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub radius: f32,
    pub colour: [f32; 3],
    pub position: [f32; 3],
    #[serde(default = "default_bob_duration")]
    pub bob_duration: f32,
}

/// Neuron placement and chain geometry parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronConfig {
    pub position: [f32; 3],
    pub rotation_deg: f32,
    pub segments: usize,
    pub tube_length: f32,
    pub tube_radius: f32,
    pub radial_segments: usize,
    pub sheath_count: usize,
    pub terminal_count: usize,
    pub terminal_segments: usize,
    pub terminal_length: f32,
    pub terminal_radius: f32,
    pub terminal_spread: f32,
    pub move_speed: f32,
    #[serde(default = "default_seek_epsilon")]
    pub seek_epsilon: f32,
}

fn default_bob_duration() -> f32 {
    BOB_DURATION
}

fn default_seek_epsilon() -> f32 {
    HEAD_SEEK_EPSILON
}

impl PlanetConfig {
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn colour_value(&self) -> Color {
        Color::srgb(self.colour[0], self.colour[1], self.colour[2])
    }
}

impl NeuronConfig {
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_scene_json_deserialises() {
        let raw = include_str!("../../../assets/scene.json");
        let config: SceneConfig = serde_json::from_str(raw).expect("assets/scene.json is invalid");

        assert!(config.neuron.segments >= 2);
        assert!(config.neuron.terminal_count > 0);
        assert!(config.planet.radius > 0.0);
    }

    #[test]
    fn omitted_tunables_fall_back_to_the_shared_constants() {
        let raw = r#"{
            "planet": {
                "radius": 3.0,
                "colour": [1.0, 0.0, 1.0],
                "position": [50.0, 5.0, -10.0]
            },
            "neuron": {
                "position": [-10.0, 0.0, -3.0],
                "rotation_deg": 167.0,
                "segments": 50,
                "tube_length": 10.0,
                "tube_radius": 0.05,
                "radial_segments": 8,
                "sheath_count": 10,
                "terminal_count": 5,
                "terminal_segments": 20,
                "terminal_length": 3.0,
                "terminal_radius": 0.1,
                "terminal_spread": 2.7,
                "move_speed": 0.1
            }
        }"#;
        let config: SceneConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.planet.bob_duration, BOB_DURATION);
        assert_eq!(config.neuron.seek_epsilon, HEAD_SEEK_EPSILON);
    }

    #[test]
    fn config_survives_a_serialise_round_trip() {
        let raw = include_str!("../../../assets/scene.json");
        let config: SceneConfig = serde_json::from_str(raw).unwrap();
        let reserialised = serde_json::to_string(&config).unwrap();
        let reparsed: SceneConfig = serde_json::from_str(&reserialised).unwrap();
        assert_eq!(reparsed.neuron.segments, config.neuron.segments);
        assert_eq!(reparsed.planet.position, config.planet.position);
    }
}

/// Scene configuration asset loaded from JSON.
pub mod scene_config;

pub use scene_config::SceneConfig;

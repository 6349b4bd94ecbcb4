use bevy::prelude::*;

use crate::engine::assets::SceneConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    config_loader.handle = Some(asset_server.load("scene.json"));
}

// Promote the parsed config to a resource and enter the running state
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<SceneConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.config_loaded {
        return;
    }

    if let Some(ref handle) = config_loader.handle {
        if let Some(config) = configs.get(handle) {
            println!("✓ Scene configuration loaded");
            commands.insert_resource(config.clone());
            loading_progress.config_loaded = true;
            next_state.set(AppState::Running);
        }
    }
}

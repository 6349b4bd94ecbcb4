use bevy::prelude::*;
use bevy::window::PresentMode;

/// Primary window settings for the current platform. On the web the canvas
/// is owned by the hosting page; natively we open a fixed-size window.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "Neuron Scene".into(),
            canvas: Some("#render-canvas".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Neuron Scene".into(),
            resolution: (1600.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

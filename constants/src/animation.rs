/// Scales wall-clock seconds into the animation clock the wave and seek
/// systems run on. Tuned so the scene moves at the intended pace at any
/// frame rate.
pub const ANIMATION_TIME_SCALE: f32 = 1.2;

/// Body wave: a gentle travelling ripple along the whole tube.
pub const BODY_WAVE_AMPLITUDE: f32 = 0.03;
pub const BODY_WAVE_FREQUENCY: f32 = 6.0;
pub const BODY_WAVE_PHASE_SPEED: f32 = -3.0;

/// Terminal waves run on a slowed-down copy of the animation clock.
pub const TERMINAL_TIME_FACTOR: f32 = 0.5;

/// Per-terminal parameter ranges; each terminal draws its own values once
/// at creation and keeps them for its lifetime.
pub const TERMINAL_SPEED_BASE: f32 = 2.0;
pub const TERMINAL_SPEED_RANGE: f32 = 1.0;
pub const TERMINAL_AMPLITUDE_BASE: f32 = 0.5;
pub const TERMINAL_AMPLITUDE_RANGE: f32 = 0.3;
pub const TERMINAL_FREQUENCY_BASE: f32 = 1.0;
pub const TERMINAL_FREQUENCY_RANGE: f32 = 0.6;

/// Hover bob pulse: default duration and the scale and position deltas at
/// the peak of the pulse. The duration can be overridden per scene.
pub const BOB_DURATION: f32 = 1.0;
pub const BOB_SCALE_DELTA: f32 = 0.2;
pub const BOB_Y_DELTA: f32 = 0.3;
pub const BOB_Z_DELTA: f32 = 0.01;

/// Default stop distance for head seeking when the scene config omits one.
/// Seek epsilons are per-chain tunables carried by each chain, not a shared
/// invariant.
pub const HEAD_SEEK_EPSILON: f32 = 0.5;

/// Camera focus tween: duration and how far the camera pulls back when
/// focusing the planet.
pub const FOCUS_TWEEN_DURATION: f32 = 1.0;
pub const FOCUS_ZOOM_FACTOR: f32 = 1.5;

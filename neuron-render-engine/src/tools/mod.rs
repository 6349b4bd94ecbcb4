/// Planet hover detection and camera focus flights.
pub mod planet_hover;

/// Ground-plane click targeting for the neuron chain.
pub mod target_picker;

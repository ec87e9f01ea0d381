//! Application actions/events that drive state changes.

/// Actions that can be dispatched to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application lifecycle
    Quit,
    Tick,
    Resize(u16, u16),

    // Mouse
    MouseMove(u16, u16),
    MouseScroll(i16), // positive = down, negative = up

    // Cover art, keyed by playlist id
    CoverLoaded(u32, Vec<u8>),
    CoverFailed(u32, String),

    // No-op
    None,
}

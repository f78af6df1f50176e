//! Button events that drive mode transitions

/// Events produced by the input sampler
///
/// Variants are declared in ascending priority so the derived ordering
/// picks the winner when several buttons are pressed in one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Start button held
    StartPressed,
    /// Stop button held
    StopPressed,
    /// Reset button held
    ResetPressed,
}

impl ButtonEvent {
    /// All events, lowest priority first
    pub const ALL: [ButtonEvent; 3] = [
        ButtonEvent::StartPressed,
        ButtonEvent::StopPressed,
        ButtonEvent::ResetPressed,
    ];
}

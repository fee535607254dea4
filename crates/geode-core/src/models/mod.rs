//! Shared engine models: confidence tiers, shift resolutions, stop
//! reasons, and session events.

pub mod event;
pub mod shift;
pub mod stop_reason;
pub mod tier;

pub use event::{SessionEvent, SessionEventKind};
pub use shift::ShiftResolution;
pub use stop_reason::StopReason;
pub use tier::Tier;

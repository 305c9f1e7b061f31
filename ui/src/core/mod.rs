//! Pure site logic: configuration, UI state machine, validation-free helpers and the
//! thin platform boundary used to run side effects.

pub mod config;
pub mod format;
pub mod gate;
pub mod nav;
pub mod platform;
pub mod share;
pub mod state;
pub mod theme;
pub mod timing;

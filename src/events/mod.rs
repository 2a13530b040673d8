//! Event types and observers.
//!
//! Submodules overview
//! - [`audio`] – command/response messages crossing the audio thread bridge
//! - [`collision`] – push-out notifications from the chunk resolver
//! - [`switchdebug`] – F11 debug-mode toggle

pub mod audio;
pub mod collision;
pub mod switchdebug;

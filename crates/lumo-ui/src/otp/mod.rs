//! One-time-passcode input.
//!
//! [`OtpState`] owns the fixed-length code and the transition rules;
//! [`OtpTextField`] adapts raw per-slot text and key events onto it.

mod completion;
mod config;
mod field;
mod slot;
mod state;

pub use completion::{CompletionPolicy, CompletionTracker};
pub use config::{OtpConfig, OtpConfigError, DEFAULT_OTP_LENGTH};
pub use field::{OtpFieldType, OtpTextField};
pub use slot::{content_description, OtpSlot, VisualTransformation};
pub use state::{OtpState, EMPTY_SLOT};

//! UI components for Lumo.
//!
//! Rendering, theming, and layout belong to the host framework. This crate
//! holds the component state machines and the per-element contracts a
//! renderer binds to.

pub mod otp;

pub use otp::{
    CompletionPolicy, CompletionTracker, OtpConfig, OtpConfigError, OtpFieldType, OtpSlot,
    OtpState, OtpTextField, VisualTransformation, DEFAULT_OTP_LENGTH, EMPTY_SLOT,
};

pub mod prelude {
    pub use crate::otp::*;
    pub use lumo_foundation::prelude::*;
}

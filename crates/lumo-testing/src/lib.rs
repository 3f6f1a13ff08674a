//! Testing utilities and harness for Lumo components

pub mod otp_assertions;
pub mod recorders;
pub mod rule;

pub use recorders::*;
pub use rule::OtpTestRule;

pub mod prelude {
    pub use crate::otp_assertions;
    pub use crate::recorders::*;
    pub use crate::rule::OtpTestRule;
}

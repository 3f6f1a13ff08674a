use super::CompletionPolicy;

/// Slot count used when the caller does not pick one.
pub const DEFAULT_OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpConfigError {
    #[error("otp length must be at least 1")]
    ZeroLength,
}

/// Construction-time options for an [`OtpState`](super::OtpState).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpConfig {
    length: usize,
    /// Seed for the slots. Padded with empty slots or truncated to `length`;
    /// characters are not validated.
    pub initial_otp: String,
    pub completion_policy: CompletionPolicy,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_OTP_LENGTH,
            initial_otp: String::new(),
            completion_policy: CompletionPolicy::default(),
        }
    }
}

impl OtpConfig {
    pub fn new(length: usize) -> Result<Self, OtpConfigError> {
        if length == 0 {
            return Err(OtpConfigError::ZeroLength);
        }
        Ok(Self {
            length,
            ..Self::default()
        })
    }

    pub fn with_initial_otp(mut self, initial_otp: impl Into<String>) -> Self {
        self.initial_otp = initial_otp.into();
        self
    }

    pub fn with_completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.completion_policy = policy;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

use lumo_foundation::InteractionSourceId;

/// How a filled slot's character is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualTransformation {
    #[default]
    None,
    /// Show every filled slot as this character.
    Mask(char),
}

impl VisualTransformation {
    pub fn apply(self, value: &str) -> String {
        match self {
            VisualTransformation::None => value.to_owned(),
            VisualTransformation::Mask(mask) => value.chars().map(|_| mask).collect(),
        }
    }
}

/// Accessibility label for slot `index` of a `length`-slot field.
pub fn content_description(index: usize, length: usize) -> String {
    format!("OTP Digit {} of {}", index + 1, length)
}

/// Snapshot of one slot, as a renderer needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpSlot {
    pub index: usize,
    /// Raw slot content, `None` when empty.
    pub digit: Option<char>,
    /// Text the slot's editor holds; empty for an empty slot.
    pub value: String,
    /// `value` after the visual transformation.
    pub display: String,
    pub content_description: String,
    pub interaction_source: InteractionSourceId,
    /// Whether the slot's interaction source last saw a focus interaction.
    pub focused: bool,
    /// The slot carrying the field's focus requester (the first one).
    pub focus_target: bool,
    pub enabled: bool,
    pub read_only: bool,
    pub is_error: bool,
}

impl OtpSlot {
    pub fn is_empty(&self) -> bool {
        self.digit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_replaces_every_char() {
        assert_eq!(VisualTransformation::Mask('•').apply("7"), "•");
        assert_eq!(VisualTransformation::Mask('*').apply(""), "");
        assert_eq!(VisualTransformation::None.apply("7"), "7");
    }

    #[test]
    fn description_is_one_based() {
        assert_eq!(content_description(0, 4), "OTP Digit 1 of 4");
        assert_eq!(content_description(5, 6), "OTP Digit 6 of 6");
    }
}

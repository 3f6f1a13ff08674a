/// When the completion callback fires once every slot is filled.
///
/// Both policies key on the code value, so re-observing an unchanged code
/// never fires twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Fire whenever the observed code changes and is complete. Editing a
    /// slot of an already complete code to a different digit fires again.
    #[default]
    OnValueChange,
    /// Fire only when the code goes from incomplete to complete.
    OnTransition,
}

/// Value-keyed completion edge detector.
///
/// Feed it every code value the owner observes; it answers whether the
/// completion callback is due and with which value.
#[derive(Clone, Debug)]
pub struct CompletionTracker {
    policy: CompletionPolicy,
    last_observed: Option<String>,
    was_complete: bool,
}

impl CompletionTracker {
    pub fn new(policy: CompletionPolicy) -> Self {
        Self {
            policy,
            last_observed: None,
            was_complete: false,
        }
    }

    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Records `code` and returns the trimmed code if the callback should
    /// fire for it.
    pub fn observe(&mut self, code: &str, complete: bool) -> Option<String> {
        if self.last_observed.as_deref() == Some(code) {
            return None;
        }
        self.last_observed = Some(code.to_owned());
        let was_complete = std::mem::replace(&mut self.was_complete, complete);

        if !complete {
            return None;
        }
        match self.policy {
            CompletionPolicy::OnValueChange => Some(code.trim().to_owned()),
            CompletionPolicy::OnTransition if !was_complete => Some(code.trim().to_owned()),
            CompletionPolicy::OnTransition => None,
        }
    }
}

impl Default for CompletionTracker {
    fn default() -> Self {
        Self::new(CompletionPolicy::default())
    }
}

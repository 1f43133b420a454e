//! Install Prompt State
//!
//! Visibility of the header install button and the install banner, driven
//! by the platform's install events.

/// How the user answered the platform install dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl InstallOutcome {
    /// Anything other than `"accepted"` counts as dismissed
    pub fn from_platform(outcome: &str) -> Self {
        if outcome == "accepted" {
            Self::Accepted
        } else {
            Self::Dismissed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallState {
    /// A deferred platform prompt is being held
    prompt_ready: bool,
    button_visible: bool,
    banner_visible: bool,
    /// User closed the banner in this or an earlier session
    dismissed: bool,
}

impl InstallState {
    pub fn new(dismissed: bool) -> Self {
        Self {
            dismissed,
            ..Default::default()
        }
    }

    /// The platform offered a deferred install prompt. Shows the install
    /// button; returns true when the banner should be scheduled.
    pub fn prompt_available(&mut self) -> bool {
        self.prompt_ready = true;
        self.button_visible = true;
        !self.dismissed
    }

    /// Delayed banner reveal; ignored if the prompt went away or the banner
    /// was dismissed in the meantime.
    pub fn show_banner(&mut self) {
        if self.prompt_ready && !self.dismissed {
            self.banner_visible = true;
        }
    }

    /// The held prompt was shown and answered; it cannot be reused.
    pub fn prompt_finished(&mut self, outcome: InstallOutcome) {
        self.prompt_ready = false;
        if outcome == InstallOutcome::Accepted {
            self.button_visible = false;
        }
    }

    /// Banner install button: the banner goes away whatever the outcome.
    pub fn banner_install_finished(&mut self, outcome: Option<InstallOutcome>) {
        if let Some(outcome) = outcome {
            self.prompt_finished(outcome);
        }
        self.banner_visible = false;
    }

    pub fn installed(&mut self) {
        self.prompt_ready = false;
        self.button_visible = false;
        self.banner_visible = false;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_visible = false;
        self.dismissed = true;
    }

    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }
}

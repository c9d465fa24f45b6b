//! Transient status banner.
//!
//! One banner per app. Each message replaces the one before it and hides
//! itself after a fixed delay; a newer message supersedes the pending hide,
//! so a late timer can never clear a message it did not show.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a message stays visible.
const STATUS_VISIBLE_MS: u32 = 3_000;

/// Message severity, mapped onto the banner's CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
        }
    }
}

#[derive(Clone)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Context handle for showing status messages from anywhere in the app.
#[derive(Clone, Copy)]
pub struct StatusContext {
    message: RwSignal<Option<StatusMessage>>,
    /// Pending hide timer; timers are not `Send`, hence the local slot.
    hide_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl StatusContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            hide_timer: StoredValue::new_local(None),
        }
    }

    /// Shows a message, replacing whatever is visible. Dropping the
    /// previous timer cancels it, which is what makes superseding safe.
    pub fn show(&self, severity: Severity, text: impl Into<String>) {
        self.message.set(Some(StatusMessage {
            text: text.into(),
            severity,
        }));
        let message = self.message;
        let timeout = Timeout::new(STATUS_VISIBLE_MS, move || message.set(None));
        self.hide_timer.set_value(Some(timeout));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Severity::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Severity::Error, text);
    }
}

pub fn use_status() -> StatusContext {
    use_context::<StatusContext>().expect("StatusContext should be provided")
}

/// Banner element. Renders an empty container while no message is active,
/// so the element id stays addressable for styling.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let status = use_status();
    let message = status.message;

    view! {
        <div id="status-message" class="toast toast-top toast-center z-50">
            <Show when=move || message.get().is_some()>
                <div
                    class=move || {
                        message
                            .get()
                            .map(|m| m.severity.class())
                            .unwrap_or_default()
                    }
                    role="alert"
                >
                    <span>{move || message.get().map(|m| m.text).unwrap_or_default()}</span>
                </div>
            </Show>
        </div>
    }
}

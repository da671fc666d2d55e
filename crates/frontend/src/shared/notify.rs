//! Transient notifications (file operation failures, save confirmations).
//!
//! One message at a time; auto-dismissed after a few seconds unless a newer
//! message replaced it in the meantime.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub is_error: bool,
    seq: u64,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    current: RwSignal<Option<Notification>>,
    next_seq: RwSignal<u64>,
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_seq: RwSignal::new(0),
        }
    }

    pub fn info(&self, text: &str) {
        self.show(text, false);
    }

    pub fn error(&self, text: &str) {
        self.show(text, true);
    }

    fn show(&self, text: &str, is_error: bool) {
        let seq = self.next_seq.get_untracked();
        self.next_seq.set(seq + 1);
        self.current.set(Some(Notification {
            text: text.to_string(),
            is_error,
            seq,
        }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // Only dismiss if no newer message replaced this one
            if current.get_untracked().map(|n| n.seq) == Some(seq) {
                current.set(None);
            }
        });
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not found in component tree")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notify();

    view! {
        <Show when=move || service.current.get().is_some()>
            {move || {
                service
                    .current
                    .get()
                    .map(|n| {
                        let class = if n.is_error {
                            "notification notification--error"
                        } else {
                            "notification notification--info"
                        };
                        view! { <div class=class>{n.text}</div> }
                    })
            }}
        </Show>
    }
}

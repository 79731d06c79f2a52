//! Transient notifications (toasts)
//!
//! Views report failures through the [`Notifier`] trait instead of a global
//! store. [`NotificationService`] is the browser implementation: provided via
//! context, rendered by [`NotificationHost`], auto-dismissed after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationCategory {
    Error,
    Info,
}

impl NotificationCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationCategory::Error => "notification notification--error",
            NotificationCategory::Info => "notification notification--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub category: NotificationCategory,
    pub message: String,
}

/// Sink for user-visible notifications
pub trait Notifier {
    fn notify(&self, category: NotificationCategory, message: String);

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NotificationCategory::Error, message.into());
    }

    fn info(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NotificationCategory::Info, message.into());
    }
}

/// Context-provided notification queue
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn dismiss(&self, id: u64) {
        // the host may already be gone when the auto-dismiss timer fires
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, category: NotificationCategory, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        match category {
            NotificationCategory::Error => log::warn!("notification: {}", message),
            NotificationCategory::Info => log::info!("notification: {}", message),
        }

        self.items.update(|items| {
            items.push(Notification {
                id,
                category,
                message,
            })
        });

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the queued notifications in the corner of the page
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || service.items().get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.category.css_class() role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

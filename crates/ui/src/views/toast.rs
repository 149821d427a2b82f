use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Navigator as RouterNavigator;
use services::{Collaborators, Destination, Navigator, Notice, NoticeLevel, Notifier};
use tracing::warn;

use crate::routes::Route;

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: NoticeLevel,
    pub message: String,
}

impl From<&Notice> for Toast {
    fn from(notice: &Notice) -> Self {
        Self {
            level: notice.level(),
            message: notice.message().to_string(),
        }
    }
}

/// Shared slot for the single toast on screen.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastSlot(Signal<Option<Toast>>);

impl ToastSlot {
    #[must_use]
    pub fn new(signal: Signal<Option<Toast>>) -> Self {
        Self(signal)
    }

    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.0.cloned()
    }

    pub fn show(mut self, toast: Toast) {
        self.0.set(Some(toast));
    }

    pub fn dismiss(mut self) {
        self.0.set(None);
    }
}

struct ToastNotifier(ToastSlot);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        self.0.show(Toast::from(&notice));
    }
}

struct RouterExit(RouterNavigator);

impl Navigator for RouterExit {
    fn leave(&self, destination: Destination) {
        let target = match destination {
            Destination::Home => Route::Home {},
        };
        if let Some(failure) = self.0.replace(target) {
            warn!(?failure, ?destination, "navigation rejected");
        }
    }
}

/// Wires controller notices to the toast slot and exits to the router.
#[must_use]
pub fn flow_collaborators(toast: ToastSlot, navigator: RouterNavigator) -> Collaborators {
    Collaborators::new(ToastNotifier(toast), RouterExit(navigator))
}

#[component]
pub fn ToastHost() -> Element {
    let slot = use_context::<ToastSlot>();

    use_effect(move || {
        if let Some(shown) = slot.current() {
            spawn(async move {
                tokio::time::sleep(TOAST_TTL).await;
                if *slot.0.peek() == Some(shown) {
                    slot.dismiss();
                }
            });
        }
    });

    let Some(toast) = slot.current() else {
        return rsx! {};
    };
    let class = match toast.level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Error => "toast toast-error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| slot.dismiss(),
            "{toast.message}"
        }
    }
}

//! Toast banners: the dashboard's only way of surfacing messages.
//!
//! Failures and confirmations share one non-blocking presentation. The
//! provider implements [`ErrorReporter`] so services' errors reach the user
//! the same way wherever they come from.

use homewatch_app::ports::ErrorReporter;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "toast toast-error",
            Self::Info => "toast toast-info",
        }
    }
}

/// A single toast message.
#[derive(Debug, Clone)]
struct ToastMessage {
    id: u32,
    kind: ToastKind,
    text: String,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
    lifetime_ms: u32,
}

impl ToastProvider {
    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));

        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, kind, text });
        });

        let set_toasts = self.set_toasts;
        let lifetime_ms = self.lifetime_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(lifetime_ms).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

impl ErrorReporter for ToastProvider {
    fn error(&self, message: String) {
        leptos::logging::warn!("{message}");
        self.push(ToastKind::Error, message);
    }

    fn info(&self, message: String) {
        self.push(ToastKind::Info, message);
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(
    /// How long each toast stays up.
    lifetime_ms: u32,
    children: Children,
) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());

    let provider = ToastProvider {
        set_toasts,
        next_id: RwSignal::new(0),
        lifetime_ms,
    };

    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container" role="status">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class()>
                                <button class="toast-dismiss" on:click=move |_| provider.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

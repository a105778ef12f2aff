use leptos::prelude::*;

use crate::browser;
use crate::state::use_dashboard;

/// Bell with unread badge and a dropdown of recent notifications.
#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_dashboard();
    let panel = ctx.notifications;
    let (open, set_open) = signal(false);

    let items = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            panel.with(|p| {
                if p.is_empty() {
                    return view! { <div class="notification-item">"No notifications"</div> }.into_any();
                }
                p.items()
                    .iter()
                    .map(|n| {
                        let id = n.id;
                        let ctx = ctx.clone();
                        view! {
                            <div class=n.class() on:click=move |_| ctx.mark_notification_read(id)>
                                <div class="notif-title">{n.title.clone()}</div>
                                <div class="notif-message">{n.message.clone()}</div>
                                <div class="notif-time">
                                    {browser::local_timestamp(n.timestamp.as_deref())}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            })
        }
    };

    view! {
        <div class="notification-bell">
            <button class="bell-button" on:click=move |_| set_open.update(|o| *o = !*o)>
                "\u{1F514}"
                <span
                    class="notification-badge"
                    style:display=move || if panel.with(|p| p.badge_visible()) { "flex" } else { "none" }
                >
                    {move || panel.with(|p| p.badge_text())}
                </span>
            </button>
            <div class="notification-dropdown" class:show=move || open.get()>
                <div class="notification-header">
                    <span>"Notifications"</span>
                    <button class="btn-link" on:click=move |_| ctx.clear_notifications()>"Clear All"</button>
                </div>
                <div class="notification-list">{items}</div>
            </div>
        </div>
    }
}

pub mod sidebar;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::use_navigator;
use crate::shared::notify::NotificationHost;
use crate::system::auth::context::use_session;
use crate::system::auth::{api, storage};
use sidebar::Sidebar;

/// Application shell: sidebar on the left, header on top, routed screen in
/// the center. Mounted only behind the route gate.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <NotificationHost />
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let nav = use_navigator();

    let user_label = move || {
        session
            .get()
            .user
            .map(|u| {
                let name = u.full_name.unwrap_or(u.username);
                format!("{} ({})", name, u.role.label())
            })
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let token = session.get_untracked().token;
        spawn_local(async move {
            if let Some(token) = token {
                // Best effort; local state is cleared regardless
                let _ = api::logout(&token).await;
            }
            storage::clear_token();
            set_session.set(Default::default());
            nav.navigate("/login");
        });
    };

    view! {
        <header class="header">
            <span class="header__title">"Operations Desk"</span>
            <span class="header__user">{user_label}</span>
            <button class="header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}

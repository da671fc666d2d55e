use leptos::prelude::*;

use crate::routes::{AppRoutes, Navigator};
use crate::shared::notify::NotifyService;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notifications are app-wide; the host lives in the Shell
    provide_context(NotifyService::new());

    view! {
        <SessionProvider>
            <RouterHost />
        </SessionProvider>
    }
}

/// Provides the navigation handle below the session so every routed screen
/// can read both
#[component]
fn RouterHost() -> impl IntoView {
    let nav = Navigator::new();
    provide_context(nav);
    nav.listen_popstate();

    view! { <AppRoutes /> }
}

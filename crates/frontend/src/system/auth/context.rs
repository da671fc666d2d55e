use contracts::system::auth::SessionUser;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Process-wide session state. Read by the route gate on every navigation,
/// written only by login/logout and the restore-on-mount effect.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = create_signal(SessionState::default());

    // Try to restore session from localStorage on mount
    create_effect(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                // Validate token by fetching current user
                match api::get_current_user(&token).await {
                    Ok(user) => {
                        set_session.set(SessionState {
                            token: Some(token),
                            user: Some(user),
                        });
                    }
                    Err(_) => {
                        // Token invalid, drop it
                        storage::clear_token();
                    }
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

use contracts::domain::it_ticket::ItTicketDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::routes::use_navigator;
use crate::shared::date_utils::format_datetime;
use crate::shared::tags::StatusTag;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    Mine,
    Queue,
}

/// Employee view of their own tickets
#[component]
pub fn MyItTicketsPage() -> impl IntoView {
    view! { <TicketList scope=TicketScope::Mine /> }
}

/// IT staff queue of all tickets
#[component]
pub fn ItTicketQueuePage() -> impl IntoView {
    view! { <TicketList scope=TicketScope::Queue /> }
}

#[component]
fn TicketList(scope: TicketScope) -> impl IntoView {
    let items = RwSignal::new(Vec::<ItTicketDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let nav = use_navigator();

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match scope {
                TicketScope::Mine => api::fetch_my().await,
                TicketScope::Queue => api::fetch_queue().await,
            };
            match result {
                Ok(data) => items.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    let title = match scope {
        TicketScope::Mine => "My IT Tickets",
        TicketScope::Queue => "IT Ticket Queue",
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>{title}</h2>
                <Show when=move || scope == TicketScope::Mine>
                    <button
                        class="btn-primary"
                        on:click=move |_| nav.navigate("/employee/it-tickets/new")
                    >
                        "New Ticket"
                    </button>
                </Show>
                <button class="btn-secondary" on:click=move |_| load()>
                    "Refresh"
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">
                    {move || error.get().unwrap_or_default()}
                    <button on:click=move |_| load()>"Retry"</button>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Subject"</th>
                        <th>"Reporter"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Assignee"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: ItTicketDto| {
                            let priority = tags::priority_tag(&row.priority);
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.subject.clone()}</td>
                                    <td>{row.reporter.clone()}</td>
                                    <td>
                                        <span class=format!("tag {}", priority.color.as_class())>
                                            {priority.label}
                                        </span>
                                    </td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                    <td>{row.assignee.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td>{format_datetime(&row.created_at)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

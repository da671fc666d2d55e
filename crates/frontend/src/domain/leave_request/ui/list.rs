use contracts::domain::leave_request::LeaveRequestDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::routes::use_navigator;
use crate::shared::date_utils::format_date;
use crate::shared::tags::StatusTag;

#[component]
pub fn LeaveRequestListPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<LeaveRequestDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let nav = use_navigator();

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_my().await {
                Ok(data) => items.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"My Leave Requests"</h2>
                <button
                    class="btn-primary"
                    on:click=move |_| nav.navigate("/employee/leave-requests/new")
                >
                    "New Request"
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
                        <th>"Type"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: LeaveRequestDto| {
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.leave_type.clone()}</td>
                                    <td>{format_date(&row.from_date.to_string())}</td>
                                    <td>{format_date(&row.to_date.to_string())}</td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

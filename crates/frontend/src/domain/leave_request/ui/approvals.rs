use contracts::domain::leave_request::LeaveRequestDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api::{self, LeaveDecisionDto};
use super::super::tags;
use crate::shared::date_utils::format_date;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// Leave requests waiting on the caller's stage (supervisor or HR)
#[component]
pub fn LeaveApprovalsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<LeaveRequestDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let notify = use_notify();

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_pending_approvals().await {
                Ok(data) => items.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    let decide = move |request_id: String, approve: bool| {
        spawn_local(async move {
            let dto = LeaveDecisionDto {
                request_id,
                approve,
                comment: None,
            };
            match api::decide(&dto).await {
                Ok(()) => {
                    notify.info(if approve { "Request approved" } else { "Request rejected" });
                    load();
                }
                Err(e) => notify.error(&e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Leave Approvals"</h2>
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
                        <th>"Employee"</th>
                        <th>"Type"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: LeaveRequestDto| {
                            let approve_id = row.id.clone();
                            let reject_id = row.id.clone();
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.employee.clone()}</td>
                                    <td>{row.leave_type.clone()}</td>
                                    <td>{format_date(&row.from_date.to_string())}</td>
                                    <td>{format_date(&row.to_date.to_string())}</td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                    <td>
                                        <button
                                            class="btn-approve"
                                            on:click=move |_| decide(approve_id.clone(), true)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn-reject"
                                            on:click=move |_| decide(reject_id.clone(), false)
                                        >
                                            "Reject"
                                        </button>
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

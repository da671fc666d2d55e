use contracts::domain::cash_request::{CashRequestDecisionDto, CashRequestDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::shared::date_utils::format_datetime;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// Cash requests waiting on the current approver.
///
/// The backend scopes the list to the caller's stage (supervisor vs finance);
/// this screen is shared by every approving role.
#[component]
pub fn CashApprovalsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<CashRequestDto>::new());
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
            let dto = CashRequestDecisionDto {
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
                <h2>"Cash Approvals"</h2>
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
                        <th>"Requester"</th>
                        <th>"Purpose"</th>
                        <th>"Amount"</th>
                        <th>"Urgency"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: CashRequestDto| {
                            let urgency = tags::urgency_tag(&row.urgency);
                            let approve_id = row.id.clone();
                            let reject_id = row.id.clone();
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.requester.clone()}</td>
                                    <td>{row.purpose.clone()}</td>
                                    <td>{format!("{:.2} {}", row.amount, row.currency)}</td>
                                    <td>
                                        <span class=format!("tag {}", urgency.color.as_class())>
                                            {urgency.label}
                                        </span>
                                    </td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                    <td>{format_datetime(&row.created_at)}</td>
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

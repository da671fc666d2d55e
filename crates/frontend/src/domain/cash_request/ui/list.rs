use contracts::domain::cash_request::{status, CashRequestDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::routes::use_navigator;
use crate::shared::date_utils::format_datetime;
use crate::shared::download;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// Employee's own petty-cash requests
#[component]
pub fn CashRequestListPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<CashRequestDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let nav = use_navigator();
    let notify = use_notify();

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

    let cancel_request = move |id: String| {
        spawn_local(async move {
            match api::cancel(&id).await {
                Ok(()) => {
                    notify.info("Request cancelled");
                    load();
                }
                Err(e) => notify.error(&e),
            }
        });
    };

    let download_voucher = move |id: String, number: String| {
        spawn_local(async move {
            let path = api::voucher_path(&id);
            let default_name = format!("voucher_{}.pdf", number);
            if let Err(e) = download::download_file(&path, &default_name).await {
                notify.error(&format!("Download failed: {}", e));
                // Fallback: let the browser handle the raw resource
                download::open_in_new_tab(&path);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"My Cash Requests"</h2>
                <button class="btn-primary" on:click=move |_| nav.navigate("/employee/cash-requests/new")>
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
                            let voucher = (row.status == status::DISBURSED)
                                .then(|| (row.id.clone(), row.number.clone()));
                            let cancellable = (row.status == status::PENDING_SUPERVISOR)
                                .then(|| row.id.clone());
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
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
                                        {voucher
                                            .map(|(id, number)| {
                                                view! {
                                                    <button
                                                        class="btn-link"
                                                        on:click=move |_| download_voucher(
                                                            id.clone(),
                                                            number.clone(),
                                                        )
                                                    >
                                                        "Voucher"
                                                    </button>
                                                }
                                            })}
                                        {cancellable
                                            .map(|id| {
                                                view! {
                                                    <button
                                                        class="btn-link"
                                                        on:click=move |_| cancel_request(id.clone())
                                                    >
                                                        "Cancel"
                                                    </button>
                                                }
                                            })}
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

use contracts::domain::rfq::{status, RfqDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::download;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// RFQ register for supply chain and buyers
#[component]
pub fn RfqListPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<RfqDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let notify = use_notify();

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(data) => items.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    let download_comparison = move |id: String, number: String| {
        spawn_local(async move {
            let path = api::comparison_sheet_path(&id);
            let default_name = format!("comparison_{}.csv", number);
            if let Err(e) = download::download_file(&path, &default_name).await {
                notify.error(&format!("Download failed: {}", e));
                download::open_in_new_tab(&path);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Requests for Quotation"</h2>
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
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Quotes"</th>
                        <th>"Deadline"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: RfqDto| {
                            // Comparison sheet only exists once quotes are in
                            let comparable = matches!(
                                row.status.as_str(),
                                status::QUOTES_RECEIVED | status::UNDER_EVALUATION | status::AWARDED
                            );
                            let sheet = comparable.then(|| (row.id.clone(), row.number.clone()));
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.title.clone()}</td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                    <td>{row.quotes_count}</td>
                                    <td>
                                        {row
                                            .quote_deadline
                                            .map(|d| format_date(&d.to_string()))
                                            .unwrap_or_else(|| "—".to_string())}
                                    </td>
                                    <td>{format_datetime(&row.created_at)}</td>
                                    <td>
                                        {sheet
                                            .map(|(id, number)| {
                                                view! {
                                                    <button
                                                        class="btn-link"
                                                        on:click=move |_| download_comparison(
                                                            id.clone(),
                                                            number.clone(),
                                                        )
                                                    >
                                                        "Comparison"
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

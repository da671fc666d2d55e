use contracts::domain::invoice::InvoiceDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::download;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// Supplier invoice register for finance
#[component]
pub fn InvoiceListPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<InvoiceDto>::new());
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

    let download_document = move |id: String, number: String| {
        spawn_local(async move {
            let path = api::document_path(&id);
            let default_name = format!("invoice_{}.pdf", number);
            if let Err(e) = download::download_file(&path, &default_name).await {
                notify.error(&format!("Download failed: {}", e));
                download::open_in_new_tab(&path);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Supplier Invoices"</h2>
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
                        <th>"Supplier"</th>
                        <th>"PO"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Due"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: InvoiceDto| {
                            let doc = (row.id.clone(), row.number.clone());
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.supplier.clone()}</td>
                                    <td>
                                        {row
                                            .purchase_order
                                            .clone()
                                            .unwrap_or_else(|| "—".to_string())}
                                    </td>
                                    <td>{format!("{:.2} {}", row.amount, row.currency)}</td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
                                    <td>
                                        {row
                                            .due_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "—".to_string())}
                                    </td>
                                    <td>{format_datetime(&row.created_at)}</td>
                                    <td>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| download_document(
                                                doc.0.clone(),
                                                doc.1.clone(),
                                            )
                                        >
                                            "Document"
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

use contracts::domain::purchase_requisition::PurchaseRequisitionDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::{api, tags};
use crate::shared::date_utils::format_datetime;
use crate::shared::tags::StatusTag;

/// Employee's own purchase requisitions
#[component]
pub fn MyRequisitionsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<PurchaseRequisitionDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

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
                <h2>"My Purchase Requisitions"</h2>
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
                        <th>"Description"</th>
                        <th>"Estimated Cost"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: PurchaseRequisitionDto| {
                            let priority = tags::priority_tag(&row.priority);
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.description.clone()}</td>
                                    <td>{format!("{:.2} {}", row.estimated_cost, row.currency)}</td>
                                    <td>
                                        <span class=format!("tag {}", priority.color.as_class())>
                                            {priority.label}
                                        </span>
                                    </td>
                                    <td>
                                        <StatusTag status=row.status.clone() table=tags::STATUS_TAGS />
                                    </td>
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

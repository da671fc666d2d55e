use contracts::dashboards::DashboardSummaryDto;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_datetime;
use crate::shared::http;

/// One dashboard component serves every role prefix; the summary endpoint is
/// role-scoped server-side.
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let summary = RwSignal::new(Option::<DashboardSummaryDto>::None);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result =
                http::get_json::<DashboardSummaryDto>(&format!("/api/dashboard/{}", role.as_str()))
                    .await;
            match result {
                Ok(data) => summary.set(Some(data)),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    view! {
        <div class="dashboard">
            <h2>{format!("{} Dashboard", role.label())}</h2>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">
                    {move || error.get().unwrap_or_default()}
                    <button on:click=move |_| load()>"Retry"</button>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || {
                summary
                    .get()
                    .map(|data| {
                        view! {
                            <div class="stat-cards">
                                <div class="stat-card">
                                    <span class="stat-card__value">{data.open_items}</span>
                                    <span class="stat-card__label">"Open items"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">{data.pending_approvals}</span>
                                    <span class="stat-card__label">"Pending approvals"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">
                                        {format!(
                                            "{:.2} {}",
                                            data.monthly_total,
                                            data.currency.clone().unwrap_or_default(),
                                        )}
                                    </span>
                                    <span class="stat-card__label">"This month"</span>
                                </div>
                            </div>
                            <h3>"Recent activity"</h3>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Type"</th>
                                        <th>"Number"</th>
                                        <th>"Title"</th>
                                        <th>"Status"</th>
                                        <th>"Created"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data
                                        .recent
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.kind}</td>
                                                    <td>{row.number}</td>
                                                    <td>{row.title}</td>
                                                    <td>
                                                        <span class="tag tag--default">{row.status}</span>
                                                    </td>
                                                    <td>{format_datetime(&row.created_at)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                    })
            }}
        </div>
    }
}

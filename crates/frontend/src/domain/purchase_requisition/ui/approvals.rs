use contracts::domain::purchase_requisition::PurchaseRequisitionDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api::{self, RequisitionDecisionDto};
use super::super::tags;
use crate::shared::date_utils::format_datetime;
use crate::shared::notify::use_notify;
use crate::shared::tags::StatusTag;

/// Which approval stage this screen serves; the two stages share markup but
/// hit different endpoints.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStage {
    Supervisor,
    SupplyChainReview,
}

#[component]
pub fn RequisitionApprovalsPage() -> impl IntoView {
    view! { <RequisitionDecisionList stage=ApprovalStage::Supervisor /> }
}

#[component]
pub fn RequisitionReviewPage() -> impl IntoView {
    view! { <RequisitionDecisionList stage=ApprovalStage::SupplyChainReview /> }
}

#[component]
fn RequisitionDecisionList(stage: ApprovalStage) -> impl IntoView {
    let items = RwSignal::new(Vec::<PurchaseRequisitionDto>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let notify = use_notify();

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match stage {
                ApprovalStage::Supervisor => api::fetch_pending_approvals().await,
                ApprovalStage::SupplyChainReview => api::fetch_pending_review().await,
            };
            match result {
                Ok(data) => items.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    let decide = move |requisition_id: String, approve: bool| {
        spawn_local(async move {
            let dto = RequisitionDecisionDto {
                requisition_id,
                approve,
                comment: None,
            };
            match api::decide(&dto).await {
                Ok(()) => {
                    notify.info(if approve {
                        "Requisition approved"
                    } else {
                        "Requisition rejected"
                    });
                    load();
                }
                Err(e) => notify.error(&e),
            }
        });
    };

    let title = match stage {
        ApprovalStage::Supervisor => "Requisition Approvals",
        ApprovalStage::SupplyChainReview => "Requisition Review",
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2>{title}</h2>
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
                        <th>"Description"</th>
                        <th>"Estimated Cost"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id.clone()
                        children=move |row: PurchaseRequisitionDto| {
                            let priority = tags::priority_tag(&row.priority);
                            let approve_id = row.id.clone();
                            let reject_id = row.id.clone();
                            view! {
                                <tr>
                                    <td>{row.number.clone()}</td>
                                    <td>{row.requester.clone()}</td>
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

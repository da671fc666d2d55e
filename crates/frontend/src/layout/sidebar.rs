//! Sidebar navigation, one static menu per role.
//!
//! The menu only lists routes the role can reach directly; the gate stays
//! authoritative, the sidebar is presentation.

use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::routes::use_navigator;
use crate::system::auth::context::use_session;

struct MenuItem {
    label: &'static str,
    path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path }
}

fn menu_for_role(role: Role) -> Vec<MenuItem> {
    match role {
        Role::Employee => vec![
            item("Dashboard", "/employee/dashboard"),
            item("Cash Requests", "/employee/cash-requests"),
            item("Purchase Requisitions", "/employee/requisitions"),
            item("Leave Requests", "/employee/leave-requests"),
            item("IT Tickets", "/employee/it-tickets"),
        ],
        Role::Supervisor => vec![
            item("Dashboard", "/supervisor/dashboard"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
            item("Requisition Approvals", "/supervisor/requisition-approvals"),
            item("Leave Approvals", "/supervisor/leave-approvals"),
        ],
        Role::Finance => vec![
            item("Dashboard", "/finance/dashboard"),
            item("Petty Cash", "/pettycash/dashboard"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
            item("Invoices", "/finance/invoices"),
        ],
        Role::Hr => vec![
            item("Dashboard", "/hr/dashboard"),
            item("Leave Approvals", "/hr/leave-approvals"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
        ],
        Role::It => vec![
            item("Dashboard", "/it/dashboard"),
            item("Ticket Queue", "/it/tickets"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
        ],
        Role::SupplyChain => vec![
            item("Dashboard", "/supply-chain/dashboard"),
            item("Requisition Review", "/supply-chain/requisition-review"),
            item("RFQs", "/supply-chain/rfqs"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
        ],
        Role::Buyer => vec![
            item("Dashboard", "/buyer/dashboard"),
            item("RFQs", "/buyer/rfqs"),
        ],
        Role::Admin => vec![
            item("Dashboard", "/admin/dashboard"),
            item("Cash Approvals", "/supervisor/cash-approvals"),
            item("Requisition Review", "/supply-chain/requisition-review"),
            item("Invoices", "/finance/invoices"),
            item("Ticket Queue", "/it/tickets"),
            item("RFQs", "/supply-chain/rfqs"),
        ],
        Role::Supplier => vec![item("Dashboard", "/supplier/dashboard")],
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (session, _) = use_session();
    let nav = use_navigator();

    let items = move || {
        session
            .get()
            .role()
            .map(menu_for_role)
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {move || {
                    items()
                        .into_iter()
                        .map(|entry| {
                            let active = nav.path() == entry.path;
                            let class = if active {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            };
                            view! {
                                <li class=class>
                                    <a
                                        href=entry.path
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            nav.navigate(entry.path);
                                        }
                                    >
                                        {entry.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

//! SPA router: a reactive pathname signal over the History API, the static
//! route table and the role gate. Every navigation re-evaluates the gate
//! against the current session before any screen mounts.

pub mod gate;
pub mod table;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::cash_request::ui::approvals::CashApprovalsPage;
use crate::domain::cash_request::ui::details::CashRequestNewPage;
use crate::domain::cash_request::ui::list::CashRequestListPage;
use crate::domain::invoice::ui::list::InvoiceListPage;
use crate::domain::it_ticket::ui::details::ItTicketNewPage;
use crate::domain::it_ticket::ui::list::{ItTicketQueuePage, MyItTicketsPage};
use crate::domain::leave_request::ui::approvals::LeaveApprovalsPage;
use crate::domain::leave_request::ui::details::LeaveRequestNewPage;
use crate::domain::leave_request::ui::list::LeaveRequestListPage;
use crate::domain::purchase_requisition::ui::approvals::{
    RequisitionApprovalsPage, RequisitionReviewPage,
};
use crate::domain::purchase_requisition::ui::list::MyRequisitionsPage;
use crate::domain::rfq::ui::list::RfqListPage;
use crate::layout::Shell;
use crate::pages::dashboard::RoleDashboard;
use crate::pages::external_quote::ExternalQuotePage;
use crate::pages::login::LoginPage;
use crate::system::auth::context::use_session;
use contracts::system::roles::Role;
use gate::GateDecision;
use table::{RouteParams, Screen};

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// History-backed navigation handle, provided once via context.
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_pathname()),
        }
    }

    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn navigate(&self, to: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }

    /// Navigate without adding a history entry (redirects)
    pub fn replace(&self, to: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }

    /// Keep the path signal in sync with browser back/forward
    pub fn listen_popstate(&self) {
        let path = self.path;
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut()>::new(move || {
                path.set(current_pathname());
            });
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in component tree")
}

/// Declarative redirect: replaces the URL once mounted
#[component]
fn Redirect(to: String) -> impl IntoView {
    let nav = use_navigator();
    Effect::new(move |_| nav.replace(&to));

    view! { <div class="redirecting">"Redirecting..."</div> }
}

/// `/dashboard`: bounce to the session role's home dashboard
#[component]
fn DashboardRedirectPage() -> impl IntoView {
    let (session, _) = use_session();
    let nav = use_navigator();

    Effect::new(move |_| {
        if let Some(role) = session.get().role() {
            nav.replace(role.dashboard_path());
        }
    });

    view! { <div class="redirecting">"Redirecting..."</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_navigator();
    let (session, _) = use_session();

    view! {
        {move || {
            let path = nav.path();
            let role = session.get().role();
            match table::match_route(&path) {
                // Wildcard: unknown paths resolve to the dashboard redirect
                None => view! { <Redirect to="/dashboard".to_string() /> }.into_any(),
                Some((rule, params)) => {
                    match gate::evaluate_gate(role, rule) {
                        GateDecision::RedirectToLogin => {
                            view! { <Redirect to="/login".to_string() /> }.into_any()
                        }
                        GateDecision::RedirectToDashboard => {
                            view! { <Redirect to="/dashboard".to_string() /> }.into_any()
                        }
                        GateDecision::Render => render_screen(rule.screen, &params),
                    }
                }
            }
        }}
    }
}

fn in_shell(content: AnyView) -> AnyView {
    view! { <Shell>{content}</Shell> }.into_any()
}

fn render_screen(screen: Screen, params: &RouteParams) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::ExternalQuote => {
            let token = params
                .iter()
                .find(|(name, _)| *name == "token")
                .map(|(_, value)| value.clone())
                .unwrap_or_default();
            view! { <ExternalQuotePage token=token /> }.into_any()
        }
        Screen::DashboardRedirect => view! { <DashboardRedirectPage /> }.into_any(),
        Screen::EmployeeDashboard => {
            in_shell(view! { <RoleDashboard role=Role::Employee /> }.into_any())
        }
        Screen::CashRequestList => in_shell(view! { <CashRequestListPage /> }.into_any()),
        Screen::CashRequestNew => in_shell(view! { <CashRequestNewPage /> }.into_any()),
        Screen::MyRequisitions => in_shell(view! { <MyRequisitionsPage /> }.into_any()),
        Screen::LeaveRequestList => in_shell(view! { <LeaveRequestListPage /> }.into_any()),
        Screen::LeaveRequestNew => in_shell(view! { <LeaveRequestNewPage /> }.into_any()),
        Screen::MyItTickets => in_shell(view! { <MyItTicketsPage /> }.into_any()),
        Screen::ItTicketNew => in_shell(view! { <ItTicketNewPage /> }.into_any()),
        Screen::SupervisorDashboard => {
            in_shell(view! { <RoleDashboard role=Role::Supervisor /> }.into_any())
        }
        Screen::CashApprovals => in_shell(view! { <CashApprovalsPage /> }.into_any()),
        Screen::RequisitionApprovals => {
            in_shell(view! { <RequisitionApprovalsPage /> }.into_any())
        }
        Screen::LeaveApprovals => in_shell(view! { <LeaveApprovalsPage /> }.into_any()),
        Screen::FinanceDashboard => {
            in_shell(view! { <RoleDashboard role=Role::Finance /> }.into_any())
        }
        Screen::PettyCashDashboard => {
            // Petty-cash operations live under the finance summary endpoint
            in_shell(view! { <RoleDashboard role=Role::Finance /> }.into_any())
        }
        Screen::InvoiceList => in_shell(view! { <InvoiceListPage /> }.into_any()),
        Screen::HrDashboard => in_shell(view! { <RoleDashboard role=Role::Hr /> }.into_any()),
        Screen::ItDashboard => in_shell(view! { <RoleDashboard role=Role::It /> }.into_any()),
        Screen::ItTicketQueue => in_shell(view! { <ItTicketQueuePage /> }.into_any()),
        Screen::SupplyChainDashboard => {
            in_shell(view! { <RoleDashboard role=Role::SupplyChain /> }.into_any())
        }
        Screen::RequisitionReview => in_shell(view! { <RequisitionReviewPage /> }.into_any()),
        Screen::RfqList => in_shell(view! { <RfqListPage /> }.into_any()),
        Screen::BuyerDashboard => in_shell(view! { <RoleDashboard role=Role::Buyer /> }.into_any()),
        Screen::AdminDashboard => in_shell(view! { <RoleDashboard role=Role::Admin /> }.into_any()),
        Screen::SupplierDashboard => {
            in_shell(view! { <RoleDashboard role=Role::Supplier /> }.into_any())
        }
    }
}

//! Declarative route table.
//!
//! Routes are fully defined at startup; the matcher is a plain segment walk
//! with `:param` placeholders, independent of any framework router. Unknown
//! paths have no entry here — the router treats them as a wildcard redirect
//! to `/dashboard`.

use contracts::system::roles::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    ExternalQuote,
    DashboardRedirect,
    EmployeeDashboard,
    CashRequestList,
    CashRequestNew,
    MyRequisitions,
    LeaveRequestList,
    LeaveRequestNew,
    MyItTickets,
    ItTicketNew,
    SupervisorDashboard,
    CashApprovals,
    RequisitionApprovals,
    LeaveApprovals,
    FinanceDashboard,
    PettyCashDashboard,
    InvoiceList,
    HrDashboard,
    ItDashboard,
    ItTicketQueue,
    SupplyChainDashboard,
    RequisitionReview,
    RfqList,
    BuyerDashboard,
    AdminDashboard,
    SupplierDashboard,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pub pattern: &'static str,
    /// Empty means "any authenticated user"
    pub allowed_roles: &'static [Role],
    /// When set and the user matches neither this nor the allowed set,
    /// the gate redirects even for admin
    pub fallback_role: Option<Role>,
    /// Sentinel: route explicitly excludes the admin override
    pub admin_excluded: bool,
    /// Public routes skip the gate entirely (login, external quote)
    pub public: bool,
    pub screen: Screen,
}

impl RouteRule {
    const fn gated(pattern: &'static str, allowed_roles: &'static [Role], screen: Screen) -> Self {
        Self {
            pattern,
            allowed_roles,
            fallback_role: None,
            admin_excluded: false,
            public: false,
            screen,
        }
    }

    const fn with_fallback(
        pattern: &'static str,
        allowed_roles: &'static [Role],
        fallback_role: Role,
        screen: Screen,
    ) -> Self {
        Self {
            pattern,
            allowed_roles,
            fallback_role: Some(fallback_role),
            admin_excluded: false,
            public: false,
            screen,
        }
    }

    const fn public(pattern: &'static str, screen: Screen) -> Self {
        Self {
            pattern,
            allowed_roles: &[],
            fallback_role: None,
            admin_excluded: false,
            public: true,
            screen,
        }
    }
}

use Role::*;

pub static ROUTES: &[RouteRule] = &[
    RouteRule::public("/login", Screen::Login),
    RouteRule::public("/external-quote/:token", Screen::ExternalQuote),
    RouteRule::gated("/", &[], Screen::DashboardRedirect),
    RouteRule::gated("/dashboard", &[], Screen::DashboardRedirect),
    // Employee area
    RouteRule::gated("/employee/dashboard", &[Employee], Screen::EmployeeDashboard),
    RouteRule::gated("/employee/cash-requests", &[Employee], Screen::CashRequestList),
    RouteRule::gated("/employee/cash-requests/new", &[Employee], Screen::CashRequestNew),
    RouteRule::gated("/employee/requisitions", &[Employee], Screen::MyRequisitions),
    RouteRule::gated("/employee/leave-requests", &[Employee], Screen::LeaveRequestList),
    RouteRule::gated("/employee/leave-requests/new", &[Employee], Screen::LeaveRequestNew),
    RouteRule::gated("/employee/it-tickets", &[Employee], Screen::MyItTickets),
    RouteRule::gated("/employee/it-tickets/new", &[Employee], Screen::ItTicketNew),
    // Supervisor area
    RouteRule::gated("/supervisor/dashboard", &[Supervisor], Screen::SupervisorDashboard),
    RouteRule::gated(
        "/supervisor/cash-approvals",
        &[Supervisor, Finance, Hr, It, SupplyChain, Admin],
        Screen::CashApprovals,
    ),
    RouteRule::gated(
        "/supervisor/requisition-approvals",
        &[Supervisor],
        Screen::RequisitionApprovals,
    ),
    RouteRule::gated("/supervisor/leave-approvals", &[Supervisor, Hr], Screen::LeaveApprovals),
    // Finance area
    RouteRule::gated("/finance/dashboard", &[Finance], Screen::FinanceDashboard),
    RouteRule::gated("/pettycash/dashboard", &[Finance], Screen::PettyCashDashboard),
    RouteRule::gated("/finance/invoices", &[Finance], Screen::InvoiceList),
    // HR area
    RouteRule::gated("/hr/dashboard", &[Hr], Screen::HrDashboard),
    RouteRule::gated("/hr/leave-approvals", &[Hr], Screen::LeaveApprovals),
    // IT area
    RouteRule::gated("/it/dashboard", &[It], Screen::ItDashboard),
    RouteRule::gated("/it/tickets", &[It], Screen::ItTicketQueue),
    // Supply chain area
    RouteRule::gated("/supply-chain/dashboard", &[SupplyChain], Screen::SupplyChainDashboard),
    RouteRule::gated(
        "/supply-chain/requisition-review",
        &[SupplyChain],
        Screen::RequisitionReview,
    ),
    RouteRule::gated("/supply-chain/rfqs", &[SupplyChain, Buyer], Screen::RfqList),
    // Buyer area
    RouteRule::gated("/buyer/dashboard", &[Buyer], Screen::BuyerDashboard),
    RouteRule::gated("/buyer/rfqs", &[Buyer], Screen::RfqList),
    // Supplier portal: internal roles (admin included) are bounced to their
    // own dashboard, suppliers stay
    RouteRule::with_fallback("/supplier/dashboard", &[Supplier], Supplier, Screen::SupplierDashboard),
    // Admin area
    RouteRule::gated("/admin/dashboard", &[Admin], Screen::AdminDashboard),
];

/// Path parameters captured by `:param` segments
pub type RouteParams = Vec<(&'static str, String)>;

/// Match a pathname against the static table.
///
/// Trailing slashes are ignored; query and hash never reach this function.
/// Returns `None` for unknown paths (wildcard handled by the caller).
pub fn match_route(path: &str) -> Option<(&'static RouteRule, RouteParams)> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    'rules: for rule in ROUTES {
        let pattern: Vec<&str> = rule.pattern.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            continue;
        }
        let mut params = RouteParams::new();
        for (expected, actual) in pattern.iter().zip(segments.iter()) {
            if let Some(name) = expected.strip_prefix(':') {
                params.push((name, (*actual).to_string()));
            } else if expected != actual {
                continue 'rules;
            }
        }
        return Some((rule, params));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        let (rule, params) = match_route("/employee/dashboard").unwrap();
        assert_eq!(rule.screen, Screen::EmployeeDashboard);
        assert!(params.is_empty());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let (rule, _) = match_route("/finance/invoices/").unwrap();
        assert_eq!(rule.screen, Screen::InvoiceList);
    }

    #[test]
    fn test_param_capture() {
        let (rule, params) = match_route("/external-quote/tok-12345").unwrap();
        assert_eq!(rule.screen, Screen::ExternalQuote);
        assert_eq!(params, vec![("token", "tok-12345".to_string())]);
    }

    #[test]
    fn test_root_resolves_to_dashboard_redirect() {
        let (rule, _) = match_route("/").unwrap();
        assert_eq!(rule.screen, Screen::DashboardRedirect);
    }

    #[test]
    fn test_unknown_path_does_not_match() {
        assert!(match_route("/no/such/page").is_none());
        assert!(match_route("/employee").is_none());
        assert!(match_route("/employee/cash-requests/123/edit").is_none());
    }

    #[test]
    fn test_nested_path_requires_full_length() {
        // "/employee/cash-requests/new" must not be swallowed by the list route
        let (rule, _) = match_route("/employee/cash-requests/new").unwrap();
        assert_eq!(rule.screen, Screen::CashRequestNew);
    }
}

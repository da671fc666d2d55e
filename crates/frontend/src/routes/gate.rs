//! Role hierarchy gate.
//!
//! Pure decision function evaluated before mounting any routed screen. The
//! session is passed in explicitly so the gate can be unit tested without a
//! component tree. Failure mode is always a redirect, never an error page.

use contracts::system::roles::Role;

use super::table::RouteRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether the routed screen renders for the given role.
///
/// Order of the checks matters: a configured `fallback_role` that matches
/// neither the user nor the allowed set redirects before the admin override
/// is consulted, so a supplier-portal route with `fallback_role = Supplier`
/// bounces admin too. A fallback-role user on such a route renders under the
/// base authentication check only.
pub fn evaluate_gate(role: Option<Role>, rule: &RouteRule) -> GateDecision {
    if rule.public {
        return GateDecision::Render;
    }

    let Some(role) = role else {
        return GateDecision::RedirectToLogin;
    };

    // No role restriction beyond authentication
    if rule.allowed_roles.is_empty() {
        return GateDecision::Render;
    }

    let has_direct_access = rule.allowed_roles.contains(&role);
    if has_direct_access {
        return GateDecision::Render;
    }

    if let Some(fallback) = rule.fallback_role {
        if role != fallback {
            return GateDecision::RedirectToDashboard;
        }
        return GateDecision::Render;
    }

    if role == Role::Admin && !rule.admin_excluded {
        return GateDecision::Render;
    }

    GateDecision::RedirectToDashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::table::{match_route, Screen};

    fn rule(
        allowed_roles: &'static [Role],
        fallback_role: Option<Role>,
        admin_excluded: bool,
    ) -> RouteRule {
        RouteRule {
            pattern: "/test",
            allowed_roles,
            fallback_role,
            admin_excluded,
            public: false,
            screen: Screen::EmployeeDashboard,
        }
    }

    #[test]
    fn test_unauthenticated_always_redirects_to_login() {
        assert_eq!(
            evaluate_gate(None, &rule(&[], None, false)),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate_gate(None, &rule(&[Role::Admin], None, false)),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_unrestricted_route_renders_for_any_role() {
        for role in Role::all() {
            assert_eq!(
                evaluate_gate(Some(*role), &rule(&[], None, false)),
                GateDecision::Render
            );
        }
    }

    #[test]
    fn test_direct_access_renders() {
        assert_eq!(
            evaluate_gate(Some(Role::Finance), &rule(&[Role::Finance], None, false)),
            GateDecision::Render
        );
    }

    #[test]
    fn test_non_member_redirects_to_dashboard() {
        assert_eq!(
            evaluate_gate(Some(Role::Buyer), &rule(&[Role::Finance], None, false)),
            GateDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_admin_override_on_restricted_route() {
        assert_eq!(
            evaluate_gate(Some(Role::Admin), &rule(&[Role::Finance], None, false)),
            GateDecision::Render
        );
    }

    #[test]
    fn test_admin_excluded_sentinel_blocks_override() {
        assert_eq!(
            evaluate_gate(Some(Role::Admin), &rule(&[Role::Supplier], None, true)),
            GateDecision::RedirectToDashboard
        );
    }

    // Regression: fallback veto has precedence over the admin override.
    #[test]
    fn test_fallback_veto_beats_admin_override() {
        let r = rule(&[Role::Supplier], Some(Role::Supplier), false);
        assert_eq!(
            evaluate_gate(Some(Role::Admin), &r),
            GateDecision::RedirectToDashboard
        );
        assert_eq!(
            evaluate_gate(Some(Role::Employee), &r),
            GateDecision::RedirectToDashboard
        );
        assert_eq!(evaluate_gate(Some(Role::Supplier), &r), GateDecision::Render);
    }

    #[test]
    fn test_fallback_role_renders_under_base_guard_only() {
        let r = rule(&[Role::Finance], Some(Role::Supervisor), false);
        assert_eq!(
            evaluate_gate(Some(Role::Supervisor), &r),
            GateDecision::Render
        );
    }

    // End-to-end scenarios over the real table
    #[test]
    fn test_employee_on_admin_dashboard_is_redirected() {
        let (rule, _) = match_route("/admin/dashboard").unwrap();
        assert_eq!(
            evaluate_gate(Some(Role::Employee), rule),
            GateDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_admin_on_supervisor_cash_approvals_renders() {
        let (rule, _) = match_route("/supervisor/cash-approvals").unwrap();
        assert_eq!(evaluate_gate(Some(Role::Admin), rule), GateDecision::Render);
    }

    #[test]
    fn test_buyer_on_pettycash_dashboard_is_redirected() {
        let (rule, _) = match_route("/pettycash/dashboard").unwrap();
        assert_eq!(
            evaluate_gate(Some(Role::Buyer), rule),
            GateDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_admin_on_supplier_portal_is_redirected() {
        let (rule, _) = match_route("/supplier/dashboard").unwrap();
        assert_eq!(
            evaluate_gate(Some(Role::Admin), rule),
            GateDecision::RedirectToDashboard
        );
        assert_eq!(
            evaluate_gate(Some(Role::Supplier), rule),
            GateDecision::Render
        );
    }

    #[test]
    fn test_public_route_renders_without_session() {
        let (rule, _) = match_route("/external-quote/tok-1").unwrap();
        assert_eq!(evaluate_gate(None, rule), GateDecision::Render);
    }
}

use serde::{Deserialize, Serialize};

/// Organizational role of an authenticated user.
///
/// Roles carry a hierarchy level used by the route gate: employee and
/// supplier sit at the bottom, supervisors above them, department heads
/// (finance, hr, it, supply chain, buyer) share one level, admin is the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Supervisor,
    Finance,
    Hr,
    It,
    SupplyChain,
    Buyer,
    Admin,
    Supplier,
}

impl Role {
    /// Numeric access level. Admin is always the maximum.
    pub fn access_level(&self) -> u8 {
        match self {
            Role::Employee | Role::Supplier => 1,
            Role::Supervisor => 2,
            Role::Finance | Role::Hr | Role::It | Role::SupplyChain | Role::Buyer => 3,
            Role::Admin => 4,
        }
    }

    /// Wire code of the role (snake_case, matches serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Supervisor => "supervisor",
            Role::Finance => "finance",
            Role::Hr => "hr",
            Role::It => "it",
            Role::SupplyChain => "supply_chain",
            Role::Buyer => "buyer",
            Role::Admin => "admin",
            Role::Supplier => "supplier",
        }
    }

    /// Human readable label for headers and menus
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Supervisor => "Supervisor",
            Role::Finance => "Finance",
            Role::Hr => "HR",
            Role::It => "IT",
            Role::SupplyChain => "Supply Chain",
            Role::Buyer => "Buyer",
            Role::Admin => "Administrator",
            Role::Supplier => "Supplier",
        }
    }

    /// Home dashboard path for the role; `/dashboard` resolves here.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Employee => "/employee/dashboard",
            Role::Supervisor => "/supervisor/dashboard",
            Role::Finance => "/finance/dashboard",
            Role::Hr => "/hr/dashboard",
            Role::It => "/it/dashboard",
            Role::SupplyChain => "/supply-chain/dashboard",
            Role::Buyer => "/buyer/dashboard",
            Role::Admin => "/admin/dashboard",
            Role::Supplier => "/supplier/dashboard",
        }
    }

    /// Parse the wire code back into a role
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "employee" => Some(Role::Employee),
            "supervisor" => Some(Role::Supervisor),
            "finance" => Some(Role::Finance),
            "hr" => Some(Role::Hr),
            "it" => Some(Role::It),
            "supply_chain" => Some(Role::SupplyChain),
            "buyer" => Some(Role::Buyer),
            "admin" => Some(Role::Admin),
            "supplier" => Some(Role::Supplier),
            _ => None,
        }
    }

    /// All roles in declaration order
    pub fn all() -> &'static [Role] {
        &[
            Role::Employee,
            Role::Supervisor,
            Role::Finance,
            Role::Hr,
            Role::It,
            Role::SupplyChain,
            Role::Buyer,
            Role::Admin,
            Role::Supplier,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_level_is_maximum() {
        for role in Role::all() {
            assert!(role.access_level() <= Role::Admin.access_level());
        }
    }

    #[test]
    fn test_hierarchy_levels() {
        assert_eq!(Role::Employee.access_level(), 1);
        assert_eq!(Role::Supervisor.access_level(), 2);
        assert_eq!(Role::Finance.access_level(), 3);
        assert_eq!(Role::SupplyChain.access_level(), 3);
        assert_eq!(Role::Admin.access_level(), 4);
    }

    #[test]
    fn test_parse_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
        assert_eq!(Role::parse("warehouse"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::SupplyChain).unwrap();
        assert_eq!(json, "\"supply_chain\"");
        let back: Role = serde_json::from_str("\"supply_chain\"").unwrap();
        assert_eq!(back, Role::SupplyChain);
    }
}

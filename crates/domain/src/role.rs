use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shiftscope_core::AppError;

/// Roles assignable to a user account.
///
/// The hierarchy is non-linear: a team leader holds a restricted subset of
/// company-admin capabilities rather than a strict rank below it. Each role's
/// grant set is listed independently in [`crate::PermissionCatalog`] so it
/// stays auditable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator; company-agnostic when no company is attached.
    SuperAdmin,
    /// Administrator of a single company.
    CompanyAdmin,
    /// Leader of one team inside a company.
    TeamLeader,
    /// Regular member of a company.
    CompanyMember,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::CompanyAdmin => "company_admin",
            Self::TeamLeader => "team_leader",
            Self::CompanyMember => "company_member",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SuperAdmin,
            Role::CompanyAdmin,
            Role::TeamLeader,
            Role::CompanyMember,
        ];

        ALL
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Self::SuperAdmin),
            "company_admin" => Ok(Self::CompanyAdmin),
            "team_leader" => Ok(Self::TeamLeader),
            "company_member" => Ok(Self::CompanyMember),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;

    #[test]
    fn storage_strings_round_trip() {
        for role in Role::all() {
            let parsed = Role::from_str(role.as_str());
            assert_eq!(parsed.ok(), Some(*role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("intern").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let encoded = serde_json::to_string(&Role::TeamLeader);
        assert_eq!(encoded.ok().as_deref(), Some("\"team_leader\""));
    }
}

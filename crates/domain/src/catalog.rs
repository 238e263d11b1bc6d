use std::collections::HashMap;

use crate::{Permission, Role};

/// Immutable role-to-permission table.
///
/// Built once at process start and passed by reference into every guard
/// evaluation; assignments are fixed at build time and never change at
/// runtime. Tests may construct alternate catalogs through
/// [`PermissionCatalog::with_grants`].
///
/// Each role's list is flat and independently auditable: a role holds exactly
/// the tokens listed for it, with no inheritance between roles.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    grants: HashMap<Role, Vec<Permission>>,
}

impl PermissionCatalog {
    /// Builds the standard Shiftscope catalog.
    #[must_use]
    pub fn standard() -> Self {
        let admin_grants = vec![
            Permission::DashboardView,
            Permission::DashboardCompany,
            Permission::CompanyProfileView,
            Permission::CompanyProfileEdit,
            Permission::CompanySettingsView,
            Permission::CompanySettingsEdit,
            Permission::PaymentView,
            Permission::PaymentManage,
            Permission::UsersViewAll,
            Permission::UsersManageAll,
            Permission::ReportsViewAll,
            Permission::ReportsDownloadAll,
            Permission::TasksViewAll,
            Permission::TasksManageAll,
            Permission::TasksAssignAll,
            Permission::MessagesViewAll,
            Permission::MessagesSendAll,
            Permission::RatingsViewAll,
            Permission::RatingsGiveAll,
            Permission::FeedbackViewAll,
            Permission::FeedbackSend,
            Permission::LeaveApproveAll,
            Permission::CorrectionApproveAll,
            Permission::AttendanceViewAll,
            Permission::AttendancePolicyView,
            Permission::AttendancePolicyEdit,
            Permission::HolidayView,
            Permission::HolidayManage,
        ];

        Self::with_grants([
            // Super admins and company admins currently share one grant set;
            // super admins additionally gain global scope when they carry no
            // company association (resolved per request, not in the catalog).
            (Role::SuperAdmin, admin_grants.clone()),
            (Role::CompanyAdmin, admin_grants),
            (
                Role::TeamLeader,
                vec![
                    Permission::DashboardView,
                    Permission::DashboardTeam,
                    Permission::UsersViewTeam,
                    Permission::UsersManageTeam,
                    Permission::ReportsViewTeam,
                    Permission::ReportsDownloadTeam,
                    Permission::TasksViewTeam,
                    Permission::TasksManageTeam,
                    Permission::TasksAssignTeam,
                    Permission::MessagesViewTeam,
                    Permission::MessagesSendTeam,
                    Permission::RatingsViewTeam,
                    Permission::RatingsGiveTeam,
                    Permission::FeedbackViewTeam,
                    Permission::FeedbackSend,
                    Permission::LeaveApproveTeam,
                    Permission::CorrectionApproveTeam,
                    Permission::AttendanceViewTeam,
                    Permission::AttendancePolicyView,
                    Permission::HolidayView,
                ],
            ),
            (
                Role::CompanyMember,
                vec![
                    Permission::DashboardView,
                    Permission::TasksViewTeam,
                    Permission::MessagesViewTeam,
                    Permission::MessagesSendTeam,
                    Permission::FeedbackSend,
                    Permission::AttendancePolicyView,
                    Permission::HolidayView,
                ],
            ),
        ])
    }

    /// Builds a catalog from explicit role grant lists.
    #[must_use]
    pub fn with_grants(grants: impl IntoIterator<Item = (Role, Vec<Permission>)>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    /// Returns whether the role holds the permission.
    #[must_use]
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|granted| granted.contains(&permission))
    }

    /// Returns whether the role holds at least one of the permissions.
    ///
    /// An empty input list yields `false`.
    #[must_use]
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(role, *permission))
    }

    /// Returns whether the role holds every one of the permissions.
    ///
    /// An empty input list yields `true` (vacuous truth); this deliberately
    /// differs from [`PermissionCatalog::has_any_permission`] on empty input.
    #[must_use]
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(role, *permission))
    }

    /// Returns whether the role appears in the allow-list.
    #[must_use]
    pub fn has_role(&self, role: Role, allowed_roles: &[Role]) -> bool {
        allowed_roles.contains(&role)
    }

    /// Returns the full grant list for a role, in catalog order.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &[Permission] {
        self.grants.get(&role).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::PermissionCatalog;
    use crate::{Permission, Role};

    #[test]
    fn admins_hold_company_wide_grants() {
        let catalog = PermissionCatalog::standard();
        assert!(catalog.has_permission(Role::CompanyAdmin, Permission::UsersManageAll));
        assert!(catalog.has_permission(Role::SuperAdmin, Permission::LeaveApproveAll));
    }

    #[test]
    fn company_member_has_no_company_wide_task_grant() {
        let catalog = PermissionCatalog::standard();
        assert!(!catalog.has_any_permission(Role::CompanyMember, &[Permission::TasksManageAll]));
    }

    #[test]
    fn team_leader_holds_both_team_task_grants() {
        let catalog = PermissionCatalog::standard();
        assert!(catalog.has_all_permissions(
            Role::TeamLeader,
            &[Permission::TasksViewTeam, Permission::TasksAssignTeam],
        ));
    }

    #[test]
    fn empty_input_asymmetry_holds_for_every_role() {
        let catalog = PermissionCatalog::standard();
        for role in Role::all() {
            assert!(catalog.has_all_permissions(*role, &[]));
            assert!(!catalog.has_any_permission(*role, &[]));
        }
    }

    #[test]
    fn role_allow_list_membership() {
        let catalog = PermissionCatalog::standard();
        assert!(catalog.has_role(Role::TeamLeader, &[Role::CompanyAdmin, Role::TeamLeader]));
        assert!(!catalog.has_role(Role::CompanyMember, &[Role::SuperAdmin]));
    }

    #[test]
    fn missing_role_entry_denies_instead_of_failing() {
        let catalog = PermissionCatalog::with_grants([(
            Role::CompanyAdmin,
            vec![Permission::DashboardView],
        )]);
        assert!(!catalog.has_permission(Role::TeamLeader, Permission::DashboardView));
        assert_eq!(catalog.permissions_for(Role::TeamLeader), &[]);
    }

    #[test]
    fn team_and_member_grants_stay_within_admin_breadth() {
        // Every team or self scoped grant must have a company-wide or equal
        // counterpart held by admins for the same resource family.
        let catalog = PermissionCatalog::standard();
        for permission in catalog.permissions_for(Role::TeamLeader).to_vec() {
            let family = permission
                .as_str()
                .split(':')
                .next()
                .map(str::to_owned)
                .unwrap_or_default();
            let admin_covers = catalog
                .permissions_for(Role::CompanyAdmin)
                .iter()
                .any(|granted| granted.as_str().starts_with(&family));
            assert!(admin_covers, "no admin grant covers family '{family}'");
        }
    }

    proptest! {
        #[test]
        fn membership_check_matches_grant_list(
            role_index in 0usize..4,
            permission_index in 0usize..Permission::all().len(),
        ) {
            let catalog = PermissionCatalog::standard();
            let role = Role::all()[role_index];
            let permission = Permission::all()[permission_index];

            let listed = catalog.permissions_for(role).contains(&permission);
            prop_assert_eq!(catalog.has_permission(role, permission), listed);
        }
    }
}

use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shiftscope_core::AppError;

/// Atomic capability tokens checked by authorization guards.
///
/// Each token is `resource:action` or `resource:action:scope`; the `:all`
/// suffix grants company-wide breadth, `:team` restricts to the actor's own
/// team, and no suffix means the capability is self-contained. The wire and
/// storage representation is always the token string, so serde goes through
/// [`Permission::as_str`] rather than the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// View the personal dashboard.
    DashboardView,
    /// View company-wide dashboard widgets.
    DashboardCompany,
    /// View team dashboard widgets.
    DashboardTeam,
    /// View the company profile.
    CompanyProfileView,
    /// Edit the company profile.
    CompanyProfileEdit,
    /// View company settings.
    CompanySettingsView,
    /// Edit company settings.
    CompanySettingsEdit,
    /// View payment history.
    PaymentView,
    /// Manage payment configuration.
    PaymentManage,
    /// View every user in the company.
    UsersViewAll,
    /// View users in the actor's own team.
    UsersViewTeam,
    /// Manage every user in the company.
    UsersManageAll,
    /// Manage users in the actor's own team.
    UsersManageTeam,
    /// View all reports.
    ReportsViewAll,
    /// View the team's reports.
    ReportsViewTeam,
    /// Download all reports.
    ReportsDownloadAll,
    /// Download the team's reports.
    ReportsDownloadTeam,
    /// View every task in the company.
    TasksViewAll,
    /// View the team's tasks.
    TasksViewTeam,
    /// Manage every task in the company.
    TasksManageAll,
    /// Manage the team's tasks.
    TasksManageTeam,
    /// Assign any task in the company.
    TasksAssignAll,
    /// Assign tasks within the team.
    TasksAssignTeam,
    /// View all messages.
    MessagesViewAll,
    /// View team messages.
    MessagesViewTeam,
    /// Send messages company-wide.
    MessagesSendAll,
    /// Send messages within the team.
    MessagesSendTeam,
    /// View all ratings.
    RatingsViewAll,
    /// View the team's ratings.
    RatingsViewTeam,
    /// Rate any user in the company.
    RatingsGiveAll,
    /// Rate users within the team.
    RatingsGiveTeam,
    /// View all feedback.
    FeedbackViewAll,
    /// View the team's feedback.
    FeedbackViewTeam,
    /// Send feedback.
    FeedbackSend,
    /// Approve any leave request in the company.
    LeaveApproveAll,
    /// Approve leave requests from team members.
    LeaveApproveTeam,
    /// Approve any attendance-correction request.
    CorrectionApproveAll,
    /// Approve correction requests from team members.
    CorrectionApproveTeam,
    /// View attendance records for the company.
    AttendanceViewAll,
    /// View attendance records for the team.
    AttendanceViewTeam,
    /// View the attendance policy.
    AttendancePolicyView,
    /// Edit the attendance policy.
    AttendancePolicyEdit,
    /// View the holiday calendar.
    HolidayView,
    /// Manage the holiday calendar.
    HolidayManage,
}

impl Permission {
    /// Returns the stable token string for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardView => "dashboard:view",
            Self::DashboardCompany => "dashboard:company",
            Self::DashboardTeam => "dashboard:team",
            Self::CompanyProfileView => "company:profile:view",
            Self::CompanyProfileEdit => "company:profile:edit",
            Self::CompanySettingsView => "company:settings:view",
            Self::CompanySettingsEdit => "company:settings:edit",
            Self::PaymentView => "payment:view",
            Self::PaymentManage => "payment:manage",
            Self::UsersViewAll => "users:view:all",
            Self::UsersViewTeam => "users:view:team",
            Self::UsersManageAll => "users:manage:all",
            Self::UsersManageTeam => "users:manage:team",
            Self::ReportsViewAll => "reports:view:all",
            Self::ReportsViewTeam => "reports:view:team",
            Self::ReportsDownloadAll => "reports:download:all",
            Self::ReportsDownloadTeam => "reports:download:team",
            Self::TasksViewAll => "tasks:view:all",
            Self::TasksViewTeam => "tasks:view:team",
            Self::TasksManageAll => "tasks:manage:all",
            Self::TasksManageTeam => "tasks:manage:team",
            Self::TasksAssignAll => "tasks:assign:all",
            Self::TasksAssignTeam => "tasks:assign:team",
            Self::MessagesViewAll => "messages:view:all",
            Self::MessagesViewTeam => "messages:view:team",
            Self::MessagesSendAll => "messages:send:all",
            Self::MessagesSendTeam => "messages:send:team",
            Self::RatingsViewAll => "ratings:view:all",
            Self::RatingsViewTeam => "ratings:view:team",
            Self::RatingsGiveAll => "ratings:give:all",
            Self::RatingsGiveTeam => "ratings:give:team",
            Self::FeedbackViewAll => "feedback:view:all",
            Self::FeedbackViewTeam => "feedback:view:team",
            Self::FeedbackSend => "feedback:send",
            Self::LeaveApproveAll => "leave:approve:all",
            Self::LeaveApproveTeam => "leave:approve:team",
            Self::CorrectionApproveAll => "correction:approve:all",
            Self::CorrectionApproveTeam => "correction:approve:team",
            Self::AttendanceViewAll => "attendance:view:all",
            Self::AttendanceViewTeam => "attendance:view:team",
            Self::AttendancePolicyView => "attendance:policy:view",
            Self::AttendancePolicyEdit => "attendance:policy:edit",
            Self::HolidayView => "holiday:view",
            Self::HolidayManage => "holiday:manage",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::DashboardView,
            Permission::DashboardCompany,
            Permission::DashboardTeam,
            Permission::CompanyProfileView,
            Permission::CompanyProfileEdit,
            Permission::CompanySettingsView,
            Permission::CompanySettingsEdit,
            Permission::PaymentView,
            Permission::PaymentManage,
            Permission::UsersViewAll,
            Permission::UsersViewTeam,
            Permission::UsersManageAll,
            Permission::UsersManageTeam,
            Permission::ReportsViewAll,
            Permission::ReportsViewTeam,
            Permission::ReportsDownloadAll,
            Permission::ReportsDownloadTeam,
            Permission::TasksViewAll,
            Permission::TasksViewTeam,
            Permission::TasksManageAll,
            Permission::TasksManageTeam,
            Permission::TasksAssignAll,
            Permission::TasksAssignTeam,
            Permission::MessagesViewAll,
            Permission::MessagesViewTeam,
            Permission::MessagesSendAll,
            Permission::MessagesSendTeam,
            Permission::RatingsViewAll,
            Permission::RatingsViewTeam,
            Permission::RatingsGiveAll,
            Permission::RatingsGiveTeam,
            Permission::FeedbackViewAll,
            Permission::FeedbackViewTeam,
            Permission::FeedbackSend,
            Permission::LeaveApproveAll,
            Permission::LeaveApproveTeam,
            Permission::CorrectionApproveAll,
            Permission::CorrectionApproveTeam,
            Permission::AttendanceViewAll,
            Permission::AttendanceViewTeam,
            Permission::AttendancePolicyView,
            Permission::AttendancePolicyEdit,
            Permission::HolidayView,
            Permission::HolidayManage,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|permission| permission.as_str() == value)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown permission token '{value}'")))
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::from_str(&token).map_err(|error| D::Error::custom(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::Permission;

    #[test]
    fn token_strings_round_trip() {
        for permission in Permission::all() {
            let parsed = Permission::from_str(permission.as_str());
            assert_eq!(parsed.ok(), Some(*permission));
        }
    }

    #[test]
    fn token_strings_are_unique() {
        let tokens: HashSet<&str> = Permission::all().iter().map(Permission::as_str).collect();
        assert_eq!(tokens.len(), Permission::all().len());
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(Permission::from_str("tasks:destroy:all").is_err());
    }

    #[test]
    fn serde_uses_token_string() {
        let encoded = serde_json::to_string(&Permission::TasksViewTeam);
        assert_eq!(encoded.ok().as_deref(), Some("\"tasks:view:team\""));

        let decoded: Result<Permission, _> = serde_json::from_str("\"leave:approve:all\"");
        assert_eq!(decoded.ok(), Some(Permission::LeaveApproveAll));
    }
}

use crate::domain::earnings::DashboardStats;
use crate::domain::user::User;

/// Data required to render the dashboard.
pub struct DashboardData {
    /// Headline cards plus the two overview chart series.
    pub stats: DashboardStats,
    /// Most recently registered accounts.
    pub recent_users: Vec<User>,
}

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{EarningsApi, UserApi};
use crate::dto::main::DashboardData;
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// How many of the newest accounts the dashboard lists.
const RECENT_ACCOUNTS: usize = 5;

/// Loads the headline stats and the recent accounts for the dashboard.
pub async fn load_dashboard<A>(api: &A, user: &AuthenticatedUser) -> ServiceResult<DashboardData>
where
    A: EarningsApi + UserApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let stats = api.dashboard_stats().await?;
    let recent = api
        .list_users(&ListQuery::new().paginate(1, RECENT_ACCOUNTS))
        .await?;

    Ok(DashboardData {
        stats,
        recent_users: recent.records,
    })
}

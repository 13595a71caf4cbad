use crate::domain::earnings::{CommissionEarning, Payout, SubscriptionEarning};
use crate::dto::ListFilters;
use crate::pagination::TablePage;

pub struct CommissionEarningsPageData {
    pub earnings: TablePage<CommissionEarning>,
    pub filters: ListFilters,
}

pub struct SubscriptionEarningsPageData {
    pub earnings: TablePage<SubscriptionEarning>,
    pub filters: ListFilters,
}

pub struct PayoutsPageData {
    pub payouts: TablePage<Payout>,
    pub filters: ListFilters,
}

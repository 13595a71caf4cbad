use crate::SERVICE_ACCESS_ROLE;
use crate::api::EarningsApi;
use crate::domain::earnings::CommissionEarning;
use crate::dto::earnings::{
    CommissionEarningsPageData, PayoutsPageData, SubscriptionEarningsPageData,
};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::TablePage;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Page size used when walking every page of the current filter for export.
const EXPORT_PAGE_SIZE: usize = 100;
/// Upper bound on exported pages; the backend caps reports well below this.
const EXPORT_PAGE_CAP: usize = 50;

/// Loads one page of commission earnings.
pub async fn load_commission_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<CommissionEarningsPageData>
where
    A: EarningsApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.commission_earnings(&query).await?;

    Ok(CommissionEarningsPageData {
        filters: (&query).into(),
        earnings: TablePage::new(page, query.page),
    })
}

/// Loads one page of subscription earnings.
pub async fn load_subscription_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<SubscriptionEarningsPageData>
where
    A: EarningsApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.subscription_earnings(&query).await?;

    Ok(SubscriptionEarningsPageData {
        filters: (&query).into(),
        earnings: TablePage::new(page, query.page),
    })
}

/// Loads one page of payout requests.
pub async fn load_payouts_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<PayoutsPageData>
where
    A: EarningsApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.list_payouts(&query).await?;

    Ok(PayoutsPageData {
        filters: (&query).into(),
        payouts: TablePage::new(page, query.page),
    })
}

/// Walks every page matching the current filter.
async fn collect_commission_rows<A>(
    api: &A,
    query: &ListQuery,
) -> ServiceResult<Vec<CommissionEarning>>
where
    A: EarningsApi + ?Sized,
{
    let mut query = query.clone().paginate(1, EXPORT_PAGE_SIZE);
    let mut rows = Vec::new();

    loop {
        let page = api.commission_earnings(&query).await?;
        rows.extend(page.records);
        if query.page >= page.total_pages || query.page >= EXPORT_PAGE_CAP {
            break;
        }
        query.page += 1;
    }

    Ok(rows)
}

/// Exports the commission earnings matching the current filter as CSV.
pub async fn export_commission_csv<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<Vec<u8>>
where
    A: EarningsApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let rows = collect_commission_rows(api, query).await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "Provider",
            "Item Number",
            "Transaction Price",
            "Commission",
            "Offer Type",
            "Transaction Date",
        ])
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    for row in rows {
        writer
            .write_record([
                row.provider_name.as_str(),
                row.item_number.as_str(),
                &row.transaction_price.to_string(),
                row.commission.as_str(),
                match row.offer_type {
                    crate::domain::earnings::OfferType::Service => "Service",
                    crate::domain::earnings::OfferType::Product => "Product",
                },
                &row.transaction_date.to_rfc3339(),
            ])
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::Internal(e.to_string()))
}

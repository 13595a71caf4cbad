use crate::domain::support::SupportTicket;
use crate::dto::ListFilters;
use crate::pagination::TablePage;

#[derive(Debug)]
pub struct SupportPageData {
    pub tickets: TablePage<SupportTicket>,
    pub filters: ListFilters,
}

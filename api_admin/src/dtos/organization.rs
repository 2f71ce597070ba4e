use db::models::organization::OrganizationSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<OrganizationSummary>,
}

use db::models::report::Report;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecentReportsResponse {
    pub reports: Vec<Report>,
}

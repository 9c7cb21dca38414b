//! Report Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::DailyReport;

impl ApiClient {
    /// Report for a `YYYY-MM-DD` date.
    pub async fn daily_report(&self, date: &str) -> Result<DailyReport, ApiError> {
        self.get_json("report/daily", &[("date", date.to_string())]).await
    }
}

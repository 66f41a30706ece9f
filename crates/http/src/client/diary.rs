//! Diary aggregation endpoints

use super::ApiClient;
use crate::types::{ApiResponse, DiaryDayTotals, DiaryQuery, DiaryTotals};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct AllTotalsQuery {
    id_user: i64,
}

impl ApiClient {
    /// Aggregated macros for one day of a user's diary.
    pub async fn diary_totals(&self, query: &DiaryQuery) -> ApiResponse<DiaryTotals> {
        self.execute_api(Method::POST, "/diary/total-by-date", |r| r.json(query))
            .await
    }

    /// Per-day totals across the whole diary.
    pub async fn all_diary_totals(&self, id_user: i64) -> ApiResponse<Vec<DiaryDayTotals>> {
        let query = AllTotalsQuery { id_user };
        self.execute_api(Method::GET, "/diary/all-total-by-date", |r| r.query(&query))
            .await
    }
}

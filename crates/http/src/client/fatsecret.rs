//! Third-party food database passthroughs
//!
//! The FatSecret payload shape is owned by the provider and relayed
//! by the backend as-is, so the data stays untyped JSON.

use super::ApiClient;
use crate::types::ApiResponse;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct FoodIdQuery<'a> {
    food_id: &'a str,
}

impl ApiClient {
    pub async fn fatsecret_search(&self, query: &str) -> ApiResponse<Value> {
        let params = SearchQuery { query };
        self.execute_api(Method::GET, "/fatsecret/food-search", |r| r.query(&params))
            .await
    }

    pub async fn fatsecret_food_by_id(&self, food_id: &str) -> ApiResponse<Value> {
        let params = FoodIdQuery { food_id };
        self.execute_api(Method::GET, "/fatsecret/food-by-id", |r| r.query(&params))
            .await
    }
}

//! Wire types for the Optimach backend

use chrono::NaiveDate;
use optimach_core::{Gender, UserSnapshot};
use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, serde_as};

/// The `{status, message, data}` envelope every CRUD endpoint speaks.
///
/// Application-level failures live in `status`/`message`; pages never
/// need to distinguish a server 500 from a network failure, both show
/// up here with status 500 and no data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Normalized shape for a request that never produced a server
    /// response (connection refused, timeout, unreadable body).
    pub fn network_error(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

// --- auth ---

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result. The backend reports credential failures inside an
/// HTTP 200 via `status`, in which case the token and credential
/// fields are absent.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub credential: Option<UserSnapshot>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub password: String,
}

// --- user profile ---

/// Biometric profile update, as submitted by the profile form. The
/// backend stores `have_filled_form` as a 0/1 integer and expects the
/// audit field spelled `updated_By`.
#[serde_as]
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdateRequest {
    pub id_user: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: Option<f64>,
    pub age: i32,
    pub gender: Gender,
    pub dob: NaiveDate,
    #[serde(rename = "have_filled_form")]
    #[serde_as(as = "BoolFromInt")]
    pub has_completed_profile: bool,
    #[serde(rename = "updated_By")]
    pub updated_by: String,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct UserRef {
    pub id_user: i64,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct UserRecord {
    pub id_user: i64,
    pub username: String,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    #[serde(rename = "have_filled_form", default)]
    #[serde_as(as = "BoolFromInt")]
    pub has_completed_profile: bool,
    #[serde(default)]
    #[serde_as(as = "BoolFromInt")]
    pub is_admin: bool,
    #[serde(default)]
    #[serde_as(as = "BoolFromInt")]
    pub is_active: bool,
}

// --- food log ---

/// Meal occasion a log entry is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Clone, Debug, Serialize)]
pub struct FoodLogNew {
    pub id_user: i64,
    pub food_name: String,
    pub occasion: Occasion,
    pub weight_grams: f64,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct FoodLogUpdate {
    pub id_user: i64,
    pub id_food_log: i64,
    pub food_name: String,
    pub weight_grams: f64,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FoodLogDelete {
    pub id_user: i64,
    pub id_food_log: i64,
}

/// Lookup of one day's log entries for a user, in their timezone.
#[derive(Clone, Debug, Serialize)]
pub struct FoodLogQuery {
    pub id_user: i64,
    pub created_date: NaiveDate,
    pub timezone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FoodLogEntry {
    pub id_food_log: i64,
    pub id_user: i64,
    pub food_name: String,
    pub occasion: Occasion,
    pub weight_grams: f64,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
    pub created_date: Option<NaiveDate>,
}

// --- diary ---

#[derive(Clone, Debug, Serialize)]
pub struct DiaryQuery {
    pub id_user: i64,
    pub date: NaiveDate,
}

/// Aggregated macros for one day.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DiaryTotals {
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub total_carbohydrate: f64,
    #[serde(default)]
    pub total_fat: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DiaryDayTotals {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub totals: DiaryTotals,
}

// --- food masterdata ---

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct FoodRecord {
    pub id_food: i64,
    pub food_name: String,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
    pub serving_description: Option<String>,
    #[serde(default)]
    #[serde_as(as = "BoolFromInt")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FoodNew {
    pub food_name: String,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
    pub serving_description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FoodUpdate {
    pub id_food: i64,
    pub food_name: String,
    pub calories: i64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
    pub serving_description: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FoodRef {
    pub id_food: i64,
}

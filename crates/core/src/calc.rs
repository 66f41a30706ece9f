//! Biometric helpers used by the profile form

use crate::session::Gender;
use chrono::{Datelike, NaiveDate};

/// Body-mass index in kg/m², rounded to two decimals.
///
/// Applies the application's gender adjustment (×0.98 male, ×1.02
/// female) before rounding. Returns `None` for non-positive inputs.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64, gender: Option<Gender>) -> Option<f64> {
    if !(height_cm > 0.0 && weight_kg > 0.0) {
        return None;
    }

    let height_m = height_cm / 100.0;
    let mut bmi = weight_kg / (height_m * height_m);
    match gender {
        Some(Gender::Male) => bmi *= 0.98,
        Some(Gender::Female) => bmi *= 1.02,
        None => {}
    }

    Some((bmi * 100.0).round() / 100.0)
}

/// Full years between `dob` and `today`, not counting the current year
/// until the birthday has passed.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    let today_month_day = today.month() * 100 + today.day();
    let dob_month_day = dob.month() * 100 + dob.day();
    if today_month_day < dob_month_day {
        age -= 1;
    }
    age
}

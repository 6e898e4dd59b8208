//! Core domain types for the FitTrack system.
//!
//! This module defines the fundamental types used throughout the system:
//! - User records and their persisted/derived/transient fields
//! - Field update commands
//! - BMI change reports and recommendation values
//! - Food log entries

// ============================================================================
// Derived-value constants
// ============================================================================

/// Lower bound of the healthy BMI range (inclusive)
pub const HEALTHY_BMI_MIN: f32 = 18.5;

/// Upper bound of the healthy BMI range (inclusive)
pub const HEALTHY_BMI_MAX: f32 = 24.9;

/// Height assumed when the stored height text has no parseable value
pub const DEFAULT_HEIGHT_CM: i32 = 170;

/// Calorie surplus/deficit applied outside the healthy BMI range
pub const CALORIE_ADJUSTMENT: i32 = 500;

/// Recommended daily protein in grams per kilogram of body weight
pub const PROTEIN_GRAMS_PER_KG: f32 = 1.2;

/// Diet type string that selects the non-vegetarian protein message.
/// Comparison is exact and case-sensitive; every other value is
/// treated as vegetarian.
pub const NON_VEG_DIET: &str = "Non-Veg";

// ============================================================================
// User Record
// ============================================================================

/// One person's profile plus derived metrics.
///
/// `bmi` and `recommended_calories` are derived and never persisted;
/// a freshly loaded record keeps them at zero until a recompute is
/// triggered. `daily_water_liters` and `daily_sleep_hours` are
/// session-only and also never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRecord {
    pub name: String,
    /// Body weight in kilograms
    pub weight: f32,
    /// Free-text height, expected to start with a number of centimetres
    pub height: String,
    pub age: i32,
    /// One-rep maxes in kilograms
    pub max_bench: i32,
    pub max_squat: i32,
    pub max_deadlift: i32,
    /// Derived: weight / height_m²
    pub bmi: f32,
    /// User-supplied daily intake in kcal
    pub current_calories: i32,
    /// Derived from `bmi` and `current_calories`
    pub recommended_calories: i32,
    pub diet_type: String,
    /// Transient, today only
    pub daily_water_liters: f32,
    /// Transient, today only
    pub daily_sleep_hours: i32,
}

// ============================================================================
// Field Updates
// ============================================================================

/// A single-field mutation of a [`UserRecord`].
///
/// The menu layer maps its numeric field selector onto this enum, so an
/// unrecognized selector is rejected before any value is read.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Weight(f32),
    Height(String),
    Age(i32),
    MaxBench(i32),
    MaxSquat(i32),
    MaxDeadlift(i32),
    Calories(i32),
}

// ============================================================================
// Reports and Recommendations
// ============================================================================

/// Direction of a BMI change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiDirection {
    Increased,
    Decreased,
}

/// Weight delta (kilograms) needed to reach the nearer healthy boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightAdjustment {
    Gain(f32),
    Lose(f32),
}

/// Report produced when a weight update changes the BMI.
///
/// `adjustment` is present only when the new BMI falls outside the
/// healthy range.
#[derive(Clone, Debug, PartialEq)]
pub struct BmiChange {
    pub old_bmi: f32,
    pub new_bmi: f32,
    pub direction: BmiDirection,
    pub adjustment: Option<WeightAdjustment>,
}

/// Daily protein recommendation for a record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProteinAdvice {
    pub grams: f32,
    /// True only when the diet type is exactly [`NON_VEG_DIET`]
    pub non_veg: bool,
}

// ============================================================================
// Food Log
// ============================================================================

/// One food item in a day's calorie log
#[derive(Clone, Debug, PartialEq)]
pub struct FoodEntry {
    pub name: String,
    pub grams: f32,
    pub calories_per_100g: f32,
}

//! User record behavior: derived metrics and field updates.
//!
//! This module implements the formulas attached to a [`UserRecord`]:
//! - BMI from weight and the parsed height text
//! - Recommended daily calories from BMI and current intake
//! - Protein recommendation
//! - Single-field updates with the recomputes they trigger
//! - Day-level food/water/sleep logging (transient)

use crate::types::{
    BmiChange, BmiDirection, FieldUpdate, FoodEntry, ProteinAdvice, UserRecord, WeightAdjustment,
    CALORIE_ADJUSTMENT, DEFAULT_HEIGHT_CM, HEALTHY_BMI_MIN, HEALTHY_BMI_MAX, NON_VEG_DIET,
    PROTEIN_GRAMS_PER_KG,
};

/// Parse a height string into metres.
///
/// Takes the longest leading ASCII-digit run as a number of centimetres.
/// No leading digits (or a run too large for `i32`) falls back to
/// [`DEFAULT_HEIGHT_CM`] with a warning. A literal `"0"` parses to 0 m
/// and is left to the caller's degenerate-height handling.
pub fn parse_height_meters(height: &str) -> f32 {
    let digits: String = height.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i32>() {
        Ok(cm) => cm as f32 / 100.0,
        Err(_) => {
            tracing::warn!(
                "Invalid height format {:?}, assuming {}cm",
                height,
                DEFAULT_HEIGHT_CM
            );
            DEFAULT_HEIGHT_CM as f32 / 100.0
        }
    }
}

/// Build the report for a BMI change, if there is one.
///
/// Returns `None` when the BMI did not change. The weight adjustment is
/// included only when the new BMI lies outside the healthy range; it is
/// the delta to the nearer boundary, `|target − new| × height_m²` kg.
pub fn bmi_change(old_bmi: f32, new_bmi: f32, height_m: f32) -> Option<BmiChange> {
    if new_bmi == old_bmi {
        return None;
    }

    let direction = if new_bmi > old_bmi {
        BmiDirection::Increased
    } else {
        BmiDirection::Decreased
    };

    let adjustment = if (HEALTHY_BMI_MIN..=HEALTHY_BMI_MAX).contains(&new_bmi) {
        None
    } else {
        let target_bmi = if new_bmi < HEALTHY_BMI_MIN {
            HEALTHY_BMI_MIN
        } else {
            HEALTHY_BMI_MAX
        };
        let weight_diff = (target_bmi - new_bmi) * height_m * height_m;
        if weight_diff > 0.0 {
            Some(WeightAdjustment::Gain(weight_diff))
        } else {
            Some(WeightAdjustment::Lose(weight_diff.abs()))
        }
    };

    Some(BmiChange {
        old_bmi,
        new_bmi,
        direction,
        adjustment,
    })
}

impl UserRecord {
    /// Construct a record from the full field set.
    ///
    /// Computes `bmi` and `recommended_calories` immediately. Inputs are
    /// taken as given; numeric validation happens in the input layer.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        weight: f32,
        height: String,
        age: i32,
        max_bench: i32,
        max_squat: i32,
        max_deadlift: i32,
        current_calories: i32,
        diet_type: String,
    ) -> Self {
        let mut record = Self {
            name,
            weight,
            height,
            age,
            max_bench,
            max_squat,
            max_deadlift,
            current_calories,
            diet_type,
            ..Default::default()
        };
        record.recompute_bmi();
        record.recompute_recommended_calories();
        record
    }

    /// Height in metres, parsed from the stored height text
    pub fn height_in_meters(&self) -> f32 {
        parse_height_meters(&self.height)
    }

    /// Recompute `bmi` from the current weight and height.
    ///
    /// A degenerate zero height leaves the previous BMI untouched.
    pub fn recompute_bmi(&mut self) {
        let height_m = self.height_in_meters();
        if height_m > 0.0 {
            self.bmi = self.weight / (height_m * height_m);
        }
    }

    /// Recompute `recommended_calories` from BMI and current intake.
    ///
    /// BMI values of exactly 18.5 and 24.9 land in the unchanged branch.
    pub fn recompute_recommended_calories(&mut self) {
        self.recommended_calories = if self.bmi < HEALTHY_BMI_MIN {
            self.current_calories + CALORIE_ADJUSTMENT
        } else if self.bmi > HEALTHY_BMI_MAX {
            self.current_calories - CALORIE_ADJUSTMENT
        } else {
            self.current_calories
        };
    }

    /// Daily protein recommendation: weight × 1.2 grams, flat regardless
    /// of diet type. The diet only selects the message wording.
    pub fn protein_recommendation(&self) -> ProteinAdvice {
        ProteinAdvice {
            grams: self.weight * PROTEIN_GRAMS_PER_KG,
            non_veg: self.diet_type == NON_VEG_DIET,
        }
    }

    /// Apply a single-field update, triggering the recomputes it implies.
    ///
    /// A weight update whose value differs numerically from the old one
    /// yields a BMI-change report; every other update returns `None`.
    pub fn apply(&mut self, update: FieldUpdate) -> Option<BmiChange> {
        match update {
            FieldUpdate::Weight(weight) => {
                let old_bmi = self.bmi;
                let old_weight = self.weight;
                self.weight = weight;
                self.recompute_bmi();
                if weight != old_weight {
                    bmi_change(old_bmi, self.bmi, self.height_in_meters())
                } else {
                    None
                }
            }
            FieldUpdate::Height(height) => {
                self.height = height;
                self.recompute_bmi();
                None
            }
            FieldUpdate::Age(age) => {
                self.age = age;
                None
            }
            FieldUpdate::MaxBench(kg) => {
                self.max_bench = kg;
                None
            }
            FieldUpdate::MaxSquat(kg) => {
                self.max_squat = kg;
                None
            }
            FieldUpdate::MaxDeadlift(kg) => {
                self.max_deadlift = kg;
                None
            }
            FieldUpdate::Calories(calories) => {
                self.current_calories = calories;
                self.recompute_recommended_calories();
                None
            }
        }
    }

    /// Record today's water intake and sleep hours. Transient only.
    pub fn log_water_and_sleep(&mut self, liters: f32, hours: i32) {
        self.daily_water_liters = liters;
        self.daily_sleep_hours = hours;
        tracing::debug!(
            "Logged {} L water, {} h sleep for {}",
            liters,
            hours,
            self.name
        );
    }

    /// Total kcal for a day's food log: Σ calories_per_100g × grams / 100.
    ///
    /// The total is reported back to the caller; it is not merged into
    /// `current_calories` and not persisted.
    pub fn total_calories(entries: &[FoodEntry]) -> f32 {
        entries
            .iter()
            .map(|e| e.calories_per_100g * e.grams / 100.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> UserRecord {
        UserRecord::new(
            "Test".into(),
            70.0,
            "175".into(),
            30,
            80,
            100,
            120,
            2000,
            "Veg".into(),
        )
    }

    #[test]
    fn test_bmi_formula() {
        let record = test_record();
        let expected = 70.0 / (1.75_f32 * 1.75);
        assert!((record.bmi - expected).abs() < 1e-4);
    }

    #[test]
    fn test_height_parsing() {
        assert!((parse_height_meters("180cm") - 1.80).abs() < 1e-6);
        assert!((parse_height_meters("175") - 1.75).abs() < 1e-6);
        // No leading digits falls back to the 170cm default
        assert!((parse_height_meters("abc") - 1.70).abs() < 1e-6);
        assert!((parse_height_meters("") - 1.70).abs() < 1e-6);
        // A leading zero run parses as 0cm, not the default
        assert_eq!(parse_height_meters("0abc"), 0.0);
    }

    #[test]
    fn test_degenerate_height_keeps_previous_bmi() {
        let mut record = test_record();
        let bmi_before = record.bmi;

        record.apply(FieldUpdate::Height("0".into()));

        assert_eq!(record.height, "0");
        assert_eq!(record.bmi, bmi_before);
    }

    #[test]
    fn test_recommended_calories_branches() {
        let mut record = test_record();
        record.current_calories = 2000;

        record.bmi = 17.0;
        record.recompute_recommended_calories();
        assert_eq!(record.recommended_calories, 2500);

        record.bmi = 26.0;
        record.recompute_recommended_calories();
        assert_eq!(record.recommended_calories, 1500);

        record.bmi = 22.0;
        record.recompute_recommended_calories();
        assert_eq!(record.recommended_calories, 2000);
    }

    #[test]
    fn test_recommended_calories_boundaries_are_unchanged() {
        let mut record = test_record();
        record.current_calories = 2000;

        record.bmi = 18.5;
        record.recompute_recommended_calories();
        assert_eq!(record.recommended_calories, 2000);

        record.bmi = 24.9;
        record.recompute_recommended_calories();
        assert_eq!(record.recommended_calories, 2000);
    }

    #[test]
    fn test_protein_recommendation() {
        let mut record = test_record();
        record.diet_type = "Non-Veg".into();
        let advice = record.protein_recommendation();
        assert!((advice.grams - 84.0).abs() < 1e-4);
        assert!(advice.non_veg);

        // Anything other than the exact "Non-Veg" string is vegetarian
        for diet in ["Veg", "non-veg", "NON-VEG", "vegan", ""] {
            record.diet_type = diet.into();
            let advice = record.protein_recommendation();
            assert!((advice.grams - 84.0).abs() < 1e-4);
            assert!(!advice.non_veg, "diet {:?} should read as vegetarian", diet);
        }
    }

    #[test]
    fn test_bmi_change_within_healthy_range() {
        let change = bmi_change(17.0, 19.0, 1.70).unwrap();
        assert_eq!(change.direction, BmiDirection::Increased);
        assert_eq!(change.adjustment, None);
    }

    #[test]
    fn test_bmi_change_overweight_reports_lose() {
        let change = bmi_change(26.0, 27.0, 1.70).unwrap();
        assert_eq!(change.direction, BmiDirection::Increased);

        let expected = (27.0 - 24.9) * 1.70_f32 * 1.70;
        match change.adjustment {
            Some(WeightAdjustment::Lose(kg)) => assert!((kg - expected).abs() < 1e-3),
            other => panic!("Expected Lose adjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_bmi_change_underweight_reports_gain() {
        let change = bmi_change(18.0, 17.0, 1.70).unwrap();
        assert_eq!(change.direction, BmiDirection::Decreased);

        let expected = (18.5 - 17.0) * 1.70_f32 * 1.70;
        match change.adjustment {
            Some(WeightAdjustment::Gain(kg)) => assert!((kg - expected).abs() < 1e-3),
            other => panic!("Expected Gain adjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_bmi_change_no_op_when_unchanged() {
        assert!(bmi_change(22.0, 22.0, 1.70).is_none());
    }

    #[test]
    fn test_weight_update_reports_change() {
        let mut record = test_record();
        let report = record.apply(FieldUpdate::Weight(100.0)).unwrap();

        assert_eq!(report.direction, BmiDirection::Increased);
        assert!((record.bmi - 100.0 / (1.75_f32 * 1.75)).abs() < 1e-4);
        assert!(matches!(
            report.adjustment,
            Some(WeightAdjustment::Lose(_))
        ));
    }

    #[test]
    fn test_same_weight_update_reports_nothing() {
        let mut record = test_record();
        assert!(record.apply(FieldUpdate::Weight(70.0)).is_none());
    }

    #[test]
    fn test_height_update_recomputes_bmi() {
        let mut record = test_record();
        record.apply(FieldUpdate::Height("180".into()));
        assert!((record.bmi - 70.0 / (1.80_f32 * 1.80)).abs() < 1e-4);
    }

    #[test]
    fn test_calorie_update_recomputes_recommendation() {
        let mut record = test_record();
        record.bmi = 26.0;
        record.apply(FieldUpdate::Calories(3000));
        assert_eq!(record.current_calories, 3000);
        assert_eq!(record.recommended_calories, 2500);
    }

    #[test]
    fn test_plain_field_updates() {
        let mut record = test_record();
        assert!(record.apply(FieldUpdate::Age(31)).is_none());
        assert!(record.apply(FieldUpdate::MaxBench(90)).is_none());
        assert!(record.apply(FieldUpdate::MaxSquat(110)).is_none());
        assert!(record.apply(FieldUpdate::MaxDeadlift(130)).is_none());
        assert_eq!(record.age, 31);
        assert_eq!(record.max_bench, 90);
        assert_eq!(record.max_squat, 110);
        assert_eq!(record.max_deadlift, 130);
    }

    #[test]
    fn test_log_water_and_sleep() {
        let mut record = test_record();
        record.log_water_and_sleep(2.5, 8);
        assert!((record.daily_water_liters - 2.5).abs() < 1e-6);
        assert_eq!(record.daily_sleep_hours, 8);
    }

    #[test]
    fn test_total_calories() {
        let entries = vec![
            FoodEntry {
                name: "Rice".into(),
                grams: 200.0,
                calories_per_100g: 130.0,
            },
            FoodEntry {
                name: "Chicken".into(),
                grams: 150.0,
                calories_per_100g: 165.0,
            },
        ];

        let total = UserRecord::total_calories(&entries);
        assert!((total - (260.0 + 247.5)).abs() < 1e-3);
    }

    #[test]
    fn test_total_calories_empty_log() {
        assert_eq!(UserRecord::total_calories(&[]), 0.0);
    }

    #[test]
    fn test_new_computes_recommendation_from_bmi() {
        // 50kg at 1.75m is underweight, so the surplus applies
        let record = UserRecord::new(
            "Light".into(),
            50.0,
            "175".into(),
            25,
            50,
            70,
            90,
            1800,
            "Veg".into(),
        );
        assert!(record.bmi < 18.5);
        assert_eq!(record.recommended_calories, 2300);
    }
}

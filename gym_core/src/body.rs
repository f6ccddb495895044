//! Body composition estimates: BMI, healthy weight range, and BMR.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

const KG_PER_LB: f64 = 0.453592;
const CM_PER_IN: f64 = 2.54;
const LB_PER_KG: f64 = 2.20462;

/// Healthy BMI band used for the ideal weight range
const HEALTHY_BMI: (f64, f64) = (18.5, 24.9);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnitSystem {
    /// Kilograms and centimetres
    Metric,
    /// Pounds and inches
    Imperial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Focus on nutrient-dense foods and strength training.",
            BmiCategory::Normal => "Maintain with a balanced diet and exercise.",
            BmiCategory::Overweight => "Small lifestyle changes can make a big difference.",
            BmiCategory::Obese => "Consider consulting a healthcare professional.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        })
    }
}

/// Measurements as entered by the user
#[derive(Clone, Copy, Debug)]
pub struct BodyInput {
    pub weight: f64,
    pub height: f64,
    pub age: Option<u32>,
    pub sex: Sex,
    pub units: UnitSystem,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BodyReport {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Healthy weight range in the input's unit system
    pub ideal_weight: (f64, f64),
    pub units: UnitSystem,
    /// kcal/day, only when age is known
    pub bmr: Option<f64>,
}

/// Compute BMI, category, ideal weight range, and (with age) BMR
pub fn assess(input: &BodyInput) -> Result<BodyReport> {
    for (name, value) in [("weight", input.weight), ("height", input.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "{} must be a positive number",
                name
            )));
        }
    }

    let (weight_kg, height_cm) = match input.units {
        UnitSystem::Metric => (input.weight, input.height),
        UnitSystem::Imperial => (input.weight * KG_PER_LB, input.height * CM_PER_IN),
    };

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    let min_kg = HEALTHY_BMI.0 * height_m * height_m;
    let max_kg = HEALTHY_BMI.1 * height_m * height_m;
    let ideal_weight = match input.units {
        UnitSystem::Metric => (min_kg, max_kg),
        UnitSystem::Imperial => (min_kg * LB_PER_KG, max_kg * LB_PER_KG),
    };

    // Mifflin-St Jeor
    let bmr = input.age.filter(|&a| a > 0).map(|age| {
        let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
        match input.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    });

    Ok(BodyReport {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        ideal_weight,
        units: input.units,
        bmr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(weight: f64, height: f64) -> BodyInput {
        BodyInput {
            weight,
            height,
            age: None,
            sex: Sex::Male,
            units: UnitSystem::Metric,
        }
    }

    #[test]
    fn test_metric_bmi() {
        let report = assess(&metric(70.0, 175.0)).unwrap();
        assert!((report.bmi - 22.857).abs() < 0.001);
        assert_eq!(report.category, BmiCategory::Normal);
        assert!((report.ideal_weight.0 - 56.656).abs() < 0.01);
        assert!((report.ideal_weight.1 - 76.256).abs() < 0.01);
        assert!(report.bmr.is_none());
    }

    #[test]
    fn test_imperial_matches_metric() {
        let imperial = assess(&BodyInput {
            weight: 154.0,
            height: 69.0,
            age: None,
            sex: Sex::Female,
            units: UnitSystem::Imperial,
        })
        .unwrap();
        let metric = assess(&metric(154.0 * KG_PER_LB, 69.0 * CM_PER_IN)).unwrap();

        assert!((imperial.bmi - metric.bmi).abs() < 1e-9);
        assert!((imperial.ideal_weight.0 - metric.ideal_weight.0 * LB_PER_KG).abs() < 1e-9);
    }

    #[test]
    fn test_categories() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_by_sex() {
        let mut input = metric(80.0, 180.0);
        input.age = Some(30);
        // 800 + 1125 - 150 = 1775
        assert_eq!(assess(&input).unwrap().bmr, Some(1780.0));
        input.sex = Sex::Female;
        assert_eq!(assess(&input).unwrap().bmr, Some(1614.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(assess(&metric(0.0, 175.0)).is_err());
        assert!(assess(&metric(70.0, f64::NAN)).is_err());
        assert!(assess(&metric(-5.0, 175.0)).is_err());
    }
}

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// The details a visitor submits. Written once by the details form and only
/// read afterwards.
///
/// Numbers that did not parse are kept as NaN. serde_json writes them as
/// `null`, and `null` reads back as NaN, so the record survives a round trip
/// and the results page clamps it to the lower bound.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub gender: Gender,
    #[serde(deserialize_with = "number_or_nan")]
    pub body_fat: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub bmi: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub calories: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub water_cups: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub weekly_loss: f64, // lbs
    #[serde(deserialize_with = "number_or_nan")]
    pub days_to_results: f64,
}

fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let profile = Profile {
            gender: Gender::Female,
            body_fat: 28.0,
            bmi: 24.0,
            calories: 1800.0,
            water_cups: 8.0,
            weekly_loss: 1.5,
            days_to_results: 30.0,
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({
                "gender": "female",
                "bodyFat": 28.0,
                "bmi": 24.0,
                "calories": 1800.0,
                "waterCups": 8.0,
                "weeklyLoss": 1.5,
                "daysToResults": 30.0
            })
        );
    }

    #[test]
    fn test_null_number_reads_as_nan() {
        let raw = r#"{"gender":"male","bodyFat":10,"bmi":20,"calories":null,
            "waterCups":4,"weeklyLoss":1,"daysToResults":14}"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert!(profile.calories.is_nan());
        assert_eq!(profile.water_cups, 4.0);
    }

    #[test]
    fn test_nan_is_written_as_null() {
        let profile = Profile {
            gender: Gender::Male,
            body_fat: 0.0,
            bmi: 0.0,
            calories: f64::NAN,
            water_cups: 0.0,
            weekly_loss: 0.0,
            days_to_results: 1.0,
        };
        let text = serde_json::to_string(&profile).unwrap();
        assert!(text.contains("\"calories\":null"));
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let raw = r#"{"gender":"other","bodyFat":10,"bmi":20,"calories":1,
            "waterCups":4,"weeklyLoss":1,"daysToResults":14}"#;
        assert!(serde_json::from_str::<Profile>(raw).is_err());
    }
}

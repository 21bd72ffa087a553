use std::rc::Rc;

use log::{debug, warn};

use crate::config::PROFILE_KEY;
use crate::profile::models::Profile;
use crate::storage::{write_or_warn, KeyValueStore};

/// Whole-record persistence for the visitor's profile.
pub struct ProfileStore {
    store: Rc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrites whatever was stored before.
    pub fn save(&self, profile: &Profile) {
        match serde_json::to_string(profile) {
            Ok(json) => {
                write_or_warn(self.store.as_ref(), PROFILE_KEY, &json);
                debug!("Saved profile for {}", profile.gender.as_str());
            }
            Err(e) => warn!("Failed to serialize profile: {}", e),
        }
    }

    /// `None` when nothing was submitted yet or the stored record is unusable.
    pub fn load(&self) -> Option<Profile> {
        let raw = self.store.get(PROFILE_KEY)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Ignoring malformed profile in storage: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::Gender;
    use crate::storage::MemoryStore;

    fn sample() -> Profile {
        Profile {
            gender: Gender::Female,
            body_fat: 28.0,
            bmi: 24.0,
            calories: 1800.0,
            water_cups: 8.0,
            weekly_loss: 1.5,
            days_to_results: 30.0,
        }
    }

    fn store_with(raw: Option<&str>) -> ProfileStore {
        let memory = Rc::new(MemoryStore::new());
        if let Some(raw) = raw {
            memory.set(PROFILE_KEY, raw).unwrap();
        }
        ProfileStore::new(memory)
    }

    #[test]
    fn test_round_trip() {
        let profiles = [
            sample(),
            Profile {
                gender: Gender::Male,
                body_fat: 0.0,
                bmi: 40.0,
                calories: 0.0,
                water_cups: 20.0,
                weekly_loss: 0.25,
                days_to_results: 365.0,
            },
            Profile {
                gender: Gender::Male,
                body_fat: 100.0,
                bmi: 0.0,
                calories: 123456.0,
                water_cups: 0.0,
                weekly_loss: -3.0,
                days_to_results: 0.0,
            },
        ];
        let store = store_with(None);
        for profile in profiles {
            store.save(&profile);
            assert_eq!(store.load(), Some(profile));
        }
    }

    #[test]
    fn test_save_overwrites() {
        let store = store_with(None);
        store.save(&sample());
        let mut second = sample();
        second.gender = Gender::Male;
        second.bmi = 31.0;
        store.save(&second);
        assert_eq!(store.load(), Some(second));
    }

    #[test]
    fn test_missing_key_is_absent() {
        assert_eq!(store_with(None).load(), None);
    }

    #[test]
    fn test_malformed_values_are_absent() {
        let cases = [
            "",
            "not json",
            "{",
            "42",
            "null",
            "[]",
            "{}",
            r#"{"gender":"female","bodyFat":28}"#,
            r#"{"gender":"female","bodyFat":"28","bmi":24,"calories":1800,"waterCups":8,"weeklyLoss":1.5,"daysToResults":30}"#,
        ];
        for raw in cases {
            assert_eq!(store_with(Some(raw)).load(), None, "expected absent for {raw:?}");
        }
    }
}

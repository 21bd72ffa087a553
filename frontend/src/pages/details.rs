use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::form_field::FormField;
use crate::components::slider_field::SliderField;
use crate::config::{BMI_RANGE, BODY_FAT_RANGE, MAX_WATER_CUPS};
use crate::profile::models::{Gender, Profile};
use crate::profile::store::ProfileStore;
use crate::storage::use_stores;
use crate::Route;

pub const INCOMPLETE_HINT: &str = "Please fill out all required fields to enable the button.";

/// What the form holds while the visitor is still typing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsDraft {
    pub gender: Option<Gender>,
    pub body_fat: u32,
    pub bmi: u32,
    pub calories: String,
    pub water_cups: String,
    pub weekly_loss: String,
    pub days_to_results: String,
}

impl DetailsDraft {
    /// Sliders always hold a value, so only gender and the text fields are checked.
    pub fn is_valid(&self) -> bool {
        self.gender.is_some()
            && [&self.calories, &self.water_cups, &self.weekly_loss, &self.days_to_results]
                .iter()
                .all(|field| !field.trim().is_empty())
    }

    pub fn to_profile(&self) -> Option<Profile> {
        if !self.is_valid() {
            return None;
        }
        Some(Profile {
            gender: self.gender?,
            body_fat: f64::from(self.body_fat),
            bmi: f64::from(self.bmi),
            calories: parse_number(&self.calories),
            water_cups: parse_number(&self.water_cups),
            weekly_loss: parse_number(&self.weekly_loss),
            days_to_results: parse_number(&self.days_to_results),
        })
    }
}

/// Free text to a number, NaN when it isn't one.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[function_component(DetailsPage)]
pub fn details_page() -> Html {
    let stores = use_stores();
    let navigator = use_navigator();
    let draft = use_state(DetailsDraft::default);

    let is_valid = draft.is_valid();

    let onsubmit = {
        let draft = draft.clone();
        let stores = stores.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(profile) = draft.to_profile() else {
                debug!("Ignoring submit of incomplete details");
                return;
            };
            ProfileStore::new(stores.local.clone()).save(&profile);
            info!("Details submitted, moving to results");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Results);
            }
        })
    };

    let update = |apply: fn(&mut DetailsDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let text_input = |apply: fn(&mut DetailsDraft, String)| {
        update(apply).reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        })
    };

    let on_water_change = update(|d, v| d.water_cups = v).reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    let choose_gender = |gender: Gender| {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.gender = Some(gender);
            draft.set(next);
        })
    };

    let slider = |apply: fn(&mut DetailsDraft, u32)| {
        let draft = draft.clone();
        Callback::from(move |value: u32| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    html! {
        <div class="container">
            <BrandHeader />
            <main class="center">
                <h1 class="bh-title">{"Enter Your "}<span>{"Details"}</span></h1>
                <section class="card dp-card">
                    <form class="dp-form" {onsubmit}>
                        <FormField label="Gender" required=true>
                            <div class="gender-row" role="radiogroup" aria-label="Gender">
                                <label class="gender-option">
                                    <input
                                        type="radio"
                                        name="gender"
                                        checked={draft.gender == Some(Gender::Male)}
                                        onchange={choose_gender(Gender::Male)}
                                    />
                                    <span>{"Male"}</span>
                                </label>
                                <label class="gender-option">
                                    <input
                                        type="radio"
                                        name="gender"
                                        checked={draft.gender == Some(Gender::Female)}
                                        onchange={choose_gender(Gender::Female)}
                                    />
                                    <span>{"Female"}</span>
                                </label>
                            </div>
                        </FormField>

                        <SliderField
                            label="Body Fat %"
                            required=true
                            value={draft.body_fat}
                            min={BODY_FAT_RANGE.0}
                            max={BODY_FAT_RANGE.1}
                            hint={AttrValue::from("Enter your estimated body fat percentage (0-100).")}
                            on_change={slider(|d, v| d.body_fat = v)}
                        />

                        <SliderField
                            label="BMI"
                            required=true
                            value={draft.bmi}
                            min={BMI_RANGE.0}
                            max={BMI_RANGE.1}
                            hint={AttrValue::from("Enter your Body Mass Index (0-40).")}
                            on_change={slider(|d, v| d.bmi = v)}
                        />

                        <FormField label="Daily Calorie Target" required=true>
                            <input
                                placeholder="e.g. 2000"
                                value={draft.calories.clone()}
                                oninput={text_input(|d, v| d.calories = v)}
                            />
                        </FormField>

                        <FormField label="Cups of Water Per Day" required=true>
                            <select onchange={on_water_change}>
                                <option value="" disabled=true selected={draft.water_cups.is_empty()}>
                                    {"Select cups"}
                                </option>
                                { for (0..=MAX_WATER_CUPS).map(|n| {
                                    let value = n.to_string();
                                    html! {
                                        <option key={n} selected={draft.water_cups == value} value={value.clone()}>
                                            { n }
                                        </option>
                                    }
                                }) }
                            </select>
                        </FormField>

                        <FormField label="Weekly Weight Loss Goal (lbs)" required=true>
                            <input
                                placeholder="e.g. 1.5"
                                value={draft.weekly_loss.clone()}
                                oninput={text_input(|d, v| d.weekly_loss = v)}
                            />
                        </FormField>

                        <FormField label="Days to See Results" required=true>
                            <input
                                placeholder="e.g. 30"
                                value={draft.days_to_results.clone()}
                                oninput={text_input(|d, v| d.days_to_results = v)}
                            />
                        </FormField>

                        <button class="dp-btn" type="submit" disabled={!is_valid}>
                            {"See My Results"}
                        </button>

                        {
                            if !is_valid {
                                html! { <div class="dp-helper">{INCOMPLETE_HINT}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </form>
                </section>
            </main>
            <style>
                {r#"
                .dp-card {
                    max-width: 520px;
                    width: 100%;
                    padding: 2rem;
                }
                .dp-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.4rem;
                }
                .gender-row {
                    display: flex;
                    gap: 1rem;
                }
                .gender-option {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.8rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    cursor: pointer;
                }
                .dp-form input:not([type="radio"]):not([type="range"]),
                .dp-form select {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border-radius: 12px;
                    border: 1px solid var(--border);
                    background: var(--input-bg);
                    color: var(--text);
                    font-size: 1rem;
                }
                .dp-btn {
                    padding: 1rem;
                    border: none;
                    border-radius: 14px;
                    background: var(--mint);
                    color: #111;
                    font-weight: 700;
                    font-size: 1.05rem;
                    cursor: pointer;
                }
                .dp-btn:disabled {
                    opacity: 0.45;
                    cursor: not-allowed;
                }
                .dp-helper {
                    text-align: center;
                    font-size: 0.9rem;
                    color: var(--muted);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> DetailsDraft {
        DetailsDraft {
            gender: Some(Gender::Female),
            body_fat: 28,
            bmi: 24,
            calories: "1800".to_string(),
            water_cups: "8".to_string(),
            weekly_loss: "1.5".to_string(),
            days_to_results: "30".to_string(),
        }
    }

    #[test]
    fn test_empty_draft_is_invalid() {
        assert!(!DetailsDraft::default().is_valid());
        assert_eq!(DetailsDraft::default().to_profile(), None);
    }

    #[test]
    fn test_validity_over_every_field_combination() {
        let genders = [None, Some(Gender::Male), Some(Gender::Female)];
        let fillers = ["", "   ", "\t", "0", " 12 "];
        for gender in genders {
            for mask in 0..(fillers.len().pow(4)) {
                let pick = |slot: u32| fillers[(mask / fillers.len().pow(slot)) % fillers.len()].to_string();
                let draft = DetailsDraft {
                    gender,
                    body_fat: 50,
                    bmi: 20,
                    calories: pick(0),
                    water_cups: pick(1),
                    weekly_loss: pick(2),
                    days_to_results: pick(3),
                };
                let any_blank = [&draft.calories, &draft.water_cups, &draft.weekly_loss, &draft.days_to_results]
                    .iter()
                    .any(|f| f.trim().is_empty());
                let expected = gender.is_some() && !any_blank;
                assert_eq!(draft.is_valid(), expected, "{draft:?}");
                assert_eq!(draft.to_profile().is_some(), expected);
            }
        }
    }

    #[test]
    fn test_to_profile_converts_fields() {
        let profile = complete().to_profile().unwrap();
        assert_eq!(
            profile,
            Profile {
                gender: Gender::Female,
                body_fat: 28.0,
                bmi: 24.0,
                calories: 1800.0,
                water_cups: 8.0,
                weekly_loss: 1.5,
                days_to_results: 30.0,
            }
        );
    }

    #[test]
    fn test_unparseable_text_becomes_nan() {
        let mut draft = complete();
        draft.calories = "lots".to_string();
        let profile = draft.to_profile().unwrap();
        assert!(profile.calories.is_nan());
    }

    #[test]
    fn test_parse_number_trims() {
        assert_eq!(parse_number(" 1.5 "), 1.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert!(parse_number("1,5").is_nan());
    }
}

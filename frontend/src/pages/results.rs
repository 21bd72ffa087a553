use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::profile::models::Profile;
use crate::profile::store::ProfileStore;
use crate::storage::use_stores;
use crate::Route;

/// Bounds `n` to `[min, max]`. Non-finite input lands on `min`.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if !n.is_finite() {
        return min;
    }
    // + 0.0 turns a negative zero into "0" when displayed
    n.max(min).min(max) + 0.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKey {
    BodyFat,
    Bmi,
    Calories,
    Hydration,
    WeightRate,
    Time,
}

impl StepKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKey::BodyFat => "bodyFat",
            StepKey::Bmi => "bmi",
            StepKey::Calories => "calories",
            StepKey::Hydration => "hydration",
            StepKey::WeightRate => "weightRate",
            StepKey::Time => "time",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub lead: &'static str,
    pub value: String,
    pub tail: &'static str,
}

impl Title {
    pub fn text(&self) -> String {
        format!("{}{}{}", self.lead, self.value, self.tail)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: &'static str,
    pub emphasised: bool,
}

const fn plain(text: &'static str) -> Paragraph {
    Paragraph { text, emphasised: false }
}

const fn emphasised(text: &'static str) -> Paragraph {
    Paragraph { text, emphasised: true }
}

/// One screen of the results carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub key: StepKey,
    pub back_label: Option<&'static str>,
    pub icon: &'static str,
    pub title: Title,
    pub subtitle: Option<&'static str>,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub paragraphs: Vec<Paragraph>,
}

impl Step {
    pub fn back_text(&self) -> &'static str {
        self.back_label.unwrap_or("Back")
    }
}

pub fn build_steps(profile: &Profile) -> Vec<Step> {
    let body_fat = clamp(profile.body_fat, 0.0, 100.0);
    let bmi = clamp(profile.bmi, 0.0, 80.0);
    let calories = clamp(profile.calories, 0.0, 9999.0);
    let water = clamp(profile.water_cups, 0.0, 30.0);
    let weekly_loss = clamp(profile.weekly_loss, 0.0, 10.0);
    let days = clamp(profile.days_to_results, 1.0, 365.0);

    vec![
        Step {
            key: StepKey::BodyFat,
            back_label: None,
            icon: "⚖️",
            title: Title {
                lead: "Your Body Fat Percentage Is ",
                value: format!("{}%", body_fat),
                tail: "",
            },
            subtitle: Some("Here’s Why That Matters"),
            image_src: "/assets/results/result1.png",
            image_alt: "Body Fat Result",
            paragraphs: vec![
                plain("Your body fat percentage gives a clearer picture than BMI alone. It tells us how much of your body is lean mass (muscle, organs, bone) vs stored fat."),
                plain("Too much stored fat doesn’t just affect how you look. It impacts your energy, hormone balance, and ability to burn fat efficiently."),
                emphasised("Your current level may be slowing metabolism, increasing inflammation, or making it harder to stay consistent with workouts."),
            ],
        },
        Step {
            key: StepKey::Bmi,
            back_label: Some("Body Fat %"),
            icon: "📊",
            title: Title {
                lead: "Your BMI Is ",
                value: bmi.to_string(),
                tail: " — What That Means",
            },
            subtitle: None,
            image_src: "/assets/results/result2.png",
            image_alt: "BMI Result",
            paragraphs: vec![
                plain("BMI (Body Mass Index) is a quick way to estimate how your weight might affect your health based on your height and weight."),
                plain("When your BMI is too high, your body may store more fat than it uses. That can slow your metabolism, drain your energy, and make fat loss harder even if you’re putting in effort."),
                emphasised("You’re right on the edge. Just a few small shifts could unlock better energy and faster fat-burning."),
            ],
        },
        Step {
            key: StepKey::Calories,
            back_label: Some("BMI"),
            icon: "🔥",
            title: Title {
                lead: "You Should Be Eating Around ",
                value: format!("{} Calories", calories),
                tail: "",
            },
            subtitle: Some("But Not All Calories Are Equal"),
            image_src: "/assets/results/result3.png",
            image_alt: "Calorie Result",
            paragraphs: vec![
                plain("Your body burns calories just to stay alive. That’s your BMR. Add in movement, and you burn even more. Eat less than you burn? You lose weight. Eat more? You store it. Simple math, but the type of calories still makes or breaks your results."),
                plain("Most people eat low-quality calories that spike cravings, crash energy, and cause fat to stick even if they’re technically under their daily limit."),
                emphasised("Extreme restriction can backfire by slowing your metabolism, increasing stress, and making results harder to sustain. Keto helps you eat smarter, not just less."),
            ],
        },
        Step {
            key: StepKey::Hydration,
            back_label: Some("Caloric Intake"),
            icon: "💧",
            title: Title {
                lead: "Your Body Needs ",
                value: water.to_string(),
                tail: " of Water Daily",
            },
            subtitle: Some("Here’s Why That Matters"),
            image_src: "/assets/results/result4.png",
            image_alt: "Hydration Result",
            paragraphs: vec![
                plain("Hydration is a fat-burning multiplier. Without enough water, your body holds onto toxins, slows digestion, and burns fat less efficiently."),
                plain("Even mild dehydration can feel like fatigue, hunger, or sugar cravings. You’re not lazy. You’re likely under-hydrated."),
            ],
        },
        Step {
            key: StepKey::WeightRate,
            back_label: Some("Hydration"),
            icon: "📉",
            title: Title {
                lead: "You Could Be Losing ",
                value: format!("{} lbs / Week", weekly_loss),
                tail: "",
            },
            subtitle: Some("With the Right Fuel Source"),
            image_src: "/assets/results/result5.png",
            image_alt: "Weight Rate Result",
            paragraphs: vec![
                plain("This is your potential, what your body could lose if it’s in fat-burning mode. But that depends on getting your metabolism working with you, not against you."),
                plain("Low energy, stubborn cravings, and slow progress usually mean your body is still burning sugar instead of fat, and that keeps weight loss stuck."),
                emphasised("With your numbers, results could show up even faster than expected, but only if your metabolism is dialed in and you’re burning fat, not sugar."),
            ],
        },
        Step {
            key: StepKey::Time,
            back_label: Some("Weight Rate"),
            icon: "⏳",
            title: Title {
                lead: "You Could See Results in as Little as ",
                value: format!("{} Days", days),
                tail: "",
            },
            subtitle: None,
            image_src: "/assets/results/result6.png",
            image_alt: "Time to Results",
            paragraphs: vec![
                plain("Visible change doesn’t take forever. When your metabolism shifts, you can start dropping bloat, water weight, and fat surprisingly fast."),
                plain("It’s not about how long you try. It’s about whether your body’s actually set up to change. The wrong plan wastes months."),
                emphasised("You’re already aware, and that’s step one. Now imagine pairing that awareness with a plan that shows results in the mirror by day 10."),
            ],
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved(usize),
    Stayed,
    /// `next` on the last step: hand over to the sales page.
    Finished,
}

/// Position in the step sequence. Starts at the first step on every mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wizard {
    index: usize,
    len: usize,
}

impl Wizard {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) -> Transition {
        if self.index + 1 < self.len {
            self.index += 1;
            Transition::Moved(self.index)
        } else {
            Transition::Finished
        }
    }

    pub fn back(&mut self) -> Transition {
        if self.can_go_back() {
            self.index -= 1;
            Transition::Moved(self.index)
        } else {
            Transition::Stayed
        }
    }
}

/// Where to send a visitor who arrives without a stored profile.
pub fn entry_redirect(profile: Option<&Profile>) -> Option<Route> {
    match profile {
        Some(_) => None,
        None => Some(Route::Details),
    }
}

/// Route the results page hands over to after `transition`, if it leaves at all.
pub fn exit_route(transition: Transition) -> Option<Route> {
    match transition {
        Transition::Finished => Some(Route::Sales),
        Transition::Moved(_) | Transition::Stayed => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressDotsProps {
    pub total: usize,
    pub active: usize,
}

#[function_component(ProgressDots)]
pub fn progress_dots(props: &ProgressDotsProps) -> Html {
    html! {
        <div class="rp-dots" aria-label="progress">
            { for (0..props.total).map(|i| html! {
                <span key={i} class={classes!("rp-dot", (i == props.active).then(|| "is-on"))} />
            }) }
        </div>
    }
}

#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let stores = use_stores();
    let navigator = use_navigator();
    let profile = {
        let stores = stores.clone();
        use_state(move || ProfileStore::new(stores.local.clone()).load())
    };
    let steps = use_memo(|profile| profile.as_ref().map(build_steps).unwrap_or_default(), (*profile).clone());
    let step_count = steps.len();
    let wizard = use_state(move || Wizard::new(step_count));

    // Nothing to show without a submitted profile
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |redirect: &Option<Route>| {
                if let Some(route) = redirect {
                    info!("No stored profile, redirecting to details");
                    if let Some(navigator) = &navigator {
                        navigator.replace(route);
                    }
                }
                || ()
            },
            entry_redirect((*profile).as_ref()),
        );
    }

    let Some(step) = steps.get(wizard.index()).cloned() else {
        return html! {};
    };

    let on_next = {
        let wizard = wizard.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *wizard;
            let transition = next.next();
            match exit_route(transition) {
                Some(route) => {
                    info!("Results finished, moving to sales");
                    if let Some(navigator) = &navigator {
                        navigator.replace(&route);
                    }
                }
                None => {
                    debug!("Results step transition: {:?}", transition);
                    wizard.set(next);
                }
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *wizard;
            if let Transition::Moved(_) = next.back() {
                wizard.set(next);
            }
        })
    };

    let show_back = wizard.can_go_back();

    html! {
        <div class="container">
            <BrandHeader>
                <div class="rp-subrow">
                    <div class="rp-subtitle">{"Your Results"}</div>
                    <ProgressDots total={wizard.len()} active={wizard.index()} />
                </div>
            </BrandHeader>

            <main class="center">
                <section class="card rp-card" data-step={step.key.as_str()}>
                    <div class="rp-cardInner">
                        <div class="rp-icon">{ step.icon }</div>
                        <h1 class="rp-title">
                            { step.title.lead }
                            <span class="rp-red">{ step.title.value.clone() }</span>
                            { step.title.tail }
                        </h1>
                        {
                            if let Some(subtitle) = step.subtitle {
                                html! { <div class="rp-subhead">{ subtitle }</div> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="rp-illustration">
                            <img class="rp-img" src={step.image_src} alt={step.image_alt} />
                        </div>
                        <div class="rp-body">
                            { for step.paragraphs.iter().map(|p| html! {
                                <p class={classes!(p.emphasised.then(|| "rp-redText"))}>{ p.text }</p>
                            }) }
                        </div>
                    </div>
                </section>

                <div class={classes!("rp-actions", (!show_back).then(|| "only-next"))}>
                    {
                        if show_back {
                            html! {
                                <button type="button" class="rp-btn rp-btn-back" onclick={on_back}>
                                    <span class="rp-arrowLeft">{"←"}</span>
                                    <span>{ step.back_text() }</span>
                                </button>
                            }
                        } else {
                            html! { <div /> }
                        }
                    }
                    <button type="button" class="rp-btn rp-btn-next" onclick={on_next}>
                        <span>{"Next"}</span>
                        <span class="rp-arrowRight">{"→"}</span>
                    </button>
                </div>
            </main>
            <style>
                {r#"
                .rp-subrow {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.6rem;
                    margin-top: 1rem;
                }
                .rp-subtitle {
                    font-weight: 600;
                    color: var(--muted);
                }
                .rp-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .rp-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: var(--border);
                    transition: background 0.2s ease;
                }
                .rp-dot.is-on {
                    background: var(--mint);
                }
                .rp-card {
                    max-width: 640px;
                    width: 100%;
                }
                .rp-cardInner {
                    padding: 2rem;
                    text-align: center;
                }
                .rp-icon {
                    font-size: 2.4rem;
                }
                .rp-title {
                    font-size: 1.8rem;
                    line-height: 1.3;
                }
                .rp-red {
                    color: var(--red);
                }
                .rp-subhead {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .rp-img {
                    max-width: 100%;
                    border-radius: 16px;
                }
                .rp-body {
                    text-align: left;
                    line-height: 1.6;
                }
                .rp-redText {
                    color: var(--red);
                    font-weight: 600;
                }
                .rp-actions {
                    display: flex;
                    justify-content: space-between;
                    max-width: 640px;
                    width: 100%;
                    margin: 1.5rem auto;
                }
                .rp-btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 1.6rem;
                    border-radius: 14px;
                    border: 1px solid var(--border);
                    font-weight: 700;
                    cursor: pointer;
                }
                .rp-btn-back {
                    background: transparent;
                    color: var(--text);
                }
                .rp-btn-next {
                    background: var(--mint);
                    color: #111;
                    border: none;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::pages::details::DetailsDraft;
    use crate::profile::models::Gender;
    use crate::storage::MemoryStore;

    fn profile() -> Profile {
        Profile {
            gender: Gender::Male,
            body_fat: 20.0,
            bmi: 25.0,
            calories: 2200.0,
            water_cups: 10.0,
            weekly_loss: 2.0,
            days_to_results: 45.0,
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(42.5, 0.0, 100.0), 42.5);
        assert_eq!(clamp(f64::NAN, 1.0, 365.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, 0.0, 10.0), 0.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 10.0), 0.0);
        assert_eq!(clamp(-0.0, 0.0, 10.0).to_string(), "0");
    }

    #[test]
    fn test_steps_are_fixed_and_ordered() {
        let keys: Vec<_> = build_steps(&profile()).iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                StepKey::BodyFat,
                StepKey::Bmi,
                StepKey::Calories,
                StepKey::Hydration,
                StepKey::WeightRate,
                StepKey::Time,
            ]
        );
    }

    #[test]
    fn test_body_fat_display_is_clamped() {
        let mut p = profile();
        p.body_fat = 150.0;
        assert!(build_steps(&p)[0].title.text().contains("100%"));
        p.body_fat = -5.0;
        assert!(build_steps(&p)[0].title.text().contains("0%"));
    }

    #[test]
    fn test_every_step_derives_from_clamped_values() {
        let p = Profile {
            gender: Gender::Female,
            body_fat: f64::NAN,
            bmi: 95.0,
            calories: 25000.0,
            water_cups: -2.0,
            weekly_loss: 14.0,
            days_to_results: 0.0,
        };
        let titles: Vec<String> = build_steps(&p).iter().map(|s| s.title.text()).collect();
        assert_eq!(titles[0], "Your Body Fat Percentage Is 0%");
        assert_eq!(titles[1], "Your BMI Is 80 — What That Means");
        assert_eq!(titles[2], "You Should Be Eating Around 9999 Calories");
        assert_eq!(titles[3], "Your Body Needs 0 of Water Daily");
        assert_eq!(titles[4], "You Could Be Losing 10 lbs / Week");
        assert_eq!(titles[5], "You Could See Results in as Little as 1 Days");
    }

    #[test]
    fn test_clamping_leaves_profile_untouched() {
        let mut p = profile();
        p.bmi = 95.0;
        let before = p.clone();
        let _ = build_steps(&p);
        assert_eq!(p, before);
    }

    #[test]
    fn test_back_labels() {
        let labels: Vec<_> = build_steps(&profile()).iter().map(Step::back_text).collect();
        assert_eq!(
            labels,
            vec!["Back", "Body Fat %", "BMI", "Caloric Intake", "Hydration", "Weight Rate"]
        );
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut wizard = Wizard::new(6);
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.back(), Transition::Stayed);
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn test_next_six_times_leaves_on_sixth() {
        let mut wizard = Wizard::new(6);
        for expected in 1..6 {
            assert_eq!(wizard.next(), Transition::Moved(expected));
        }
        assert_eq!(wizard.index(), 5);
        assert_eq!(wizard.next(), Transition::Finished);
        assert_eq!(wizard.index(), 5);
    }

    #[test]
    fn test_back_and_forth() {
        let mut wizard = Wizard::new(6);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.back(), Transition::Moved(1));
        assert!(wizard.can_go_back());
        assert_eq!(wizard.back(), Transition::Moved(0));
        assert_eq!(wizard.back(), Transition::Stayed);
    }

    #[test]
    fn test_missing_profile_redirects_to_details() {
        assert_eq!(entry_redirect(None), Some(Route::Details));
        assert_eq!(entry_redirect(Some(&profile())), None);

        let store = ProfileStore::new(Rc::new(MemoryStore::new()));
        assert_eq!(entry_redirect(store.load().as_ref()), Some(Route::Details));
        store.save(&profile());
        assert_eq!(entry_redirect(store.load().as_ref()), None);
    }

    #[test]
    fn test_only_finishing_leaves_for_sales() {
        let mut wizard = Wizard::new(6);
        assert_eq!(exit_route(wizard.back()), None);
        for _ in 1..6 {
            assert_eq!(exit_route(wizard.next()), None);
        }
        assert_eq!(exit_route(wizard.next()), Some(Route::Sales));
        assert_eq!(exit_route(wizard.back()), None);
    }

    #[test]
    fn test_submit_then_walk_through_results() {
        let draft = DetailsDraft {
            gender: Some(Gender::Female),
            body_fat: 28,
            bmi: 24,
            calories: "1800".to_string(),
            water_cups: "8".to_string(),
            weekly_loss: "1.5".to_string(),
            days_to_results: "30".to_string(),
        };
        let store = ProfileStore::new(Rc::new(MemoryStore::new()));
        store.save(&draft.to_profile().unwrap());

        let loaded = store.load().unwrap();
        let steps = build_steps(&loaded);
        let mut wizard = Wizard::new(steps.len());

        assert!(steps[wizard.index()].title.text().contains("28%"));
        wizard.next();
        assert_eq!(steps[wizard.index()].key, StepKey::Bmi);
        assert!(steps[wizard.index()].title.text().contains("24"));

        let mut calls = 1;
        loop {
            calls += 1;
            if wizard.next() == Transition::Finished {
                break;
            }
        }
        assert_eq!(calls, 6);
        assert_eq!(exit_route(Transition::Finished), Some(Route::Sales));
        assert_eq!(steps[wizard.index()].title.text(), "You Could See Results in as Little as 30 Days");
    }
}

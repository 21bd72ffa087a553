use std::rc::Rc;

use log::{debug, info};
use web_sys::{
    window, Element, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use yew::prelude::*;
use yew_hooks::use_effect_once;
use yew_router::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::config::{COUNTDOWN_MS, STICKY_HIDE_THRESHOLD, TICK_INTERVAL_MS, TIMER_END_KEY};
use crate::scheduling::{
    Clock, IntersectionVisibility, IntervalScheduler, Scheduler, Subscription, SystemClock, VisibilityObserver,
};
use crate::storage::{use_stores, write_or_warn, KeyValueStore};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Plan {
    Installments,
    #[default]
    Full,
}

/// Discount deadline for this browsing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    deadline_ms: i64,
}

impl Countdown {
    /// Picks up the deadline stored earlier in the session, or starts a fresh
    /// one and stores it. A reload therefore never extends the offer.
    pub fn resume_or_start(session: &dyn KeyValueStore, now_ms: i64) -> Self {
        let stored = session
            .get(TIMER_END_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|deadline| deadline.is_finite());

        match stored {
            Some(deadline) => {
                debug!("Resuming countdown ending at {}", deadline);
                // `as` saturates, so far-off deadlines pin to the i64 bounds
                Self { deadline_ms: deadline as i64 }
            }
            None => {
                let deadline_ms = now_ms + COUNTDOWN_MS;
                write_or_warn(session, TIMER_END_KEY, &deadline_ms.to_string());
                debug!("Started countdown ending at {}", deadline_ms);
                Self { deadline_ms }
            }
        }
    }

    pub fn deadline_ms(&self) -> i64 {
        self.deadline_ms
    }

    /// Whole seconds left, rounded up and never below zero.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        let diff = self.deadline_ms.saturating_sub(now_ms);
        if diff <= 0 {
            0
        } else {
            (diff as u64 + 999) / 1000
        }
    }
}

pub fn format_mmss(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Reports the remaining seconds now and then once per tick.
pub fn run_countdown(
    countdown: Countdown,
    clock: Rc<dyn Clock>,
    scheduler: &dyn Scheduler,
    on_tick: impl Fn(u64) + 'static,
) -> Subscription {
    let tick = move || on_tick(countdown.remaining_secs(clock.now_ms()));
    tick();
    scheduler.every(TICK_INTERVAL_MS, Box::new(tick))
}

/// `set_hidden(true)` while enough of the pricing section is on screen.
pub fn track_sticky<V: VisibilityObserver>(
    observer: &V,
    pricing: &V::Region,
    set_hidden: impl Fn(bool) + 'static,
) -> Subscription {
    observer.watch(pricing, STICKY_HIDE_THRESHOLD, Box::new(set_hidden))
}

const BARS: [(&str, &str, &str, u32, u32); 4] = [
    ("Body Fat", "20–25%", "10–12%", 32, 75),
    ("Energy Levels", "Low", "Higher", 20, 70),
    ("Physical Health", "Stuck", "Improving", 25, 72),
    ("Metabolism Speed", "Slow", "Faster", 18, 78),
];

const BULLETS: [&str; 4] = [
    "Improving Digestion",
    "Toning Muscles",
    "Mental Wellness Reset",
    "Physical Endurance Boost",
];

/// Logo, alt text and quote for each professional endorsement.
const PROOFS: [(&str, &str, &str); 2] = [
    (
        "/assets/sales/pubmed.svg",
        "PubMed Central",
        "There is evidence to suggest that a Ketogenic Diet can help with weight loss, visceral adiposity, and appetite control.",
    ),
    (
        "/assets/sales/mayo.webp",
        "Mayo Clinic",
        "Research shows that a keto diet can result in weight loss and improvements in cardiovascular risk factors.",
    ),
];

/// Guarantee fine print. `true` marks a segment rendered as a link.
const FINE_PRINT: [&[(&str, bool)]; 5] = [
    &[("By continuing, you represent that you are over 18 years of age and agree that whatever reason you’re unhappy with your plan to contact customer support for a refund.", false)],
    &[("You will only be charged $67 today for your first quarter (details above). Your introductory period will last until Aug 27, 2025. You may cancel at any time before Aug 27, 2025, and you will not be charged.", false)],
    &[("If you don’t cancel, KetoSlim will automatically continue your membership at the end of your introductory period and charge the membership fee of $67 quarterly until you cancel.", false)],
    &[
        ("Your subscription will be bound by our ", false),
        ("Terms", true),
        (" and ", false),
        ("Privacy Policy", true),
        (".", false),
    ],
    &[
        ("If you would like a refund for any reason call ", false),
        ("1-800-965-5045", true),
        (" or email ", false),
        ("support@myketoslim.com", true),
        (".", false),
    ],
];

const TOOLS: [(&str, &str); 4] = [
    ("🍽️", "Daily Custom Meal Plan"),
    ("🛒", "Done-For-You Grocery Lists"),
    ("🥗", "Overwhelm-Free Delicious Recipes"),
    ("🎓", "Weekly Tips & Guidance"),
];

#[derive(Properties, PartialEq)]
struct BarsPairProps {
    label: &'static str,
    left_text: &'static str,
    right_text: &'static str,
    left_pct: u32,
    right_pct: u32,
}

#[function_component(BarsPair)]
fn bars_pair(props: &BarsPairProps) -> Html {
    html! {
        <div class="sp-barsRow">
            <div class="sp-barsCol">
                <div class="sp-barsTop">
                    <span class="sp-barsLabel">{ props.label }</span>
                    <span class="sp-barsVal sp-red">{ props.left_text }</span>
                </div>
                <div class="sp-track">
                    <div class="sp-fill sp-fillRed" style={format!("width: {}%;", props.left_pct)} />
                </div>
            </div>
            <div class="sp-barsCol">
                <div class="sp-barsTop">
                    <span class="sp-barsLabel">{ props.label }</span>
                    <span class="sp-barsVal sp-mint">{ props.right_text }</span>
                </div>
                <div class="sp-track">
                    <div class="sp-fill sp-fillMint" style={format!("width: {}%;", props.right_pct)} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlanOptionProps {
    plan: Plan,
    selected: bool,
    on_select: Callback<Plan>,
    children: Children,
}

#[function_component(PlanOption)]
fn plan_option(props: &PlanOptionProps) -> Html {
    let onclick = {
        let (plan, on_select) = (props.plan, props.on_select.clone());
        Callback::from(move |_: MouseEvent| on_select.emit(plan))
    };
    let onkeydown = {
        let (plan, on_select) = (props.plan, props.on_select.clone());
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_select.emit(plan);
            }
        })
    };
    let selected = props.selected.then(|| "isSelected");

    html! {
        <div class={classes!("sp-planOption", selected)} role="button" tabindex="0" {onclick} {onkeydown}>
            <div class="sp-planLeft">
                { for props.children.iter() }
            </div>
            <div class={classes!("sp-choice", selected)}>
                { if props.selected { html! { <div class="sp-choiceDot" /> } } else { html! {} } }
            </div>
        </div>
    }
}

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let stores = use_stores();
    let navigator = use_navigator();
    let pricing_ref = use_node_ref();

    // use_state_eq makes re-selecting the active plan a no-op
    let selected_plan = use_state_eq(Plan::default);
    let hide_sticky = use_state_eq(|| false);
    let remaining = use_state_eq(|| (COUNTDOWN_MS / 1000) as u64);

    {
        let remaining = remaining.clone();
        let session = stores.session.clone();
        use_effect_once(move || {
            let clock: Rc<dyn Clock> = Rc::new(SystemClock);
            let countdown = Countdown::resume_or_start(session.as_ref(), clock.now_ms());
            let subscription = run_countdown(countdown, clock, &IntervalScheduler, move |secs| {
                remaining.set(secs)
            });
            move || drop(subscription)
        });
    }

    {
        let hide_sticky = hide_sticky.clone();
        let pricing_ref = pricing_ref.clone();
        use_effect_once(move || {
            let subscription = pricing_ref.cast::<Element>().map(|pricing| {
                track_sticky(&IntersectionVisibility, &pricing, move |hidden| hide_sticky.set(hidden))
            });
            move || drop(subscription)
        });
    }

    let on_select = {
        let selected_plan = selected_plan.clone();
        Callback::from(move |plan: Plan| {
            debug!("Plan selected: {:?}", plan);
            selected_plan.set(plan);
        })
    };

    let scroll_to_pricing = {
        let pricing_ref = pricing_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(pricing) = pricing_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                pricing.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    // No checkout behind this yet, just bring the visitor back to the top
    let on_continue = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let on_decline = Callback::from(move |_: MouseEvent| {
        info!("Offer declined, back to details");
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Details);
        }
    });

    html! {
        <div class="sp-page">
            <BrandHeader />

            <main class="sp-container">
                <section class="sp-card">
                    <div class="sp-hero">
                        <div class="sp-heroBadge">{"🎯 Plan Ready"}</div>
                        <h1 class="sp-title">{"Your Personalized KetoSlim Plan Is Ready"}</h1>

                        <div class="sp-beforeCard">
                            <div class="sp-beforeGrid">
                                <div class="sp-person">
                                    <img src="/assets/sales/now.webp" alt="Now" />
                                    <div class="sp-cap">{"Now"}</div>
                                </div>
                                <div class="sp-arrows" aria-hidden="true">
                                    <span class="sp-chevron sp-chevron1" />
                                    <span class="sp-chevron sp-chevron2" />
                                </div>
                                <div class="sp-person">
                                    <img src="/assets/sales/after.webp" alt="6 Months" />
                                    <div class="sp-cap">{"6 Months"}</div>
                                </div>
                            </div>
                        </div>

                        <div class="sp-barsBox">
                            { for BARS.iter().map(|(label, left, right, left_pct, right_pct)| html! {
                                <BarsPair
                                    key={*label}
                                    label={*label}
                                    left_text={*left}
                                    right_text={*right}
                                    left_pct={*left_pct}
                                    right_pct={*right_pct}
                                />
                            }) }
                        </div>
                    </div>

                    <div class="sp-section">
                        <div class="sp-sectionTitle">{"Your program will also work on:"}</div>
                        <ul class="sp-checks">
                            { for BULLETS.iter().map(|bullet| html! {
                                <li key={*bullet}>
                                    <span class="sp-check">{"✓"}</span>
                                    <span>{ *bullet }</span>
                                </li>
                            }) }
                        </ul>
                        <div class="sp-centerLine">{"Get all the right tools & knowledge."}</div>
                        <div class="sp-toolsRow">
                            <ul class="sp-tools">
                                { for TOOLS.iter().map(|(icon, text)| html! {
                                    <li key={*text}>
                                        <span class="sp-toolIcon">{ *icon }</span>
                                        <span class="sp-toolText">{ *text }</span>
                                    </li>
                                }) }
                            </ul>
                            <div class="sp-phone">
                                <img src="/assets/sales/phone.webp" alt="App preview" />
                            </div>
                        </div>
                    </div>

                    <div class="sp-section">
                        <h2 class="sp-h2">{"Trusted by health & nutrition professionals"}</h2>
                        <div class="sp-proof">
                            { for PROOFS.iter().map(|(logo, name, quote)| html! {
                                <div class="sp-proofCard" key={*name}>
                                    <img class="sp-proofLogo" src={*logo} alt={*name} />
                                    <p class="sp-proofText">{ *quote }</p>
                                    <button class="sp-source" type="button">{"source"}</button>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="sp-section" id="pricing" ref={pricing_ref}>
                        <h3 class="sp-h3">{"3 Month Custom Keto Plan"}</h3>
                        <div class="sp-offer">
                            <div class="sp-countdown">
                                <span>{"Discount expires in:"}</span>
                                <span class="sp-timer">{ format!("{} ⏱", format_mmss(*remaining)) }</span>
                            </div>

                            <div class="sp-planList">
                                <PlanOption
                                    plan={Plan::Installments}
                                    selected={*selected_plan == Plan::Installments}
                                    on_select={on_select.clone()}
                                >
                                    <div class="sp-planTitle">{"3 PAYMENTS OF $29"}</div>
                                    <div class="sp-planSub">{"Just $29 today. Split the rest over 2 easy payments."}</div>
                                </PlanOption>
                                <PlanOption
                                    plan={Plan::Full}
                                    selected={*selected_plan == Plan::Full}
                                    on_select={on_select}
                                >
                                    <div class="sp-pillRow">
                                        <span class="sp-badge">{"DISCOUNT"}</span>
                                        <span class="sp-offTag">{"23% OFF"}</span>
                                    </div>
                                    <div class="sp-planTitle">{"1 Payment of $67"}</div>
                                    <div class="sp-planSub">{"Pay in full today and save $20 instantly."}</div>
                                </PlanOption>
                                <div class="sp-mostPopularLabel">{"MOST POPULAR"}</div>
                            </div>

                            <div class="sp-offerMid">
                                <div class="sp-guarantee">{"✅ Risk-Free: Backed by 60-Day Money-Back Guarantee"}</div>
                                <button class="sp-cta" type="button" onclick={on_continue}>
                                    <span>{"Continue"}</span>
                                    <span class="sp-ctaArrow">{"→"}</span>
                                </button>
                                <button class="sp-decline" type="button" onclick={on_decline}>
                                    {"No Thanks, I don’t want my plan."}
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="sp-section sp-mbg">
                        <h2 class="sp-h2">{"Money Back Guarantee"}</h2>
                        <p class="sp-text">
                            {"We are confident in our service quality and its results. So, if you are ready to reach your goals, it’s a risk-free offer."}
                        </p>
                        <p class="sp-text">
                            {"We guarantee you’ll see visible results or you’ll receive a full refund within 60 days after your purchase."}
                        </p>
                        <div class="sp-divider" />
                        { for FINE_PRINT.iter().map(|segments| html! {
                            <p class="sp-fine">
                                { for segments.iter().map(|(text, link)| if *link {
                                    html! { <span class="sp-link">{ *text }</span> }
                                } else {
                                    html! { { *text } }
                                }) }
                            </p>
                        }) }
                    </div>
                </section>
            </main>

            {
                if !*hide_sticky {
                    html! {
                        <div class="sp-sticky">
                            <button class="sp-stickyBtn" type="button" onclick={scroll_to_pricing}>
                                <span>{"Claim My Plan"}</span>
                                <span class="sp-ctaArrow">{"→"}</span>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .sp-container {
                    display: flex;
                    justify-content: center;
                    padding: 1.5rem 1rem 6rem;
                }
                .sp-card {
                    max-width: 720px;
                    width: 100%;
                    background: var(--card);
                    border-radius: 24px;
                    padding: 2rem;
                }
                .sp-title {
                    text-align: center;
                    font-size: 2rem;
                }
                .sp-beforeGrid {
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    align-items: center;
                }
                .sp-person img {
                    width: 100%;
                }
                .sp-barsRow {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin: 0.8rem 0;
                }
                .sp-barsTop {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                }
                .sp-track {
                    height: 8px;
                    border-radius: 4px;
                    background: var(--border);
                    overflow: hidden;
                }
                .sp-fill {
                    height: 100%;
                }
                .sp-fillRed, .sp-red {
                    background-color: var(--red);
                }
                .sp-red {
                    background: none;
                    color: var(--red);
                }
                .sp-fillMint {
                    background-color: var(--mint);
                }
                .sp-mint {
                    color: var(--mint);
                }
                .sp-section {
                    margin-top: 2.5rem;
                }
                .sp-checks, .sp-tools {
                    list-style: none;
                    padding: 0;
                }
                .sp-countdown {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.8rem 1rem;
                    border-radius: 12px;
                    background: rgba(255, 80, 80, 0.12);
                    font-weight: 600;
                }
                .sp-timer {
                    color: var(--red);
                    font-variant-numeric: tabular-nums;
                }
                .sp-planOption {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    margin-top: 0.8rem;
                    border: 2px solid var(--border);
                    border-radius: 14px;
                    cursor: pointer;
                }
                .sp-planOption.isSelected {
                    border-color: var(--mint);
                }
                .sp-choice {
                    width: 22px;
                    height: 22px;
                    border-radius: 50%;
                    border: 2px solid var(--border);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .sp-choice.isSelected {
                    border-color: var(--mint);
                }
                .sp-choiceDot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: var(--mint);
                }
                .sp-cta, .sp-stickyBtn {
                    width: 100%;
                    padding: 1rem;
                    margin-top: 1rem;
                    border: none;
                    border-radius: 14px;
                    background: var(--mint);
                    color: #111;
                    font-weight: 700;
                    font-size: 1.05rem;
                    cursor: pointer;
                }
                .sp-decline {
                    width: 100%;
                    margin-top: 0.6rem;
                    background: none;
                    border: none;
                    color: var(--muted);
                    text-decoration: underline;
                    cursor: pointer;
                }
                .sp-fine {
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .sp-link {
                    color: var(--mint);
                    text-decoration: underline;
                    cursor: pointer;
                }
                .sp-proof {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .sp-source {
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--muted);
                    text-decoration: underline;
                    cursor: pointer;
                }
                .sp-sticky {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 0.8rem 1rem;
                    background: var(--bg);
                    box-shadow: 0 -6px 20px rgba(0, 0, 0, 0.15);
                }
                "#}
            </style>
        </div>
    }
}

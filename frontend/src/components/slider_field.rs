use web_sys::HtmlInputElement;
use yew::prelude::*;

const TRACK_FILL: &str = "var(--mint)";
const TRACK_EMPTY: &str = "#2e2e2e";

/// Percentage of the track left of the thumb.
pub fn fill_percent(value: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return 0.0;
    }
    let value = value.clamp(min, max);
    // Scale before dividing so whole percentages stay exact
    f64::from(value - min) * 100.0 / f64::from(max - min)
}

/// Inline style painting the filled part of a range input.
pub fn range_background(value: u32, min: u32, max: u32) -> String {
    let pct = fill_percent(value, min, max);
    format!(
        "background: linear-gradient(to right, {fill} 0%, {fill} {pct}%, {empty} {pct}%, {empty} 100%);",
        fill = TRACK_FILL,
        empty = TRACK_EMPTY,
        pct = pct,
    )
}

#[derive(Properties, PartialEq)]
pub struct SliderFieldProps {
    pub label: AttrValue,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    #[prop_or(1)]
    pub step: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    pub on_change: Callback<u32>,
}

#[function_component(SliderField)]
pub fn slider_field(props: &SliderFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let (min, max) = (props.min, props.max);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                on_change.emit(value.clamp(min, max));
            }
        })
    };

    html! {
        <div class="sf">
            <div class="sf-top">
                <div class="sf-label">
                    { &props.label }{" "}
                    { if props.required { html! { <span class="sf-req">{"*"}</span> } } else { html! {} } }
                </div>
                <div class="sf-value">{ props.value }</div>
            </div>
            <input
                class="sf-range"
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                style={range_background(props.value, props.min, props.max)}
                {oninput}
            />
            {
                if let Some(hint) = &props.hint {
                    html! { <div class="sf-hint">{ hint }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(0, 0, 100), 0.0);
        assert_eq!(fill_percent(28, 0, 100), 28.0);
        assert_eq!(fill_percent(20, 0, 40), 50.0);
        assert_eq!(fill_percent(40, 0, 40), 100.0);
    }

    #[test]
    fn test_fill_percent_degenerate_range() {
        assert_eq!(fill_percent(5, 10, 10), 0.0);
        assert_eq!(fill_percent(500, 0, 100), 100.0);
    }

    #[test]
    fn test_range_background_split() {
        let style = range_background(10, 0, 40);
        assert!(style.contains("var(--mint) 25%"));
        assert!(style.contains("#2e2e2e 25%"));
    }

    #[test]
    fn test_range_background_has_no_float_noise() {
        for value in 0..=100 {
            let style = range_background(value, 0, 100);
            assert!(style.contains(&format!("var(--mint) {}%", value)), "{style}");
        }
        let style = range_background(28, 0, 100);
        assert!(!style.contains("28.0000"));
    }
}

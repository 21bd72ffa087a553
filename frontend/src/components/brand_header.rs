use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[derive(Properties, PartialEq)]
pub struct BrandHeaderProps {
    /// Rendered under the wordmark, e.g. the results progress dots.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BrandHeader)]
pub fn brand_header(props: &BrandHeaderProps) -> Html {
    html! {
        <header class="bh">
            <div class="bh-row">
                <div />
                <div class="bh-brand">
                    <span class="bh-keto">{"KETO"}</span>
                    <span class="bh-slim">{"SLIM"}</span>
                </div>
                <div class="bh-right">
                    <ThemeToggle />
                </div>
            </div>
            { for props.children.iter() }
        </header>
    }
}

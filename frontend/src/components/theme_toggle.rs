use yew::prelude::*;

use crate::theme::use_theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button type="button" class="dm" {onclick}>
            { if theme.theme.is_dark() { "Light Mode" } else { "Dark Mode" } }
        </button>
    }
}

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scheduling;
mod storage;
mod theme;
mod profile {
    pub mod models;
    pub mod store;
}
mod components {
    pub mod brand_header;
    pub mod form_field;
    pub mod slider_field;
    pub mod theme_toggle;
}
mod pages {
    pub mod details;
    pub mod results;
    pub mod sales;
}

use pages::{
    details::DetailsPage,
    results::ResultsPage,
    sales::SalesPage,
};
use storage::Stores;
use theme::{apply_theme, load_theme, save_theme, ThemeContext};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Details,
    #[at("/results")]
    Results,
    #[at("/sales")]
    Sales,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Details => {
            info!("Rendering Details page");
            html! { <DetailsPage /> }
        },
        Route::Results => {
            info!("Rendering Results page");
            html! { <ResultsPage /> }
        },
        Route::Sales => {
            info!("Rendering Sales page");
            html! { <SalesPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to details");
            html! { <Redirect<Route> to={Route::Details} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let stores = use_state(Stores::from_browser);
    let theme = {
        let stores = stores.clone();
        use_state(move || load_theme(stores.local.as_ref()))
    };

    // Keep <html data-theme> and storage in step with the toggle
    {
        let stores = stores.clone();
        use_effect_with_deps(move |theme| {
            apply_theme(*theme);
            save_theme(stores.local.as_ref(), *theme);
            || ()
        }, *theme);
    }

    let theme_context = ThemeContext {
        theme: *theme,
        toggle: {
            let theme = theme.clone();
            Callback::from(move |_| theme.set(theme.toggled()))
        },
    };

    html! {
        <ContextProvider<Stores> context={(*stores).clone()}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                <style>
                    {r#"
                    :root {
                        --mint: #3ddc97;
                        --red: #e5484d;
                        --bg: #f7f7f5;
                        --card: #ffffff;
                        --text: #161616;
                        --muted: #6b6b6b;
                        --border: #dedede;
                        --input-bg: #ffffff;
                    }
                    [data-theme="dark"] {
                        --bg: #121212;
                        --card: #1c1c1c;
                        --text: #f2f2f2;
                        --muted: #9a9a9a;
                        --border: #2e2e2e;
                        --input-bg: #232323;
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        min-height: 100vh;
                        padding: 0 1rem 3rem;
                    }
                    .center {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .card {
                        background: var(--card);
                        border-radius: 24px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                    }
                    .bh {
                        padding: 1.2rem 0;
                    }
                    .bh-row {
                        display: grid;
                        grid-template-columns: 1fr auto 1fr;
                        align-items: center;
                    }
                    .bh-brand {
                        font-size: 1.6rem;
                        font-weight: 800;
                        letter-spacing: 0.05em;
                    }
                    .bh-slim, .bh-title span {
                        color: var(--mint);
                    }
                    .bh-right {
                        display: flex;
                        justify-content: flex-end;
                    }
                    .bh-title {
                        text-align: center;
                    }
                    .dm {
                        padding: 0.5rem 0.9rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: var(--card);
                        color: var(--text);
                        cursor: pointer;
                    }
                    .ff-label, .sf-label {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .ff-req, .sf-req {
                        color: var(--red);
                    }
                    .sf-top {
                        display: flex;
                        justify-content: space-between;
                    }
                    .sf-value {
                        font-weight: 700;
                        color: var(--mint);
                    }
                    .sf-range {
                        width: 100%;
                        height: 6px;
                        border-radius: 3px;
                        appearance: none;
                    }
                    .sf-hint {
                        font-size: 0.85rem;
                        color: var(--muted);
                        margin-top: 0.4rem;
                    }
                    "#}
                </style>
            </ContextProvider<ThemeContext>>
        </ContextProvider<Stores>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

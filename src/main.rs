use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod casting {
    pub mod form;
    pub mod links;
    pub mod payload;
    pub mod steps;
    pub mod storage;
    pub mod submit;
    pub mod validators;
    pub mod wizard;
}
mod pages {
    pub mod casting;
    pub mod contact;
    pub mod home;
}

use pages::{casting::CastingPage, contact::ContactPage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/casting")]
    Casting,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Casting => {
            info!("Rendering Casting page");
            html! { <CastingPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-weight: 600; color: #0f172a; text-decoration: none; }
                .nav-right { display: flex; align-items: center; gap: 1.25rem; }
                .nav-link { font-size: 0.9rem; color: #334155; text-decoration: none; }
                .nav-link:hover { color: #0f172a; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 4px 0;
                    background: #0f172a;
                }
                @media (max-width: 640px) {
                    .burger-menu { display: block; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #ffffff;
                        border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                        padding: 1rem 1.5rem;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BRAND_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Casting} classes="nav-link">
                            {"Casting"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Book a Call"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

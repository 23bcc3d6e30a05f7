use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod leads {
    pub mod models;
    pub mod validation;
    pub mod envelope;
    pub mod client;
    pub mod form;
}
mod components {
    pub mod modal;
    pub mod contact_modal;
    pub mod demo_modal;
    pub mod success_modal;
    pub mod privacy_modal;
    pub mod careers_modal;
    pub mod how_it_works;
}
mod pages {
    pub mod landing;
}

use components::{
    modal::ActiveModal,
    contact_modal::ContactModal,
    demo_modal::DemoModal,
    privacy_modal::PrivacyModal,
    careers_modal::CareersModal,
};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(route: Route, on_open: Callback<ActiveModal>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {on_open} /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open: Callback<ActiveModal>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open = |modal: ActiveModal| {
        let on_open = props.on_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_open.emit(modal);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"adpocket.ai"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu}>{"FAQ"}</a>
                    <button class="nav-link-button" onclick={open(ActiveModal::Contact)}>
                        {"Contact"}
                    </button>
                    <button class="nav-cta-button" onclick={open(ActiveModal::Demo)}>
                        {"Request Demo"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(3, 7, 18, 0.85);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid #1f2937;
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-weight: 800;
                        font-size: 1.25rem;
                        color: #818cf8;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link, .nav-link-button {
                        color: #d1d5db;
                        background: none;
                        border: none;
                        text-decoration: none;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .nav-cta-button {
                        border: none;
                        border-radius: 10px;
                        padding: 0.5rem 1rem;
                        color: #fff;
                        background: linear-gradient(90deg, #4f46e5, #14b8a6);
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(3, 7, 18, 0.95);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let active_modal = use_state(ActiveModal::default);

    let open_modal = {
        let active_modal = active_modal.clone();
        Callback::from(move |modal: ActiveModal| {
            info!("Opening {:?} modal", modal);
            active_modal.set(modal);
        })
    };

    let close_modal = {
        let active_modal = active_modal.clone();
        Callback::from(move |_: ()| active_modal.set(ActiveModal::None))
    };

    let careers_to_contact = {
        let active_modal = active_modal.clone();
        Callback::from(move |_: ()| active_modal.set(ActiveModal::Contact))
    };

    let render = {
        let open_modal = open_modal.clone();
        Callback::from(move |route: Route| switch(route, open_modal.clone()))
    };

    html! {
        <BrowserRouter>
            <Nav on_open={open_modal} />
            <Switch<Route> {render} />
            // Form modals stay mounted so the contact success popup outlives its form
            <ContactModal open={active_modal.is_open(ActiveModal::Contact)} on_close={close_modal.clone()} />
            <DemoModal open={active_modal.is_open(ActiveModal::Demo)} on_close={close_modal.clone()} />
            if active_modal.is_open(ActiveModal::Privacy) {
                <PrivacyModal on_close={close_modal.clone()} />
            }
            if active_modal.is_open(ActiveModal::Careers) {
                <CareersModal on_close={close_modal} on_contact={careers_to_contact} />
            }
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

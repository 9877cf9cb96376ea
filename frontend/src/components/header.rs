use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::button::{Button, Size};
use crate::Route;

const SCROLLED_THRESHOLD: f64 = 24.0;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_class = |route: &Route, base: &'static str| {
        classes!(base, (current.as_ref() == Some(route)).then_some("active"))
    };

    html! {
        <header class={classes!("site-header", (scroll_y > SCROLLED_THRESHOLD).then_some("scrolled"))}>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    transition: box-shadow 0.2s ease;
                }
                .site-header.scrolled {
                    box-shadow: 0 1px 3px rgba(15, 40, 74, 0.12);
                }
                .site-header nav {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #0F284A, #2563eb);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .brand-name {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.1;
                }
                .brand-name strong { color: #111827; font-size: 1.125rem; }
                .brand-name span { color: #2563eb; font-size: 0.75rem; }
                .nav-links { display: flex; gap: 0.25rem; }
                .nav-link {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    color: #374151;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-link:hover { color: #2563eb; background: #f9fafb; }
                .nav-link.active { color: #2563eb; background: #eff6ff; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 5px 0;
                    background: #374151;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .mobile-menu {
                    border-top: 1px solid #e5e7eb;
                    background: #fff;
                    padding: 1rem 0;
                    animation: menuOpen 0.2s ease-out;
                }
                .mobile-menu .nav-link { display: block; padding: 0.75rem 1rem; font-size: 1rem; }
                .mobile-menu .btn { width: 100%; margin-top: 1rem; }
                @keyframes menuOpen {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .nav-links, .header-cta { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
            <div class="container">
                <nav>
                    <Link<Route> to={Route::Home} classes="brand">
                        <div class="brand-mark">{"S"}</div>
                        <div class="brand-name">
                            <strong>{"Stack Websites"}</strong>
                            <span>{"London"}</span>
                        </div>
                    </Link<Route>>

                    <div class="nav-links">
                        { for Route::primary_nav().iter().map(|route| html! {
                            <Link<Route> to={route.clone()} classes={link_class(route, "nav-link")}>
                                {route.label()}
                            </Link<Route>>
                        }) }
                    </div>

                    <div class="header-cta">
                        <Button to={Route::Contact} size={Size::Sm}>{"Get Started"}</Button>
                    </div>

                    <button
                        type="button"
                        class={classes!("burger-menu", (*menu_open).then_some("open"))}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="container">
                        { for Route::primary_nav().iter().map(|route| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={link_class(route, "nav-link")}>
                                    {route.label()}
                                </Link<Route>>
                            </div>
                        }) }
                        <div onclick={close_menu.clone()}>
                            <Button to={Route::Contact}>{"Get Started"}</Button>
                        </div>
                    </div>
                </div>
            }
        </header>
    }
}

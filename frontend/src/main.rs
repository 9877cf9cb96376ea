use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod error;
mod hooks;
mod lead;
mod splash;

mod components {
    pub mod button;
    pub mod client_grid;
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod legal;
    pub mod seo;
    pub mod splash;
}
mod pages {
    pub mod about;
    pub mod common;
    pub mod contact;
    pub mod cookies;
    pub mod home;
    pub mod portfolio;
    pub mod privacy;
    pub mod services;
    pub mod terms;
}

use components::{layout::Layout, splash::Splash};
use pages::{
    about::About,
    contact::Contact,
    cookies::Cookies,
    home::Home,
    portfolio::Portfolio,
    privacy::Privacy,
    services::Services,
    terms::Terms,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/cookies")]
    Cookies,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Portfolio => "Portfolio",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Privacy => "Privacy Policy",
            Route::Terms => "Terms of Service",
            Route::Cookies => "Cookie Policy",
        }
    }

    /// Header and footer navigation, in display order.
    pub fn primary_nav() -> &'static [Route] {
        &[Route::Home, Route::Services, Route::Portfolio, Route::About, Route::Contact]
    }

    pub fn legal() -> &'static [Route] {
        &[Route::Privacy, Route::Terms, Route::Cookies]
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        },
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <Cookies /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    // Only ever flips to false; the splash plays once per page load.
    let show_splash = use_state(|| true);

    let on_splash_complete = {
        let show_splash = show_splash.clone();
        Callback::from(move |_: ()| {
            info!("Splash finished");
            show_splash.set(false);
        })
    };

    html! {
        <BrowserRouter>
            if *show_splash {
                <Splash on_complete={on_splash_complete} />
            }
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const ALL: [Route; 8] = [
        Route::Home,
        Route::Services,
        Route::Portfolio,
        Route::About,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
        Route::Cookies,
    ];

    #[test]
    fn every_path_maps_to_its_page() {
        let expected = [
            ("/", Route::Home),
            ("/services", Route::Services),
            ("/portfolio", Route::Portfolio),
            ("/about", Route::About),
            ("/contact", Route::Contact),
            ("/privacy", Route::Privacy),
            ("/terms", Route::Terms),
            ("/cookies", Route::Cookies),
        ];
        for (path, route) in expected {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_are_not_routed() {
        assert_eq!(Route::recognize("/blog"), None);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<_> = ALL.iter().map(Route::label).collect();
        assert_eq!(labels.len(), ALL.len());
    }

    #[test]
    fn navigation_covers_every_page_once() {
        let linked: Vec<&Route> = Route::primary_nav().iter().chain(Route::legal()).collect();
        assert_eq!(linked.len(), ALL.len());
        for route in &ALL {
            assert!(linked.contains(&route), "{:?} missing from navigation", route);
        }
    }

    #[test]
    fn pages_have_distinct_titles_and_headings() {
        let pages = [
            (pages::home::SEO_TITLE, pages::home::HEADING),
            (pages::services::SEO_TITLE, pages::services::HEADING),
            (pages::portfolio::SEO_TITLE, pages::portfolio::HEADING),
            (pages::about::SEO_TITLE, pages::about::HEADING),
            (pages::contact::SEO_TITLE, pages::contact::HEADING),
            (pages::privacy::SEO_TITLE, pages::privacy::HEADING),
            (pages::terms::SEO_TITLE, pages::terms::HEADING),
            (pages::cookies::SEO_TITLE, pages::cookies::HEADING),
        ];
        let titles: HashSet<_> = pages.iter().map(|(title, _)| *title).collect();
        let headings: HashSet<_> = pages.iter().map(|(_, heading)| *heading).collect();
        assert_eq!(titles.len(), ALL.len());
        assert_eq!(headings.len(), ALL.len());
        assert!(pages.iter().all(|(title, heading)| !title.is_empty() && !heading.is_empty()));
    }
}

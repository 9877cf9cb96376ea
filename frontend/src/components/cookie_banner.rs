use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, Size};
use crate::consent::{should_show_banner, ConsentStore, LocalConsentStore};
use crate::Route;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let show_banner = use_state(|| false);

    {
        let show_banner = show_banner.clone();
        use_effect_with_deps(
            move |_| {
                show_banner.set(should_show_banner(&LocalConsentStore));
                || ()
            },
            (),
        );
    }

    let accept = {
        let show_banner = show_banner.clone();
        Callback::from(move |_: MouseEvent| {
            match LocalConsentStore.acknowledge() {
                Ok(()) => info!("Cookie notice acknowledged"),
                // Still hide it for this visit.
                Err(e) => warn!("Could not persist cookie consent: {}", e),
            }
            show_banner.set(false);
        })
    };

    if !*show_banner {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-label="Cookie notice">
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: #fff;
                    border-top: 2px solid #e5e7eb;
                    box-shadow: 0 -4px 12px rgba(0, 0, 0, 0.08);
                }
                .cookie-banner-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .cookie-banner p { margin: 0; font-size: 0.875rem; color: #374151; }
                .cookie-actions { display: flex; align-items: center; gap: 0.75rem; flex-shrink: 0; }
                .cookie-actions a { font-size: 0.875rem; color: #2563eb; font-weight: 500; }
                .cookie-close {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #9ca3af;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .cookie-close:hover { color: #4b5563; }
                @media (max-width: 640px) {
                    .cookie-banner-inner { flex-direction: column; align-items: flex-start; }
                }
                "#}
            </style>
            <div class="container cookie-banner-inner">
                <p>
                    {"We use cookies to enhance your browsing experience and analyze our traffic. By clicking \"Accept\", you consent to our use of cookies."}
                </p>
                <div class="cookie-actions">
                    <Link<Route> to={Route::Cookies}>{"Read more"}</Link<Route>>
                    <Button size={Size::Sm} onclick={accept.clone()}>{"Accept"}</Button>
                    <button class="cookie-close" aria-label="Close" onclick={accept}>{"×"}</button>
                </div>
            </div>
        </div>
    }
}

use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #0F284A;
                    color: #cbd5e1;
                    padding: 4rem 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1.5fr;
                    gap: 2.5rem;
                }
                .site-footer h4 {
                    color: #fff;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 1rem;
                }
                .site-footer ul { list-style: none; padding: 0; margin: 0; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a { color: #cbd5e1; text-decoration: none; }
                .site-footer a:hover { color: #fff; }
                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    font-size: 0.875rem;
                    text-align: center;
                }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 560px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h4>{config::SITE_NAME}</h4>
                        <p>
                            {"Modern, fast websites for London small businesses. Fixed price, launched in weeks, with local support when you need it."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for Route::primary_nav().iter().map(|route| html! {
                                <li>
                                    <Link<Route> to={route.clone()}>{route.label()}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Legal"}</h4>
                        <ul>
                            { for Route::legal().iter().map(|route| html! {
                                <li>
                                    <Link<Route> to={route.clone()}>{route.label()}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Get In Touch"}</h4>
                        <ul>
                            <li><a href={config::mailto()}>{config::CONTACT_EMAIL}</a></li>
                            <li><a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE}</a></li>
                            <li>{config::CONTACT_LOCATION}</li>
                            <li>{config::BUSINESS_HOURS}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}
                </div>
            </div>
        </footer>
    }
}

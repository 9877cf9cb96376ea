use yew::prelude::*;

use crate::components::legal::{para, render_section, sub, LegalDocument, LegalSection};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;

pub const SEO_TITLE: &str = "Cookie Policy | Stack Websites London";
pub const HEADING: &str = "Cookie Policy";

pub struct CookieType {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: [&'static str; 3],
    pub duration: &'static str,
    pub optional: bool,
}

impl CookieType {
    pub fn badge(&self) -> &'static str {
        if self.optional {
            "Optional"
        } else {
            "Required"
        }
    }
}

pub const COOKIE_TYPES: [CookieType; 4] = [
    CookieType {
        name: "Strictly Necessary Cookies",
        description: "These cookies are essential for the website to function properly. They enable basic functions like page navigation and access to secure areas of the website. The website cannot function properly without these cookies.",
        examples: [
            "Session cookies for maintaining your browsing session",
            "Security cookies for protecting against fraudulent activity",
            "Load balancing cookies for distributing traffic efficiently",
        ],
        duration: "Session or up to 1 year",
        optional: false,
    },
    CookieType {
        name: "Analytics and Performance Cookies",
        description: "These cookies help us understand how visitors interact with our website by collecting and reporting information anonymously. This helps us improve our website performance and user experience.",
        examples: [
            "Google Analytics cookies for tracking page views and user behavior",
            "Performance monitoring cookies",
            "Error tracking cookies for identifying technical issues",
        ],
        duration: "Up to 2 years",
        optional: true,
    },
    CookieType {
        name: "Functionality Cookies",
        description: "These cookies enable the website to remember choices you make (such as your language preference or region) and provide enhanced, personalized features.",
        examples: [
            "Language preference cookies",
            "Region/location preference cookies",
            "User interface customization cookies",
        ],
        duration: "Up to 1 year",
        optional: true,
    },
    CookieType {
        name: "Marketing and Advertising Cookies",
        description: "These cookies may be set through our site by our advertising partners. They may be used to build a profile of your interests and show you relevant advertisements on other sites.",
        examples: [
            "Social media platform cookies (Twitter, LinkedIn, Instagram)",
            "Advertising network cookies",
            "Remarketing cookies",
        ],
        duration: "Up to 2 years",
        optional: true,
    },
];

const INTRO_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "1. What Are Cookies?",
        items: &[
            para("Cookies are small text files that are placed on your device (computer, smartphone, or tablet) when you visit a website. They are widely used to make websites work more efficiently and provide information to website owners."),
            para("Cookies allow websites to remember your actions and preferences over time, so you don't have to keep re-entering them whenever you return to the site or browse from one page to another."),
        ],
    },
    LegalSection {
        title: "2. How We Use Cookies",
        items: &[
            para("Stack Websites London uses cookies to:"),
            para("• Ensure our website functions properly and securely"),
            para("• Analyze how visitors use our website to improve user experience"),
            para("• Remember your preferences and settings"),
            para("• Deliver relevant marketing content"),
            para("• Understand which marketing campaigns are most effective"),
        ],
    },
];

// Follow the cookie type cards, which render as section 3.
const LATER_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "4. Managing Cookies",
        items: &[
            sub(
                "Browser Settings",
                "Most web browsers allow you to control cookies through their settings preferences. However, if you limit the ability of websites to set cookies, you may impact your overall user experience, as some features may not function properly.",
            ),
            sub(
                "How to Manage Cookies:",
                "• Google Chrome: Settings > Privacy and security > Cookies and other site data\n• Mozilla Firefox: Options > Privacy & Security > Cookies and Site Data\n• Safari: Preferences > Privacy > Cookies and website data\n• Microsoft Edge: Settings > Cookies and site permissions",
            ),
            sub(
                "Opt-Out Options",
                "You can opt out of analytics cookies by installing browser plugins or extensions designed to block tracking. For Google Analytics specifically, you can install the Google Analytics Opt-out Browser Add-on.",
            ),
        ],
    },
    LegalSection {
        title: "5. Third-Party Cookies",
        items: &[
            para("Some cookies on our website are set by third-party services we use, such as:"),
            para("• Google Analytics - for website traffic analysis"),
            para("• Social media platforms (Twitter, LinkedIn, Instagram) - for social sharing functionality"),
            para("• Content delivery networks - for faster page loading"),
            para("These third parties have their own privacy and cookie policies, and we have no control over their cookies. We encourage you to review their policies for more information."),
        ],
    },
    LegalSection {
        title: "6. Updates to This Policy",
        items: &[para(
            "We may update this Cookie Policy from time to time to reflect changes in our practices or for legal, operational, or regulatory reasons. We encourage you to review this page periodically for any updates.",
        )],
    },
    LegalSection {
        title: "7. Contact Us",
        items: &[
            para("If you have any questions about our use of cookies, please contact us:"),
            para("Email: hello@websitelondon.co.uk"),
            para("Phone: +44 20 1234 5678"),
            para("Address: London, United Kingdom"),
        ],
    },
];

fn cookie_card(cookie: &CookieType) -> Html {
    html! {
        <div class="cookie-type" key={cookie.name}>
            <div class="cookie-type-header">
                <h3>{cookie.name}</h3>
                <span class={classes!("cookie-badge", cookie.optional.then_some("optional"))}>
                    {cookie.badge()}
                </span>
            </div>
            <p>{cookie.description}</p>
            <h4>{"Examples:"}</h4>
            <ul>
                { for cookie.examples.iter().map(|e| html! { <li key={*e}>{*e}</li> }) }
            </ul>
            <div class="cookie-duration">
                <strong>{"Duration: "}</strong>
                <span>{cookie.duration}</span>
            </div>
        </div>
    }
}

#[function_component(Cookies)]
pub fn cookies() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Learn about how Stack Websites London uses cookies and how you can manage your cookie preferences."
                path="/cookies"
            />
            <style>
                {r#"
                .cookie-types { display: grid; gap: 1.5rem; }
                .cookie-type {
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .cookie-type-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
                .cookie-type h3 { margin: 0 0 0.75rem; }
                .cookie-type h4 { font-size: 0.875rem; font-weight: 600; margin: 0.75rem 0 0.25rem; }
                .cookie-badge {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    background: #f3f4f6;
                    color: #374151;
                    white-space: nowrap;
                }
                .cookie-badge.optional { background: #dcfce7; color: #15803d; }
                .cookie-duration { margin-top: 0.75rem; font-size: 0.875rem; color: #4b5563; }
                "#}
            </style>
            <LegalDocument
                title={HEADING}
                intro="This policy explains how Stack Websites London uses cookies and similar technologies on our website."
                preamble="By continuing to use our website, you consent to our use of cookies as described in this policy. You can manage your cookie preferences at any time through your browser settings."
                sections={INTRO_SECTIONS}
            >
                <section class="legal-section">
                    <h2>{"3. Types of Cookies We Use"}</h2>
                    <div class="cookie-types">
                        { for COOKIE_TYPES.iter().map(cookie_card) }
                    </div>
                </section>
                { for LATER_SECTIONS.iter().map(render_section) }
                <p class="legal-closing">
                    {"By using our website, you acknowledge that you have read and understood this Cookie Policy and consent to our use of cookies as described."}
                </p>
            </LegalDocument>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_strictly_necessary_cookies_are_required() {
        let required: Vec<_> = COOKIE_TYPES.iter().filter(|c| !c.optional).map(|c| c.name).collect();
        assert_eq!(required, vec!["Strictly Necessary Cookies"]);
        assert_eq!(COOKIE_TYPES[0].badge(), "Required");
        assert_eq!(COOKIE_TYPES[1].badge(), "Optional");
    }

    #[test]
    fn sections_number_around_cookie_types() {
        let numbers: Vec<&str> = INTRO_SECTIONS
            .iter()
            .chain(LATER_SECTIONS)
            .filter_map(|s| s.title.split('.').next())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "4", "5", "6", "7"]);
    }
}

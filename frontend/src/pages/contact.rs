use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::seo::Seo;
use crate::config;
use crate::hooks::use_scroll_to_top;
use crate::pages::common::highlight;

pub const SEO_TITLE: &str = "Contact Stack Websites London | Get Your Free Quote Today";
pub const HEADING: &str = "Get Your £1,999 Website";

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Why choose Stack Websites over other London web designers?",
        answer: "We specialise exclusively in small London businesses. Unlike large agencies that take months and charge £10k+, we deliver professional websites in 2-3 weeks at a fixed £1,999 price. You'll work directly with our team (no account managers), get same-day responses, and we understand the unique challenges of running a small business in London. Plus, 98% of our clients come back for more work - our retention speaks for itself.",
    },
    FaqEntry {
        question: "What if I don't have content, photos, or a logo ready?",
        answer: "No problem at all - most of our clients don't! We can write your content, source professional stock photos, or connect you with affordable local photographers. Need a logo? We can design one or recommend trusted local designers. We've launched hundreds of sites and know exactly how to help you get everything sorted quickly. The key is getting started - we'll guide you through every step.",
    },
    FaqEntry {
        question: "How quickly can my London business get online?",
        answer: "Most London businesses are live within 2-3 weeks from our first call. We understand that every day without a website is lost revenue. Our streamlined process means you could have a discovery call this week, approve designs next week, and be live before the end of the month. We also offer rush delivery for urgent launches - just ask.",
    },
    FaqEntry {
        question: "What happens after my website launches?",
        answer: "We don't disappear after launch! Every website includes 30 days of free support to handle any tweaks, questions, or issues. After that, we offer affordable monthly maintenance packages (from £150/month) covering updates, backups, security, and priority support. Many clients also return to us for SEO, additional features, or help growing their online presence. We're here for the long haul.",
    },
    FaqEntry {
        question: "Do you only work with London businesses?",
        answer: "Yes - London is our focus. We understand the local market, competition, and what London customers expect. We can meet you in person for coffee, visit your business, and truly understand your local customer base. This local expertise is why our clients see better results than working with overseas or non-London agencies.",
    },
    FaqEntry {
        question: "How do I know you're legitimate and won't disappear with my money?",
        answer: "Great question! We've been serving London businesses since 2020 with over 100 successful projects. We work on a milestone payment system - you only pay as work is completed, never upfront. You can verify our portfolio, read our Google reviews, and we're happy to provide references from similar businesses. We're a registered UK company with a real London address and phone number. Your investment is safe with us.",
    },
    FaqEntry {
        question: "Can you help my business show up on Google?",
        answer: "Absolutely. Every website we build includes foundational SEO setup to help you rank locally. We optimize for London-specific searches, set up your Google Business Profile, and ensure your site is technically sound for search engines. For clients wanting to dominate their local market, we offer ongoing SEO services from £500/month, focusing on getting you to the top of Google for \"your service + London\" searches.",
    },
    FaqEntry {
        question: "What if I need changes after seeing the first design?",
        answer: "Revisions are completely normal and expected! Our packages include multiple revision rounds because we want you to love your site. We work closely with you to refine the design until it's exactly right. The goal is your complete satisfaction - we won't launch until you're thrilled with the result. Most clients are happy after 1-2 revision rounds, but we're flexible.",
    },
];

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    content: &'static str,
    link: Option<String>,
}

fn contact_info() -> [ContactInfo; 4] {
    [
        ContactInfo {
            icon: "✉",
            title: "Email Us",
            content: config::CONTACT_EMAIL,
            link: Some(config::mailto()),
        },
        ContactInfo {
            icon: "☎",
            title: "Call Us",
            content: config::CONTACT_PHONE,
            link: Some(config::CONTACT_PHONE_HREF.to_string()),
        },
        ContactInfo {
            icon: "📍",
            title: "Location",
            content: config::CONTACT_LOCATION,
            link: None,
        },
        ContactInfo {
            icon: "🕘",
            title: "Business Hours",
            content: config::BUSINESS_HOURS,
            link: None,
        },
    ]
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Ready to get online? Contact Stack Websites London for a free quote. Fast, professional web design for London small businesses. Call +44 20 1234 5678."
                path="/contact"
            />

            <section class="section page-hero">
                <div class="container narrow">
                    <h1 class="heading-xl">{ highlight(HEADING, "£1,999") }</h1>
                    <p class="text-body">
                        {"Fixed price. No surprises. Reply in 2 hours. For London small businesses only."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container contact-grid">
                    <div class="card">
                        <ContactForm />
                    </div>
                    <aside class="contact-sidebar">
                        <div class="card">
                            <h3 class="heading-sm">{"Contact Information"}</h3>
                            <ul class="contact-info">
                                { for contact_info().into_iter().map(|info| html! {
                                    <li key={info.title}>
                                        <span class="contact-icon">{info.icon}</span>
                                        <div>
                                            <div class="contact-title">{info.title}</div>
                                            { match info.link {
                                                Some(link) => html! { <a href={link}>{info.content}</a> },
                                                None => html! { <div>{info.content}</div> },
                                            } }
                                        </div>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="card highlight">
                            <h3 class="heading-sm">{"Quick Response Guarantee"}</h3>
                            <p>
                                {"We respond to all quotes within 24 hours, usually much faster. Most clients get their proposal the same day."}
                            </p>
                            <div class="guarantee">{"⏱ 24-hour response time"}</div>
                        </div>
                    </aside>
                </div>
            </section>

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Everything London Businesses Ask Us"}</h2>
                        <p class="text-body">
                            {"Honest answers about pricing, process, and what makes us different. Still have questions? Just ask."}
                        </p>
                    </div>
                    <FaqList entries={FAQS} />
                    <div class="section-cta faq-followup">
                        <h3 class="heading-sm">{"Still have questions?"}</h3>
                        <p>{"We're happy to chat! Book a free 15-minute call or send us a message above."}</p>
                        <div class="cta-actions">
                            <Button href={config::CONTACT_PHONE_HREF} size={Size::Lg}>
                                {format!("Call: {}", config::CONTACT_PHONE)}
                            </Button>
                            <Button href={config::mailto()} variant={Variant::Outline} size={Size::Lg}>
                                {"Email Us"}
                            </Button>
                        </div>
                    </div>
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn faq_questions_are_unique() {
        let questions: HashSet<_> = FAQS.iter().map(|f| f.question).collect();
        assert_eq!(questions.len(), FAQS.len());
        assert_eq!(FAQS.len(), 8);
    }

    #[test]
    fn linked_contact_details_use_site_config() {
        let info = contact_info();
        assert_eq!(info[0].link.as_deref(), Some("mailto:hello@websitelondon.co.uk"));
        assert_eq!(info[1].link.as_deref(), Some(config::CONTACT_PHONE_HREF));
        assert!(info[2].link.is_none());
    }
}

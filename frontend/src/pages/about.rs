use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;
use crate::pages::common::{highlight, Feature, Stat};
use crate::Route;

pub const SEO_TITLE: &str = "About Stack Websites London | Your London Web Design Team";
pub const HEADING: &str = "We're Stack Websites London";

const VALUES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Speed & Quality",
        description: "Fast delivery without cutting corners. We deliver exceptional websites in weeks, not months.",
    },
    Feature {
        icon: "❤",
        title: "Client-First",
        description: "Your success is our success. We build long-term relationships with every London business we work with.",
    },
    Feature {
        icon: "✨",
        title: "Modern & Fresh",
        description: "We stay ahead of design trends and technology so your website never looks outdated.",
    },
    Feature {
        icon: "✔",
        title: "Transparent & Honest",
        description: "No hidden fees, no surprises. Clear pricing, realistic timelines, and honest communication.",
    },
];

struct Member {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    bio: &'static str,
}

const TEAM: [Member; 3] = [
    Member {
        name: "Alex Carter",
        role: "Founder & Lead Designer",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&auto=format",
        bio: "10+ years designing websites for London businesses. Passionate about helping small businesses compete online.",
    },
    Member {
        name: "Sarah Mitchell",
        role: "Senior Developer",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&auto=format",
        bio: "Full-stack developer specializing in fast, secure websites. Previously worked at Google.",
    },
    Member {
        name: "James Wilson",
        role: "SEO Specialist",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&auto=format",
        bio: "SEO expert helping London businesses rank on Google. Over 50 first-page rankings achieved.",
    },
];

const TIMELINE: [(&str, &str, &str); 5] = [
    ("2020", "Started Stack Websites", "Founded with a mission to help London small businesses get online affordably."),
    ("2021", "50 Websites Launched", "Helped over 50 London businesses establish their online presence."),
    ("2022", "Award Recognition", "Named \"Best Small Business Web Designer\" by London Business Awards."),
    ("2023", "100+ Happy Clients", "Crossed the 100-client milestone with a 4.9/5 average rating."),
    ("2024", "AI Integration", "Pioneered AI-powered features for small business websites in London."),
];

const STATS: [Stat; 4] = [
    Stat { value: "100+", label: "Websites Built" },
    Stat { value: "5 Years", label: "In Business" },
    Stat { value: "4.9/5", label: "Client Rating" },
    Stat { value: "98%", label: "Client Retention" },
];

const REASONS: [(&str, &str); 4] = [
    ("We Understand London Business", "Born and based in London, we understand the unique challenges of running a business here."),
    ("Fast Turnaround", "Launch-ready websites in 2-3 weeks, not months. We respect your time and business needs."),
    ("Transparent Pricing", "Fixed prices, no surprises. You know exactly what you're paying from day one."),
    ("Ongoing Support", "We don't disappear after launch. We're here to help your business grow."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Meet the team behind Stack Websites London. We're passionate about helping small London businesses succeed online with modern, fast websites."
                path="/about"
            />

            <section class="section page-hero">
                <div class="container hero-grid">
                    <div>
                        <h1 class="heading-xl">{ highlight(HEADING, "London") }</h1>
                        <p class="text-body">
                            {"A team of designers, developers, and digital marketers on a mission to help London small businesses thrive online."}
                        </p>
                        <p class="text-body">
                            {"We know what it's like to run a small business in London. The competition is fierce, costs are high, and you need results fast. That's why we specialize in creating beautiful, effective websites that don't break the bank or take forever to launch."}
                        </p>
                        <Button to={Route::Contact} size={Size::Lg}>{"Work With Us"}</Button>
                    </div>
                    <div class="stats-grid compact">
                        { for STATS.iter().map(Stat::render) }
                    </div>
                </div>
            </section>

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Our Mission"}</h2>
                        <p class="text-body">
                            {"To make professional web design accessible to every small business in London. We believe that a great website shouldn't cost £10,000 or take 6 months to build."}
                        </p>
                        <p class="text-body">
                            {"By combining modern technology, streamlined processes, and genuine care for our clients, we deliver websites that look amazing and drive real business results."}
                        </p>
                    </div>
                    <div class="card-grid four">
                        { for VALUES.iter().map(Feature::render) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Our Journey"}</h2>
                        <p class="text-body">
                            {"From a one-person startup to London's trusted web design partner for small businesses."}
                        </p>
                    </div>
                    <ol class="timeline">
                        { for TIMELINE.iter().map(|(year, title, description)| html! {
                            <li key={*year}>
                                <span class="timeline-year">{*year}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Meet The Team"}</h2>
                        <p class="text-body">{"A small, dedicated team of professionals who love what they do."}</p>
                    </div>
                    <div class="card-grid">
                        { for TEAM.iter().map(|member| html! {
                            <div class="card team-card" key={member.name}>
                                <img src={member.image} alt={member.name} loading="lazy" />
                                <h3>{member.name}</h3>
                                <div class="team-role">{member.role}</div>
                                <p>{member.bio}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container hero-grid">
                    <div>
                        <h2 class="heading-lg">{"Why London Businesses Choose Us"}</h2>
                        <ul class="reasons">
                            { for REASONS.iter().map(|(title, text)| html! {
                                <li key={*title}>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="hero-image">
                        <img
                            src="https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=800&auto=format"
                            alt="Working together"
                            loading="lazy"
                        />
                    </div>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container narrow">
                    <h2 class="heading-lg">{"Let's Work Together"}</h2>
                    <p>{"Ready to take your London business online? Let's chat about your project."}</p>
                    <div class="cta-actions">
                        <Button to={Route::Contact} variant={Variant::Secondary} size={Size::Lg}>
                            {"Get Your Free Quote"}
                        </Button>
                        <Button to={Route::Portfolio} variant={Variant::Ghost} size={Size::Lg} class={classes!("on-dark")}>
                            {"View Our Work"}
                        </Button>
                    </div>
                </div>
            </section>
        </>
    }
}

use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::components::client_grid::{Client, ClientGrid};
use crate::components::seo::{Seo, DEFAULT_TITLE};
use crate::config;
use crate::hooks::use_scroll_to_top;
use crate::pages::common::{check_list, stars, Feature, Stat};
use crate::Route;

pub const SEO_TITLE: &str = DEFAULT_TITLE;
pub const HEADING: &str = "Modern Website for London Businesses";

const BENEFITS: [&str; 5] = [
    "Mobile-first design",
    "SEO for local Google rankings",
    "Fast hosting included",
    "Launch in 7 days",
    "London support",
];

const STATS: [Stat; 4] = [
    Stat { value: "50+", label: "London Businesses" },
    Stat { value: "7 Days", label: "Launch Time" },
    Stat { value: "£1,999", label: "Fixed Price" },
    Stat { value: "2 Hours", label: "Reply Time" },
];

const FEATURES: [Feature; 6] = [
    Feature { icon: "🚀", title: "Fast Delivery", description: "Launch-ready websites in 2-3 weeks, not months." },
    Feature { icon: "✨", title: "Modern Design", description: "Beautiful, on-brand designs that make you stand out." },
    Feature { icon: "⚡", title: "Lightning Fast", description: "Optimized for speed and Core Web Vitals." },
    Feature { icon: "📱", title: "Mobile First", description: "Perfect on every device, every screen size." },
    Feature { icon: "📈", title: "SEO Ready", description: "Built to rank on Google from day one." },
    Feature { icon: "🤖", title: "AI Powered", description: "Smart automation for forms, chat, and more." },
];

struct Preview {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    description: &'static str,
}

const PREVIEWS: [Preview; 3] = [
    Preview {
        title: "Café Mocha",
        category: "Coffee Shop",
        image: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800&auto=format",
        description: "Modern café website with online ordering",
    },
    Preview {
        title: "Smith Plumbing",
        category: "Trades",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=800&auto=format",
        description: "Professional service site with booking",
    },
    Preview {
        title: "Bella Boutique",
        category: "Retail",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&auto=format",
        description: "E-commerce store with 200+ products",
    },
];

struct Testimonial {
    name: &'static str,
    business: &'static str,
    location: &'static str,
    content: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        business: "The Daily Grind Café",
        location: "Shoreditch",
        content: "Stack Websites transformed our online presence. We launched in 10 days and saw a 40% increase in orders within the first month.",
        rating: 5,
    },
    Testimonial {
        name: "Mike Thompson",
        business: "Thompson & Sons Electrical",
        location: "Camden",
        content: "Professional, fast, and exactly what we needed. Our customers love the new booking system. Best investment we made this year.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Davis",
        business: "Verde Yoga Studio",
        location: "Notting Hill",
        content: "Beautiful design and so easy to update. The team understood our brand perfectly. Highly recommend for small London businesses!",
        rating: 5,
    },
];

fn clients() -> Vec<Client> {
    vec![
        Client::named("AI Society"),
        Client::named("Imperial College London"),
        Client::named("KTH Royal Institute"),
        Client::named("Institution of Mechanical Engineers"),
        Client::named("Royal Academy of Engineering"),
        Client::named("Red Bull Racing F1"),
        Client::named("Pathfinder Medical"),
        Client::named("FibonacciHQ"),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo title={SEO_TITLE} />

            <section class="section hero">
                <div class="container hero-grid">
                    <div class="fade-up">
                        <h1 class="heading-hero">{HEADING}</h1>
                        { check_list(&BENEFITS) }
                        <div class="hero-cta">
                            <Button to={Route::Contact} size={Size::Lg}>{"Get My Website →"}</Button>
                        </div>
                        <p class="hero-trust">
                            {"50+ London businesses | Fixed price, no surprises | Reply within 2hrs"}
                        </p>
                    </div>
                    <div class="hero-image fade-in">
                        <img
                            src="https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&auto=format"
                            alt="Modern web design"
                        />
                    </div>
                </div>
            </section>

            <section class="stats-strip">
                <div class="container stats-grid">
                    { for STATS.iter().map(Stat::render) }
                </div>
            </section>

            <ClientGrid clients={clients()} />

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Why London Businesses Choose Us"}</h2>
                        <p class="text-body">
                            {"We specialize in helping small London businesses get online quickly with websites that actually work."}
                        </p>
                    </div>
                    <div class="card-grid">
                        { for FEATURES.iter().map(Feature::render) }
                    </div>
                    <div class="section-cta">
                        <Button to={Route::Services} size={Size::Lg}>{"View All Services"}</Button>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Recent London Projects"}</h2>
                        <p class="text-body">
                            {"See how we've helped other small businesses in London succeed online."}
                        </p>
                    </div>
                    <div class="card-grid">
                        { for PREVIEWS.iter().map(|item| html! {
                            <div class="project-preview" key={item.title}>
                                <div class="project-image">
                                    <img src={item.image} alt={item.title} loading="lazy" />
                                </div>
                                <div class="project-category">{item.category}</div>
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        }) }
                    </div>
                    <div class="section-cta">
                        <Button to={Route::Portfolio} variant={Variant::Outline} size={Size::Lg}>
                            {"View Full Portfolio"}
                        </Button>
                    </div>
                </div>
            </section>

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"What London Businesses Say"}</h2>
                        <p class="text-body">{"Real reviews from real London small business owners."}</p>
                    </div>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="card testimonial" key={t.name}>
                                { stars(t.rating) }
                                <p class="quote">{format!("\"{}\"", t.content)}</p>
                                <div class="author">{t.name}</div>
                                <div class="business">{t.business}</div>
                                <div class="location">{format!("{}, London", t.location)}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container narrow">
                    <h2 class="heading-lg">{"Ready to Get Online?"}</h2>
                    <p>
                        {"Let's build a website that brings customers to your London business. Free quote, no obligation."}
                    </p>
                    <div class="cta-actions">
                        <Button to={Route::Contact} variant={Variant::Secondary} size={Size::Lg}>
                            {"Get Your Free Quote"}
                        </Button>
                        <Button href={config::CONTACT_PHONE_HREF} variant={Variant::Ghost} size={Size::Lg} class={classes!("on-dark")}>
                            {format!("Call Us: {}", config::CONTACT_PHONE)}
                        </Button>
                    </div>
                </div>
            </section>
        </>
    }
}

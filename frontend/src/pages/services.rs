use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;
use crate::pages::common::{check_list, highlight};
use crate::Route;

pub const SEO_TITLE: &str = "Web Design Services London | Stack Websites - Pricing & Packages";
pub const HEADING: &str = "Web Design Services for London Businesses";

struct Service {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 6],
    pricing: &'static str,
    timeline: &'static str,
    ideal: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        id: "web-design",
        icon: "🎨",
        title: "Custom Web Design",
        description: "Beautiful, modern websites designed specifically for your London business.",
        features: [
            "Mobile-first responsive design",
            "On-brand custom styling",
            "Fast loading times",
            "User-friendly interface",
            "Professional imagery",
            "Contact forms & CTAs",
        ],
        pricing: "From £1,500",
        timeline: "2-3 weeks",
        ideal: "Cafés, restaurants, trades, services",
    },
    Service {
        id: "ecommerce",
        icon: "🛒",
        title: "E-commerce Websites",
        description: "Sell online with a powerful, easy-to-manage online store.",
        features: [
            "Product catalog & inventory",
            "Secure payment processing",
            "Shopping cart & checkout",
            "Order management system",
            "Customer accounts",
            "Mobile shopping experience",
        ],
        pricing: "From £2,500",
        timeline: "3-4 weeks",
        ideal: "Boutiques, retailers, product businesses",
    },
    Service {
        id: "development",
        icon: "💻",
        title: "Custom Development",
        description: "Bespoke features and integrations for unique needs.",
        features: [
            "Custom functionality",
            "API integrations",
            "Booking systems",
            "Member areas",
            "Custom dashboards",
            "Third-party connections",
        ],
        pricing: "From £2,000",
        timeline: "3-6 weeks",
        ideal: "Businesses with specific needs",
    },
];

struct Package {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PACKAGES: [Package; 3] = [
    Package {
        name: "Starter",
        price: "£1,500",
        description: "Perfect for small businesses just getting started online",
        features: &[
            "Up to 5 pages",
            "Mobile responsive",
            "Contact form",
            "Basic SEO setup",
            "Social media links",
            "2 rounds of revisions",
            "30 days support",
        ],
        cta: "Get Started",
        popular: false,
    },
    Package {
        name: "Professional",
        price: "£2,500",
        description: "Our most popular package for established businesses",
        features: &[
            "Up to 10 pages",
            "Advanced design",
            "Contact & custom forms",
            "Full SEO optimization",
            "Blog setup",
            "Google Analytics",
            "Unlimited revisions",
            "90 days support",
        ],
        cta: "Most Popular",
        popular: true,
    },
    Package {
        name: "E-commerce",
        price: "£3,500",
        description: "Complete online store for selling products",
        features: &[
            "Up to 100 products",
            "Payment integration",
            "Inventory management",
            "Customer accounts",
            "Advanced SEO",
            "Email marketing setup",
            "Unlimited revisions",
            "90 days support",
        ],
        cta: "Start Selling",
        popular: false,
    },
];

const PROCESS: [(&str, &str); 5] = [
    ("Discovery Call", "We learn about your business, goals, and requirements in a free 30-minute call."),
    ("Proposal & Quote", "Within 24 hours, you receive a detailed proposal with fixed pricing and timeline."),
    ("Design & Build", "Our team designs and builds your website, keeping you updated every step."),
    ("Review & Revise", "You review the site and request any changes. We offer unlimited revisions."),
    ("Launch & Support", "We launch your site and provide training and ongoing support."),
];

fn service_card(service: &Service) -> Html {
    html! {
        <div class="card service-card" id={service.id} key={service.id}>
            <div class="feature-icon">{service.icon}</div>
            <h3 class="heading-sm">{service.title}</h3>
            <p>{service.description}</p>
            <dl class="service-facts">
                <div><dt>{"Pricing"}</dt><dd class="price">{service.pricing}</dd></div>
                <div><dt>{"Timeline"}</dt><dd>{service.timeline}</dd></div>
                <div><dt>{"Ideal for"}</dt><dd>{service.ideal}</dd></div>
            </dl>
            <h4>{"What's included:"}</h4>
            { check_list(&service.features) }
            <Button to={Route::Contact} variant={Variant::Outline} class={classes!("full-width")}>
                {"Get a Quote"}
            </Button>
        </div>
    }
}

fn package_card(package: &Package) -> Html {
    let variant = if package.popular { Variant::Primary } else { Variant::Outline };
    html! {
        <div class={classes!("card", "package-card", package.popular.then_some("popular"))} key={package.name}>
            if package.popular {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <h3 class="heading-sm">{package.name}</h3>
            <div class="package-price">{package.price}</div>
            <p>{package.description}</p>
            { check_list(package.features) }
            <Button to={Route::Contact} {variant} class={classes!("full-width")}>{package.cta}</Button>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Professional web design services for London businesses. Custom websites, e-commerce, SEO, and maintenance from £1,500. Fast delivery, quality guaranteed."
                path="/services"
            />

            <section class="section page-hero">
                <div class="container narrow">
                    <h1 class="heading-xl">{ highlight(HEADING, "Businesses") }</h1>
                    <p class="text-body">
                        {"From simple brochure sites to full e-commerce stores, we offer everything London small businesses need to succeed online."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container card-grid">
                    { for SERVICES.iter().map(service_card) }
                </div>
            </section>

            <section class="section bg-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Simple, Transparent Pricing"}</h2>
                        <p class="text-body">
                            {"Choose the package that fits your needs. All packages include hosting setup and training."}
                        </p>
                    </div>
                    <div class="card-grid">
                        { for PACKAGES.iter().map(package_card) }
                    </div>
                    <div class="section-cta">
                        <Button to={Route::Contact} variant={Variant::Outline}>{"Request Custom Quote"}</Button>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"How It Works"}</h2>
                        <p class="text-body">
                            {"Our streamlined process gets you online fast without compromising on quality."}
                        </p>
                    </div>
                    <ol class="process">
                        { for PROCESS.iter().enumerate().map(|(i, (title, description))| html! {
                            <li key={*title}>
                                <div class="process-step">{(i + 1).to_string()}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container narrow">
                    <h2 class="heading-lg">{"Ready to Start Your Project?"}</h2>
                    <p>{"Get a free quote and see how we can help your London business grow online."}</p>
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

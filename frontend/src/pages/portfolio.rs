use log::debug;
use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;
use crate::pages::common::{highlight, Stat};
use crate::Route;

pub const SEO_TITLE: &str = "Portfolio - London Website Design Projects | Stack Websites";
pub const HEADING: &str = "Our London Portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Hospitality,
    Trades,
    Retail,
    Professional,
}

impl Category {
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::Hospitality,
        Category::Trades,
        Category::Retail,
        Category::Professional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Hospitality => "Hospitality",
            Category::Trades => "Trades & Services",
            Category::Retail => "Retail",
            Category::Professional => "Professional",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub location: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub results: [&'static str; 2],
}

pub const PROJECTS: [Project; 8] = [
    Project {
        title: "Café Mocha",
        category: Category::Hospitality,
        location: "Shoreditch",
        image: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800&auto=format&q=75&fm=webp",
        description: "Modern coffee shop website with online ordering system and menu showcase.",
        features: ["Online Ordering", "Menu Management", "Mobile Responsive", "SEO Optimized"],
        results: ["40% increase in online orders", "Launched in 10 days"],
    },
    Project {
        title: "Smith Plumbing Services",
        category: Category::Trades,
        location: "Camden",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=800&auto=format&q=75&fm=webp",
        description: "Professional service website with booking system and emergency contact.",
        features: ["Online Booking", "Service Areas Map", "Emergency Hotline", "Customer Reviews"],
        results: ["3x more quote requests", "50+ 5-star reviews"],
    },
    Project {
        title: "Bella Boutique",
        category: Category::Retail,
        location: "Notting Hill",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&auto=format&q=75&fm=webp",
        description: "E-commerce fashion store with 200+ products and secure checkout.",
        features: ["E-commerce Platform", "Inventory Management", "Payment Integration", "Customer Accounts"],
        results: ["£50k sales in first month", "200+ products online"],
    },
    Project {
        title: "Verde Yoga Studio",
        category: Category::Professional,
        location: "Greenwich",
        image: "https://images.unsplash.com/photo-1588286840104-8957b019727f?w=800&auto=format&q=75&fm=webp",
        description: "Wellness studio site with class schedules and membership signup.",
        features: ["Class Booking", "Membership Portal", "Event Calendar", "Blog"],
        results: ["80% online bookings", "100+ new members"],
    },
    Project {
        title: "The Gourmet Kitchen",
        category: Category::Hospitality,
        location: "Chelsea",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&auto=format&q=75&fm=webp",
        description: "Fine dining restaurant with table reservations and event booking.",
        features: ["Table Reservations", "Menu Showcase", "Private Events", "Gallery"],
        results: ["90% table occupancy", "5-star Google rating"],
    },
    Project {
        title: "TechFix London",
        category: Category::Trades,
        location: "Islington",
        image: "https://images.unsplash.com/photo-1581092160562-40aa08e78837?w=800&auto=format&q=75&fm=webp",
        description: "IT support company with service packages and instant quote calculator.",
        features: ["Quote Calculator", "Service Packages", "Support Tickets", "Knowledge Base"],
        results: ["120+ new clients", "4.9/5 rating"],
    },
    Project {
        title: "Urban Threads",
        category: Category::Retail,
        location: "Covent Garden",
        image: "https://images.unsplash.com/photo-1445205170230-053b83016050?w=800&auto=format&q=75&fm=webp",
        description: "Streetwear brand with custom product filters and wishlist feature.",
        features: ["Product Filters", "Wishlist", "Size Guide", "Brand Story"],
        results: ["£75k monthly revenue", "2,000+ customers"],
    },
    Project {
        title: "Harper & Associates",
        category: Category::Professional,
        location: "City of London",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&auto=format&q=75&fm=webp",
        description: "Law firm website with case studies and consultation booking.",
        features: ["Case Studies", "Team Profiles", "Consultation Booking", "Resource Library"],
        results: ["60% more consultations", "Industry recognition"],
    },
];

const RESULTS: [Stat; 4] = [
    Stat { value: "100+", label: "Happy Clients" },
    Stat { value: "£2M+", label: "Client Revenue" },
    Stat { value: "4.9/5", label: "Average Rating" },
    Stat { value: "98%", label: "Client Retention" },
];

pub fn filter_projects(projects: &[Project], category: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| category == Category::All || p.category == category)
        .collect()
}

fn project_card(project: &Project) -> Html {
    html! {
        <div class="card project-card" key={project.title}>
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="project-location">{project.location}</span>
            </div>
            <div class="project-category">{project.category.label()}</div>
            <h3 class="heading-sm">{project.title}</h3>
            <p>{project.description}</p>
            <div class="tags">
                { for project.features.iter().map(|f| html! { <span class="tag" key={*f}>{*f}</span> }) }
            </div>
            <ul class="project-results">
                { for project.results.iter().map(|r| html! { <li key={*r}>{*r}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_scroll_to_top();
    let filter = use_state(|| Category::All);
    let visible = filter_projects(&PROJECTS, *filter);

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="View our portfolio of websites for London small businesses. From cafés to trades, see real results from real London businesses."
                path="/portfolio"
            />

            <section class="section page-hero">
                <div class="container narrow">
                    <h1 class="heading-xl">{ highlight(HEADING, "Portfolio") }</h1>
                    <p class="text-body">
                        {"Real websites for real London businesses. Browse our recent projects and the results they delivered."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="filter-bar" role="tablist">
                        { for Category::FILTERS.iter().map(|category| {
                            let category = *category;
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| {
                                    debug!("Portfolio filter set to {:?}", category);
                                    filter.set(category);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("filter-button", (*filter == category).then_some("active"))}
                                    role="tab"
                                    aria-selected={(*filter == category).to_string()}
                                    {onclick}
                                >
                                    {category.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="card-grid">
                        { for visible.into_iter().map(project_card) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="heading-lg">{"Results That Speak"}</h2>
                        <p class="text-body">
                            {"Our websites don't just look good - they deliver real business results."}
                        </p>
                    </div>
                    <div class="stats-grid">
                        { for RESULTS.iter().map(Stat::render) }
                    </div>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container narrow">
                    <h2 class="heading-lg">{"Want Results Like These?"}</h2>
                    <p>{"Let's discuss your project and create a website that grows your London business."}</p>
                    <div class="cta-actions">
                        <Button to={Route::Contact} variant={Variant::Secondary} size={Size::Lg}>
                            {"Start Your Project"}
                        </Button>
                        <Button to={Route::Services} variant={Variant::Ghost} size={Size::Lg} class={classes!("on-dark")}>
                            {"View Services"}
                        </Button>
                    </div>
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(projects: Vec<&Project>) -> Vec<&'static str> {
        projects.into_iter().map(|p| p.title).collect()
    }

    #[test]
    fn all_shows_every_project() {
        assert_eq!(filter_projects(&PROJECTS, Category::All).len(), PROJECTS.len());
    }

    #[test]
    fn category_shows_only_its_projects() {
        assert_eq!(
            titles(filter_projects(&PROJECTS, Category::Retail)),
            vec!["Bella Boutique", "Urban Threads"]
        );
        assert_eq!(
            titles(filter_projects(&PROJECTS, Category::Hospitality)),
            vec!["Café Mocha", "The Gourmet Kitchen"]
        );
    }

    #[test]
    fn categories_partition_the_portfolio() {
        let total: usize = Category::FILTERS
            .iter()
            .filter(|c| **c != Category::All)
            .map(|c| filter_projects(&PROJECTS, *c).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn every_filter_has_projects() {
        for category in Category::FILTERS {
            assert!(!filter_projects(&PROJECTS, category).is_empty(), "{:?}", category);
        }
    }
}

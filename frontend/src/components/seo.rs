use log::{debug, warn};
use serde_json::{json, Value};
use web_sys::{window, Document};
use yew::prelude::*;

use crate::config;

pub const DEFAULT_TITLE: &str = "Modern Web Design London | Stack Websites London - Fast, Quality Sites";
const DEFAULT_DESCRIPTION: &str = "High-quality, modern websites for London small businesses. Get online fast with design that converts. Trusted London web design studio.";
const DEFAULT_KEYWORDS: &str = "web design London, website design London, small business websites, London web designer, modern website design, fast websites, AI-powered websites";
const LD_JSON_ID: &str = "seo-structured-data";

#[derive(Properties, PartialEq, Clone)]
pub struct SeoProps {
    #[prop_or(DEFAULT_TITLE.to_string())]
    pub title: String,
    #[prop_or(DEFAULT_DESCRIPTION.to_string())]
    pub description: String,
    #[prop_or(DEFAULT_KEYWORDS.to_string())]
    pub keywords: String,
    /// Site-relative path, turned into the canonical URL.
    #[prop_or("/".to_string())]
    pub path: String,
}

/// One `<meta>` element, keyed by its `name` or `property` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self { attr: "name", key, content: content.into() }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self { attr: "property", key, content: content.into() }
    }

    fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attr, self.key)
    }
}

pub fn meta_tags(props: &SeoProps) -> Vec<MetaTag> {
    let canonical = config::canonical(&props.path);
    let og_image = format!("{}/og-image.jpg", config::SITE_URL);
    vec![
        MetaTag::name("title", props.title.clone()),
        MetaTag::name("description", props.description.clone()),
        MetaTag::name("keywords", props.keywords.clone()),
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:url", canonical.clone()),
        MetaTag::property("og:title", props.title.clone()),
        MetaTag::property("og:description", props.description.clone()),
        MetaTag::property("og:image", og_image.clone()),
        MetaTag::property("og:site_name", config::SITE_NAME),
        MetaTag::property("og:locale", "en_GB"),
        MetaTag::property("twitter:card", "summary_large_image"),
        MetaTag::property("twitter:url", canonical),
        MetaTag::property("twitter:title", props.title.clone()),
        MetaTag::property("twitter:description", props.description.clone()),
        MetaTag::property("twitter:image", og_image),
        MetaTag::name(
            "robots",
            "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1",
        ),
        MetaTag::name("googlebot", "index, follow"),
        MetaTag::name("geo.region", "GB-LND"),
        MetaTag::name("geo.placename", "London"),
        MetaTag::name("geo.position", "51.5074;-0.1278"),
        MetaTag::name("ICBM", "51.5074, -0.1278"),
    ]
}

/// schema.org graph describing the business, the site and the service.
pub fn structured_data() -> Value {
    let site = config::SITE_URL;
    let geo = json!({
        "@type": "GeoCoordinates",
        "latitude": 51.5074,
        "longitude": -0.1278,
    });
    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "LocalBusiness",
                "@id": format!("{site}/#organization"),
                "name": config::SITE_NAME,
                "alternateName": "Stack Web Design London",
                "url": site,
                "logo": format!("{site}/logo.png"),
                "image": format!("{site}/og-image.jpg"),
                "description": "Professional web design agency in London specializing in modern, fast websites for small businesses.",
                "address": {
                    "@type": "PostalAddress",
                    "addressLocality": "London",
                    "addressCountry": "UK",
                },
                "geo": geo.clone(),
                "priceRange": "££",
                "telephone": config::CONTACT_PHONE,
                "email": config::CONTACT_EMAIL,
                "areaServed": { "@type": "City", "name": "London" },
                "serviceArea": {
                    "@type": "GeoCircle",
                    "geoMidpoint": geo,
                    "geoRadius": "50000",
                },
            },
            {
                "@type": "WebSite",
                "@id": format!("{site}/#website"),
                "url": site,
                "name": config::SITE_NAME,
                "description": "Modern web design for London small businesses",
                "publisher": { "@id": format!("{site}/#organization") },
            },
            {
                "@type": "Service",
                "serviceType": "Web Design",
                "provider": { "@id": format!("{site}/#organization") },
                "areaServed": "London, UK",
                "audience": {
                    "@type": "Audience",
                    "audienceType": "Small Business Owners",
                },
            },
        ],
    })
}

fn upsert_meta(document: &Document, tag: &MetaTag) {
    let existing = document.query_selector(&tag.selector()).ok().flatten();
    let element = match existing {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("meta") else { return };
            let _ = el.set_attribute(tag.attr, tag.key);
            if let Some(head) = document.head() {
                let _ = head.append_child(&el);
            }
            el
        }
    };
    let _ = element.set_attribute("content", &tag.content);
}

fn upsert_canonical(document: &Document, href: &str) {
    let element = match document.query_selector("link[rel=\"canonical\"]").ok().flatten() {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("link") else { return };
            let _ = el.set_attribute("rel", "canonical");
            if let Some(head) = document.head() {
                let _ = head.append_child(&el);
            }
            el
        }
    };
    let _ = element.set_attribute("href", href);
}

fn upsert_structured_data(document: &Document) {
    let element = match document.get_element_by_id(LD_JSON_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("script") else { return };
            el.set_id(LD_JSON_ID);
            let _ = el.set_attribute("type", "application/ld+json");
            if let Some(head) = document.head() {
                let _ = head.append_child(&el);
            }
            el
        }
    };
    element.set_text_content(Some(&structured_data().to_string()));
}

/// Writes the page's metadata into `document.head`. Renders nothing.
#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    {
        let props = props.clone();
        use_effect_with_deps(
            move |props| {
                match window().and_then(|w| w.document()) {
                    Some(document) => {
                        document.set_title(&props.title);
                        for tag in meta_tags(props) {
                            upsert_meta(&document, &tag);
                        }
                        upsert_canonical(&document, &config::canonical(&props.path));
                        upsert_structured_data(&document);
                        debug!("Applied SEO metadata for {}", props.path);
                    }
                    None => warn!("No document available, skipping SEO metadata"),
                }
                || ()
            },
            props,
        );
    }

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact_props() -> SeoProps {
        SeoProps {
            title: "Contact".to_string(),
            description: "Get a quote".to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            path: "/contact".to_string(),
        }
    }

    #[test]
    fn tags_carry_page_values() {
        let tags = meta_tags(&contact_props());
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.clone());
        assert_eq!(find("og:title").as_deref(), Some("Contact"));
        assert_eq!(find("twitter:description").as_deref(), Some("Get a quote"));
        assert_eq!(
            find("og:url").as_deref(),
            Some("https://websitelondon.co.uk/contact")
        );
    }

    #[test]
    fn each_tag_key_appears_once() {
        let tags = meta_tags(&contact_props());
        let mut keys: Vec<_> = tags.iter().map(|t| (t.attr, t.key)).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn selector_matches_attribute_kind() {
        assert_eq!(
            MetaTag::property("og:type", "website").selector(),
            "meta[property=\"og:type\"]"
        );
        assert_eq!(
            MetaTag::name("robots", "index").selector(),
            "meta[name=\"robots\"]"
        );
    }

    #[test]
    fn structured_data_links_nodes_to_organization() {
        let data = structured_data();
        let graph = data["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph[0]["@type"], "LocalBusiness");
        assert_eq!(
            graph[1]["publisher"]["@id"],
            "https://websitelondon.co.uk/#organization"
        );
        assert_eq!(graph[2]["provider"]["@id"], graph[0]["@id"]);
    }
}

use yew::prelude::*;

use crate::components::legal::{para, sub, LegalDocument, LegalSection};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;

pub const SEO_TITLE: &str = "Privacy Policy | Stack Websites London";
pub const HEADING: &str = "Privacy Policy";

pub const SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "1. Information We Collect",
        items: &[
            sub(
                "Personal Information",
                "When you contact us or request a quote, we may collect personal information including your name, email address, phone number, business name, and details about your project requirements.",
            ),
            sub(
                "Website Analytics",
                "We use analytics tools to collect information about how visitors use our website, including pages visited, time spent on pages, and navigation patterns. This data is aggregated and anonymized.",
            ),
            sub(
                "Cookies",
                "Our website uses cookies to improve your browsing experience. Please see our Cookie Policy for more details about the cookies we use.",
            ),
        ],
    },
    LegalSection {
        title: "2. How We Use Your Information",
        items: &[
            para("We use the information we collect to:"),
            para("• Respond to your inquiries and provide quotes for our web design services"),
            para("• Communicate with you about your project throughout the design and development process"),
            para("• Send you updates about your website, including maintenance notifications"),
            para("• Improve our website and services based on usage analytics"),
            para("• Send marketing communications (only if you have opted in to receive them)"),
        ],
    },
    LegalSection {
        title: "3. Information Sharing",
        items: &[
            para("We do not sell, trade, or rent your personal information to third parties. We may share your information only in the following circumstances:"),
            para("• With trusted service providers who assist us in operating our website and conducting our business (e.g., hosting providers, email services)"),
            para("• When required by law or to protect our rights and safety"),
            para("• With your explicit consent"),
        ],
    },
    LegalSection {
        title: "4. Data Security",
        items: &[
            para("We implement appropriate technical and organizational security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. This includes:"),
            para("• SSL encryption for data transmission"),
            para("• Secure data storage with access controls"),
            para("• Regular security assessments and updates"),
            para("• Staff training on data protection practices"),
        ],
    },
    LegalSection {
        title: "5. Your Rights",
        items: &[
            para("Under UK data protection laws, you have the right to:"),
            para("• Access the personal information we hold about you"),
            para("• Request correction of inaccurate or incomplete information"),
            para("• Request deletion of your personal information"),
            para("• Object to processing of your personal information"),
            para("• Request restriction of processing"),
            para("• Data portability"),
            para("• Withdraw consent at any time"),
        ],
    },
    LegalSection {
        title: "6. Data Retention",
        items: &[para(
            "We retain your personal information only for as long as necessary to fulfill the purposes outlined in this privacy policy, unless a longer retention period is required by law. Client project information is typically retained for 7 years for business and legal purposes.",
        )],
    },
    LegalSection {
        title: "7. Third-Party Services",
        items: &[para(
            "Our website may contain links to third-party websites or services. We are not responsible for the privacy practices of these third parties. We encourage you to read their privacy policies before providing any personal information.",
        )],
    },
    LegalSection {
        title: "8. Updates to This Policy",
        items: &[para(
            "We may update this privacy policy from time to time to reflect changes in our practices or for legal, operational, or regulatory reasons. The updated policy will be posted on this page with a revised \"Last Updated\" date.",
        )],
    },
    LegalSection {
        title: "9. Contact Us",
        items: &[
            para("If you have any questions about this privacy policy or wish to exercise your data protection rights, please contact us:"),
            para("Email: hello@websitelondon.co.uk"),
            para("Phone: +44 20 1234 5678"),
            para("Address: London, United Kingdom"),
        ],
    },
];

#[function_component(Privacy)]
pub fn privacy() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Learn how Stack Websites London collects, uses, and protects your personal information. Our commitment to your privacy and data security."
                path="/privacy"
            />
            <LegalDocument
                title={HEADING}
                intro="At Stack Websites London, we take your privacy seriously. This policy explains how we collect, use, and protect your personal information."
                preamble="Stack Websites London (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website or use our services."
                sections={SECTIONS}
            >
                <p class="legal-closing">
                    {"By using our website and services, you acknowledge that you have read and understood this Privacy Policy and agree to its terms."}
                </p>
            </LegalDocument>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::legal::{blocks, Block};

    #[test]
    fn sections_are_numbered_in_order() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}. ", i + 1)), "{}", section.title);
        }
    }

    #[test]
    fn rights_render_as_one_list() {
        let rights = &SECTIONS[4];
        let text: String = rights.items.iter().map(|i| format!("{}\n", i.text)).collect();
        let parsed = blocks(&text);
        assert_eq!(parsed.len(), 2);
        assert!(matches!(&parsed[1], Block::List(items) if items.len() == 7));
    }
}

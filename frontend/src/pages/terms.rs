use yew::prelude::*;

use crate::components::legal::{para, sub, LegalDocument, LegalSection};
use crate::components::seo::Seo;
use crate::hooks::use_scroll_to_top;

pub const SEO_TITLE: &str = "Terms of Service | Stack Websites London";
pub const HEADING: &str = "Terms of Service";

pub const SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "1. Acceptance of Terms",
        items: &[para(
            "By accessing and using the Stack Websites London website and services, you accept and agree to be bound by these Terms of Service. If you do not agree to these terms, please do not use our website or services.",
        )],
    },
    LegalSection {
        title: "2. Services Description",
        items: &[
            para("Stack Websites London provides web design, development, SEO optimization, and related digital services for small and medium-sized businesses. Our services include but are not limited to:"),
            para("• Custom website design and development"),
            para("• E-commerce website creation"),
            para("• Search engine optimization (SEO)"),
            para("• Website maintenance and support"),
            para("• Website hosting and domain management"),
        ],
    },
    LegalSection {
        title: "3. Client Responsibilities",
        items: &[
            sub(
                "Content Provision",
                "Clients are responsible for providing accurate, timely, and complete content, including text, images, logos, and other materials required for their website. Delays in providing content may affect project timelines.",
            ),
            sub(
                "Content Ownership",
                "Clients must ensure they have the legal right to use all content provided to us, including images, text, trademarks, and other intellectual property.",
            ),
            sub(
                "Feedback and Approval",
                "Clients must provide timely feedback and approvals during the design and development process. Extended delays in feedback may result in project delays or additional costs.",
            ),
        ],
    },
    LegalSection {
        title: "4. Payment Terms",
        items: &[
            sub(
                "Pricing",
                "All prices are quoted in British Pounds (GBP) and are inclusive of VAT unless otherwise stated. Quoted prices are valid for 30 days from the date of quotation.",
            ),
            sub(
                "Payment Schedule",
                "Unless otherwise agreed in writing, payment terms are typically:\n• 50% deposit upon project commencement\n• 50% balance upon project completion before final delivery",
            ),
            sub(
                "Late Payments",
                "Late payments may incur interest charges and may result in suspension of services. We reserve the right to take legal action to recover unpaid amounts.",
            ),
        ],
    },
    LegalSection {
        title: "5. Project Timeline",
        items: &[
            para("We provide estimated timelines for project completion. While we strive to meet these timelines, they are estimates and may be affected by factors including:"),
            para("• Delays in client feedback or content provision"),
            para("• Changes in project scope or requirements"),
            para("• Technical issues or third-party service disruptions"),
            para("• Force majeure events"),
        ],
    },
    LegalSection {
        title: "6. Revisions and Changes",
        items: &[
            para("Our standard packages include a specified number of revision rounds. Additional revisions beyond those included in your package may incur additional charges."),
            para("Significant changes to project scope after work has commenced may require a revised quotation and may affect the project timeline."),
        ],
    },
    LegalSection {
        title: "7. Intellectual Property",
        items: &[
            sub(
                "Client Ownership",
                "Upon receipt of full payment, clients receive ownership of the final website design and custom code developed specifically for their project.",
            ),
            sub(
                "Third-Party Components",
                "Websites may include third-party plugins, frameworks, libraries, or themes that are subject to their own licenses. Clients must comply with these licenses.",
            ),
            sub(
                "Portfolio Rights",
                "We reserve the right to showcase completed work in our portfolio and marketing materials unless otherwise agreed in writing.",
            ),
        ],
    },
    LegalSection {
        title: "8. Website Hosting and Maintenance",
        items: &[
            para("Hosting services are subject to separate agreements and payment terms. We strive for 99.9% uptime but cannot guarantee uninterrupted service due to factors beyond our control, including:"),
            para("• Scheduled maintenance"),
            para("• Third-party service provider issues"),
            para("• Cyber attacks or security threats"),
            para("• Force majeure events"),
        ],
    },
    LegalSection {
        title: "9. Warranties and Disclaimers",
        items: &[
            sub(
                "Service Warranty",
                "We warrant that our services will be performed with reasonable skill and care. We will fix any defects in workmanship reported within 30 days of project delivery at no additional charge.",
            ),
            sub(
                "Disclaimer",
                "We make no warranties regarding website performance, search engine rankings, or business results. While we implement SEO best practices, search engine rankings depend on many factors outside our control.",
            ),
            sub(
                "Third-Party Services",
                "We are not responsible for failures or issues caused by third-party services, plugins, or hosting providers.",
            ),
        ],
    },
    LegalSection {
        title: "10. Limitation of Liability",
        items: &[
            para("To the maximum extent permitted by law, our total liability for any claims arising from our services shall not exceed the total amount paid by the client for the specific project giving rise to the claim."),
            para("We are not liable for any indirect, consequential, special, or punitive damages, including loss of profits, revenue, data, or business opportunities."),
        ],
    },
    LegalSection {
        title: "11. Termination",
        items: &[
            sub(
                "Client Termination",
                "Clients may terminate a project at any time by providing written notice. In such cases, clients will be charged for all work completed up to the termination date, and no refunds will be provided for amounts already paid.",
            ),
            sub(
                "Our Termination Rights",
                "We reserve the right to terminate services if:\n• Payment is not received as agreed\n• Client breaches these terms\n• Client behavior is abusive or threatening to our staff\n• Client requests work that is illegal or violates our ethical standards",
            ),
        ],
    },
    LegalSection {
        title: "12. Confidentiality",
        items: &[
            para("We will keep confidential all non-public information shared by clients during the course of our engagement. However, this does not extend to information that:"),
            para("• Is publicly available"),
            para("• We are required to disclose by law"),
            para("• Was already known to us before disclosure"),
        ],
    },
    LegalSection {
        title: "13. Governing Law",
        items: &[para(
            "These Terms of Service are governed by the laws of England and Wales. Any disputes arising from these terms or our services shall be subject to the exclusive jurisdiction of the courts of England and Wales.",
        )],
    },
    LegalSection {
        title: "14. Changes to Terms",
        items: &[para(
            "We reserve the right to modify these Terms of Service at any time. Changes will be posted on this page with an updated \"Last Updated\" date. Continued use of our services after changes constitutes acceptance of the modified terms.",
        )],
    },
    LegalSection {
        title: "15. Contact Information",
        items: &[
            para("If you have any questions about these Terms of Service, please contact us:"),
            para("Email: hello@websitelondon.co.uk"),
            para("Phone: +44 20 1234 5678"),
            para("Address: London, United Kingdom"),
        ],
    },
];

#[function_component(Terms)]
pub fn terms() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <Seo
                title={SEO_TITLE}
                description="Read the terms and conditions for using Stack Websites London's web design and development services."
                path="/terms"
            />
            <LegalDocument
                title={HEADING}
                intro="These terms govern your use of Stack Websites London's services. Please read them carefully before engaging our services."
                preamble="These Terms of Service (\"Terms\") constitute a legally binding agreement between you (\"Client,\" \"you,\" or \"your\") and Stack Websites London (\"we,\" \"our,\" or \"us\") regarding your use of our website and services."
                sections={SECTIONS}
            >
                <p class="legal-closing">
                    {"By engaging our services or using our website, you acknowledge that you have read, understood, and agree to be bound by these Terms of Service."}
                </p>
            </LegalDocument>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::legal::{blocks, Block};
    use pretty_assertions::assert_eq;

    #[test]
    fn fifteen_numbered_sections() {
        assert_eq!(SECTIONS.len(), 15);
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}. ", i + 1)), "{}", section.title);
        }
    }

    #[test]
    fn payment_schedule_splits_into_intro_and_list() {
        let schedule = &SECTIONS[3].items[1];
        assert_eq!(schedule.subtitle, Some("Payment Schedule"));
        assert_eq!(
            blocks(schedule.text),
            vec![
                Block::Paragraph("Unless otherwise agreed in writing, payment terms are typically:"),
                Block::List(vec![
                    "50% deposit upon project commencement",
                    "50% balance upon project completion before final delivery",
                ]),
            ]
        );
    }
}

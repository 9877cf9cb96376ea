use yew::prelude::*;

use crate::config;

/// One paragraph of a legal document. Lines starting with `•` render as
/// list items.
#[derive(PartialEq)]
pub struct LegalItem {
    pub subtitle: Option<&'static str>,
    pub text: &'static str,
}

#[derive(PartialEq)]
pub struct LegalSection {
    pub title: &'static str,
    pub items: &'static [LegalItem],
}

pub const fn para(text: &'static str) -> LegalItem {
    LegalItem { subtitle: None, text }
}

pub const fn sub(subtitle: &'static str, text: &'static str) -> LegalItem {
    LegalItem { subtitle: Some(subtitle), text }
}

/// Groups consecutive bullet lines so they can share one `<ul>`.
pub fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut out: Vec<Block> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.strip_prefix('•') {
            Some(bullet) => match out.last_mut() {
                Some(Block::List(items)) => items.push(bullet.trim()),
                _ => out.push(Block::List(vec![bullet.trim()])),
            },
            None => out.push(Block::Paragraph(line)),
        }
    }
    out
}

#[derive(Debug, PartialEq)]
pub enum Block<'a> {
    Paragraph(&'a str),
    List(Vec<&'a str>),
}

fn render_text(text: &str) -> Html {
    html! {
        { for blocks(text).into_iter().map(|block| match block {
            Block::Paragraph(p) => html! { <p>{p}</p> },
            Block::List(items) => html! {
                <ul>{ for items.into_iter().map(|i| html! { <li>{i}</li> }) }</ul>
            },
        }) }
    }
}

/// Merges a section's items into text blocks, keeping bullets from
/// separate items in the same list.
pub fn render_section(section: &LegalSection) -> Html {
    let mut loose = String::new();
    let mut parts: Vec<Html> = Vec::new();
    for item in section.items {
        if let Some(subtitle) = item.subtitle {
            if !loose.is_empty() {
                parts.push(render_text(&loose));
                loose.clear();
            }
            parts.push(html! {
                <>
                    <h3>{subtitle}</h3>
                    { render_text(item.text) }
                </>
            });
        } else {
            loose.push_str(item.text);
            loose.push('\n');
        }
    }
    if !loose.is_empty() {
        parts.push(render_text(&loose));
    }

    html! {
        <section class="legal-section">
            <h2>{section.title}</h2>
            { for parts }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalDocumentProps {
    pub title: AttrValue,
    pub intro: AttrValue,
    /// Boxed paragraph above the numbered sections.
    #[prop_or_default]
    pub preamble: Option<AttrValue>,
    pub sections: &'static [LegalSection],
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LegalDocument)]
pub fn legal_document(props: &LegalDocumentProps) -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-hero {
                    background: linear-gradient(135deg, #eff6ff, #fff, #f0fdfa);
                    text-align: center;
                }
                .legal-hero p.updated { color: #6b7280; font-size: 0.875rem; }
                .legal-body { max-width: 56rem; margin: 0 auto; }
                .legal-preamble {
                    background: #eff6ff;
                    border-left: 4px solid #2563eb;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    margin-bottom: 2.5rem;
                }
                .legal-closing { border-top: 1px solid #e5e7eb; padding-top: 2rem; color: #4b5563; }
                .legal-section { margin-bottom: 2.5rem; }
                .legal-section h2 { font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 1rem; }
                .legal-section h3 { font-size: 1.25rem; font-weight: 600; color: #1f2937; margin: 1rem 0 0.5rem; }
                .legal-section p, .legal-section li { color: #374151; line-height: 1.7; }
                .legal-section ul { padding-left: 1.25rem; }
                .legal-section li { margin-bottom: 0.375rem; }
                "#}
            </style>
            <section class="section legal-hero">
                <div class="container">
                    <h1 class="heading-xl">{props.title.clone()}</h1>
                    <p class="text-body">{props.intro.clone()}</p>
                    <p class="updated">{format!("Last updated: {}", config::LEGAL_LAST_UPDATED)}</p>
                </div>
            </section>
            <section class="section">
                <div class="container legal-body">
                    if let Some(preamble) = props.preamble.clone() {
                        <div class="legal-preamble"><p>{preamble}</p></div>
                    }
                    { for props.sections.iter().map(render_section) }
                    { for props.children.iter() }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bullets_group_into_one_list() {
        let text = "Payment terms are typically:\n• 50% deposit\n• 50% balance\nThen more.";
        assert_eq!(
            blocks(text),
            vec![
                Block::Paragraph("Payment terms are typically:"),
                Block::List(vec!["50% deposit", "50% balance"]),
                Block::Paragraph("Then more."),
            ]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(blocks("\n  \nOnly line\n"), vec![Block::Paragraph("Only line")]);
    }
}

use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Clicking the open item closes it; any other click moves the single open slot.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

impl PartialEq for FaqEntry {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question
    }
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            <style>
                {r#"
                .faq-list { max-width: 56rem; margin: 0 auto; display: grid; gap: 1rem; }
                .faq-item {
                    background: #fff;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    transition: border-color 0.2s ease;
                }
                .faq-item:hover, .faq-item.open { border-color: #93c5fd; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    cursor: pointer;
                }
                .faq-chevron { color: #2563eb; transition: transform 0.2s ease; }
                .faq-item.open .faq-chevron { transform: rotate(180deg); }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #374151;
                    line-height: 1.7;
                    animation: faqOpen 0.3s ease-out;
                }
                @keyframes faqOpen {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then_some("open"))} key={entry.question}>
                        <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                            <span>{entry.question}</span>
                            <span class="faq-chevron">{"⌄"}</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_clicked_item() {
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn only_one_item_open_at_a_time() {
        let mut open = None;
        for clicked in [0, 3, 1] {
            open = toggle_open(open, clicked);
            assert_eq!(open, Some(clicked));
        }
    }
}

//! Small content blocks shared by several pages.

use yew::prelude::*;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub fn render(&self) -> Html {
        html! {
            <div class="stat" key={self.label}>
                <div class="stat-value">{self.value}</div>
                <div class="stat-label">{self.label}</div>
            </div>
        }
    }
}

/// Icon, title and a sentence. Used for service highlights and values.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Feature {
    pub fn render(&self) -> Html {
        html! {
            <div class="card feature" key={self.title}>
                <div class="feature-icon">{self.icon}</div>
                <h3 class="heading-sm">{self.title}</h3>
                <p>{self.description}</p>
            </div>
        }
    }
}

pub fn check_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="check-list">
            { for items.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
        </ul>
    }
}

fn star_text(rating: usize) -> String {
    "★".repeat(rating)
}

pub fn stars(rating: usize) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", rating)}>
            { star_text(rating) }
        </div>
    }
}

fn split_around(text: &'static str, word: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let start = text.find(word)?;
    let end = start + word.len();
    Some((&text[..start], &text[start..end], &text[end..]))
}

/// Renders `text` with the first occurrence of `word` boxed, the way page
/// headings emphasise one word.
pub fn highlight(text: &'static str, word: &str) -> Html {
    match split_around(text, word) {
        Some((before, boxed, after)) => html! {
            <>{before}<span class="boxed">{boxed}</span>{after}</>
        },
        None => html! { {text} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_star_per_rating_point() {
        assert_eq!(star_text(5), "★★★★★");
        assert_eq!(star_text(0), "");
    }

    #[test]
    fn highlight_splits_heading_around_boxed_word() {
        assert_eq!(
            split_around("Get Your £1,999 Website", "£1,999"),
            Some(("Get Your ", "£1,999", " Website"))
        );
        assert_eq!(split_around("Our London Portfolio", "Portfolio"), Some(("Our London ", "Portfolio", "")));
        assert_eq!(split_around("Cookie Policy", "Terms"), None);
    }
}

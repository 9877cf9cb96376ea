use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Client {
    pub name: &'static str,
    /// File under `/assets/clients/`. Without one the card shows a text tile.
    pub logo: Option<&'static str>,
}

impl Client {
    pub const fn named(name: &'static str) -> Self {
        Client { name, logo: None }
    }
}

/// Up to three initials, skipping joining words such as "of".
pub fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !matches!(*word, "of" | "and" | "the" | "&"))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(3)
        .collect()
}

fn client_mark(client: &Client) -> Html {
    match client.logo {
        Some(logo) => html! {
            <img class="logo" src={format!("/assets/clients/{}", logo)} alt={client.name} />
        },
        None => html! {
            <div class="logo-tile" role="img" aria-label={client.name}>
                <span class="logo-monogram">{monogram(client.name)}</span>
                <span class="logo-name">{client.name}</span>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientGridProps {
    pub clients: Vec<Client>,
}

const HEADING: &str = "Trusted by Experts";

/// Logo wall with a staggered reveal. Delays are CSS-only.
#[function_component(ClientGrid)]
pub fn client_grid(props: &ClientGridProps) -> Html {
    let corners = ["top-left", "top-right", "bottom-left", "bottom-right"];

    html! {
        <section class="section client-grid-section">
            <style>
                {r#"
                .client-grid-section { background: linear-gradient(to bottom, #f8fafc, #fff); }
                .client-grid-layout { display: flex; gap: 4rem; align-items: flex-start; }
                .client-grid-heading { flex: 0 0 25%; display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .client-grid-heading span {
                    display: inline-block;
                    opacity: 0;
                    animation: wordIn 0.5s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                }
                .client-grid-heading span.boxed {
                    border: 2px solid #0F284A;
                    border-radius: 0.5rem;
                    padding: 0.25rem 0.75rem;
                }
                .client-grid {
                    flex: 1;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .client-card {
                    position: relative;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    background: #fff;
                    padding: 2.5rem;
                    opacity: 0;
                    animation: cardIn 0.6s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                    transition: transform 0.5s ease;
                }
                .client-card:hover { transform: translateY(-4px); }
                .client-card .corner {
                    position: absolute;
                    width: 1rem;
                    height: 1rem;
                    opacity: 0.3;
                    transition: transform 0.3s ease;
                }
                .corner.top-left { top: 0.75rem; left: 0.75rem; }
                .corner.top-right { top: 0.75rem; right: 0.75rem; }
                .corner.bottom-left { bottom: 0.75rem; left: 0.75rem; }
                .corner.bottom-right { bottom: 0.75rem; right: 0.75rem; }
                .client-card:hover .corner { transform: rotate(45deg) scale(1.1); }
                .client-card .logo {
                    height: 5rem;
                    width: 100%;
                    object-fit: contain;
                    filter: grayscale(1);
                    opacity: 0.7;
                    transition: all 0.3s ease;
                }
                .client-card:hover .logo { filter: none; opacity: 1; transform: scale(1.05); }
                .logo-tile {
                    height: 5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    text-align: center;
                    color: #0F284A;
                    opacity: 0.7;
                    transition: opacity 0.3s ease;
                }
                .client-card:hover .logo-tile { opacity: 1; }
                .logo-monogram { font-size: 1.75rem; font-weight: 800; letter-spacing: 0.05em; }
                .logo-name { font-size: 0.75rem; font-weight: 500; line-height: 1.2; }
                .client-grid-footnote { text-align: center; margin-top: 3rem; color: #475569; font-size: 0.875rem; }
                @keyframes wordIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(40px) scale(0.9); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                @media (max-width: 1024px) {
                    .client-grid-layout { flex-direction: column; gap: 3rem; }
                    .client-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 640px) {
                    .client-grid { grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                }
                "#}
            </style>
            <div class="container">
                <div class="client-grid-layout">
                    <h2 class="heading-lg client-grid-heading">
                        { for HEADING.split(' ').enumerate().map(|(i, word)| html! {
                            <span
                                class={classes!((word == "Experts").then_some("boxed"))}
                                style={format!("animation-delay: {:.1}s", i as f32 * 0.1)}
                            >
                                {word}
                            </span>
                        }) }
                    </h2>
                    <div class="client-grid">
                        { for props.clients.iter().enumerate().map(|(i, client)| html! {
                            <div
                                class="client-card"
                                key={client.name}
                                style={format!("animation-delay: {:.1}s", 0.1 + i as f32 * 0.2)}
                            >
                                { for corners.iter().map(|corner| html! {
                                    <img class={classes!("corner", *corner)} src="/assets/clients/plus.svg" alt="" />
                                }) }
                                { client_mark(client) }
                            </div>
                        }) }
                    </div>
                </div>
                <p class="client-grid-footnote">
                    {"Join 50+ businesses who trust us with their online presence"}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monogram_takes_leading_initials() {
        assert_eq!(monogram("AI Society"), "AS");
        assert_eq!(monogram("Imperial College London"), "ICL");
        assert_eq!(monogram("Royal Academy of Engineering"), "RAE");
        assert_eq!(monogram("Red Bull Racing F1"), "RBR");
        assert_eq!(monogram("FibonacciHQ"), "F");
    }

    #[test]
    fn named_clients_render_as_text_tiles() {
        let client = Client::named("Pathfinder Medical");
        assert_eq!(client.logo, None);
        assert_eq!(monogram(client.name), "PM");
    }
}

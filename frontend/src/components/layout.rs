use yew::prelude::*;

use crate::components::{cookie_banner::CookieBanner, footer::Footer, header::Header};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page chrome shared by every route.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site">
            <Header />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
            <CookieBanner />
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Variant {
    fn class(&self) -> &'static str {
        match self {
            Variant::Primary => "btn-primary",
            Variant::Secondary => "btn-secondary",
            Variant::Outline => "btn-outline",
            Variant::Ghost => "btn-ghost",
        }
    }
}

impl Size {
    fn class(&self) -> &'static str {
        match self {
            Size::Sm => "btn-sm",
            Size::Md => "btn-md",
            Size::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Internal route; takes precedence over `href`.
    #[prop_or_default]
    pub to: Option<Route>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

fn button_classes(props: &ButtonProps) -> Classes {
    classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.disabled.then_some("btn-disabled"),
        props.class.clone()
    )
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = button_classes(props);

    if let Some(route) = props.to.clone() {
        return html! {
            <Link<Route> to={route} {classes}>
                { for props.children.iter() }
            </Link<Route>>
        };
    }

    if let Some(href) = props.href.clone() {
        return html! {
            <a {href} class={classes}>
                { for props.children.iter() }
            </a>
        };
    }

    let onclick = props.onclick.clone().unwrap_or_default();
    html! {
        <button type={props.kind.clone()} class={classes} {onclick} disabled={props.disabled}>
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(size: Size, disabled: bool) -> ButtonProps {
        ButtonProps {
            to: None,
            href: None,
            variant: Variant::default(),
            size,
            class: Classes::new(),
            onclick: None,
            kind: AttrValue::Static("button"),
            disabled,
            children: Children::default(),
        }
    }

    #[test]
    fn small_primary_button_classes() {
        let classes = button_classes(&props(Size::Sm, false));
        for class in ["btn", "btn-primary", "btn-sm"] {
            assert!(classes.contains(class), "missing {}", class);
        }
        assert!(!classes.contains("btn-md"));
        assert!(!classes.contains("btn-disabled"));
    }

    #[test]
    fn disabled_button_gets_marker_class() {
        let classes = button_classes(&props(Size::default(), true));
        assert!(classes.contains("btn-md"));
        assert!(classes.contains("btn-disabled"));
    }
}

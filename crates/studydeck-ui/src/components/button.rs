use crate::core::styles::action::{ActionSize, Intent, action_style};
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    pub(crate) theme: Theme,
    #[prop_or_default]
    pub(crate) intent: Intent,
    #[prop_or_default]
    pub(crate) size: ActionSize,
    #[prop_or_default]
    pub(crate) disabled: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let style = action_style(props.theme, props.intent, props.size, props.disabled);
    let mut classes = style.classes;
    classes.push(props.class.clone());

    html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

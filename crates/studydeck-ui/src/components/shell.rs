use crate::components::button::Button;
use crate::core::styles::action::{ActionSize, Intent};
use crate::core::styles::surfaces;
use crate::core::theme::{theme_label, toggle_label};
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) theme: Theme,
    pub(crate) on_toggle_theme: Callback<()>,
    pub(crate) on_open_sessions: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let surface = surfaces(props.theme);
    let toggle = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let open_sessions = {
        let cb = props.on_open_sessions.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={classes!("min-h-screen", surface.background, surface.text_primary)}>
            <header class={classes!("flex", "items-center", "justify-between", "border-b", "px-6", "py-4", surface.border, surface.surface)}>
                <strong class="text-lg">{"Studydeck"}</strong>
                <div class="flex items-center gap-2">
                    <Button theme={props.theme} intent={Intent::Primary} onclick={open_sessions}>
                        {"Research sessions"}
                    </Button>
                    <Button
                        theme={props.theme}
                        intent={Intent::Secondary}
                        size={ActionSize::Sm}
                        aria_label={AttrValue::from(toggle_label(props.theme))}
                        onclick={toggle}
                    >
                        {theme_label(props.theme)}
                    </Button>
                </div>
            </header>
            <main class="mx-auto max-w-5xl px-6 py-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}

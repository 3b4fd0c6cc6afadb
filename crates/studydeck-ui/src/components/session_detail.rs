use crate::components::conversation::ConversationView;
use crate::core::styles::panel::{PanelKind, panel_style};
use crate::models::{ConversationMessage, ResearchSession, SessionNote};
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SessionDetailProps {
    pub(crate) theme: Theme,
    pub(crate) open: bool,
    #[prop_or_default]
    pub(crate) session: Option<ResearchSession>,
    #[prop_or_default]
    pub(crate) messages: Vec<ConversationMessage>,
    #[prop_or_default]
    pub(crate) notes: Vec<SessionNote>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(SessionDetail)]
pub(crate) fn session_detail(props: &SessionDetailProps) -> Html {
    let style = panel_style(props.theme, props.open, PanelKind::SessionDetail);
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let title = props
        .session
        .as_ref()
        .map_or_else(|| "Session".to_string(), |session| session.title.clone());

    html! {
        <>
            {style.backdrop.map(|backdrop| html! { <div class={backdrop} onclick={close.clone()}></div> }).unwrap_or_default()}
            <section class={style.container} aria-hidden={style.hidden.to_string()} aria-label={title.clone()}>
                <header class={style.header}>
                    <h2 class={style.title}>{title}</h2>
                    <button type="button" class={style.close_button} aria-label="Close session" onclick={close}>{"✕"}</button>
                </header>
                <div class="min-h-0 flex-1">
                    <ConversationView
                        theme={props.theme}
                        messages={props.messages.clone()}
                        notes={props.notes.clone()}
                    />
                </div>
            </section>
        </>
    }
}

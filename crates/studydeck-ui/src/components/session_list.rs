use crate::core::styles::panel::{PanelKind, panel_style};
use crate::core::styles::row::session_row_style;
use crate::models::ResearchSession;
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SessionListProps {
    pub(crate) theme: Theme,
    pub(crate) open: bool,
    #[prop_or_default]
    pub(crate) sessions: Vec<ResearchSession>,
    #[prop_or_default]
    pub(crate) selected: Option<String>,
    pub(crate) on_select: Callback<String>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(SessionList)]
pub(crate) fn session_list(props: &SessionListProps) -> Html {
    let style = panel_style(props.theme, props.open, PanelKind::SessionList);
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            {style.backdrop.map(|backdrop| html! { <div class={backdrop} onclick={close.clone()}></div> }).unwrap_or_default()}
            <aside class={style.container} aria-hidden={style.hidden.to_string()} aria-label="Research sessions">
                <header class={style.header}>
                    <h2 class={style.title}>{"Research sessions"}</h2>
                    <button type="button" class={style.close_button} aria-label="Close sessions" onclick={close}>{"✕"}</button>
                </header>
                <ul class={style.body}>
                    {for props.sessions.iter().map(|session| {
                        let selected = props.selected.as_deref() == Some(session.id.as_str());
                        let row = session_row_style(props.theme, selected);
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let id = session.id.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                        };
                        html! {
                            <li key={session.id.clone()}>
                                <button type="button" class={row.container} onclick={onclick} aria-current={selected.then_some("true")}>
                                    <span class={row.title}>{session.title.clone()}</span>
                                    <span class={row.detail}>{session.summary.clone()}</span>
                                    <span class={row.meta}>{format!("{} · {} messages", session.updated, session.message_count)}</span>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </aside>
        </>
    }
}

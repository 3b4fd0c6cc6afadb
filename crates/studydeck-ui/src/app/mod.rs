use crate::components::session_detail::SessionDetail;
use crate::components::session_list::SessionList;
use crate::components::shell::AppShell;
use crate::components::timeline::Timeline;
use crate::models::{current_entry_id, demo_conversation, demo_sessions, demo_timeline};
use gloo::utils::window;
use preferences::{load_theme, persist_theme};
use studydeck_tokens::Theme;
use yew::prelude::*;

mod preferences;

#[function_component(StudydeckApp)]
pub(crate) fn studydeck_app() -> Html {
    let theme = use_state(load_theme);
    let sessions_open = use_state(|| false);
    let selected = use_state(|| None::<String>);
    let timeline = use_memo(|_| demo_timeline(), ());
    let sessions = use_memo(|_| demo_sessions(), ());

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggle()))
    };
    let open_sessions = {
        let sessions_open = sessions_open.clone();
        Callback::from(move |()| sessions_open.set(true))
    };
    let close_sessions = {
        let sessions_open = sessions_open.clone();
        Callback::from(move |()| sessions_open.set(false))
    };
    let select_session = {
        let selected = selected.clone();
        let sessions_open = sessions_open.clone();
        Callback::from(move |id: String| {
            selected.set(Some(id));
            sessions_open.set(false);
        })
    };
    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let current_entry = current_entry_id(&timeline).map(str::to_string);
    let selected_session = (*selected)
        .as_ref()
        .and_then(|id| sessions.iter().find(|session| &session.id == id).cloned());
    let (messages, notes) = (*selected)
        .as_deref()
        .map(demo_conversation)
        .unwrap_or_default();

    html! {
        <AppShell theme={*theme} on_toggle_theme={toggle_theme} on_open_sessions={open_sessions}>
            <Timeline theme={*theme} entries={(*timeline).clone()} active={current_entry} />
            <SessionList
                theme={*theme}
                open={*sessions_open}
                sessions={(*sessions).clone()}
                selected={(*selected).clone()}
                on_select={select_session}
                on_close={close_sessions}
            />
            <SessionDetail
                theme={*theme}
                open={selected.is_some()}
                session={selected_session}
                messages={messages}
                notes={notes}
                on_close={close_detail}
            />
        </AppShell>
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StudydeckApp>::with_root(root).render();
    } else {
        yew::Renderer::<StudydeckApp>::new().render();
    }
}

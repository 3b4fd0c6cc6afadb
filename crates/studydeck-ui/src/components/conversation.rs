use crate::core::styles::conversation::conversation_style;
use crate::models::{ConversationMessage, SessionNote};
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConversationViewProps {
    pub(crate) theme: Theme,
    #[prop_or_default]
    pub(crate) messages: Vec<ConversationMessage>,
    #[prop_or_default]
    pub(crate) notes: Vec<SessionNote>,
}

#[function_component(ConversationView)]
pub(crate) fn conversation_view(props: &ConversationViewProps) -> Html {
    let notes_expanded = use_state(|| false);
    let toggle_notes = {
        let notes_expanded = notes_expanded.clone();
        Callback::from(move |_: MouseEvent| notes_expanded.set(!*notes_expanded))
    };
    let style = conversation_style(props.theme, *notes_expanded);

    html! {
        <div class={style.container.clone()}>
            <div class={style.thread.clone()}>
                <div class="flex justify-end">
                    <button
                        type="button"
                        class={style.notes_toggle.clone()}
                        aria-expanded={notes_expanded.to_string()}
                        onclick={toggle_notes}
                    >
                        {format!("Notes ({})", props.notes.len())}
                    </button>
                </div>
                {for props.messages.iter().map(|message| html! {
                    <div class="flex flex-col">
                        <span class={style.author.clone()}>{message.role.label()}</span>
                        <p class={style.bubble(message.role).clone()}>{message.body.clone()}</p>
                    </div>
                })}
            </div>
            <aside class={style.notes_panel.clone()} aria-hidden={(!*notes_expanded).to_string()}>
                {for props.notes.iter().map(|note| html! {
                    <p key={note.id.clone()} class={style.note_item.clone()}>{note.text.clone()}</p>
                })}
            </aside>
        </div>
    }
}

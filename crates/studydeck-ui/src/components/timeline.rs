use crate::core::styles::row::{timeline_marker, timeline_row_style};
use crate::models::TimelineEntry;
use studydeck_tokens::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TimelineProps {
    pub(crate) theme: Theme,
    #[prop_or_default]
    pub(crate) entries: Vec<TimelineEntry>,
    #[prop_or_default]
    pub(crate) active: Option<String>,
}

#[function_component(Timeline)]
pub(crate) fn timeline(props: &TimelineProps) -> Html {
    html! {
        <ol class="ml-1">
            {for props.entries.iter().map(|entry| {
                let active = props.active.as_deref() == Some(entry.id.as_str());
                let style = timeline_row_style(props.theme, active);
                html! {
                    <li key={entry.id.clone()} class={style.container}>
                        <span class={timeline_marker(entry.module)} title={entry.module.label()}></span>
                        <div class="flex-1">
                            <p class={style.title}>{entry.title.clone()}</p>
                            {entry.detail.clone().map(|detail| html! { <p class={style.detail.clone()}>{detail}</p> }).unwrap_or_default()}
                        </div>
                        <time class={style.meta}>{entry.time.clone()}</time>
                    </li>
                }
            })}
        </ol>
    }
}

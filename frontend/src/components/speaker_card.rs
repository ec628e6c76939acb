use ignite_core::reveal::{progress_width, RevealOptions};
use yew::prelude::*;

use crate::utils::reveal::use_in_view;

#[derive(Properties, PartialEq, Clone)]
pub struct SpeakerCardProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub topic: AttrValue,
    /// Fill level of the progress bar once the card is in view.
    pub progress: u8,
}

#[function_component]
pub fn SpeakerCard(props: &SpeakerCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), RevealOptions::default().with_threshold(0.3));

    html! {
        <article ref={node} class={classes!("speaker-card", "reveal", revealed.then_some("revealed"))}>
            <h3 class="speaker-name">{props.name.clone()}</h3>
            <p class="speaker-role">{props.role.clone()}</p>
            <p class="speaker-topic">{props.topic.clone()}</p>
            <div class="progress-track">
                <div
                    class="progress-bar"
                    style={format!("width: {};", progress_width(revealed, props.progress))}
                ></div>
            </div>
        </article>
    }
}

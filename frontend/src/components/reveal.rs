use ignite_core::reveal::RevealOptions;
use yew::prelude::*;

use crate::utils::reveal::use_in_view;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: Option<RevealOptions>,
}

/// Wraps children and adds `revealed` once they scroll into view. The motion
/// itself lives in the stylesheet.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let options = props.options.clone().unwrap_or_default();
    let revealed = use_in_view(node.clone(), options);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), revealed.then_some("revealed"))}>
            { for props.children.iter() }
        </div>
    }
}

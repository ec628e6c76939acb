use ignite_core::scroll::DEFAULT_SECTIONS;
use yew::prelude::*;

use crate::components::navbar::section_label;
use crate::utils::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct NavDotsProps {
    pub active: Option<String>,
}

/// Side dots, one per section. A clicked dot lights up right away; the next
/// change of the scroll-derived section takes over again.
#[function_component]
pub fn NavDots(props: &NavDotsProps) -> Html {
    let clicked = use_state(|| None::<&'static str>);
    {
        let clicked = clicked.clone();
        use_effect_with_deps(
            move |_| {
                clicked.set(None);
                || ()
            },
            props.active.clone(),
        );
    }

    let active = (*clicked).map(str::to_string).or_else(|| props.active.clone());

    html! {
        <div class="nav-dots">
            { for DEFAULT_SECTIONS.iter().copied().map(|id| {
                let onclick = {
                    let clicked = clicked.clone();
                    Callback::from(move |_: MouseEvent| {
                        clicked.set(Some(id));
                        dom::scroll_to_section(id);
                    })
                };
                html! {
                    <button
                        class={classes!("nav-dot", (active.as_deref() == Some(id)).then_some("active"))}
                        title={section_label(id)}
                        aria-label={format!("Go to {}", section_label(id))}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}

use ignite_core::scroll::DEFAULT_SECTIONS;
use yew::prelude::*;

use crate::utils::dom::{self, NAVBAR_ID};

pub fn section_label(id: &str) -> &'static str {
    match id {
        "home" => "Home",
        "about" => "About",
        "speakers" => "Speakers",
        "schedule" => "Schedule",
        "register" => "Register",
        "volunteer" => "Volunteer",
        "partnership" => "Partner",
        _ => "",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub active: Option<String>,
    pub pinned: bool,
    /// Entrance animation has been triggered.
    pub entered: bool,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let link_class = |id: &str, base: &'static str| {
        classes!(base, (props.active.as_deref() == Some(id)).then_some("active"))
    };

    html! {
        <nav
            id={NAVBAR_ID}
            class={classes!("navbar", props.pinned.then_some("navbar-fixed"), props.entered.then_some("nav-entered"))}
        >
            <a class="nav-logo" href="#home" onclick={dom::scroll_link("home")}>{"Ogbomoso Ignite"}</a>
            <ul class="nav-links">
                { for DEFAULT_SECTIONS.iter().copied().map(|id| html! {
                    <li>
                        <a
                            class={link_class(id, "nav-link")}
                            data-section={id}
                            href={format!("#{}", id)}
                            onclick={dom::scroll_link(id)}
                        >
                            {section_label(id)}
                        </a>
                    </li>
                }) }
            </ul>
            <button
                id="mobileMenuBtn"
                class={classes!("hamburger", (*menu_open).then_some("open"))}
                aria-label="Toggle menu"
                aria-expanded={(*menu_open).to_string()}
                onclick={open_menu}
            >
                <span></span><span></span><span></span>
            </button>
            <div id="mobileMenu" class={classes!("mobile-menu", (!*menu_open).then_some("hidden"))}>
                <button id="closeMobileMenu" class="mobile-menu-close" aria-label="Close menu" onclick={close_menu.clone()}>
                    {"×"}
                </button>
                { for DEFAULT_SECTIONS.iter().copied().map(|id| {
                    let close_menu = close_menu.clone();
                    let scroll = dom::scroll_link(id);
                    html! {
                        <a
                            class={link_class(id, "mobile-nav-link")}
                            data-section={id}
                            href={format!("#{}", id)}
                            onclick={Callback::from(move |e: MouseEvent| {
                                close_menu.emit(e.clone());
                                scroll.emit(e);
                            })}
                        >
                            {section_label(id)}
                        </a>
                    }
                }) }
            </div>
        </nav>
    }
}

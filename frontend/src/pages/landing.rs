use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ignite_core::reveal::RevealOptions;
use ignite_core::{FormKind, ScrollConfig};
use yew::prelude::*;

use crate::components::form_view::FormView;
use crate::components::nav_dots::NavDots;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::components::speaker_card::SpeakerCard;
use crate::utils::dom::{self, HERO_BACKGROUND_ID};
use crate::utils::scroll::use_scroll_state;

struct Speaker {
    name: &'static str,
    role: &'static str,
    topic: &'static str,
    progress: u8,
}

const SPEAKERS: &[Speaker] = &[
    Speaker {
        name: "Dr. Amina Yusuf",
        role: "CTO, Savanna Labs",
        topic: "Building for the next billion users",
        progress: 90,
    },
    Speaker {
        name: "Segun Oladipo",
        role: "Founder, FarmGrid",
        topic: "Agritech from Ogbomoso to the world",
        progress: 75,
    },
    Speaker {
        name: "Chioma Eze",
        role: "Design Lead, Paystack",
        topic: "Designing trust into fintech",
        progress: 85,
    },
    Speaker {
        name: "Ibrahim Lawal",
        role: "Partner, Lagos Angels",
        topic: "What early stage investors look for",
        progress: 70,
    },
];

const SCHEDULE: &[(&str, &str)] = &[
    ("09:00", "Registration & breakfast"),
    ("10:00", "Opening keynote"),
    ("11:30", "Startup showcase"),
    ("13:00", "Lunch & exhibition floor"),
    ("14:30", "Panel: funding the local ecosystem"),
    ("16:00", "Workshops"),
    ("18:00", "Networking & closing"),
];

/// Decorative shapes in the hero that double as shortcuts.
const HERO_SHAPES: &[(&str, &str)] = &[
    ("shape-circle", "about"),
    ("shape-square", "speakers"),
    ("shape-triangle", "register"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let config = use_memo(|_| ScrollConfig::default(), ());
    let scroll = use_scroll_state(Rc::clone(&config));
    let pinned = scroll.navbar_pinned.unwrap_or(false);

    use_effect_with_deps(
        move |pinned| {
            dom::set_body_class("navbar-fixed-active", *pinned);
            || dom::set_body_class("navbar-fixed-active", false)
        },
        pinned,
    );

    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(100, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let hero_style = scroll.hero.map(|hero| {
        format!(
            "opacity: {}; transition: {};",
            hero.opacity.css_value(),
            hero.opacity.transition()
        )
    });
    let hero_fixed = scroll.hero.map(|hero| hero.fixed_background).unwrap_or(false);
    let overlay_active = scroll.schedule_overlay_active.unwrap_or(false);
    let heading_options = RevealOptions::default().with_threshold(0.2);

    html! {
        <>
            <Navbar active={scroll.active_section.clone()} {pinned} entered={*entered} />
            <NavDots active={scroll.active_section.clone()} />

            <section id="home" class="hero">
                <div
                    id={HERO_BACKGROUND_ID}
                    class={classes!("hero-background", hero_fixed.then_some("hero-fixed-bg"))}
                    style={hero_style}
                ></div>
                <div class="hero-content">
                    <h1 class={classes!("hero-title", (*entered).then_some("hero-title-entered"))}>
                        {"Ogbomoso Ignite"}
                    </h1>
                    <p class="hero-subtitle">{"Where the next wave of Nigerian tech gets its spark."}</p>
                    <a class="cta-button" href="#register" onclick={dom::scroll_link("register")}>
                        {"Get your ticket"}
                    </a>
                </div>
                { for HERO_SHAPES.iter().map(|(class, target)| html! {
                    <div
                        class={classes!("floating-shape", *class)}
                        data-nav={*target}
                        onclick={dom::scroll_link(*target)}
                    ></div>
                }) }
            </section>

            <section id="about" class="about">
                <Reveal options={heading_options.clone()}>
                    <h2 class="section-title">{"About the summit"}</h2>
                </Reveal>
                <Reveal class={classes!("reveal-delay")}>
                    <p>
                        {"Two days of talks, workshops and demos bringing founders, builders, \
                          students and investors together in the heart of Oyo State."}
                    </p>
                </Reveal>
            </section>

            <section id="speakers" class="speakers">
                <Reveal options={heading_options.clone()}>
                    <h2 class="section-title">{"Speakers"}</h2>
                </Reveal>
                <div class="speaker-grid">
                    { for SPEAKERS.iter().map(|speaker| html! {
                        <SpeakerCard
                            name={speaker.name}
                            role={speaker.role}
                            topic={speaker.topic}
                            progress={speaker.progress}
                        />
                    }) }
                </div>
            </section>

            <section id="schedule" class="schedule">
                <div class={classes!("schedule-gradient-overlay", overlay_active.then_some("active"))}></div>
                <h2 class="section-title">{"Schedule"}</h2>
                <ol class="schedule-list">
                    { for SCHEDULE.iter().map(|(time, item)| html! {
                        <li class="schedule-item">
                            <span class="schedule-time">{*time}</span>
                            <span class="schedule-title">{*item}</span>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="register" class="register">
                <h2 class="section-title">{"Register"}</h2>
                <FormView kind={FormKind::Registration} />
            </section>

            <section id="volunteer" class="volunteer">
                <h2 class="section-title">{"Volunteer"}</h2>
                <FormView kind={FormKind::Volunteer} />
            </section>

            <section id="partnership" class="partnership">
                <h2 class="section-title">{"Partner with us"}</h2>
                <div class="partnership-forms">
                    <FormView kind={FormKind::Sponsor} />
                    <FormView kind={FormKind::Exhibitor} />
                </div>
            </section>

            <footer class="footer">
                <p>{"© Ogbomoso Ignite. All rights reserved."}</p>
                <a href="#home" onclick={dom::scroll_link("home")}>{"Back to top"}</a>
            </footer>
        </>
    }
}

//! Scroll position to UI state mapping.
//!
//! The frontend measures the page on every scroll or resize tick and hands a
//! [`LayoutSnapshot`] to [`compute_scroll_state`]. Nothing is cached between
//! ticks except the id of the last active section.

use serde::{Deserialize, Serialize};

/// Sections tracked for navigation highlighting, in page order.
pub const DEFAULT_SECTIONS: &[&str] = &[
    "home",
    "about",
    "speakers",
    "schedule",
    "register",
    "volunteer",
    "partnership",
];

/// Static thresholds for the mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    pub section_ids: Vec<String>,
    /// Added to the scroll offset before probing section ranges.
    pub look_ahead: f64,
    /// Navbar pins (and the hero background fixes) past this offset.
    pub pin_offset: f64,
    /// Fraction of the viewport above `#about` where the hero fades out.
    pub hero_fade_ratio: f64,
    /// Fraction of the viewport above the schedule midpoint where the overlay turns on.
    pub schedule_overlay_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            section_ids: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            look_ahead: 200.0,
            pin_offset: 50.0,
            hero_fade_ratio: 0.3,
            schedule_overlay_ratio: 0.5,
        }
    }
}

/// Vertical bounds of one section, `[top, top + height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Layout measured during a single tick. Absent elements are `None`/`false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Sections that exist on the page, in configured order.
    pub sections: Vec<SectionBounds>,
    pub hero_present: bool,
    pub about_top: Option<f64>,
    /// Schedule section bounds, only when its gradient overlay also exists.
    pub schedule: Option<SectionBounds>,
    pub navbar_present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroOpacity {
    Visible,
    Hidden,
}

impl HeroOpacity {
    pub fn css_value(self) -> &'static str {
        match self {
            HeroOpacity::Visible => "1",
            HeroOpacity::Hidden => "0",
        }
    }

    pub fn transition(self) -> &'static str {
        match self {
            HeroOpacity::Visible => "opacity 0.5s ease-in",
            HeroOpacity::Hidden => "opacity 0.5s ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroState {
    pub fixed_background: bool,
    pub opacity: HeroOpacity,
}

/// UI flags derived from one snapshot. `None` means the gating element is
/// missing and whatever it shows should be left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub active_section: Option<String>,
    pub navbar_pinned: Option<bool>,
    pub hero: Option<HeroState>,
    pub schedule_overlay_active: Option<bool>,
}

impl ScrollState {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

/// Returns the first section whose range contains `scroll_y + look_ahead`.
pub fn find_active_section<'a>(
    config: &ScrollConfig,
    snapshot: &'a LayoutSnapshot,
) -> Option<&'a SectionBounds> {
    let point = snapshot.scroll_y + config.look_ahead;
    snapshot.sections.iter().find(|section| section.contains(point))
}

/// Maps a layout snapshot to UI state.
///
/// When no section contains the look-ahead point the previous active id is kept.
pub fn compute_scroll_state(
    config: &ScrollConfig,
    snapshot: &LayoutSnapshot,
    previous_active: Option<&str>,
) -> ScrollState {
    let y = snapshot.scroll_y;

    let active_section = find_active_section(config, snapshot)
        .map(|section| section.id.clone())
        .or_else(|| previous_active.map(str::to_string));

    let navbar_pinned = snapshot.navbar_present.then(|| y > config.pin_offset);

    let hero = match (snapshot.hero_present, snapshot.about_top) {
        (true, Some(about_top)) => {
            let fade_at = about_top - snapshot.viewport_height * config.hero_fade_ratio;
            Some(HeroState {
                fixed_background: y > config.pin_offset,
                opacity: if y >= fade_at {
                    HeroOpacity::Hidden
                } else {
                    HeroOpacity::Visible
                },
            })
        }
        _ => None,
    };

    let schedule_overlay_active = snapshot.schedule.as_ref().map(|schedule| {
        let middle = schedule.top + schedule.height / 2.0;
        y >= middle - snapshot.viewport_height * config.schedule_overlay_ratio
    });

    ScrollState {
        active_section,
        navbar_pinned,
        hero,
        schedule_overlay_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(scroll_y: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            scroll_y,
            viewport_height: 1000.0,
            sections: vec![
                SectionBounds::new("home", 0.0, 900.0),
                SectionBounds::new("about", 900.0, 700.0),
                SectionBounds::new("speakers", 1600.0, 800.0),
                SectionBounds::new("schedule", 2400.0, 1200.0),
            ],
            hero_present: true,
            about_top: Some(900.0),
            schedule: Some(SectionBounds::new("schedule", 2400.0, 1200.0)),
            navbar_present: true,
        }
    }

    #[test]
    fn test_top_of_page() {
        let state = compute_scroll_state(&ScrollConfig::default(), &page(0.0), None);

        assert_eq!(state.active_section.as_deref(), Some("home"));
        assert_eq!(state.navbar_pinned, Some(false));
        assert_eq!(
            state.hero,
            Some(HeroState {
                fixed_background: false,
                opacity: HeroOpacity::Visible
            })
        );
        assert_eq!(state.schedule_overlay_active, Some(false));
    }

    #[test]
    fn test_look_ahead_switches_before_top_edge() {
        let config = ScrollConfig::default();
        // 700 + 200 hits about's top edge exactly
        assert_eq!(
            compute_scroll_state(&config, &page(699.0), None).active_section.as_deref(),
            Some("home")
        );
        assert_eq!(
            compute_scroll_state(&config, &page(700.0), None).active_section.as_deref(),
            Some("about")
        );
    }

    #[test]
    fn test_navbar_pins_strictly_after_threshold() {
        let config = ScrollConfig::default();
        assert_eq!(compute_scroll_state(&config, &page(50.0), None).navbar_pinned, Some(false));
        assert_eq!(compute_scroll_state(&config, &page(51.0), None).navbar_pinned, Some(true));
    }

    #[test]
    fn test_hero_fades_before_about() {
        let config = ScrollConfig::default();
        // about_top - 0.3 * viewport = 600
        let before = compute_scroll_state(&config, &page(599.0), None).hero.unwrap();
        let at = compute_scroll_state(&config, &page(600.0), None).hero.unwrap();

        assert_eq!(before.opacity, HeroOpacity::Visible);
        assert_eq!(at.opacity, HeroOpacity::Hidden);
        assert!(at.fixed_background);
    }

    #[test]
    fn test_schedule_overlay_threshold() {
        let config = ScrollConfig::default();
        // midpoint 3000 - 500 = 2500
        assert_eq!(
            compute_scroll_state(&config, &page(2499.0), None).schedule_overlay_active,
            Some(false)
        );
        assert_eq!(
            compute_scroll_state(&config, &page(2500.0), None).schedule_overlay_active,
            Some(true)
        );
    }

    #[test]
    fn test_retains_previous_when_no_section_matches() {
        let config = ScrollConfig::default();
        // past the last section
        let state = compute_scroll_state(&config, &page(5000.0), Some("schedule"));
        assert_eq!(state.active_section.as_deref(), Some("schedule"));

        let first_tick = compute_scroll_state(&config, &page(5000.0), None);
        assert_eq!(first_tick.active_section, None);
    }

    #[test]
    fn test_exactly_one_active_across_offsets() {
        let config = ScrollConfig::default();
        let mut previous: Option<String> = None;
        for y in (0..3400).step_by(37) {
            let snapshot = page(y as f64);
            let matching = snapshot
                .sections
                .iter()
                .filter(|s| s.contains(y as f64 + config.look_ahead))
                .count();
            assert!(matching <= 1);

            let state = compute_scroll_state(&config, &snapshot, previous.as_deref());
            assert!(state.active_section.is_some());
            previous = state.active_section;
        }
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let snapshot = LayoutSnapshot {
            scroll_y: 400.0,
            viewport_height: 800.0,
            sections: vec![SectionBounds::new("volunteer", 0.0, 2000.0)],
            hero_present: true,
            about_top: None,
            schedule: None,
            navbar_present: false,
        };
        let state = compute_scroll_state(&ScrollConfig::default(), &snapshot, None);

        assert_eq!(
            state,
            ScrollState {
                active_section: Some("volunteer".to_string()),
                navbar_pinned: None,
                hero: None,
                schedule_overlay_active: None,
            }
        );
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let config = ScrollConfig::default();
        let snapshot = page(1234.0);
        let first = compute_scroll_state(&config, &snapshot, Some("home"));
        let second = compute_scroll_state(&config, &snapshot, first.active_section.as_deref());
        assert_eq!(first, second);
    }
}

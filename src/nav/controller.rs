//! Navigation state controller.
//!
//! Converts scroll samples and user interactions into a renderable nav
//! snapshot. Direction-sensitive with hysteresis: the bar hides while
//! scrolling toward content, reappears on the first backward scroll, and
//! is always shown near the top of the page. Active-section resolution
//! follows the reading position (offset plus a fixed compensation for the
//! bar height), not the topmost visible section.

use thiserror::Error;

use crate::config::NavTuning;

use super::SectionRegistry;

/// One scroll-position observation from the scroll source.
///
/// Only the latest sample matters. `seq` orders samples against click
/// commands: a programmatic scroll emits samples indistinguishable from
/// user input, so samples issued before the last click are stale and
/// must not overwrite the click's optimistic active section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub document_height: f32,
    pub seq: u64,
}

/// Measured extent of one section, in distance units from document top.
///
/// Derived from layout, not authoritative: may be stale between layout
/// passes, which the controller tolerates without flicker.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub section_id: String,
    pub top_offset: f32,
    pub height: f32,
}

/// The fully-derived, renderable nav snapshot.
///
/// Always a complete, valid value; errors degrade to retaining prior
/// known-good fields rather than surfacing here.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub past_threshold: bool,
    pub hidden: bool,
    pub active_section: String,
    pub progress: f32,
    pub menu_open: bool,
}

/// Instruction back to the scroll source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Smooth-scroll the viewport to this offset (bar height already
    /// subtracted, clamped at zero).
    ScrollTo { target_offset: f32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    /// A click referenced a section id the registry does not contain.
    /// Non-fatal: the click is ignored.
    #[error("unknown section id '{0}'")]
    UnknownSection(String),
    /// A known section has no measured bounds yet, so there is nothing
    /// to aim a scroll at. Non-fatal: the optimistic state change still
    /// applies, only the scroll command is withheld.
    #[error("section '{0}' has no measured bounds yet")]
    StaleBounds(String),
}

/// Bar visibility states. `Top` is the initial state; there is no
/// terminal state, the page lifetime is bounded by unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BarState {
    #[default]
    Top,
    ScrolledVisible,
    ScrolledHidden,
}

#[derive(Debug, Clone, Copy)]
struct Band {
    top: f32,
    height: f32,
}

/// Owns all retained navigation state; one instance per page, never
/// shared. Mutated only from the event loop, one event at a time.
pub struct NavController {
    registry: SectionRegistry,
    tuning: NavTuning,
    bar: BarState,
    active: usize,
    menu_open: bool,
    progress: f32,
    previous_offset: f32,
    // Parallel to the registry; None until the first layout pass.
    bounds: Vec<Option<Band>>,
    // Samples with seq <= barrier were issued before the last click.
    click_barrier: u64,
}

impl NavController {
    pub fn new(registry: SectionRegistry, tuning: NavTuning) -> Self {
        let bounds = vec![None; registry.len()];
        Self {
            registry,
            tuning,
            bar: BarState::Top,
            active: 0,
            menu_open: false,
            progress: 0.0,
            previous_offset: 0.0,
            bounds,
            click_barrier: 0,
        }
    }

    /// Current snapshot without processing anything.
    pub fn state(&self) -> NavState {
        NavState {
            past_threshold: self.bar != BarState::Top,
            hidden: self.bar == BarState::ScrolledHidden,
            active_section: self.active_id().to_string(),
            progress: self.progress,
            menu_open: self.menu_open,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    fn active_id(&self) -> &str {
        self.registry
            .get(self.active)
            .map(|s| s.id.as_str())
            .unwrap_or("")
    }

    /// Ingest one scroll sample and recompute the snapshot.
    ///
    /// Pure function of the retained state plus the sample; the only
    /// side effects are updating the retained previous offset and the
    /// derived fields. Malformed samples are clamped, never rejected.
    pub fn on_scroll(&mut self, sample: &ScrollSample) -> NavState {
        if sample.seq <= self.click_barrier {
            log::debug!(
                "dropping stale scroll sample (seq {} <= barrier {})",
                sample.seq,
                self.click_barrier
            );
            return self.state();
        }

        let offset = sample.offset_y.max(0.0);
        let delta = offset - self.previous_offset;
        let past = offset > self.tuning.scroll_threshold;

        self.bar = match (past, self.bar) {
            (false, _) => BarState::Top,
            (true, _) if delta > 0.0 => BarState::ScrolledHidden,
            (true, _) if delta < 0.0 => BarState::ScrolledVisible,
            // Zero delta: no transition, identical samples are idempotent.
            (true, BarState::Top) => BarState::ScrolledVisible,
            (true, state) => state,
        };

        let span = (sample.document_height - sample.viewport_height).max(1.0);
        self.progress = (offset / span).clamp(0.0, 1.0);
        self.active = self.resolve_active(offset, sample.viewport_height, sample.document_height);
        self.previous_offset = offset;

        self.state()
    }

    /// Which section the reading position is in.
    ///
    /// Near the top the first section always wins (late sections may
    /// report bounds starting at zero before layout settles); near the
    /// bottom the last one does (it may be too short to ever contain the
    /// reading position). Otherwise sections are scanned in descending
    /// document order so the later section wins on overlap. No match
    /// means bounds are stale or unmeasured: keep the previous answer
    /// rather than flickering to a default.
    fn resolve_active(&self, offset: f32, viewport: f32, document: f32) -> usize {
        if self.registry.is_empty() {
            return 0;
        }
        if offset < self.tuning.near_top {
            return 0;
        }
        if offset + viewport >= document - self.tuning.bottom_slack {
            return self.registry.len() - 1;
        }

        let reading = offset + self.tuning.reading_offset;
        for index in (0..self.registry.len()).rev() {
            if let Some(band) = self.bounds[index] {
                if reading >= band.top && reading < band.top + band.height {
                    return index;
                }
            }
        }

        log::debug!(
            "no measured section contains reading position {:.0}; keeping '{}'",
            reading,
            self.active_id()
        );
        self.active
    }

    /// Handle a nav item click.
    ///
    /// On success the active section is set optimistically (the UI must
    /// not wait for the next sample), the menu closes, and samples
    /// issued before `seq` are barred from overwriting the choice.
    pub fn on_nav_item_click(&mut self, id: &str, seq: u64) -> Result<ScrollCommand, NavError> {
        let index = self
            .registry
            .index_of(id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))?;

        self.active = index;
        self.menu_open = false;
        self.click_barrier = seq;

        match self.bounds[index] {
            Some(band) => Ok(ScrollCommand::ScrollTo {
                target_offset: (band.top - self.tuning.scroll_to_offset).max(0.0),
            }),
            None => Err(NavError::StaleBounds(id.to_string())),
        }
    }

    /// Flip the menu. Never touches the active section or bar state.
    pub fn toggle_menu(&mut self) -> NavState {
        self.menu_open = !self.menu_open;
        self.state()
    }

    /// Replace measured bounds after a layout pass. Sections absent from
    /// the slice keep their last-known bounds; unknown ids are reported
    /// and skipped.
    pub fn set_bounds(&mut self, bounds: &[SectionBounds]) {
        for b in bounds {
            match self.registry.index_of(&b.section_id) {
                Some(index) => {
                    self.bounds[index] = Some(Band {
                        top: b.top_offset,
                        height: b.height.max(0.0),
                    });
                }
                None => {
                    log::warn!("ignoring bounds for unknown section '{}'", b.section_id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Section;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("hero", "Home"),
            Section::new("about", "About"),
            Section::new("projects", "Projects"),
        ])
    }

    fn controller() -> NavController {
        NavController::new(registry(), NavTuning::default())
    }

    fn bounds() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                section_id: "hero".into(),
                top_offset: 0.0,
                height: 400.0,
            },
            SectionBounds {
                section_id: "about".into(),
                top_offset: 400.0,
                height: 800.0,
            },
            SectionBounds {
                section_id: "projects".into(),
                top_offset: 1200.0,
                height: 1800.0,
            },
        ]
    }

    fn sample(offset: f32, seq: u64) -> ScrollSample {
        ScrollSample {
            offset_y: offset,
            viewport_height: 800.0,
            document_height: 3000.0,
            seq,
        }
    }

    #[test]
    fn below_threshold_shows_bar_and_first_section() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        for (seq, offset) in [0.0, 40.0, 80.0].into_iter().enumerate() {
            let state = nav.on_scroll(&sample(offset, seq as u64 + 1));
            assert!(!state.past_threshold, "offset {}", offset);
            assert!(!state.hidden, "offset {}", offset);
            assert_eq!(state.active_section, "hero");
        }
    }

    #[test]
    fn forward_hides_backward_reveals_without_dropping_below_threshold() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        let state = nav.on_scroll(&sample(300.0, 1));
        assert!(state.past_threshold);
        assert!(state.hidden, "forward delta past threshold hides the bar");

        let state = nav.on_scroll(&sample(600.0, 2));
        assert!(state.hidden, "still scrolling forward");

        let state = nav.on_scroll(&sample(550.0, 3));
        assert!(state.past_threshold);
        assert!(!state.hidden, "first backward delta reveals the bar");
    }

    #[test]
    fn dropping_below_threshold_always_shows_bar() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.on_scroll(&sample(500.0, 1));
        assert!(nav.state().hidden);
        // Forward or backward, under the threshold the bar shows.
        let state = nav.on_scroll(&sample(50.0, 2));
        assert!(!state.past_threshold);
        assert!(!state.hidden);
    }

    #[test]
    fn progress_endpoints_and_clamping() {
        let mut nav = controller();
        nav.set_bounds(&bounds());

        let state = nav.on_scroll(&sample(0.0, 1));
        assert_eq!(state.progress, 0.0);

        // documentHeight - viewportHeight = 2200 is the end of travel.
        let state = nav.on_scroll(&sample(2200.0, 2));
        assert_eq!(state.progress, 1.0);

        let state = nav.on_scroll(&sample(9000.0, 3));
        assert_eq!(state.progress, 1.0);

        let state = nav.on_scroll(&sample(-50.0, 4));
        assert_eq!(state.progress, 0.0);
        assert!(!state.past_threshold);
    }

    #[test]
    fn progress_is_monotonic_scrolling_forward() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        let mut last = -1.0f32;
        for (seq, offset) in [0.0, 150.0, 700.0, 1400.0, 2100.0, 2200.0]
            .into_iter()
            .enumerate()
        {
            let state = nav.on_scroll(&sample(offset, seq as u64 + 1));
            assert!(state.progress >= last);
            last = state.progress;
        }
    }

    #[test]
    fn identical_samples_are_idempotent() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.on_scroll(&sample(500.0, 1));
        let first = nav.on_scroll(&sample(700.0, 2));
        assert!(first.hidden);
        // Same offset again: zero delta, nothing changes.
        let second = nav.on_scroll(&sample(700.0, 3));
        assert_eq!(first, second);
    }

    #[test]
    fn forward_then_back_updates_bar_and_active_together() {
        let mut nav = controller();
        nav.set_bounds(&bounds());

        let state = nav.on_scroll(&sample(50.0, 1));
        assert_eq!(state.active_section, "hero");
        assert!(!state.hidden);

        // Reading position 500 + 200 = 700 falls inside about [400, 1200).
        let state = nav.on_scroll(&sample(500.0, 2));
        assert!(state.hidden);
        assert_eq!(state.active_section, "about");

        // Backward: bar shows again; reading position 500 still in about.
        let state = nav.on_scroll(&sample(300.0, 3));
        assert!(!state.hidden);
        assert_eq!(state.active_section, "about");
    }

    #[test]
    fn near_bottom_activates_last_section() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        // 2150 + 800 >= 3000 - 100.
        let state = nav.on_scroll(&sample(2150.0, 1));
        assert_eq!(state.active_section, "projects");
    }

    #[test]
    fn later_section_wins_on_overlapping_bounds() {
        let mut nav = controller();
        let mut overlapping = bounds();
        // Stale layout: projects claims to start inside about's band.
        overlapping[2].top_offset = 600.0;
        overlapping[2].height = 2400.0;
        nav.set_bounds(&overlapping);

        // Reading position 700 is inside both about and projects.
        let state = nav.on_scroll(&sample(500.0, 1));
        assert_eq!(state.active_section, "projects");
    }

    #[test]
    fn unmeasured_bounds_retain_previous_active() {
        let mut nav = controller();
        // No bounds at all: clicking still applies the optimistic state.
        let err = nav.on_nav_item_click("about", 0).unwrap_err();
        assert_eq!(err, NavError::StaleBounds("about".into()));
        assert_eq!(nav.state().active_section, "about");

        // Mid-page sample with nothing measured keeps the previous answer.
        let state = nav.on_scroll(&sample(600.0, 1));
        assert_eq!(state.active_section, "about");
    }

    #[test]
    fn click_sets_active_optimistically_and_closes_menu() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.toggle_menu();
        assert!(nav.state().menu_open);

        let command = nav.on_nav_item_click("projects", 10).unwrap();
        // Target offset is the section top minus the fixed bar height.
        assert_eq!(
            command,
            ScrollCommand::ScrollTo {
                target_offset: 1200.0 - NavTuning::default().scroll_to_offset
            }
        );
        let state = nav.state();
        assert_eq!(state.active_section, "projects");
        assert!(!state.menu_open);
    }

    #[test]
    fn click_near_top_clamps_target_at_zero() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        let command = nav.on_nav_item_click("hero", 1).unwrap();
        assert_eq!(command, ScrollCommand::ScrollTo { target_offset: 0.0 });
    }

    #[test]
    fn unknown_click_changes_nothing_and_emits_no_command() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.on_scroll(&sample(500.0, 1));
        let before = nav.state();

        let err = nav.on_nav_item_click("doesNotExist", 5).unwrap_err();
        assert_eq!(err, NavError::UnknownSection("doesNotExist".into()));
        assert_eq!(nav.state(), before);

        // The barrier did not move either: the next sample still counts.
        let state = nav.on_scroll(&sample(700.0, 2));
        assert!(state.hidden);
    }

    #[test]
    fn stale_samples_do_not_overwrite_clicked_section() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.on_scroll(&sample(500.0, 1));

        // Click while samples up to seq 4 are still in flight.
        nav.on_nav_item_click("hero", 4).unwrap();
        assert_eq!(nav.state().active_section, "hero");

        // An in-flight pre-click sample arrives late: discarded whole.
        let state = nav.on_scroll(&sample(1800.0, 3));
        assert_eq!(state.active_section, "hero");
        assert_eq!(state, nav.state());

        // Post-click samples are honored again.
        let state = nav.on_scroll(&sample(1800.0, 5));
        assert_eq!(state.active_section, "projects");
    }

    #[test]
    fn toggle_menu_flips_only_the_menu() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        nav.on_scroll(&sample(500.0, 1));
        let before = nav.state();

        let opened = nav.toggle_menu();
        assert!(opened.menu_open);
        assert_eq!(opened.active_section, before.active_section);
        assert_eq!(opened.hidden, before.hidden);

        let closed = nav.toggle_menu();
        assert_eq!(closed, before);
    }

    #[test]
    fn set_bounds_skips_unknown_sections() {
        let mut nav = controller();
        let mut all = bounds();
        all.push(SectionBounds {
            section_id: "phantom".into(),
            top_offset: 0.0,
            height: 50.0,
        });
        nav.set_bounds(&all);
        let state = nav.on_scroll(&sample(500.0, 1));
        assert_eq!(state.active_section, "about");
    }

    #[test]
    fn hidden_is_never_true_when_not_past_threshold() {
        let mut nav = controller();
        nav.set_bounds(&bounds());
        for (seq, offset) in [0.0, 30.0, 500.0, 75.0, 900.0, 10.0].into_iter().enumerate() {
            let state = nav.on_scroll(&sample(offset, seq as u64 + 1));
            if !state.past_threshold {
                assert!(!state.hidden, "offset {}", offset);
            }
        }
    }
}

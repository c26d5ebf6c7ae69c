//! The page curl widget
//!
//! Owns the hover machine, the two property transitions and the click
//! callback. Every state change re-evaluates the tree and only then applies
//! the transform and fill effects, so transitions always start from the
//! value currently on screen.
//!
//! # Example
//!
//! ```
//! use pagecurl::prelude::*;
//!
//! let mut curl = page_curl()
//!     .size(100.0)
//!     .is_dark_mode(true)
//!     .hover_scale(1.2)
//!     .on_click(|| println!("toggle theme"))
//!     .build();
//!
//! curl.handle_pointer(PointerEvent::Enter);
//! assert_eq!(curl.tree().scale(), 1.2);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use pagecurl_animation::{Easing, Transition};
use pagecurl_core::event_types::{
    CLICK, POINTER_ENTER, POINTER_EXIT_SURFACE, POINTER_LEAVE, POINTER_MOVE,
};
use pagecurl_core::{Affine2D, Color, Event, EventType, Point};

use crate::config::PageCurlConfig;
use crate::geometry;
use crate::state::{HoverState, Interaction};
use crate::tree::{PageCurlTree, ScaleTransform};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a widget instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pagecurl-{}", self.0)
    }
}

/// Events delivered by the host directly to the hit region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

/// What an event did to the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed
    Ignored,
    /// Hover flag changed; the tree was re-rendered
    HoverChanged(Interaction),
    /// The click callback ran
    Clicked,
    /// A click arrived with no callback installed
    Absorbed,
}

type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Clickable, hover-scaling page corner
pub struct PageCurl {
    id: WidgetId,
    config: PageCurlConfig,
    hover: HoverState,
    scale: Transition<f32>,
    /// `None` when the fill string is not a color this crate can parse;
    /// markup still carries the string verbatim
    fill: Option<Transition<Color>>,
    on_click: Option<ClickHandler>,
    tree: PageCurlTree,
}

impl fmt::Debug for PageCurl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCurl")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("interaction", &self.hover.interaction())
            .field("scale", &self.scale.value())
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Default for PageCurl {
    fn default() -> Self {
        Self::new(PageCurlConfig::default())
    }
}

impl PageCurl {
    /// Mount a widget; the first render applies its effects without animation
    pub fn new(config: PageCurlConfig) -> Self {
        let id = WidgetId::next();
        let hover = HoverState::new();
        let initial_scale = config.scale_for(false);
        let duration = config.transition_duration;

        let scale = Transition::new(initial_scale, duration, Easing::EaseOut);
        let fill = parse_fill(&config).map(|c| Transition::new(c, duration, Easing::EaseIn));
        let tree = PageCurlTree::build(id, &config, initial_scale);

        tracing::debug!(%id, size = config.size, "page curl mounted");

        Self {
            id,
            config,
            hover,
            scale,
            fill,
            on_click: None,
            tree,
        }
    }

    pub fn builder() -> PageCurlBuilder {
        PageCurlBuilder::new()
    }

    /// Install or replace the click callback
    pub fn on_click<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn config(&self) -> &PageCurlConfig {
        &self.config
    }

    /// Replace the configuration and re-render
    pub fn set_config(&mut self, config: PageCurlConfig) {
        self.config = config;
        self.render();
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn interaction(&self) -> Interaction {
        self.hover.interaction()
    }

    /// The most recently rendered tree
    pub fn tree(&self) -> &PageCurlTree {
        &self.tree
    }

    /// Re-evaluate the tree from current state, then apply effects
    pub fn render(&mut self) -> &PageCurlTree {
        let target_scale = self.config.scale_for(self.hover.is_hovered());
        self.tree = PageCurlTree::build(self.id, &self.config, target_scale);
        self.apply_effects(target_scale);
        &self.tree
    }

    fn apply_effects(&mut self, target_scale: f32) {
        let duration = self.config.transition_duration;

        self.scale.set_duration(duration);
        if self.scale.set_target(target_scale) {
            tracing::debug!(
                id = %self.id,
                from = self.scale.value(),
                to = target_scale,
                duration_ms = duration,
                "scale transition started"
            );
        }

        let Some(color) = parse_fill(&self.config) else {
            self.fill = None;
            return;
        };
        if let Some(fill) = self.fill.as_mut() {
            fill.set_duration(duration);
            if fill.set_target(color) {
                tracing::debug!(id = %self.id, to = %color, "fill transition started");
            }
        } else {
            self.fill = Some(Transition::new(color, duration, Easing::EaseIn));
        }
    }

    /// Deliver an event that the host already routed to the hit region
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::Enter => self.transition_hover(POINTER_ENTER),
            PointerEvent::Leave => self.transition_hover(POINTER_LEAVE),
            PointerEvent::Click => self.click(),
        }
    }

    /// Deliver a core event
    ///
    /// Enter, leave and click act as [`handle_pointer`](Self::handle_pointer);
    /// move events are hit-tested through [`pointer_move`](Self::pointer_move).
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match (event.event_type, event.position()) {
            (POINTER_ENTER, _) => self.handle_pointer(PointerEvent::Enter),
            (POINTER_LEAVE, _) => self.handle_pointer(PointerEvent::Leave),
            (CLICK, Some(p)) => self.pointer_click(p),
            (CLICK, None) => self.handle_pointer(PointerEvent::Click),
            (POINTER_MOVE, Some(p)) => self.pointer_move(p),
            (POINTER_EXIT_SURFACE, _) => self.pointer_exit(),
            _ => EventOutcome::Ignored,
        }
    }

    /// Raw pointer motion in screen pixels
    pub fn pointer_move(&mut self, screen: Point) -> EventOutcome {
        let inside = self.hit_test(screen);
        match (inside, self.hover.is_hovered()) {
            (true, false) => self.transition_hover(POINTER_ENTER),
            (false, true) => self.transition_hover(POINTER_LEAVE),
            _ => EventOutcome::Ignored,
        }
    }

    /// Raw click in screen pixels; clicks outside the corner are not delivered
    pub fn pointer_click(&mut self, screen: Point) -> EventOutcome {
        if self.hit_test(screen) {
            self.click()
        } else {
            EventOutcome::Ignored
        }
    }

    /// The pointer left the surface entirely
    pub fn pointer_exit(&mut self) -> EventOutcome {
        if self.hover.is_hovered() {
            self.transition_hover(POINTER_LEAVE)
        } else {
            EventOutcome::Ignored
        }
    }

    /// Whether a screen point lands on the clickable corner as currently drawn
    pub fn hit_test(&self, screen: Point) -> bool {
        geometry::screen_to_view_box(screen, self.config.size, &self.transform())
            .is_some_and(geometry::hit_test)
    }

    fn transition_hover(&mut self, event: EventType) -> EventOutcome {
        match self.hover.handle(event) {
            Some(t) => {
                let interaction = Interaction::from(t.to);
                tracing::debug!(id = %self.id, ?interaction, "hover changed");
                self.render();
                EventOutcome::HoverChanged(interaction)
            }
            None => EventOutcome::Ignored,
        }
    }

    fn click(&mut self) -> EventOutcome {
        match &self.on_click {
            Some(callback) => {
                tracing::debug!(id = %self.id, "dispatching click");
                let callback = Arc::clone(callback);
                callback();
                EventOutcome::Clicked
            }
            None => {
                tracing::trace!(id = %self.id, "click absorbed, no handler");
                EventOutcome::Absorbed
            }
        }
    }

    /// Target scale for the current hover state
    pub fn scale(&self) -> f32 {
        *self.scale.target()
    }

    /// Scale currently on screen
    pub fn animated_scale(&self) -> f32 {
        self.scale.value()
    }

    /// Transform currently applied to the container
    pub fn transform(&self) -> Affine2D {
        ScaleTransform::top_left(self.animated_scale()).to_affine()
    }

    /// Fill string for the current theme
    pub fn fill_color(&self) -> &str {
        self.config.fill_color()
    }

    /// Fill currently on screen, if the fill string is a parseable color
    pub fn animated_fill(&self) -> Option<Color> {
        self.fill.as_ref().map(Transition::value)
    }

    /// Advance both transitions; returns whether either is still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let scale_running = self.scale.tick(dt_ms);
        let fill_running = self.fill.as_mut().is_some_and(|f| f.tick(dt_ms));
        tracing::trace!(
            id = %self.id,
            dt_ms,
            scale = self.scale.value(),
            "tick"
        );
        scale_running || fill_running
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_animating() || self.fill.as_ref().is_some_and(Transition::is_animating)
    }
}

fn parse_fill(config: &PageCurlConfig) -> Option<Color> {
    match config.fill_rgba() {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!(%err, fill = config.fill_color(), "fill is not animatable");
            None
        }
    }
}

/// Builder for [`PageCurl`]
#[derive(Default)]
pub struct PageCurlBuilder {
    config: PageCurlConfig,
    on_click: Option<ClickHandler>,
}

impl PageCurlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: PageCurlConfig) -> Self {
        self.config = config;
        self
    }

    /// Displayed width in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.config.size = size;
        self
    }

    pub fn light_mode_color(mut self, color: impl Into<String>) -> Self {
        self.config.light_mode_color = color.into();
        self
    }

    pub fn dark_mode_color(mut self, color: impl Into<String>) -> Self {
        self.config.dark_mode_color = color.into();
        self
    }

    pub fn is_dark_mode(mut self, dark: bool) -> Self {
        self.config.is_dark_mode = dark;
        self
    }

    /// Scale while hovered
    pub fn hover_scale(mut self, scale: f32) -> Self {
        self.config.hover_scale = scale;
        self
    }

    /// Transition duration in milliseconds
    pub fn transition_duration(mut self, ms: u32) -> Self {
        self.config.transition_duration = ms;
        self
    }

    /// CSS filter for the decorative image
    pub fn shadow(mut self, shadow: impl Into<String>) -> Self {
        self.config.shadow = shadow.into();
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.config.class_name = class.into();
        self
    }

    /// Set the click callback
    ///
    /// Called with no arguments each time the corner is clicked.
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> PageCurl {
        let mut curl = PageCurl::new(self.config);
        curl.on_click = self.on_click;
        curl
    }
}

/// Create a page curl builder with default configuration
pub fn page_curl() -> PageCurlBuilder {
    PageCurlBuilder::new()
}

//! GTK4 embedding: a `DrawingArea` driven by a `TickEngine`.
//!
//! GTK only hands out a Cairo context inside the draw callback, so frame
//! requests and resize redraws both become `queue_draw` calls.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ElementSize, FrameRequestId, TickEngine, TickHost, TickLevel, TickStore, WhenResized};
use crate::core::LayoutParams;
use crate::error::TickResult;
use crate::render::CairoContextSurface;

/// The adapter only ever follows its own drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnArea;

/// Host backed by a GTK drawing area.
pub struct GtkHost {
    area: glib::WeakRef<gtk::DrawingArea>,
    next_frame_id: u64,
    observing: bool,
}

impl GtkHost {
    #[must_use]
    pub fn new(area: &gtk::DrawingArea) -> Self {
        Self {
            area: area.downgrade(),
            next_frame_id: 1,
            observing: false,
        }
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}

impl TickHost for GtkHost {
    type Element = OwnArea;

    // Sizes reported by GTK are logical and the draw callback's Cairo context
    // is already scaled, so params stay in logical pixels.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_frame_id);
        self.next_frame_id += 1;
        if let Some(area) = self.area.upgrade() {
            area.queue_draw();
        }
        id
    }

    fn cancel_frame(&mut self, _id: FrameRequestId) {}

    fn observe(&mut self, _element: &OwnArea) {
        self.observing = true;
    }

    fn unobserve(&mut self, _element: &OwnArea) {
        self.observing = false;
    }
}

pub type GtkTickEngine<S> = TickEngine<cairo::Context, S, GtkHost>;

/// Drawing area whose content is the engine's tick pass.
pub struct GtkTickArea<S: Default + 'static = TickStore> {
    area: gtk::DrawingArea,
    engine: Rc<RefCell<GtkTickEngine<S>>>,
}

impl<S: Default + 'static> GtkTickArea<S> {
    pub fn new(levels: Vec<TickLevel<cairo::Context, S>>, params: LayoutParams) -> TickResult<Self> {
        let area = gtk::DrawingArea::new();
        let mut engine = TickEngine::with_host(GtkHost::new(&area), levels, params)?;
        engine.set_keep_same_size_with(Some(OwnArea));
        engine.set_when_resized(WhenResized::DrawOnNextFrame);
        let engine = Rc::new(RefCell::new(engine));

        connect_draw(&area, Rc::downgrade(&engine));
        connect_resize(&area, Rc::downgrade(&engine));

        Ok(Self { area, engine })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<GtkTickEngine<S>>> {
        Rc::clone(&self.engine)
    }

    /// Requests a repaint after the engine params or levels changed.
    pub fn invalidate(&self) {
        self.engine.borrow_mut().set_draw_next_frame(true);
    }
}

fn connect_draw<S: Default + 'static>(area: &gtk::DrawingArea, engine: Weak<RefCell<GtkTickEngine<S>>>) {
    area.set_draw_func(move |_area, context, _width, _height| {
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let mut surface = CairoContextSurface::new(context.clone());
        if let Err(err) = engine.borrow_mut().draw(&mut surface) {
            warn!(error = %err, "gtk tick draw failed");
        }
    });
}

fn connect_resize<S: Default + 'static>(
    area: &gtk::DrawingArea,
    engine: Weak<RefCell<GtkTickEngine<S>>>,
) {
    area.connect_resize(move |_area, width, height| {
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let mut engine = engine.borrow_mut();
        if engine.keep_same_size_with().is_none() {
            return;
        }

        let size = ElementSize::new(f64::from(width), f64::from(height));
        if let Err(err) = engine.apply_element_size(size) {
            warn!(error = %err, "ignoring gtk resize");
            return;
        }
        match engine.when_resized() {
            WhenResized::DoNothing => {}
            WhenResized::DrawImmediately | WhenResized::DrawOnNextFrame => {
                engine.set_draw_next_frame(true);
            }
        }
    });
}

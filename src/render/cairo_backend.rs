use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::warn;

use crate::api::{DrawCall, DrawFlow};
use crate::error::{TickError, TickResult};
use crate::render::{
    Color, SurfaceSize, TextHAlign, TickFrame, TickMarkStyle, TickSurface, marks::tick_line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Offscreen Cairo image surface; a fresh context is created for every pass.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    size: SurfaceSize,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> TickResult<Self> {
        let surface = create_image_surface(width, height)?;
        Ok(Self {
            surface,
            size: SurfaceSize::new(
                f64::from(width),
                f64::from(height),
                f64::from(width),
                f64::from(height),
            ),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

impl TickSurface for CairoSurface {
    type Context = Context;

    fn with_context<R>(&mut self, draw: impl FnOnce(&mut Context) -> R) -> TickResult<R> {
        let mut context = Context::new(&self.surface).map_err(|err| {
            TickError::SurfaceUnavailable(format!("failed to create cairo context: {err}"))
        })?;
        Ok(draw(&mut context))
    }

    fn resize(&mut self, size: SurfaceSize) -> TickResult<()> {
        if !size.width.is_finite() || !size.height.is_finite() {
            return Err(TickError::InvalidData(
                "cairo surface size must be finite".to_owned(),
            ));
        }
        self.surface = create_image_surface(size.width.round() as i32, size.height.round() as i32)?;
        self.size = size;
        Ok(())
    }
}

/// Surface wrapping a context owned by someone else, e.g. a GTK draw callback.
#[derive(Debug, Clone)]
pub struct CairoContextSurface {
    context: Context,
}

impl CairoContextSurface {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self { context }
    }
}

impl TickSurface for CairoContextSurface {
    type Context = Context;

    fn with_context<R>(&mut self, draw: impl FnOnce(&mut Context) -> R) -> TickResult<R> {
        Ok(draw(&mut self.context))
    }
}

/// Paints a recorded frame onto a Cairo context.
pub fn paint_frame(context: &Context, frame: &TickFrame) -> TickResult<CairoPaintStats> {
    frame.validate()?;
    let mut stats = CairoPaintStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke tick", err))?;
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

/// Strokes all marks of a bundle as one batched path.
///
/// `init` starts the path, `each` appends a segment, `finish` strokes once.
#[must_use]
pub fn cairo_tick_lines<S: 'static>(style: TickMarkStyle) -> DrawCall<Context, S> {
    DrawCall::new(move |context: &mut Context, _store: &mut S, state, params| {
        let line = tick_line(state, params, style);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
    })
    .with_init(move |context, _store, _state, _params| {
        if style.color.is_transparent() {
            return DrawFlow::Stop;
        }
        context.new_path();
        DrawFlow::Continue
    })
    .with_finish(move |context, _store, _state, _params| {
        apply_color(context, style.color);
        context.set_line_width(style.stroke_width);
        if let Err(err) = context.stroke() {
            warn!(error = %err, "failed to stroke batched tick path");
        }
    })
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Zero-sized surfaces are allowed so a collapsed element keeps a valid,
/// empty backing store.
fn create_image_surface(width: i32, height: i32) -> TickResult<ImageSurface> {
    if width < 0 || height < 0 {
        return Err(TickError::InvalidData(
            "cairo surface size must be >= 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TickError {
    TickError::Backend(format!("{prefix}: {err}"))
}

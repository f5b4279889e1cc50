use wasm_bindgen::prelude::*;

pub mod console {
  use log::{Level, LevelFilter, Log, Metadata, Record};
  use wasm_bindgen::JsValue;

  struct ConsoleLogger;

  static LOGGER: ConsoleLogger = ConsoleLogger;

  impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
      metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
      if !self.enabled(record.metadata()) {
        return;
      }
      let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
      match record.level() {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
      }
    }

    fn flush(&self) {}
  }

  /// Route `log` records to the browser console. Later calls are ignored.
  pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
      log::set_max_level(level);
    }
  }
}

pub mod playground {
  use gloo_events::EventListener;
  use log::debug;
  use polyprobe::data::Point;
  use wasm_bindgen::{JsCast, UnwrapThrowExt};

  pub type Num = f64;

  pub const MAX_WIDTH: f64 = 760.0;
  pub const HEIGHT: f64 = 520.0;
  pub const MARGIN: f64 = 40.0;

  pub fn window() -> web_sys::Window {
    web_sys::window().expect_throw("no global window")
  }
  pub fn document() -> web_sys::Document {
    window().document().expect_throw("window has no document")
  }
  pub fn canvas() -> web_sys::HtmlCanvasElement {
    document()
      .get_element_by_id("canvas")
      .expect_throw("no element with id 'canvas'")
      .dyn_into::<web_sys::HtmlCanvasElement>()
      .ok()
      .expect_throw("#canvas is not a canvas")
  }

  pub fn context() -> web_sys::CanvasRenderingContext2d {
    canvas()
      .get_context("2d")
      .unwrap_throw()
      .expect_throw("2d context unavailable")
      .dyn_into::<web_sys::CanvasRenderingContext2d>()
      .unwrap_throw()
  }

  pub fn get_device_pixel_ratio() -> f64 {
    window().device_pixel_ratio()
  }

  /// Size the canvas to the window, keeping drawing coordinates in CSS pixels.
  pub fn fit_canvas() {
    let ratio = get_device_pixel_ratio();
    let inner = window()
      .inner_width()
      .ok()
      .and_then(|w| w.as_f64())
      .unwrap_or(MAX_WIDTH + MARGIN);
    let width = (inner - MARGIN).min(MAX_WIDTH);

    let canvas = canvas();
    let style = canvas.style();
    style
      .set_property("width", &format!("{}px", width))
      .unwrap_throw();
    style
      .set_property("height", &format!("{}px", HEIGHT))
      .unwrap_throw();
    canvas.set_width((width * ratio) as u32);
    canvas.set_height((HEIGHT * ratio) as u32);
    context()
      .set_transform(ratio, 0., 0., ratio, 0., 0.)
      .unwrap_throw();
    debug!("canvas fitted to {}x{} at ratio {}", width, HEIGHT, ratio);
  }

  pub fn clear_screen() {
    let canvas = canvas();
    let ratio = get_device_pixel_ratio();
    context().clear_rect(
      0.,
      0.,
      f64::from(canvas.width()) / ratio,
      f64::from(canvas.height()) / ratio,
    );
  }

  /// Pointer position relative to the canvas' top-left corner.
  pub fn canvas_position(event: &web_sys::MouseEvent) -> Point<Num, 2> {
    let rect = canvas().get_bounding_client_rect();
    Point::new([
      f64::from(event.client_x()) - rect.left(),
      f64::from(event.client_y()) - rect.top(),
    ])
  }

  fn on_mouse<F>(target: &web_sys::EventTarget, event_type: &'static str, callback: F)
  where
    F: Fn(&web_sys::MouseEvent) + 'static,
  {
    let listener = EventListener::new(target, event_type, move |event| {
      let event = event.dyn_ref::<web_sys::MouseEvent>().unwrap_throw();
      callback(event)
    });
    listener.forget();
  }

  pub fn on_mousedown<F>(callback: F)
  where
    F: Fn(&web_sys::MouseEvent) + 'static,
  {
    on_mouse(&canvas(), "mousedown", callback)
  }

  // Move and release are tracked on the window so a drag can leave the canvas.
  pub fn on_mousemove<F>(callback: F)
  where
    F: Fn(&web_sys::MouseEvent) + 'static,
  {
    on_mouse(&window(), "mousemove", callback)
  }

  pub fn on_mouseup<F>(callback: F)
  where
    F: Fn(&web_sys::MouseEvent) + 'static,
  {
    on_mouse(&window(), "mouseup", callback)
  }

  pub fn on_resize<F>(callback: F)
  where
    F: Fn() + 'static,
  {
    EventListener::new(&window(), "resize", move |_event| callback()).forget();
  }

  mod context {
    use super::{context, Num};
    use js_sys::Array;
    use polyprobe::data::Point;
    use wasm_bindgen::UnwrapThrowExt;

    pub fn set_fill_style(style: &str) {
      context().set_fill_style_str(style)
    }

    pub fn set_stroke_style(style: &str) {
      context().set_stroke_style_str(style)
    }

    pub fn set_line_width(width: f64) {
      context().set_line_width(width)
    }

    pub fn fill() {
      context().fill()
    }

    pub fn stroke() {
      context().stroke()
    }

    pub fn begin_path() {
      context().begin_path();
    }

    pub fn close_path() {
      context().close_path();
    }

    pub fn move_to_point(pt: &Point<Num, 2>) {
      context().move_to(*pt.x_coord(), *pt.y_coord())
    }

    pub fn line_to_point(pt: &Point<Num, 2>) {
      context().line_to(*pt.x_coord(), *pt.y_coord())
    }

    /// Start a new path holding a full circle.
    pub fn circle(center: &Point<Num, 2>, radius: f64) {
      begin_path();
      context()
        .arc(
          *center.x_coord(),
          *center.y_coord(),
          radius,
          0.0,
          std::f64::consts::PI * 2.,
        )
        .unwrap_throw();
    }

    /// Start a new path holding the closed loop through `pts`.
    pub fn polygon_path(pts: &[Point<Num, 2>]) {
      begin_path();
      let mut iter = pts.iter();
      if let Some(origin) = iter.next() {
        move_to_point(origin);
        for pt in iter {
          line_to_point(pt);
        }
      }
      close_path();
    }

    pub fn set_line_dash(dash: &[f64]) {
      let arr = Array::new();
      for (nth, &dash_len) in dash.iter().enumerate() {
        arr.set(nth as u32, dash_len.into());
      }
      context().set_line_dash(arr.as_ref()).unwrap_throw()
    }
  }
  pub use context::*;
}

pub mod runner {
  use super::console;
  use super::playground::*;
  use gloo_render::{request_animation_frame, AnimationFrame};
  use log::{info, LevelFilter};
  use polyprobe::scene::Scene;
  use std::cell::RefCell;
  use std::rc::Rc;

  const FILL_ALPHA: f64 = 0.12;
  const OUTSIDE_MARKER: &str = "#222";

  pub fn run() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console::init(LevelFilter::Debug);

    let scene = Rc::new(RefCell::new(Scene::demo()));
    info!("{} shapes", scene.borrow().shapes().len());

    fit_canvas();
    on_resize(fit_canvas);
    {
      let scene = Rc::clone(&scene);
      on_mousedown(move |event| scene.borrow_mut().press(canvas_position(event)));
    }
    {
      let scene = Rc::clone(&scene);
      on_mousemove(move |event| scene.borrow_mut().aim(canvas_position(event)));
    }
    {
      let scene = Rc::clone(&scene);
      on_mouseup(move |_event| scene.borrow_mut().release());
    }

    schedule(scene, Rc::new(RefCell::new(None)));
  }

  // Each frame requests the next one. Storing the handle keeps it alive; the
  // frame that is replaced has already fired.
  fn schedule(scene: Rc<RefCell<Scene>>, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    let next = Rc::clone(&pending);
    let frame = request_animation_frame(move |_timestamp| {
      {
        let mut scene = scene.borrow_mut();
        scene.tick();
        draw(&scene);
      }
      schedule(scene, next);
    });
    *pending.borrow_mut() = Some(frame);
  }

  fn draw(scene: &Scene) {
    clear_screen();
    let body = scene.body();

    for probe in scene.probes() {
      let color = probe.shape.color.to_string();

      polygon_path(probe.shape.polygon.points());
      set_fill_style(&probe.shape.color.rgba(FILL_ALPHA));
      fill();
      set_stroke_style(&color);
      set_line_width(2.0);
      stroke();

      circle(&probe.closest, 6.0);
      set_fill_style(if probe.inside { color.as_str() } else { OUTSIDE_MARKER });
      fill();

      begin_path();
      move_to_point(&body.position);
      line_to_point(&probe.closest);
      set_line_dash(&[6.0, 6.0]);
      set_stroke_style(&color);
      set_line_width(1.6);
      stroke();
      set_line_dash(&[]);
    }

    circle(&body.position, 10.0);
    set_fill_style("#111");
    fill();
    set_stroke_style("#fff");
    set_line_width(2.0);
    stroke();
  }
}

#[wasm_bindgen(start)]
pub fn start() {
  runner::run();
}

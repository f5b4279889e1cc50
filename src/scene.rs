//! State of the interactive scene: a point mass that chases a pointer target
//! and a fixed set of colored polygons probed once per frame.
//!
//! Coordinates are canvas pixels. The scene is a plain owned value; the frame
//! loop that drives it calls [`Scene::tick`] and then reads [`Scene::probes`].
use log::{debug, trace};
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

use crate::algorithms::{closest_point_on_polygon, in_polygon};
use crate::data::{Point, Polygon, Vector};
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// Color

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const fn new(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b }
  }

  /// CSS `rgba(...)` string with the given alpha.
  pub fn rgba(self, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
  }
}

impl FromStr for Color {
  type Err = Error;

  /// Parses `#rrggbb`.
  fn from_str(s: &str) -> Result<Color, Error> {
    let hex = s.strip_prefix('#').ok_or(Error::InvalidColor)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(Error::InvalidColor);
    }
    let n = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor)?;
    Ok(Color::new((n >> 16) as u8, (n >> 8) as u8, n as u8))
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Configuration

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
  /// Fraction of the remaining distance added to the velocity each tick.
  pub stiffness: f64,
  /// Fraction of the velocity kept each tick.
  pub damping: f64,
  /// A press closer than this (squared) to the body starts a drag.
  pub grab_radius_squared: f64,
  pub start: Point<f64, 2>,
}

impl Default for SceneConfig {
  fn default() -> SceneConfig {
    SceneConfig {
      stiffness: 0.14,
      damping: 0.78,
      grab_radius_squared: 200.0,
      start: Point::new([300.0, 200.0]),
    }
  }
}

impl SceneConfig {
  pub fn validate(&self) -> Result<(), Error> {
    if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
      return Err(Error::UnstableSpring);
    }
    if !(self.damping >= 0.0 && self.damping < 1.0) {
      return Err(Error::UnstableSpring);
    }
    if !(self.grab_radius_squared.is_finite() && self.grab_radius_squared >= 0.0) {
      return Err(Error::InvalidParameter);
    }
    if !self.start.is_finite() {
      return Err(Error::InvalidParameter);
    }
    Ok(())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Body

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
  pub position: Point<f64, 2>,
  pub velocity: Vector<f64, 2>,
  pub target: Point<f64, 2>,
  pub dragging: bool,
}

impl Body {
  pub fn at_rest(position: Point<f64, 2>) -> Body {
    Body {
      position,
      velocity: Vector::zero(),
      target: position,
      dragging: false,
    }
  }

  // Damped spring, one explicit step:
  //   v' = (v + (target - x) * k) * d
  //   x' = x + v'
  fn step(&mut self, stiffness: f64, damping: f64) {
    let pull = (self.target - self.position) * stiffness;
    self.velocity = (self.velocity + pull) * damping;
    self.position += self.velocity;
  }
}

///////////////////////////////////////////////////////////////////////////////
// Scene

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
  pub polygon: Polygon<f64>,
  pub color: Color,
}

/// What the renderer needs for one shape in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe<'a> {
  pub shape: &'a Shape,
  /// Nearest boundary point, or the body position when `inside`.
  pub closest: Point<f64, 2>,
  pub inside: bool,
}

#[derive(Debug, Clone)]
pub struct Scene {
  config: SceneConfig,
  body: Body,
  shapes: Vec<Shape>,
}

impl Scene {
  pub fn new(config: SceneConfig, shapes: Vec<Shape>) -> Result<Scene, Error> {
    config.validate()?;
    if shapes.is_empty() {
      return Err(Error::EmptyScene);
    }
    for shape in &shapes {
      if shape.polygon.len() < 3 {
        return Err(Error::InsufficientVertices);
      }
      if !shape.polygon.iter().all(Point::is_finite) {
        return Err(Error::NonFiniteCoordinate);
      }
    }
    debug!(
      "scene with {} shapes, body at {:?}",
      shapes.len(),
      config.start.array
    );
    Ok(Scene {
      body: Body::at_rest(config.start),
      config,
      shapes,
    })
  }

  /// Two rectangles, a triangle and a pentagon laid out on a 760x520 canvas.
  pub fn demo() -> Scene {
    fn shape(color: Color, pts: &[[f64; 2]]) -> Shape {
      Shape {
        polygon: Polygon::new_unchecked(pts.iter().copied().map(Point::new).collect()),
        color,
      }
    }
    let shapes = vec![
      shape(
        Color::new(0x8d, 0xc3, 0x3c),
        &[[80., 60.], [260., 60.], [260., 220.], [80., 220.]],
      ),
      shape(
        Color::new(0xff, 0x8c, 0x42),
        &[
          [380., 60.],
          [560., 60.],
          [560., 120.],
          [480., 120.],
          [480., 220.],
          [380., 220.],
        ],
      ),
      shape(
        Color::new(0x6a, 0xa0, 0xf8),
        &[[80., 320.], [220., 420.], [40., 440.]],
      ),
      shape(
        Color::new(0xd5, 0x7c, 0xbe),
        &[[380., 320.], [520., 300.], [600., 380.], [460., 480.], [340., 420.]],
      ),
    ];
    Scene {
      config: SceneConfig::default(),
      body: Body::at_rest(SceneConfig::default().start),
      shapes,
    }
  }

  pub fn config(&self) -> &SceneConfig {
    &self.config
  }

  pub fn body(&self) -> &Body {
    &self.body
  }

  pub fn shapes(&self) -> &[Shape] {
    &self.shapes
  }

  /// Pointer pressed at `pt`. Starts a drag when `pt` is within the grab radius
  /// of the body, and always retargets.
  pub fn press(&mut self, pt: Point<f64, 2>) {
    if pt.squared_euclidean_distance(&self.body.position) < self.config.grab_radius_squared {
      debug!("drag started at {:?}", pt.array);
      self.body.dragging = true;
    }
    self.body.target = pt;
  }

  /// Pointer moved to `pt`.
  pub fn aim(&mut self, pt: Point<f64, 2>) {
    self.body.target = pt;
  }

  pub fn release(&mut self) {
    if self.body.dragging {
      debug!("drag released at {:?}", self.body.position.array);
    }
    self.body.dragging = false;
  }

  /// Advance the body by one frame.
  pub fn tick(&mut self) {
    self.body.step(self.config.stiffness, self.config.damping);
    trace!(
      "body at {:?}, velocity {:?}",
      self.body.position.array,
      self.body.velocity.0
    );
  }

  /// One probe per shape, in shape order.
  pub fn probes(&self) -> impl Iterator<Item = Probe<'_>> + '_ {
    let pos = self.body.position;
    self.shapes.iter().map(move |shape| Probe {
      shape,
      closest: closest_point_on_polygon(shape.polygon.points(), &pos),
      inside: in_polygon(shape.polygon.points(), &pos),
    })
  }
}

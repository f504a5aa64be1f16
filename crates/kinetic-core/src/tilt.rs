//! Pointer-driven 3D tilt with optional glare highlight.
//!
//! The tilt never stores anything beyond its configuration and the last frame:
//! every pointer move derives a complete [`TiltFrame`] from the pointer position
//! and the element's bounding box.
//!
//! ```text
//!        offset_y = -1
//!             ▲            rotate_x = -offset_y * max
//!  offset_x ◄─┼─► +1       rotate_y =  offset_x * max
//!             ▼
//!        offset_y = +1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, KineticError, KineticResult};
use crate::platform::PreferenceReader;

/// Perspective distance used by the rendered transform
pub const PERSPECTIVE_PX: u32 = 1000;

/// Tilt configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TiltConfig {
    /// Maximum rotation on either axis, in degrees
    pub max_tilt_degrees: f64,
    /// Scale applied while the pointer is over the element
    pub hover_scale: f64,
    /// CSS transition duration for transform changes
    pub transition_speed_ms: u64,
    /// Whether to expose a glare position
    pub enable_glare: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_degrees: 15.0,
            hover_scale: 1.05,
            transition_speed_ms: 300,
            enable_glare: true,
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> KineticResult<()> {
        ensure_finite("maxTiltDegrees", self.max_tilt_degrees)?;
        ensure_finite("hoverScale", self.hover_scale)?;
        if self.max_tilt_degrees < 0.0 {
            return Err(KineticError::InvalidConfig(format!(
                "maxTiltDegrees must not be negative (got {})",
                self.max_tilt_degrees
            )));
        }
        if self.hover_scale <= 0.0 {
            return Err(KineticError::InvalidConfig(format!(
                "hoverScale must be positive (got {})",
                self.hover_scale
            )));
        }
        Ok(())
    }
}

/// A pointer position in the same coordinate space as [`ElementRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the tilted element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect anchored at the origin, for element-relative pointer coordinates.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer offset from the center, each axis normalized to -1.0..=1.0.
    ///
    /// Degenerate (zero or non-finite) extents yield 0 on that axis.
    pub fn normalized_offset(&self, point: Point) -> (f64, f64) {
        let center = self.center();
        (
            normalize(point.x - center.x, self.width / 2.0),
            normalize(point.y - center.y, self.height / 2.0),
        )
    }

    /// Pointer position as a percentage of the box, each axis in 0..=100.
    pub fn percent_position(&self, point: Point) -> (f64, f64) {
        let (dx, dy) = self.normalized_offset(point);
        ((dx + 1.0) * 50.0, (dy + 1.0) * 50.0)
    }
}

fn normalize(delta: f64, half_extent: f64) -> f64 {
    if !(half_extent.is_finite() && half_extent > 0.0) || !delta.is_finite() {
        return 0.0;
    }
    (delta / half_extent).clamp(-1.0, 1.0)
}

/// Radial highlight center, in percent of the element box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlarePosition {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl GlarePosition {
    pub const CENTER: GlarePosition = GlarePosition {
        x_percent: 50.0,
        y_percent: 50.0,
    };
}

/// A fully derived tilt transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    /// Rotation about the horizontal axis, degrees
    pub rotate_x: f64,
    /// Rotation about the vertical axis, degrees
    pub rotate_y: f64,
    pub scale: f64,
    /// Present only when glare is enabled
    pub glare: Option<GlarePosition>,
}

impl TiltFrame {
    /// The resting transform: no rotation, unit scale.
    pub fn identity(glare: bool) -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            glare: glare.then_some(GlarePosition::CENTER),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0 && self.scale == 1.0
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y,
            s = self.scale
        )
    }

    /// Complete inline style: transform, transition and glare custom properties.
    pub fn style(&self, transition_ms: u64) -> String {
        let mut style = format!(
            "transform: {}; transition: transform {}ms ease-out;",
            self.transform_css(),
            transition_ms
        );
        if let Some(glare) = self.glare {
            style.push_str(&format!(
                " --glare-x: {:.1}%; --glare-y: {:.1}%;",
                glare.x_percent, glare.y_percent
            ));
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TiltStatus {
    /// Reduced motion requested; never attached
    Inert,
    Attached,
    Detached,
}

/// Tilt interaction state for a single element.
#[derive(Debug, Clone)]
pub struct Tilt {
    config: TiltConfig,
    status: TiltStatus,
    frame: TiltFrame,
}

impl Tilt {
    /// Validate the configuration and attach, unless reduced motion is requested.
    pub fn new(config: TiltConfig, prefs: &dyn PreferenceReader) -> KineticResult<Self> {
        config.validate()?;

        let status = if prefs.prefers_reduced_motion() {
            tracing::debug!("Reduced motion requested; tilt stays inert");
            TiltStatus::Inert
        } else {
            TiltStatus::Attached
        };

        Ok(Self {
            config,
            status,
            frame: TiltFrame::identity(config.enable_glare),
        })
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Whether pointer events are being handled.
    pub fn is_attached(&self) -> bool {
        self.status == TiltStatus::Attached
    }

    /// Whether the tilt was suppressed by the reduced-motion preference.
    pub fn is_inert(&self) -> bool {
        self.status == TiltStatus::Inert
    }

    /// Last computed frame (identity until the first pointer move).
    pub fn frame(&self) -> TiltFrame {
        self.frame
    }

    /// Derive the frame for a pointer at `point` over `rect`.
    ///
    /// Returns `None` when the tilt is inert or detached.
    pub fn pointer_move(&mut self, rect: ElementRect, point: Point) -> Option<TiltFrame> {
        if !self.is_attached() {
            return None;
        }

        let (dx, dy) = rect.normalized_offset(point);
        let max = self.config.max_tilt_degrees;
        // `+ 0.0` folds negative zero so the center renders as 0.00deg
        let frame = TiltFrame {
            rotate_x: -dy * max + 0.0,
            rotate_y: dx * max + 0.0,
            scale: self.config.hover_scale,
            glare: self.config.enable_glare.then(|| {
                let (x_percent, y_percent) = rect.percent_position(point);
                GlarePosition {
                    x_percent,
                    y_percent,
                }
            }),
        };

        self.frame = frame;
        Some(frame)
    }

    /// Return to the identity transform with a centered glare.
    pub fn pointer_leave(&mut self) -> Option<TiltFrame> {
        if !self.is_attached() {
            return None;
        }
        self.frame = TiltFrame::identity(self.config.enable_glare);
        Some(self.frame)
    }

    /// Stop handling pointer events for good.
    pub fn detach(&mut self) {
        if self.status == TiltStatus::Attached {
            tracing::debug!("Tilt detached");
        }
        self.status = TiltStatus::Detached;
        self.frame = TiltFrame::identity(self.config.enable_glare);
    }

    /// Inline style for the current frame.
    pub fn style(&self) -> String {
        self.frame.style(self.config.transition_speed_ms)
    }
}

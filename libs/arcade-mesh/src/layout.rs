//! # Arcade Layout
//!
//! Rows of pillars and round arches along one horizontal axis.
//!
//! One unit is a pillar followed by an archway; the archway is a lintel box
//! above the springing line plus an arch below it. A row starts with an extra
//! pillar so it is closed at both ends:
//!
//! ```text
//!  ___ _______ ___ _______ ___
//! |   |_______|   |_______|   |   height_top
//! |   |/     \|   |/     \|   |   radius
//! |   |       |   |       |   |   height_bottom
//! |___|       |___|       |___|
//!  pillar  2r   pillar
//! ```
//!
//! Rows along x are the y builder run under a pre-composed [`SwapXY`].
//!
//! [`SwapXY`]: crate::Transformation::SwapXY

use crate::error::BuildError;
use crate::primitives::{make_arch_with_steps, make_box};
use crate::region::{Interval, Region};
use crate::scene::SceneSink;
use crate::transform::Transformation;
use config::constants::{ARCH_STEPS, MAX_ARCH_STEPS, MIN_ARCH_STEPS};
use serde::{Deserialize, Serialize};

/// Horizontal axis a row of arches runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Parameters of one row of arches.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::Arcade;
///
/// let arcade = Arcade::new(3, 1.0, 2.0, 1.0, 1.0);
/// assert_eq!(arcade.unit_width(), 3.0);
/// assert_eq!(arcade.height(), 4.0);
/// assert_eq!(arcade.length(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arcade {
    /// Number of archways.
    pub num_arches: usize,
    /// Radius of each opening.
    pub radius: f64,
    /// Height of the straight jambs below the springing line.
    pub height_bottom: f64,
    /// Thickness of the lintel above the apex.
    pub height_top: f64,
    /// Width of every pillar.
    pub width_pillar: f64,
    /// Samples per arch profile curve.
    #[serde(default = "default_arch_steps")]
    pub arch_steps: u32,
}

fn default_arch_steps() -> u32 {
    ARCH_STEPS
}

impl Arcade {
    pub fn new(
        num_arches: usize,
        radius: f64,
        height_bottom: f64,
        height_top: f64,
        width_pillar: f64,
    ) -> Self {
        Self {
            num_arches,
            radius,
            height_bottom,
            height_top,
            width_pillar,
            arch_steps: ARCH_STEPS,
        }
    }

    /// Overrides the arch tessellation resolution.
    pub fn with_arch_steps(mut self, arch_steps: u32) -> Self {
        self.arch_steps = arch_steps;
        self
    }

    /// Width of one pillar-plus-archway unit: `2·radius + width_pillar`.
    #[inline]
    pub fn unit_width(&self) -> f64 {
        2.0 * self.radius + self.width_pillar
    }

    /// Overall height: `height_bottom + radius + height_top`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height_bottom + self.radius + self.height_top
    }

    /// Extent of the whole row along its axis, leading pillar included.
    pub fn length(&self) -> f64 {
        self.num_arches as f64 * self.unit_width() + self.width_pillar
    }

    /// Checks the parameters describe buildable solids.
    pub fn validate(&self) -> Result<(), BuildError> {
        let fields = [
            ("radius", self.radius),
            ("height_bottom", self.height_bottom),
            ("height_top", self.height_top),
            ("width_pillar", self.width_pillar),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BuildError::invalid(format!("{name} must be finite: {value}")));
        }
        if self.radius <= 0.0 {
            return Err(BuildError::invalid(format!(
                "radius must be positive: {}",
                self.radius
            )));
        }
        if self.width_pillar <= 0.0 {
            return Err(BuildError::invalid(format!(
                "width_pillar must be positive: {}",
                self.width_pillar
            )));
        }
        if self.height_bottom < 0.0 {
            return Err(BuildError::invalid(format!(
                "height_bottom must not be negative: {}",
                self.height_bottom
            )));
        }
        if self.height_top <= 0.0 {
            return Err(BuildError::invalid(format!(
                "height_top must be positive: {}",
                self.height_top
            )));
        }
        if !(MIN_ARCH_STEPS..=MAX_ARCH_STEPS).contains(&self.arch_steps) {
            return Err(BuildError::invalid(format!(
                "arch_steps must be in {MIN_ARCH_STEPS}..={MAX_ARCH_STEPS}: {}",
                self.arch_steps
            )));
        }
        Ok(())
    }
}

/// Emits a row of arches along `axis`.
///
/// `span` is the wall thickness on the other horizontal axis and `base` the
/// z of the floor the row stands on. For `n` arches this emits `n + 1`
/// pillars, `n` lintels and `n` arches; unit `i` starts at `i · unit_width`.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{make_arch_sequence, Arcade, Axis, Interval, MemoryScene};
///
/// let mut scene = MemoryScene::new();
/// let arcade = Arcade::new(3, 1.0, 2.0, 1.0, 1.0);
/// make_arch_sequence(&mut scene, Axis::X, &arcade, Interval::new(0.0, 1.0), 0.0, None).unwrap();
/// let (min, max) = scene.merged().bounding_box();
/// assert_eq!((min.x, max.x), (0.0, 10.0));
/// assert_eq!((min.y, max.y), (0.0, 1.0));
/// ```
pub fn make_arch_sequence<S: SceneSink + ?Sized>(
    sink: &mut S,
    axis: Axis,
    arcade: &Arcade,
    span: Interval,
    base: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    match axis {
        Axis::Y => make_arches_y(sink, arcade, span, base, transform),
        Axis::X => make_arches_x(sink, arcade, span, base, transform),
    }
}

/// Emits a row of arches running along y, with `x_span` as wall thickness.
pub fn make_arches_y<S: SceneSink + ?Sized>(
    sink: &mut S,
    arcade: &Arcade,
    x_span: Interval,
    base: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    arcade.validate()?;
    x_span.check("span")?;
    if !base.is_finite() {
        return Err(BuildError::invalid(format!("base must be finite: {base}")));
    }
    tracing::debug!(?arcade, ?x_span, base, "make_arches_y");

    let Arcade {
        num_arches,
        radius,
        height_bottom,
        width_pillar,
        arch_steps,
        ..
    } = *arcade;
    let width_segment = arcade.unit_width();
    let full_height = Interval::new(base, base + arcade.height());
    let lintel = Interval::new(base + height_bottom + radius, base + arcade.height());
    let opening = Interval::new(base + height_bottom, base + height_bottom + radius);

    let pillar = |y: f64| Region {
        x: x_span,
        y: Interval::new(y, y + width_pillar),
        z: full_height,
    };

    make_box(sink, pillar(0.0), transform)?;

    for i in 0..num_arches {
        let y = i as f64 * width_segment;
        let archway = Interval::new(width_pillar + y, width_segment + y);

        make_box(sink, pillar(width_segment + y), transform)?;
        make_box(
            sink,
            Region {
                x: x_span,
                y: archway,
                z: lintel,
            },
            transform,
        )?;
        make_arch_with_steps(
            sink,
            Region {
                x: x_span,
                y: archway,
                z: opening,
            },
            arch_steps,
            transform,
        )?;
    }

    Ok(())
}

/// Emits a row of arches running along x, with `y_span` as wall thickness.
///
/// Builds the y row in swapped coordinates: the caller's transform is applied
/// after the swap. Cloning `outer` only bumps the reference counts of its
/// operands.
pub fn make_arches_x<S: SceneSink + ?Sized>(
    sink: &mut S,
    arcade: &Arcade,
    y_span: Interval,
    base: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    let swapped = match transform {
        Some(outer) => Transformation::compose(outer.clone(), Transformation::SwapXY),
        None => Transformation::SwapXY,
    };
    make_arches_y(sink, arcade, y_span, base, Some(&swapped))
}

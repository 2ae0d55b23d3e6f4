//! Scatter plot points and axis extents

use dexflow_types::{Record, Stat};
use serde::{Deserialize, Serialize};

/// Share of the full extent shown on each side of a focused group
pub const DEFAULT_ZOOM_FRACTION: f64 = 0.2;

/// Closed numeric range of an axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Minimum and maximum of the finite-comparable values; `None` when
    /// nothing but NaN is present.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some(Extent { min: v, max: v }),
                Some(e) => Some(Extent {
                    min: e.min.min(v),
                    max: e.max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Window centered on `center`, reaching `span * fraction` to each side
    pub fn zoom_around(&self, center: f64, fraction: f64) -> Extent {
        let delta = self.span() * fraction;
        Extent {
            min: center - delta,
            max: center + delta,
        }
    }
}

/// One point of the scatter plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub id: String,
    pub category: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Scatter plot dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlot {
    pub x_stat: Stat,
    pub y_stat: Stat,
    pub size_stat: Stat,
    pub points: Vec<ScatterPoint>,
    pub x_extent: Option<Extent>,
    pub y_extent: Option<Extent>,
    pub size_extent: Option<Extent>,
}

impl ScatterPlot {
    pub fn point(&self, id: &str) -> Option<&ScatterPoint> {
        self.points.iter().find(|p| p.id == id)
    }
}

/// One point per record, `x` against `y` with marker size from `size`
pub fn scatter_plot(records: &[Record], x: Stat, y: Stat, size: Stat) -> ScatterPlot {
    let points: Vec<ScatterPoint> = records
        .iter()
        .map(|r| ScatterPoint {
            id: r.id.clone(),
            category: r.primary_category.clone(),
            x: r.measurement(x),
            y: r.measurement(y),
            size: r.measurement(size),
        })
        .collect();

    ScatterPlot {
        x_stat: x,
        y_stat: y,
        size_stat: size,
        x_extent: Extent::of(points.iter().map(|p| p.x)),
        y_extent: Extent::of(points.iter().map(|p| p.y)),
        size_extent: Extent::of(points.iter().map(|p| p.size)),
        points,
    }
}

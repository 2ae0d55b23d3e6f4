//! Datasets for the ranked bar, scatter and radar charts
//!
//! Each function is a pure transform over loaded records. Scales, axes and
//! drawing belong to whatever renders the data.

pub mod radar;
pub mod ranking;
pub mod rollup;
pub mod scatter;

pub use radar::{RadarAxis, RadarProfile};
pub use ranking::{rank_by_total, RankedRecord, DEFAULT_RANK_FIELDS, DEFAULT_RANK_LIMIT};
pub use rollup::{rollup_by, rollup_plot, RollupGroup, RollupPlot};
pub use scatter::{scatter_plot, Extent, ScatterPlot, ScatterPoint};

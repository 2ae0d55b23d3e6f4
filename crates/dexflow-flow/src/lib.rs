//! # Dexflow Flow
//!
//! Chart-ready datasets over tabular creature records.
//!
//! The centerpiece is [`builder::FlowGraphBuilder`], which turns records and a
//! list of threshold rules into a layered node/link graph for a Sankey layout.
//! The remaining modules prepare the other chart datasets, load records from
//! CSV, read YAML configuration and export everything as JSON.

pub mod builder;
pub mod charts;
pub mod config;
pub mod entry;
pub mod error;
pub mod exporter;
pub mod loader;
pub mod palette;
pub mod renderer;

pub use builder::{default_rules, FlowGraphBuilder, DEFAULT_ROOT_LABEL};
pub use config::ChartConfig;
pub use error::{FlowError, FlowResult};
pub use palette::Palette;

pub mod data;
pub mod loader;
pub mod payload;

pub use data::ChartData;
pub use loader::{chart_from_payload, load_chart_from_json, ChartDataError};
pub use payload::{AspectPayload, BodyPayload, ChartPayload, CuspPayload};

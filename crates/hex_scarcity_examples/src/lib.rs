#![forbid(unsafe_code)]

mod briefings;
mod metrics;
mod rendering;

pub use briefings::{Briefing, BRIEFINGS};
pub use metrics::DisplayMetrics;
pub use rendering::{init_tracing, render_board_to_png, Palette, RenderConfig};

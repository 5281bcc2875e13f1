//! Plot module - `\addplot` statement generation

mod line;
mod number;

pub use line::{generate_plot_line, PlotLine, PlotLineError, StyleOptions};

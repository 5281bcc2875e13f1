//! pgfline - pgfplots code generation from numeric data
//!
//! Builds single `\addplot` statements (LaTeX code using the pgfplots
//! package) from x/y coordinate series, with optional symmetric error bars
//! and optional style options.
//!
//! A generated statement slots into a pgfplots axis like this:
//!
//! ```latex
//! \begin{tikzpicture}
//!   \begin{axis}[axis options]
//!     \addplot[plot options]
//!     plot[]
//!     coordinates{(0, 0)
//!     (1, 1)
//!     (2, 4)
//!     (3, 9)};
//!   \end{axis}
//! \end{tikzpicture}
//! ```
//!
//! Assembling fragments into a complete figure is the caller's job; this
//! crate only emits one statement per data series.
//!
//! # Example
//!
//! ```
//! use pgfline::PlotLine;
//!
//! let line = PlotLine::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
//!     .with_options("color=red, mark=square");
//! let tex = line.render()?;
//! assert!(tex.starts_with("\\addplot[color=red, mark=square]"));
//! assert!(tex.contains("(2, 4)"));
//! # Ok::<(), pgfline::PlotLineError>(())
//! ```

mod plot;

pub use plot::{generate_plot_line, PlotLine, PlotLineError, StyleOptions};

//! Plot Line Module
//! Assembles a single pgfplots `\addplot` statement from numeric series.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::number;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotLineError {
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("series has {expected} coordinates but {got} error values")]
    ErrorLengthMismatch { expected: usize, got: usize },
}

/// Style options for one plot line, e.g. `"color=red, solid, mark=square"`.
///
/// The content is opaque: it is interpolated verbatim into the
/// `\addplot[...]` brackets and never parsed or validated here. The
/// downstream LaTeX toolchain is responsible for interpreting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOptions(String);

impl StyleOptions {
    pub fn new(options: impl Into<String>) -> Self {
        Self(options.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleOptions {
    fn from(options: &str) -> Self {
        Self(options.to_owned())
    }
}

impl From<String> for StyleOptions {
    fn from(options: String) -> Self {
        Self(options)
    }
}

/// One plotted data series, optionally with symmetric error bars.
///
/// `x` and `y` are paired positionally and must have equal length; input
/// order determines line-drawing order in the resulting plot. When `errors`
/// is present, each coordinate gets a `+- (0.0, err/2)` error pair: the
/// error bar is drawn plus/minus half the supplied magnitude, per the
/// symmetric half-magnitude convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotLine {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub errors: Option<Vec<f64>>,
    pub options: Option<StyleOptions>,
}

impl PlotLine {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            errors: None,
            options: None,
        }
    }

    /// Attach symmetric vertical error magnitudes, one per coordinate.
    pub fn with_errors(mut self, errors: Vec<f64>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Attach style options for the `\addplot[...]` brackets.
    pub fn with_options(mut self, options: impl Into<StyleOptions>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Render the `\addplot` statement.
    ///
    /// Pure function of the inputs: identical series render to identical
    /// strings. An empty series is legal and produces an empty coordinate
    /// list. An empty `errors` vector means no error bars, same as `None`.
    pub fn render(&self) -> Result<String, PlotLineError> {
        if self.x.len() != self.y.len() {
            return Err(PlotLineError::LengthMismatch {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }

        let points: Vec<String> = self
            .x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| format!("({}, {})", number::coord(x), number::coord(y)))
            .collect();

        let plot_line = match self.errors.as_deref() {
            None | Some([]) => format!("plot[]\ncoordinates{{{}}};", points.join("\n")),
            Some(errors) => {
                if errors.len() != points.len() {
                    return Err(PlotLineError::ErrorLengthMismatch {
                        expected: points.len(),
                        got: errors.len(),
                    });
                }

                // Zero horizontal component, half the vertical magnitude
                let entries: Vec<String> = points
                    .iter()
                    .zip(errors)
                    .map(|(point, &err)| {
                        format!("{} +- (0.0, {})", point, number::error(err / 2.0))
                    })
                    .collect();
                format!(
                    "plot[error bars/.cd, y dir = both, y explicit]\ncoordinates{{{}}};",
                    entries.join("\n")
                )
            }
        };

        let style = self.options.as_ref().map_or("", StyleOptions::as_str);
        Ok(format!("\\addplot[{}]\n{}", style, plot_line))
    }
}

/// Generate a pgfplots `\addplot` statement for one data series.
///
/// Free-function form of [`PlotLine::render`] for callers that already hold
/// slices. `errors` and `options` follow the same rules as the builder.
pub fn generate_plot_line(
    x: &[f64],
    y: &[f64],
    errors: Option<&[f64]>,
    options: Option<&str>,
) -> Result<String, PlotLineError> {
    let mut line = PlotLine::new(x.to_vec(), y.to_vec());
    if let Some(errors) = errors {
        line = line.with_errors(errors.to_vec());
    }
    if let Some(options) = options {
        line = line.with_options(options);
    }
    line.render()
}

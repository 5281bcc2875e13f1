// tests/plot_line_test.rs
//
// End-to-end checks on generated \addplot statements, exercising the free
// function the way a figure assembler would call it.

use pgfline::{generate_plot_line, PlotLine, PlotLineError};

#[test]
fn quadratic_series_matches_expected_statement() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    let tex = generate_plot_line(&x, &y, None, None).unwrap();

    let expected = "\\addplot[]\n\
                    plot[]\n\
                    coordinates{(0, 0)\n\
                    (1, 1)\n\
                    (2, 4)\n\
                    (3, 9)};";
    assert_eq!(tex, expected);
}

#[test]
fn statement_with_errors_and_options() {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let errors = [2.0, 4.0];

    let tex = generate_plot_line(&x, &y, Some(&errors), Some("color=red")).unwrap();

    let expected = "\\addplot[color=red]\n\
                    plot[error bars/.cd, y dir = both, y explicit]\n\
                    coordinates{(0, 0) +- (0.0, 1.0)\n\
                    (1, 1) +- (0.0, 2.0)};";
    assert_eq!(tex, expected);
}

#[test]
fn coordinate_count_matches_series_length() {
    let x: Vec<f64> = (0..25).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let tex = generate_plot_line(&x, &y, None, None).unwrap();

    assert_eq!(tex.matches('(').count(), 25);
    assert!(tex.ends_with("};"));
}

#[test]
fn multiline_options_pass_through() {
    // pgfplots options are free to span lines; they must survive untouched
    let options = "color=red,\nsolid,\nmark=square,\nmark options={solid}";
    let tex = generate_plot_line(&[1.0], &[1.0], None, Some(options)).unwrap();
    assert!(tex.starts_with(&format!("\\addplot[{}]\n", options)));
}

#[test]
fn length_mismatch_never_yields_a_string() {
    let result = generate_plot_line(&[0.0, 1.0, 2.0], &[0.0, 1.0], None, None);
    assert_eq!(
        result,
        Err(PlotLineError::LengthMismatch { x_len: 3, y_len: 2 })
    );

    let result = generate_plot_line(&[0.0, 1.0], &[0.0, 1.0], Some(&[1.0, 2.0, 3.0]), None);
    assert_eq!(
        result,
        Err(PlotLineError::ErrorLengthMismatch {
            expected: 2,
            got: 3
        })
    );
}

#[test]
fn builder_round_trips_through_json() {
    let line = PlotLine::new(vec![0.0, 1.0], vec![0.0, 1.0])
        .with_errors(vec![0.5, 0.5])
        .with_options("mark=o");

    let json = serde_json::to_string(&line).unwrap();
    let restored: PlotLine = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, line);
    assert_eq!(restored.render().unwrap(), line.render().unwrap());
}

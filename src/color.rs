extern crate termcolor;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

fn paint(stdout: &mut StandardStream, spec: &ColorSpec) {
    stdout.set_color(spec).expect("Error: can't set output color");
}
/// Intense foreground, used for status labels.
pub fn set_fg(stdout: &mut StandardStream, color: Color) {
    paint(stdout, ColorSpec::new().set_fg(Some(color)).set_intense(true));
}
pub fn set_bold(stdout: &mut StandardStream, color: Color) {
    paint(stdout, ColorSpec::new().set_fg(Some(color)).set_bold(true));
}
pub fn reset_fg(stdout: &mut StandardStream) {
    paint(stdout, &ColorSpec::new());
}

/// `   Label: message`, with the label right-aligned and colored.
macro_rules! write_color {
    ($dest:expr, $color:expr, $typ:expr, $($arg:tt)*) => {{
        $crate::color::set_fg($dest, $color);
        write!($dest, "{:>8}: ", $typ);
        $crate::color::reset_fg($dest);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}
macro_rules! write_error {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $typ, $($arg)*)
    };
}
macro_rules! write_info {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $typ, $($arg)*)
    };
}
macro_rules! write_ok {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Green, $typ, $($arg)*)
    };
}
macro_rules! write_progress {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Cyan, $typ, $($arg)*)
    };
}

/// Text in bold `color`, e.g. a verdict or a section heading.
macro_rules! write_bold {
    ($dest:expr, $color:expr, $($arg:tt)*) => {{
        $crate::color::set_bold($dest, $color);
        write!($dest, $($arg)*);
        $dest.reset();
    }};
}

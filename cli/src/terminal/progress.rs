use indicatif::{ProgressBar, ProgressStyle};

/// A bare percentage readout driven by the scan's progress callback; cleared
/// once the phase ends.
pub fn percent_bar(msg: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{msg} {pos}%").unwrap();
    bar.set_style(style);
    bar.set_message(msg);
    bar
}

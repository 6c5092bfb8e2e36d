//! Command-line front end

mod ui;

pub use ui::{read_input, render_analysis, render_insertion};

//! Box Shadow Generator entry point

use zoon::*;

mod app;
mod clipboard;
mod connection;
mod controls;
mod dataflow;
mod surface;

pub fn main() {
    zoon::println!("Starting Box Shadow Generator");
    let app = app::ShadowGeneratorApp::new();
    start_app("app", move || app.root());
}

//! Camera smoke harness.
//!
//! Opens a viewer window and flies the camera with the default
//! bindings, logging the pose once a second. Rendering is supplied by
//! embedding applications; this binary exists to exercise the input
//! pipeline end to end.

use std::path::Path;
use std::time::{Duration, Instant};

use flycam::options::Options;
use flycam::Viewer;

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(preset) => match Options::load(Path::new(&preset)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut last_report = Instant::now();
    let result = Viewer::builder().with_options(options).build().run(
        move |frame| {
            if last_report.elapsed() >= Duration::from_secs(1) {
                last_report = Instant::now();
                let [x, y, z] = frame.uniform.position;
                log::info!(
                    "eye ({x:.2}, {y:.2}, {z:.2}) fovy {:.1} at {:.0} fps",
                    frame.uniform.fovy,
                    frame.fps
                );
            }
        },
    );

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

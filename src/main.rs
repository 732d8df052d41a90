//! Binary entry point for the facecube viewer.

use std::path::Path;

use facecube::{options::Options, Viewer};

fn main() {
    env_logger::init();

    let mut reduce_motion = false;
    let mut preset = None;
    for arg in std::env::args().skip(1) {
        if arg == "--reduce-motion" {
            reduce_motion = true;
        } else {
            preset = Some(arg);
        }
    }

    let mut options = match preset {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    options.motion.reduce_motion |= reduce_motion;

    if let Err(e) = Viewer::builder()
        .with_options(options)
        .with_title("FaceCube")
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}

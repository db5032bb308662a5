//! Print the controller state every time it changes. Linux only.
//!
//! ```text
//! RUST_LOG=debug cargo run --example poll -- [config.toml]
//! ```

#[cfg(target_os = "linux")]
use xb360ctrl::{Controller, ControllerConfig, Error};

#[cfg(target_os = "linux")]
fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(path).expect("load config"),
        None => ControllerConfig::default(),
    };

    let mut ctl = Controller::from_config(&config).expect("open joystick");
    println!("Reading {} (deadzone {})", config.device.display(), config.deadzone);

    loop {
        let before = *ctl.state();
        match ctl.poll() {
            Ok(event) => {
                if *ctl.state() != before {
                    let s = ctl.state();
                    let pressed: Vec<_> = s.pressed().map(|b| b.name()).collect();
                    println!(
                        "t={:>8} L=({:>6},{:>6}) R=({:>6},{:>6}) LT={:>6} RT={:>6} D=({:>2},{:>2}) {:?}",
                        event.time,
                        s.l_stick_x,
                        s.l_stick_y,
                        s.r_stick_x,
                        s.r_stick_y,
                        s.l_trigger,
                        s.r_trigger,
                        s.d_pad_x,
                        s.d_pad_y,
                        pressed
                    );
                }
            }
            Err(Error::Disconnected) => {
                println!("Controller disconnected");
                break;
            }
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("this demo reads /dev/input/js* and only runs on Linux");
}

//! Read raw joystick events and print their 8-byte wire encoding. Linux only.

#[cfg(target_os = "linux")]
use xb360ctrl::backends::joystick::{JoystickDevice, DEFAULT_DEVICE};
#[cfg(target_os = "linux")]
use xb360ctrl::{codec, EventSource};

#[cfg(target_os = "linux")]
fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    let mut dev = JoystickDevice::open(&path).expect("open joystick");

    while let Ok(event) = dev.next_event() {
        let bytes = codec::encode(&event);
        let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
        println!("{} {:?}", hex.join(" "), event);
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("this demo reads /dev/input/js* and only runs on Linux");
}

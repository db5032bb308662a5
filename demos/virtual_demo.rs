use xb360ctrl::backends::virtual_input::VirtualSource;
use xb360ctrl::{Controller, LogObserver};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // Create a virtual source with a custom name
    let mut source = VirtualSource::new("virtual:demo");

    // Inject some sample input
    source.move_axis(0, 150); // inside the deadzone, dropped
    source.move_axis(0, 12_000);
    source.move_axis(4, 10); // RStickX is never deadzoned
    source.press_button(0);
    source.press_button(7);
    source.release_button(0);

    let mut ctl = Controller::new(source);
    ctl.add_observer(LogObserver::new());
    let (applied, _) = ctl.drain();

    let snap = ctl.snapshot();
    println!("(Virtual) applied {applied} events");
    println!("{}", snap.to_json().expect("serialize snapshot"));
}

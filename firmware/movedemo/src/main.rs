#![no_std]
#![no_main]

mod machine;
mod uno;

use machine::Machine;
use panic_halt as _;

#[arduino_hal::entry]
fn main() -> ! {
    let mut machine = Machine::new();
    machine.power_up();
    loop {
        machine.run_script();
    }
}

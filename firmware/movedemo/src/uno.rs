use arduino_hal::{
    hal::port::{Dynamic, PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin,
    },
    Usart,
};

pub type UnoSerial = Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;

/// An output pin with its pin number erased, so that several can share an
/// array.
pub type AnyOutput = Pin<Output, Dynamic>;

//! Protocol tests against a recording interface.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, PinState};
use embedded_hal::spi::{self, Operation, SpiDevice};
use embedded_hal_mock::eh1::delay::NoopDelay;

use epd5in65f::{
    BUFFER_SIZE, Color, Config, Display, DisplayInterface, Error, Interface, InterfaceError,
    PanelState,
};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Command(u8),
    Data(Vec<u8>),
    Reset,
}

/// Records writes; BUSY always reads the level the driver is waiting for.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    busy: Vec<PinState>,
}

impl Recorder {
    fn with_busy(busy: &[PinState]) -> Self {
        Recorder {
            events: Vec::new(),
            busy: busy.iter().rev().copied().collect(),
        }
    }

    fn data_bytes(&self) -> usize {
        self.events
            .iter()
            .map(|e| match e {
                Event::Data(d) => d.len(),
                _ => 0,
            })
            .sum()
    }
}

impl DisplayInterface for Recorder {
    type Error = Infallible;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.events.push(Event::Data(data.to_vec()));
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.events.push(Event::Reset);
        Ok(())
    }

    fn read_busy(&mut self) -> Result<PinState, Self::Error> {
        Ok(self.busy.pop().unwrap_or(PinState::High))
    }
}

const CYCLE_BUSY: [PinState; 4] = [PinState::High, PinState::High, PinState::High, PinState::Low];

#[test]
fn fill_streams_a_full_frame_in_chunks() {
    let mut display = Display::new(Recorder::default(), Config::default());

    display.fill(Color::Blue).unwrap();

    let recorder = display.release();
    assert_eq!(recorder.data_bytes(), BUFFER_SIZE);
    assert!(recorder.events.iter().all(|e| match e {
        Event::Data(d) => d.iter().all(|b| *b == 0x33),
        _ => false,
    }));
}

#[test]
fn show_runs_begin_transfer_end() {
    let frame = vec![Color::pack(Color::Red, Color::Yellow); 8];
    let mut display = Display::new(Recorder::with_busy(&CYCLE_BUSY), Config::default());

    display.show(&frame, &mut NoopDelay::new()).unwrap();
    assert_eq!(display.state(), PanelState::Asleep);

    let events = display.release().events;
    assert_eq!(events[0], Event::Reset);
    let data_start = events
        .iter()
        .position(|e| *e == Event::Command(0x10))
        .unwrap();
    assert_eq!(events[data_start + 1], Event::Data(vec![0x45; 8]));
    assert_eq!(
        events[data_start + 2..],
        [
            Event::Command(0x04),
            Event::Command(0x12),
            Event::Command(0x02),
            Event::Command(0x07),
            Event::Data(vec![0xA5]),
        ]
    );
}

#[test]
fn end_waits_for_low_only_after_power_off() {
    // BUSY stays high: the first two waits pass, POWER_OFF would block.
    let config = epd5in65f::Builder::new()
        .busy_timeout_ms(Some(3))
        .build()
        .unwrap();
    let mut display = Display::new(Recorder::default(), config);

    let result = display.end(&mut NoopDelay::new());

    assert!(matches!(
        result,
        Err(Error::BusyTimeout {
            level: PinState::Low,
            waited_ms: 3
        })
    ));
    assert_eq!(
        display.release().events,
        [Event::Command(0x04), Event::Command(0x12), Event::Command(0x02)]
    );
}

/// SPI device that accepts everything.
struct NullSpi;

impl spi::ErrorType for NullSpi {
    type Error = Infallible;
}

impl SpiDevice for NullSpi {
    fn transaction(&mut self, _operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Pin whose every operation either succeeds or fails.
struct FlakyPin {
    fail: bool,
}

impl FlakyPin {
    fn result(&self) -> Result<(), ErrorKind> {
        if self.fail { Err(ErrorKind::Other) } else { Ok(()) }
    }
}

impl digital::ErrorType for FlakyPin {
    type Error = ErrorKind;
}

impl digital::OutputPin for FlakyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.result()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.result()
    }
}

impl digital::InputPin for FlakyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.result().map(|()| true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.result().map(|()| false)
    }
}

fn pin(fail: bool) -> FlakyPin {
    FlakyPin { fail }
}

#[test]
fn construction_fails_when_reset_pin_fails() {
    let result = Interface::new(NullSpi, pin(false), pin(true), pin(false));
    assert!(matches!(result, Err(InterfaceError::Pin(ErrorKind::Other))));
}

#[test]
fn dc_failure_propagates_from_transfer() {
    let interface = Interface::new(NullSpi, pin(true), pin(false), pin(false)).unwrap();
    let mut display = Display::new(interface, Config::default());

    let result = display.transfer(&[0x11]);

    assert!(matches!(
        result,
        Err(Error::Interface(InterfaceError::Pin(ErrorKind::Other)))
    ));
}

#[test]
fn busy_pin_failure_aborts_begin() {
    let interface = Interface::new(NullSpi, pin(false), pin(false), pin(true)).unwrap();
    let mut display = Display::new(interface, Config::default());

    let result = display.begin(&mut NoopDelay::new());

    assert!(matches!(
        result,
        Err(Error::Interface(InterfaceError::Pin(ErrorKind::Other)))
    ));
    assert_eq!(display.state(), PanelState::Uninitialized);
}

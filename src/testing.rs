//! Recording transport for unit tests

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{REGISTER_COUNT, SEG_ADDR, WRITE_INC, WRITE_LOC};
use crate::interface::{BitOrder, Transport};

/// One call made on the transport
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    StrobeLow,
    StrobeHigh,
    Out(u8),
    In,
    DataInput,
    DataOutput,
}

/// Transport that records every call and simulates the chip's registers
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub events: Vec<Event>,
    /// Register contents as the chip would hold them
    pub ram: [u8; REGISTER_COUNT as usize],
    reads: VecDeque<u8>,
    auto_increment: bool,
    frame: Vec<u8>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes returned by successive `shift_in` calls
    pub fn push_reads(&mut self, bytes: &[u8]) {
        self.reads.extend(bytes.iter().copied());
    }

    /// Bytes written inside each strobe pulse, in order
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in &self.events {
            match event {
                Event::StrobeLow => current = Some(Vec::new()),
                Event::StrobeHigh => frames.extend(current.take()),
                Event::Out(byte) => {
                    if let Some(frame) = current.as_mut() {
                        frame.push(*byte);
                    }
                }
                _ => {}
            }
        }
        frames
    }

    /// `(address, value)` of every fixed-address register write
    pub fn register_writes(&self) -> Vec<(u8, u8)> {
        let frames = self.frames();
        frames
            .windows(2)
            .filter(|pair| pair[0].as_slice() == [WRITE_LOC] && pair[1].len() == 2)
            .map(|pair| (pair[1][0], pair[1][1]))
            .collect()
    }

    /// Segment bytes of digits 0..8
    pub fn digits(&self) -> [u8; 8] {
        let mut digits = [0u8; 8];
        for (position, digit) in digits.iter_mut().enumerate() {
            *digit = self.ram[position * 2];
        }
        digits
    }

    fn apply_frame(&mut self) {
        let frame = core::mem::take(&mut self.frame);
        match frame.as_slice() {
            [WRITE_INC] => self.auto_increment = true,
            [WRITE_LOC] => self.auto_increment = false,
            [address, values @ ..] if *address >= SEG_ADDR && !values.is_empty() => {
                let start = (address - SEG_ADDR) as usize;
                let count = if self.auto_increment { values.len() } else { 1 };
                for (offset, value) in values.iter().take(count).enumerate() {
                    if let Some(slot) = self.ram.get_mut(start + offset) {
                        *slot = *value;
                    }
                }
            }
            _ => {}
        }
    }
}

impl Transport for RecordingTransport {
    type Error = core::convert::Infallible;

    fn strobe_low(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::StrobeLow);
        self.frame.clear();
        Ok(())
    }

    fn strobe_high(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::StrobeHigh);
        self.apply_frame();
        Ok(())
    }

    fn shift_out(&mut self, _order: BitOrder, byte: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Out(byte));
        self.frame.push(byte);
        Ok(())
    }

    fn shift_in(&mut self, _order: BitOrder) -> Result<u8, Self::Error> {
        self.events.push(Event::In);
        Ok(self.reads.pop_front().unwrap_or(0))
    }

    fn data_input(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::DataInput);
        Ok(())
    }

    fn data_output(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::DataOutput);
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

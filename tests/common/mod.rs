//! Shared frame builders and test doubles
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rtp_live_monitor::capture::{FrameSource, ReadOutcome};
use rtp_live_monitor::error::{CaptureError, ScreenError};
use rtp_live_monitor::ui::{Emphasis, Key, Screen};

pub const HOST: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 5);
pub const PEER: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 9);

/// Ethernet/IPv4/UDP frame builder
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    ethertype: u16,
    protocol: u8,
    source: Ipv4Addr,
    destination: Ipv4Addr,
    source_port: u16,
    destination_port: u16,
    payload: Vec<u8>,
}

impl FrameBuilder {
    /// RTP-looking datagram between two ports inside the default window
    pub fn rtp(source: Ipv4Addr, destination: Ipv4Addr) -> Self {
        let mut payload = vec![0u8; 172];
        payload[0] = 0x80;
        payload[1] = 0x00;
        Self {
            ethertype: 0x0800,
            protocol: 17,
            source,
            destination,
            source_port: 30000,
            destination_port: 30002,
            payload,
        }
    }

    pub fn ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn ports(mut self, source_port: u16, destination_port: u16) -> Self {
        self.source_port = source_port;
        self.destination_port = destination_port;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let udp_len = 8 + self.payload.len();
        let mut frame = Vec::with_capacity(14 + 20 + udp_len);

        frame.extend_from_slice(&[0x02, 0, 0, 0, 0, 0x01]);
        frame.extend_from_slice(&[0x02, 0, 0, 0, 0, 0x02]);
        frame.extend_from_slice(&self.ethertype.to_be_bytes());

        frame.push(0x45);
        frame.push(0);
        frame.extend_from_slice(&((20 + udp_len) as u16).to_be_bytes());
        frame.extend_from_slice(&[0, 0, 0x40, 0]);
        frame.push(64);
        frame.push(self.protocol);
        frame.extend_from_slice(&[0, 0]);
        frame.extend_from_slice(&self.source.octets());
        frame.extend_from_slice(&self.destination.octets());

        frame.extend_from_slice(&self.source_port.to_be_bytes());
        frame.extend_from_slice(&self.destination_port.to_be_bytes());
        frame.extend_from_slice(&(udp_len as u16).to_be_bytes());
        frame.extend_from_slice(&[0, 0]);
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// One scripted read result
pub enum Step {
    Frame(Vec<u8>),
    Timeout,
    Error,
}

/// Frame source replaying a script, then timing out forever
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    current: Vec<u8>,
    closed: Arc<AtomicBool>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        let source = Self {
            steps: steps.into_iter().collect(),
            current: Vec::new(),
            closed: closed.clone(),
        };
        (source, closed)
    }
}

impl FrameSource for ScriptedSource {
    fn interface(&self) -> &str {
        "test0"
    }

    fn read_frame(&mut self) -> Result<ReadOutcome<'_>, CaptureError> {
        match self.steps.pop_front() {
            Some(Step::Frame(frame)) => {
                self.current = frame;
                Ok(ReadOutcome::Frame(&self.current))
            }
            Some(Step::Error) => Err(CaptureError::Read(io::Error::new(
                io::ErrorKind::Other,
                "network is down",
            ))),
            Some(Step::Timeout) | None => Ok(ReadOutcome::Timeout),
        }
    }
}

impl Drop for ScriptedSource {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Screen that records writes, replays scripted keys and then hands out a
/// final key once a number of polls is reached
#[derive(Default)]
pub struct FakeScreen {
    pub lines: Vec<(u16, String)>,
    pub refreshes: usize,
    pub polls: usize,
    keys: VecDeque<Key>,
    quit_after: Option<(usize, Key)>,
}

impl FakeScreen {
    pub fn quit_after(polls: usize, key: Key) -> Self {
        Self {
            quit_after: Some((polls, key)),
            ..Default::default()
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    pub fn line(&self, row: u16) -> Option<&str> {
        self.lines
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, text)| text.as_str())
    }
}

impl Screen for FakeScreen {
    fn write(&mut self, row: u16, _col: u16, text: &str, _emphasis: Emphasis) -> Result<(), ScreenError> {
        self.lines.push((row, text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ScreenError> {
        self.lines.clear();
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), ScreenError> {
        self.refreshes += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>, ScreenError> {
        self.polls += 1;
        if let Some(key) = self.keys.pop_front() {
            return Ok(Some(key));
        }
        match self.quit_after {
            Some((after, key)) if self.polls >= after => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

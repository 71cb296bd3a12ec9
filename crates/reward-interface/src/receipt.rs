//! Operation results and event serialization.

use alloc::vec::Vec;
use bytemuck::Pod;

/// Result of a successful state-mutating operation.
///
/// Carries the operation's return value together with the events it emitted,
/// in emission order. Observers consume `events`; nothing is pushed to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt<T, E> {
    /// Value returned by the operation
    pub value: T,
    /// Events emitted by the operation, in order
    pub events: Vec<E>,
}

impl<T, E> Receipt<T, E> {
    /// Receipt with a single event.
    pub fn new(value: T, event: E) -> Self {
        let mut events = Vec::with_capacity(1);
        events.push(event);
        Self { value, events }
    }

    /// Receipt with no events.
    pub fn silent(value: T) -> Self {
        Self {
            value,
            events: Vec::new(),
        }
    }
}

/// Fixed-layout event with a type discriminator.
///
/// Serialized form: `[discriminator (8 bytes LE)][Pod struct bytes]`, the same
/// framing indexers use to tell event types apart.
pub trait EventBytes: Pod {
    /// Event type discriminator
    const DISCRIMINATOR: u64;

    /// Serialize the event with its discriminator prefix.
    fn to_event_bytes(&self) -> Vec<u8> {
        let body = bytemuck::bytes_of(self);
        let mut data = Vec::with_capacity(8 + body.len());
        data.extend_from_slice(&Self::DISCRIMINATOR.to_le_bytes());
        data.extend_from_slice(body);
        data
    }
}

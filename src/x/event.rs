//! Data types for messages sent to the X server
use crate::Xid;
use bitflags::bitflags;

bitflags! {
    /// The event masks a [ClientMessage] can be delivered with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClientEventMask: u32 {
        /// Delivered to clients selecting structure changes of the destination's children
        const SUBSTRUCTURE_NOTIFY   = 0b01;
        /// Delivered to the client redirecting structure changes (the window manager)
        const SUBSTRUCTURE_REDIRECT = 0b10;
    }
}

impl ClientEventMask {
    /// The mask required by EWMH for client messages sent to the root window.
    pub fn root_request() -> Self {
        Self::SUBSTRUCTURE_NOTIFY | Self::SUBSTRUCTURE_REDIRECT
    }
}

/// The `_NET_WM_STATE_ADD` action for a `_NET_WM_STATE` client message.
pub const NET_WM_STATE_ADD: u32 = 1;

/// A client message (format 32) to be sent to a destination window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientMessage {
    /// The window the message is about
    pub id: Xid,
    /// The window the message is delivered to
    pub destination: Xid,
    /// The event mask to deliver the message with
    pub mask: ClientEventMask,
    /// The message type
    pub dtype: Xid,
    /// The message data
    pub data: [u32; 5],
}

impl ClientMessage {
    /// Construct a new [ClientMessage] from component parts.
    pub fn new(
        id: Xid,
        destination: Xid,
        mask: ClientEventMask,
        dtype: Xid,
        data: [u32; 5],
    ) -> Self {
        Self {
            id,
            destination,
            mask,
            dtype,
            data,
        }
    }
}

//! xrats: small "rat" windows scurrying around an X11 desktop.
//!
//! Every frame the full window tree is walked, windows are classified as either rats (matched by
//! their `WM_CLASS`) or obscuring application windows (matched by `_NET_WM_WINDOW_TYPE`), and each
//! rat is moved along a bouncing trajectory that keeps it inside the visible monitor area. Newly
//! discovered rats are "adopted": converted into undecorated, always-below windows that are
//! hidden from taskbars and pagers so that they appear to run around underneath everything else.
//!
//! The X server is accessed through the [XConn][x::XConn] trait. [x11rb::RustConn] is the real
//! implementation; tests use [MockXConn][x::mock::MockXConn].
#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::style,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub mod core;
pub mod pure;
pub mod x;
pub mod x11rb;

#[doc(inline)]
pub use crate::core::{Config, RatManager};

/// An X11 ID for a given resource
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Xid(pub(crate) u32);

impl std::fmt::Display for Xid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

impl Deref for Xid {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for Xid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Xid> for u32 {
    fn from(id: Xid) -> Self {
        id.0
    }
}

/// Error variants from the core of xrats and its X backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to establish a connection to the X server
    #[error(transparent)]
    Connect(#[from] ::x11rb::errors::ConnectError),

    /// The X11 connection broke
    #[error(transparent)]
    Connection(#[from] ::x11rb::errors::ConnectionError),

    /// Could not get an X11 request reply
    #[error(transparent)]
    Reply(#[from] ::x11rb::errors::ReplyError),

    /// Property data returned by the X server was not in the expected format
    #[error("invalid data for the '{prop}' property on window {id}: {reason}")]
    InvalidPropertyData {
        /// The window the property was read from
        id: Xid,
        /// The name of the property
        prop: String,
        /// What was wrong with the data
        reason: String,
    },

    /// The screen the connection was opened for does not exist
    #[error("the X server does not have a screen with index {0}")]
    MissingScreen(usize),

    /// A generic error type for use in user code when needing to construct
    /// a simple [Error].
    #[error("Unhandled error: {0}")]
    Raw(String),
}

/// A Result where the error type is an xrats [Error]
pub type Result<T> = std::result::Result<T, Error>;

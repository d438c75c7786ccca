//! Logic for interacting with the X server
use crate::{
    pure::geometry::{Rect, Viewports},
    x::{
        atom::{Atom, AtomTable},
        event::{ClientEventMask, ClientMessage, NET_WM_STATE_ADD},
    },
    Result, Xid,
};
use tracing::{debug, trace, warn};

pub mod atom;
pub mod event;
pub mod mock;
pub mod property;
pub mod query;

pub use atom::OBSCURING_WINDOW_TYPES;
pub use property::{MapState, Prop, WindowAttributes, WindowClass};
pub use query::Query;

/// On screen configuration options for X clients
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientConfig {
    /// Absolute size and position on the screen as a [Rect]
    Position(Rect),
}

/// A handle on a running X11 connection that we can use for issuing X requests.
///
/// XConn is intended as an abstraction layer to allow for communication with the underlying
/// display system (assumed to be X) using whatever mechanism the implementer wishes. All requests
/// that modify state are treated as fire and forget: they may be buffered until [XConn::flush] is
/// called and no acknowledgement is awaited.
pub trait XConn {
    /// The ID of the root window.
    fn root(&self) -> Xid;
    /// Ask the X server for the dimensions of each currently available monitor.
    fn screen_details(&self) -> Result<Vec<Rect>>;
    /// Flush any pending requests to the X server.
    fn flush(&self) -> Result<()>;

    /// Look up the [Xid] of a given atom name. If it is not currently interned, intern it.
    fn intern_atom(&self, atom: &str) -> Result<Xid>;

    /// Look up the current dimensions and position of a given window relative to its parent.
    fn client_geometry(&self, client: Xid) -> Result<Rect>;
    /// Request the [WindowAttributes] for a given window from the X server.
    fn get_window_attributes(&self, client: Xid) -> Result<WindowAttributes>;
    /// Ask the X server for the direct children of a window in stacking order.
    fn query_children(&self, client: Xid) -> Result<Vec<Xid>>;

    /// Look up a specific property on a given window.
    fn get_prop(&self, client: Xid, prop: Xid) -> Result<Option<Prop>>;
    /// Set a specific property on a given window.
    fn set_prop(&self, client: Xid, prop: Xid, val: Prop) -> Result<()>;

    /// Map the given window to the screen with its current geometry, making it visible.
    fn map(&self, client: Xid) -> Result<()>;
    /// Unmap the given window from the screen, hiding it.
    fn unmap(&self, client: Xid) -> Result<()>;
    /// Set the [ClientConfig] for a given window.
    fn set_client_config(&self, client: Xid, data: &[ClientConfig]) -> Result<()>;
    /// Send a [ClientMessage] to its destination window.
    fn send_client_message(&self, msg: ClientMessage) -> Result<()>;
}

/// Extended functionality for [XConn] impls: the window manager protocol used to move and
/// adopt rat windows.
pub trait XConnExt: XConn + Sized {
    /// Update the geometry of a given window based on the given [Rect].
    fn position_client(&self, client: Xid, r: Rect) -> Result<()> {
        trace!(%client, ?r, "positioning client");
        self.set_client_config(client, &[ClientConfig::Position(r)])
    }

    /// Replace the `_NET_WM_WINDOW_TYPE` of a window.
    fn set_window_type(&self, client: Xid, window_type: Xid, atoms: &AtomTable) -> Result<()> {
        let prop = atoms.known(Atom::NetWmWindowType);

        self.set_prop(client, prop, Prop::Atom(vec![window_type]))
    }

    /// Ask the window manager to add up to two `_NET_WM_STATE` atoms to a window.
    ///
    /// The request is sent to the root window so that it is seen by window managers that are
    /// redirecting substructure events.
    fn add_wm_state(
        &self,
        client: Xid,
        states: (Xid, Option<Xid>),
        atoms: &AtomTable,
    ) -> Result<()> {
        let (first, second) = states;
        let data = [
            NET_WM_STATE_ADD,
            *first,
            second.map(|s| *s).unwrap_or(0),
            0,
            0,
        ];

        self.send_client_message(ClientMessage::new(
            client,
            self.root(),
            ClientEventMask::root_request(),
            atoms.known(Atom::NetWmState),
            data,
        ))
    }

    /// Turn a window into an undecorated, always-below window that is hidden from pagers and
    /// taskbars by setting its window type to `window_type` and requesting the required
    /// `_NET_WM_STATE` changes from the window manager.
    ///
    /// Window managers typically only check the window type when a window is mapped so the
    /// window is unmapped and then mapped again after its type has been changed.
    fn adopt_rat(&self, client: Xid, window_type: Xid, atoms: &AtomTable) -> Result<()> {
        trace!(%client, "adopting rat");
        self.set_window_type(client, window_type, atoms)?;
        self.unmap(client)?;
        self.map(client)?;

        let skip_pager = atoms.known(Atom::NetWmStateSkipPager);
        let skip_taskbar = atoms.known(Atom::NetWmStateSkipTaskbar);
        let below = atoms.known(Atom::NetWmStateBelow);

        self.add_wm_state(client, (skip_pager, Some(skip_taskbar)), atoms)?;
        self.add_wm_state(client, (below, None), atoms)
    }

    /// Request the title of a given window following ICCCM/EWMH standards.
    fn window_title(&self, id: Xid, atoms: &AtomTable) -> Result<String> {
        match query::str_prop(atoms.known(Atom::WmName), id, self) {
            Ok(Some(mut strs)) => Ok(strs.remove(0)),
            _ => match query::str_prop(atoms.known(Atom::NetWmName), id, self)? {
                Some(mut strs) => Ok(strs.remove(0)),
                None => Ok("".to_owned()),
            },
        }
    }

    /// Ask the X server for the current monitor layout.
    ///
    /// If monitor details are unavailable this falls back to a single viewport covering
    /// the full root window.
    fn viewports(&self) -> Result<Viewports> {
        match self.screen_details() {
            Ok(rects) if !rects.is_empty() => {
                debug!(?rects, "using reported monitor layout");
                return Ok(Viewports::new(rects));
            }
            Ok(_) => warn!("no monitors reported: falling back to full screen"),
            Err(e) => warn!(%e, "unable to query monitors: falling back to full screen"),
        }

        let r = self.client_geometry(self.root())?;

        Ok(Viewports::new(vec![r.with_position((0, 0))]))
    }

    /// Read the first `_NET_WM_WINDOW_TYPE` of a window if it has one set.
    fn window_type(&self, id: Xid, atoms: &AtomTable) -> Result<Option<Xid>> {
        query::atom_prop(atoms.known(Atom::NetWmWindowType), id, self)
    }
}

// Auto impl XConnExt for all XConn impls
impl<T> XConnExt for T where T: XConn {}

//! An [XConn] implementation using x11rb as a back end.
//!
//! Monitor details are read from the active CRTCs using the RandR extension.
use crate::{
    pure::geometry::Rect,
    x::{
        event::ClientMessage,
        property::{Prop, WindowAttributes},
        ClientConfig, XConn,
    },
    Error, Result, Xid,
};
use ::x11rb::{
    connection::Connection,
    protocol::{
        randr::ConnectionExt as _,
        xproto::{AtomEnum, ClientMessageEvent, ConfigureWindowAux, ConnectionExt as _, PropMode},
        Event,
    },
    rust_connection::RustConnection,
    wrapper::ConnectionExt as _,
};
use tracing::{debug, trace};

mod conversions;

use conversions::{to_event_mask, to_prop, to_rect, to_window_attributes};

/// A pure rust based connection to the X server using a [RustConnection].
pub type RustConn = Conn<RustConnection>;

impl RustConn {
    /// Connect to the X server using the `DISPLAY` environment variable.
    pub fn new() -> Result<Self> {
        let (conn, screen) = ::x11rb::connect(None)?;

        Self::new_for_connection(conn, screen)
    }
}

/// Handles communication with an X server via the x11rb crate.
#[derive(Debug)]
pub struct Conn<C: Connection> {
    conn: C,
    root: Xid,
    utf8_string: u32,
}

impl<C> Conn<C>
where
    C: Connection,
{
    /// Construct an X11rbConnection backed by the given x11rb [Connection] for the given screen.
    pub fn new_for_connection(conn: C, screen: usize) -> Result<Self> {
        let root = match conn.setup().roots.get(screen) {
            Some(s) => Xid(s.root),
            None => return Err(Error::MissingScreen(screen)),
        };
        let utf8_string = conn.intern_atom(false, b"UTF8_STRING")?.reply()?.atom;
        debug!(%root, "connected to X server");

        Ok(Self {
            conn,
            root,
            utf8_string,
        })
    }

    // Requests are never checked individually so any errors they generate (for example from
    // a window being destroyed mid frame) end up in the event queue. Nothing else consumes
    // events so they are dropped here to stop the queue growing without bound.
    fn discard_pending_events(&self) -> Result<()> {
        while let Some(event) = self.conn.poll_for_event()? {
            match event {
                Event::Error(e) => trace!(?e, "discarding X error"),
                _ => trace!("discarding X event"),
            }
        }

        Ok(())
    }
}

impl<C> XConn for Conn<C>
where
    C: Connection,
{
    fn root(&self) -> Xid {
        self.root
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        let resources = self.conn.randr_get_screen_resources(*self.root)?.reply()?;

        // Send queries for all CRTCs before waiting on any of the replies
        let cookies = resources
            .crtcs
            .iter()
            .map(|c| self.conn.randr_get_crtc_info(*c, 0))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Disabled CRTCs are reported with a width of zero
        let screens = cookies
            .into_iter()
            .flat_map(|cookie| cookie.reply().ok())
            .filter(|reply| reply.width > 0)
            .map(|r| Rect::new(r.x as i32, r.y as i32, r.width as u32, r.height as u32))
            .collect();

        Ok(screens)
    }

    fn flush(&self) -> Result<()> {
        self.conn.flush()?;

        self.discard_pending_events()
    }

    fn intern_atom(&self, atom: &str) -> Result<Xid> {
        let reply = self.conn.intern_atom(false, atom.as_bytes())?.reply()?;

        Ok(Xid(reply.atom))
    }

    fn client_geometry(&self, client: Xid) -> Result<Rect> {
        let reply = self.conn.get_geometry(*client)?.reply()?;

        Ok(to_rect(&reply))
    }

    fn get_window_attributes(&self, client: Xid) -> Result<WindowAttributes> {
        let reply = self.conn.get_window_attributes(*client)?.reply()?;

        Ok(to_window_attributes(&reply))
    }

    fn query_children(&self, client: Xid) -> Result<Vec<Xid>> {
        let reply = self.conn.query_tree(*client)?.reply()?;

        Ok(reply.children.into_iter().map(Xid).collect())
    }

    fn get_prop(&self, client: Xid, prop: Xid) -> Result<Option<Prop>> {
        let reply = self
            .conn
            .get_property(false, *client, *prop, AtomEnum::ANY, 0, 1024)?
            .reply()?;

        to_prop(client, prop, self.utf8_string, reply)
    }

    fn set_prop(&self, client: Xid, prop: Xid, val: Prop) -> Result<()> {
        match val {
            Prop::Atom(ids) => {
                let data: Vec<u32> = ids.into_iter().map(u32::from).collect();
                self.conn.change_property32(
                    PropMode::REPLACE,
                    *client,
                    *prop,
                    AtomEnum::ATOM,
                    &data,
                )?;
            }

            Prop::UTF8String(strs) => {
                self.conn.change_property8(
                    PropMode::REPLACE,
                    *client,
                    *prop,
                    self.utf8_string,
                    strs.join("\0").as_bytes(),
                )?;
            }
        }

        Ok(())
    }

    fn map(&self, client: Xid) -> Result<()> {
        self.conn.map_window(*client)?;

        Ok(())
    }

    fn unmap(&self, client: Xid) -> Result<()> {
        self.conn.unmap_window(*client)?;

        Ok(())
    }

    fn set_client_config(&self, client: Xid, data: &[ClientConfig]) -> Result<()> {
        let mut aux = ConfigureWindowAux::new();

        for conf in data.iter() {
            aux = match conf {
                ClientConfig::Position(r) => aux.x(r.x).y(r.y).width(r.w).height(r.h),
            };
        }

        self.conn.configure_window(*client, &aux)?;

        Ok(())
    }

    fn send_client_message(&self, msg: ClientMessage) -> Result<()> {
        let event = ClientMessageEvent::new(32, *msg.id, *msg.dtype, msg.data);
        let mask = to_event_mask(msg.mask);

        self.conn.send_event(false, *msg.destination, mask, event)?;

        Ok(())
    }
}

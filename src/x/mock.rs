//! A mock implementation of XConn that is easier to implement for
//! use in tests.
use crate::{
    pure::geometry::Rect,
    x::{
        event::ClientMessage,
        property::{Prop, WindowAttributes},
        ClientConfig, XConn,
    },
    Result, Xid,
};

/// All methods on this trait that return a Result are unimplemented by
/// default unless an implementation is provided.
/// The `mock_root` method always returns id 0 and `mock_flush` by default is a no-op.
///
/// Any implementation of `MockXConn` will automatically implement `XConn` by forwarding on
/// calls to `$method` to `mock_$method`.
#[allow(unused_variables, missing_docs)]
pub trait MockXConn {
    fn mock_root(&self) -> Xid {
        Xid(0)
    }

    fn mock_screen_details(&self) -> Result<Vec<Rect>> {
        unimplemented!("mock_screen_details")
    }

    fn mock_flush(&self) -> Result<()> {
        Ok(())
    }

    fn mock_intern_atom(&self, atom: &str) -> Result<Xid> {
        unimplemented!("mock_intern_atom")
    }

    fn mock_client_geometry(&self, client: Xid) -> Result<Rect> {
        unimplemented!("mock_client_geometry")
    }

    fn mock_get_window_attributes(&self, client: Xid) -> Result<WindowAttributes> {
        unimplemented!("mock_get_window_attributes")
    }

    fn mock_query_children(&self, client: Xid) -> Result<Vec<Xid>> {
        unimplemented!("mock_query_children")
    }

    fn mock_get_prop(&self, client: Xid, prop: Xid) -> Result<Option<Prop>> {
        unimplemented!("mock_get_prop")
    }

    fn mock_set_prop(&self, client: Xid, prop: Xid, val: Prop) -> Result<()> {
        unimplemented!("mock_set_prop")
    }

    fn mock_map(&self, client: Xid) -> Result<()> {
        unimplemented!("mock_map")
    }

    fn mock_unmap(&self, client: Xid) -> Result<()> {
        unimplemented!("mock_unmap")
    }

    fn mock_set_client_config(&self, client: Xid, data: &[ClientConfig]) -> Result<()> {
        unimplemented!("mock_set_client_config")
    }

    fn mock_send_client_message(&self, msg: ClientMessage) -> Result<()> {
        unimplemented!("mock_send_client_message")
    }
}

impl<T> XConn for T
where
    T: MockXConn,
{
    fn root(&self) -> Xid {
        self.mock_root()
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        self.mock_screen_details()
    }

    fn flush(&self) -> Result<()> {
        self.mock_flush()
    }

    fn intern_atom(&self, atom: &str) -> Result<Xid> {
        self.mock_intern_atom(atom)
    }

    fn client_geometry(&self, client: Xid) -> Result<Rect> {
        self.mock_client_geometry(client)
    }

    fn get_window_attributes(&self, client: Xid) -> Result<WindowAttributes> {
        self.mock_get_window_attributes(client)
    }

    fn query_children(&self, client: Xid) -> Result<Vec<Xid>> {
        self.mock_query_children(client)
    }

    fn get_prop(&self, client: Xid, prop: Xid) -> Result<Option<Prop>> {
        self.mock_get_prop(client, prop)
    }

    fn set_prop(&self, client: Xid, prop: Xid, val: Prop) -> Result<()> {
        self.mock_set_prop(client, prop, val)
    }

    fn map(&self, client: Xid) -> Result<()> {
        self.mock_map(client)
    }

    fn unmap(&self, client: Xid) -> Result<()> {
        self.mock_unmap(client)
    }

    fn set_client_config(&self, client: Xid, data: &[ClientConfig]) -> Result<()> {
        self.mock_set_client_config(client, data)
    }

    fn send_client_message(&self, msg: ClientMessage) -> Result<()> {
        self.mock_send_client_message(msg)
    }
}

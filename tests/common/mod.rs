//! A fake X server desktop for driving the frame loop in tests
#![allow(dead_code)]
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};
use xrats::{
    pure::geometry::Rect,
    x::{
        atom::Atom,
        event::ClientMessage,
        mock::MockXConn,
        property::{MapState, Prop, WindowAttributes, WindowClass},
        ClientConfig,
    },
    Error, Result, Xid,
};

pub const ROOT: u32 = 1;
pub const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

/// Requests made by the code under test that change the state of the desktop.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    SetProp(u32, u32, Prop),
    Map(u32),
    Unmap(u32),
    Position(u32, Rect),
    Message(ClientMessage),
}

#[derive(Debug, Default)]
struct State {
    atoms: Vec<String>,
    geometry: HashMap<u32, Rect>,
    attrs: HashMap<u32, WindowAttributes>,
    children: HashMap<u32, Vec<u32>>,
    props: HashMap<(u32, u32), Prop>,
    failing: HashSet<(u32, u32)>,
    requests: Vec<Request>,
}

/// Windows positions are stored relative to their parent in the same way as a real X server.
#[derive(Debug)]
pub struct FakeDesktop {
    screens: Vec<Rect>,
    state: RefCell<State>,
}

impl FakeDesktop {
    pub fn new(screens: Vec<Rect>) -> Self {
        let d = Self {
            screens,
            state: RefCell::new(State::default()),
        };

        {
            let mut s = d.state.borrow_mut();
            s.geometry.insert(ROOT, SCREEN);
            s.attrs.insert(ROOT, viewable());
            s.children.insert(ROOT, vec![]);
        }

        d
    }

    pub fn single_screen() -> Self {
        Self::new(vec![SCREEN])
    }

    pub fn atom(&self, atom: Atom) -> u32 {
        intern(&mut self.state.borrow_mut(), atom.as_ref())
    }

    pub fn add_window(&self, parent: u32, id: u32, r: Rect, attrs: WindowAttributes) {
        let mut s = self.state.borrow_mut();
        s.geometry.insert(id, r);
        s.attrs.insert(id, attrs);
        s.children.insert(id, vec![]);
        s.children.entry(parent).or_default().push(id);
    }

    pub fn add_rat(&self, id: u32, r: Rect) {
        self.add_window(ROOT, id, r, viewable());
        self.set_class(id, &["xeyes", "XEyes"]);
    }

    pub fn add_typed(&self, id: u32, r: Rect, class: &str, ty: Atom) {
        self.add_window(ROOT, id, r, viewable());
        self.set_class(id, &[class]);
        let (prop, ty) = (self.atom(Atom::NetWmWindowType), self.atom(ty));
        self.state
            .borrow_mut()
            .props
            .insert((id, prop), Prop::Atom(vec![Xid::from(ty)]));
    }

    pub fn set_class(&self, id: u32, class: &[&str]) {
        let prop = self.atom(Atom::WmClass);
        self.state.borrow_mut().props.insert(
            (id, prop),
            Prop::UTF8String(class.iter().map(|s| s.to_string()).collect()),
        );
    }

    /// Make every read of `atom` on the given window fail.
    pub fn fail_prop(&self, id: u32, atom: Atom) {
        let prop = self.atom(atom);
        self.state.borrow_mut().failing.insert((id, prop));
    }

    /// Destroy a window and all of its children.
    pub fn destroy(&self, id: u32) {
        let mut s = self.state.borrow_mut();
        for cs in s.children.values_mut() {
            cs.retain(|&c| c != id);
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            s.geometry.remove(&id);
            s.attrs.remove(&id);
            if let Some(cs) = s.children.remove(&id) {
                stack.extend(cs);
            }
        }
    }

    pub fn geometry(&self, id: u32) -> Option<Rect> {
        self.state.borrow().geometry.get(&id).copied()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.borrow_mut().requests.clear();
    }

    pub fn positions_of(&self, id: u32) -> Vec<Rect> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Request::Position(i, r) if i == id => Some(r),
                _ => None,
            })
            .collect()
    }
}

pub fn viewable() -> WindowAttributes {
    WindowAttributes::new(MapState::Viewable, WindowClass::InputOutput)
}

fn intern(s: &mut State, name: &str) -> u32 {
    let ix = match s.atoms.iter().position(|a| a == name) {
        Some(ix) => ix,
        None => {
            s.atoms.push(name.to_owned());
            s.atoms.len() - 1
        }
    };

    1000 + ix as u32
}

fn missing(id: Xid) -> Error {
    Error::Raw(format!("BadWindow: {id}"))
}

impl MockXConn for FakeDesktop {
    fn mock_root(&self) -> Xid {
        Xid::from(ROOT)
    }

    fn mock_screen_details(&self) -> Result<Vec<Rect>> {
        Ok(self.screens.clone())
    }

    fn mock_intern_atom(&self, atom: &str) -> Result<Xid> {
        Ok(Xid::from(intern(&mut self.state.borrow_mut(), atom)))
    }

    fn mock_client_geometry(&self, client: Xid) -> Result<Rect> {
        self.geometry(*client).ok_or_else(|| missing(client))
    }

    fn mock_get_window_attributes(&self, client: Xid) -> Result<WindowAttributes> {
        let s = self.state.borrow();
        s.attrs.get(&*client).copied().ok_or_else(|| missing(client))
    }

    fn mock_query_children(&self, client: Xid) -> Result<Vec<Xid>> {
        let s = self.state.borrow();
        s.children
            .get(&*client)
            .map(|cs| cs.iter().map(|&c| Xid::from(c)).collect())
            .ok_or_else(|| missing(client))
    }

    fn mock_get_prop(&self, client: Xid, prop: Xid) -> Result<Option<Prop>> {
        let s = self.state.borrow();
        if s.failing.contains(&(*client, *prop)) {
            return Err(Error::Raw(format!("BadAtom: {prop} on {client}")));
        }

        Ok(s.props.get(&(*client, *prop)).cloned())
    }

    fn mock_set_prop(&self, client: Xid, prop: Xid, val: Prop) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.props.insert((*client, *prop), val.clone());
        s.requests.push(Request::SetProp(*client, *prop, val));

        Ok(())
    }

    fn mock_map(&self, client: Xid) -> Result<()> {
        self.state.borrow_mut().requests.push(Request::Map(*client));
        Ok(())
    }

    fn mock_unmap(&self, client: Xid) -> Result<()> {
        self.state.borrow_mut().requests.push(Request::Unmap(*client));
        Ok(())
    }

    // Positions are stored as given: only windows that are direct children of the root will
    // be seen in the right place on the next frame.
    fn mock_set_client_config(&self, client: Xid, data: &[ClientConfig]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        for c in data {
            let ClientConfig::Position(r) = c;
            s.geometry.insert(*client, *r);
            s.requests.push(Request::Position(*client, *r));
        }

        Ok(())
    }

    fn mock_send_client_message(&self, msg: ClientMessage) -> Result<()> {
        self.state.borrow_mut().requests.push(Request::Message(msg));
        Ok(())
    }
}

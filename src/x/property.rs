//! Data types for working with X window properties
use crate::Xid;

/// Known property types that should be returnable by [XConn][crate::x::XConn] impls when they
/// check window properties.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Prop {
    /// One or more X Atoms
    Atom(Vec<Xid>),
    /// Null separated string data (`STRING` or `UTF8_STRING`)
    UTF8String(Vec<String>),
}

/// The mapping states a window can be in
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MapState {
    /// The window is unmapped
    #[default]
    Unmapped,
    /// The window is mapped but an ancestor is not
    UnViewable,
    /// The window is currently viewable
    Viewable,
}

/// The input class for a window
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum WindowClass {
    /// Class is copied from parent window
    CopyFromParent,
    /// Window can be displayed
    #[default]
    InputOutput,
    /// Window can only be used for queries
    InputOnly,
}

/// The subset of X window attributes needed to decide whether or not a window is visible.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct WindowAttributes {
    /// The current mapping state of the window
    pub map_state: MapState,
    /// The input class of the window
    pub window_class: WindowClass,
}

impl WindowAttributes {
    /// Create a new instance from component parts
    pub fn new(map_state: MapState, window_class: WindowClass) -> Self {
        Self {
            map_state,
            window_class,
        }
    }

    /// Only drawable windows that are currently viewable are considered for classification.
    pub fn is_visible(&self) -> bool {
        self.window_class == WindowClass::InputOutput && self.map_state == MapState::Viewable
    }
}

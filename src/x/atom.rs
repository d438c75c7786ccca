//! Data types for working with X atoms
use crate::{x::XConn, Result, Xid};
use std::collections::HashMap;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// An internal representation of the X atoms used by xrats.
///
/// Atom names are shared between all X11 API libraries so this enum allows us to get a little bit
/// of type safety around their use. Every variant is interned once on startup as part of building
/// an [AtomTable] and from then on only the resolved [Xid]s are passed to the X server.
#[derive(AsRefStr, EnumString, EnumIter, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Atom {
    /// WM_CLASS
    #[strum(serialize = "WM_CLASS")]
    WmClass,
    /// WM_NAME
    #[strum(serialize = "WM_NAME")]
    WmName,
    /// _NET_WM_NAME
    #[strum(serialize = "_NET_WM_NAME")]
    NetWmName,
    /// _NET_WM_STATE
    #[strum(serialize = "_NET_WM_STATE")]
    NetWmState,
    /// _NET_WM_STATE_BELOW
    #[strum(serialize = "_NET_WM_STATE_BELOW")]
    NetWmStateBelow,
    /// _NET_WM_STATE_SKIP_PAGER
    #[strum(serialize = "_NET_WM_STATE_SKIP_PAGER")]
    NetWmStateSkipPager,
    /// _NET_WM_STATE_SKIP_TASKBAR
    #[strum(serialize = "_NET_WM_STATE_SKIP_TASKBAR")]
    NetWmStateSkipTaskbar,
    /// _NET_WM_WINDOW_TYPE
    #[strum(serialize = "_NET_WM_WINDOW_TYPE")]
    NetWmWindowType,

    // Window Types
    /// _NET_WM_WINDOW_TYPE_DIALOG
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_DIALOG")]
    NetWindowTypeDialog,
    /// _NET_WM_WINDOW_TYPE_NORMAL
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_NORMAL")]
    NetWindowTypeNormal,
    /// _NET_WM_WINDOW_TYPE_SPLASH
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_SPLASH")]
    NetWindowTypeSplash,
    /// _NET_WM_WINDOW_TYPE_TOOLBAR
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_TOOLBAR")]
    NetWindowTypeToolbar,
    /// _NET_WM_WINDOW_TYPE_UTILITY
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_UTILITY")]
    NetWindowTypeUtility,
}

/// Windows with one of these window types are regular application windows that rats are able
/// to hide behind.
pub const OBSCURING_WINDOW_TYPES: &[Atom] = &[
    Atom::NetWindowTypeNormal,
    Atom::NetWindowTypeDialog,
    Atom::NetWindowTypeUtility,
    Atom::NetWindowTypeToolbar,
];

/// The resolved [Xid] of every known [Atom] for a particular X server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomTable {
    atoms: HashMap<Atom, Xid>,
}

impl AtomTable {
    /// Intern every [Atom] variant with the X server.
    pub fn new<X: XConn>(x: &X) -> Result<Self> {
        let atoms = Atom::iter()
            .map(|atom| Ok((atom, x.intern_atom(atom.as_ref())?)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self { atoms })
    }

    /// The [Xid] of a known [Atom].
    pub fn known(&self, atom: Atom) -> Xid {
        // every variant is interned in AtomTable::new
        self.atoms[&atom]
    }

    /// The [Xid]s of a set of known [Atom]s in the order given.
    pub fn known_all(&self, atoms: &[Atom]) -> Vec<Xid> {
        atoms.iter().map(|&a| self.known(a)).collect()
    }
}

//! Deciding which windows are rats
use crate::{
    core::Config,
    x::{
        atom::{Atom, AtomTable},
        query::{WindowTypeIn, WmClassContains},
        Query, XConn,
    },
    Result, Xid,
};

/// The category a visible window falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The window is a rat: its `WM_CLASS` matches the configured rat class
    Rat,
    /// The window is a regular application window that rats can hide behind
    Obscuring,
    /// Anything else
    Plain,
}

/// Classifies windows based on their `WM_CLASS` and `_NET_WM_WINDOW_TYPE` properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rat: WmClassContains,
    obscuring: WindowTypeIn,
}

impl Classifier {
    /// Build a classifier for the rat class and obscuring window types in `config`.
    pub fn new(config: &Config, atoms: &AtomTable) -> Self {
        Self {
            rat: WmClassContains {
                prop: atoms.known(Atom::WmClass),
                class: config.rat_class.clone(),
            },
            obscuring: WindowTypeIn {
                prop: atoms.known(Atom::NetWmWindowType),
                types: atoms.known_all(&config.obscuring_types),
            },
        }
    }

    /// Classify a window.
    ///
    /// The rat check always runs first and the window type is only inspected for windows that
    /// are not rats. Rats do not normally set `_NET_WM_WINDOW_TYPE` at all (and once adopted
    /// they have a type that is not in the obscuring list) so the order of the checks matters.
    pub fn classify<X: XConn>(&self, id: Xid, x: &X) -> Result<Classification> {
        if self.rat.run(id, x)? {
            return Ok(Classification::Rat);
        }

        if self.obscuring.run(id, x)? {
            return Ok(Classification::Obscuring);
        }

        Ok(Classification::Plain)
    }
}

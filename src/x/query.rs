//! Queries against client windows
use crate::{
    x::{property::Prop, XConn},
    Result, Xid,
};

/// A query to be run against client windows for identifying specific windows
/// or programs.
pub trait Query<X: XConn> {
    /// Run this query for a given window ID.
    fn run(&self, id: Xid, x: &X) -> Result<bool>;
}

pub(crate) fn str_prop<X>(prop: Xid, id: Xid, x: &X) -> Result<Option<Vec<String>>>
where
    X: XConn,
{
    match x.get_prop(id, prop)? {
        Some(Prop::UTF8String(strs)) if !strs.is_empty() => Ok(Some(strs)),
        _ => Ok(None),
    }
}

pub(crate) fn atom_prop<X>(prop: Xid, id: Xid, x: &X) -> Result<Option<Xid>>
where
    X: XConn,
{
    match x.get_prop(id, prop)? {
        Some(Prop::Atom(atoms)) => Ok(atoms.first().copied()),
        _ => Ok(None),
    }
}

/// A [Query] matching windows that have the given string as any of the entries in
/// their `WM_CLASS` property (instance name or class name).
///
/// Windows without a `WM_CLASS` property never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmClassContains {
    /// The resolved `WM_CLASS` atom
    pub prop: Xid,
    /// The class string being searched for
    pub class: String,
}

impl<X> Query<X> for WmClassContains
where
    X: XConn,
{
    fn run(&self, id: Xid, x: &X) -> Result<bool> {
        match str_prop(self.prop, id, x)? {
            Some(strs) => Ok(strs.iter().any(|s| *s == self.class)),
            None => Ok(false),
        }
    }
}

/// A [Query] matching windows whose (first) `_NET_WM_WINDOW_TYPE` is one of a fixed set
/// of window type atoms.
///
/// Windows without a `_NET_WM_WINDOW_TYPE` property never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTypeIn {
    /// The resolved `_NET_WM_WINDOW_TYPE` atom
    pub prop: Xid,
    /// The resolved window type atoms that match
    pub types: Vec<Xid>,
}

impl<X> Query<X> for WindowTypeIn
where
    X: XConn,
{
    fn run(&self, id: Xid, x: &X) -> Result<bool> {
        match atom_prop(self.prop, id, x)? {
            Some(ty) => Ok(self.types.contains(&ty)),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x::mock::MockXConn;
    use simple_test_case::test_case;

    const WM_CLASS: Xid = Xid(1);
    const WM_TYPE: Xid = Xid(2);

    struct Props(Option<Prop>);

    impl MockXConn for Props {
        fn mock_get_prop(&self, _: Xid, _: Xid) -> Result<Option<Prop>> {
            Ok(self.0.clone())
        }
    }

    fn strs(ss: &[&str]) -> Option<Prop> {
        Some(Prop::UTF8String(ss.iter().map(|s| s.to_string()).collect()))
    }

    #[test_case(strs(&["xeyes", "XEyes"]), true; "instance name")]
    #[test_case(strs(&["eyes", "xeyes"]), true; "class name")]
    #[test_case(strs(&["XEyes"]), false; "case sensitive")]
    #[test_case(strs(&[]), false; "empty")]
    #[test_case(None, false; "missing")]
    #[test_case(Some(Prop::Atom(vec![Xid(3)])), false; "wrong type")]
    #[test]
    fn wm_class_contains(prop: Option<Prop>, expected: bool) {
        let q = WmClassContains {
            prop: WM_CLASS,
            class: "xeyes".to_owned(),
        };

        assert_eq!(q.run(Xid(42), &Props(prop)).expect("query to run"), expected);
    }

    #[test_case(Some(Prop::Atom(vec![Xid(10)])), true; "first matches")]
    #[test_case(Some(Prop::Atom(vec![Xid(12), Xid(10)])), false; "only the first type is used")]
    #[test_case(Some(Prop::Atom(vec![])), false; "empty")]
    #[test_case(None, false; "missing")]
    #[test_case(strs(&["_NET_WM_WINDOW_TYPE_NORMAL"]), false; "wrong type")]
    #[test]
    fn window_type_in(prop: Option<Prop>, expected: bool) {
        let q = WindowTypeIn {
            prop: WM_TYPE,
            types: vec![Xid(10), Xid(11)],
        };

        assert_eq!(q.run(Xid(42), &Props(prop)).expect("query to run"), expected);
    }
}

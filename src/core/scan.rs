//! Walking the X window tree
use crate::{
    pure::geometry::{Point, Rect},
    x::{property::WindowAttributes, XConn},
    Xid,
};
use tracing::trace;

/// A window found while walking the window tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovered {
    /// The window ID
    pub id: Xid,
    /// The position of the window in root coordinates along with its size
    pub r: Rect,
    /// The current attributes of the window
    pub attrs: WindowAttributes,
}

/// Walk the window tree depth first starting at `id`, calling `visit` exactly once for every
/// window found along with its absolute position. `parent` is the absolute position of the
/// parent of `id`.
///
/// Children are visited in the order reported by the X server. Windows that can not be queried
/// (most likely because they were destroyed part way through the walk) are skipped along with
/// their children.
pub fn scan_tree<X, F>(x: &X, id: Xid, parent: Point, visit: &mut F)
where
    X: XConn,
    F: FnMut(Discovered),
{
    let (r, attrs) = match x
        .client_geometry(id)
        .and_then(|r| Ok((r, x.get_window_attributes(id)?)))
    {
        Ok(details) => details,
        Err(e) => {
            trace!(%id, %e, "unable to query window: skipping");
            return;
        }
    };

    let pos = parent.offset_by(&r);
    visit(Discovered {
        id,
        r: r.with_position(pos),
        attrs,
    });

    let children = match x.query_children(id) {
        Ok(children) => children,
        Err(e) => {
            trace!(%id, %e, "unable to query children: skipping");
            return;
        }
    };

    for child in children {
        scan_tree(x, child, pos, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{x::mock::MockXConn, Error, Result};
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    // A window tree where each window has a parent relative position and a list of children.
    // Windows missing from the map behave as if they were destroyed mid scan.
    #[derive(Debug, Clone, Default)]
    struct Tree(HashMap<u32, (Rect, Vec<u32>)>);

    impl MockXConn for Tree {
        fn mock_client_geometry(&self, client: Xid) -> Result<Rect> {
            self.0
                .get(&client)
                .map(|(r, _)| *r)
                .ok_or_else(|| Error::Raw(format!("{client} destroyed")))
        }

        fn mock_get_window_attributes(&self, _: Xid) -> Result<WindowAttributes> {
            Ok(WindowAttributes::default())
        }

        fn mock_query_children(&self, client: Xid) -> Result<Vec<Xid>> {
            self.0
                .get(&client)
                .map(|(_, cs)| cs.iter().map(|&c| Xid(c)).collect())
                .ok_or_else(|| Error::Raw(format!("{client} destroyed")))
        }
    }

    fn scan(t: &Tree) -> Vec<(u32, Point)> {
        let mut seen = vec![];
        scan_tree(t, Xid(0), Point::default(), &mut |d| {
            seen.push((*d.id, Point::from(d.r)))
        });

        seen
    }

    fn tree(nodes: &[(u32, (i32, i32), &[u32])]) -> Tree {
        Tree(
            nodes
                .iter()
                .map(|&(id, (x, y), cs)| (id, (Rect::new(x, y, 10, 10), cs.to_vec())))
                .collect(),
        )
    }

    #[test]
    fn positions_are_relative_to_the_root() {
        let t = tree(&[
            (0, (0, 0), &[1, 4]),
            (1, (100, 50), &[2]),
            (2, (10, 20), &[3]),
            (3, (-5, 1), &[]),
            (4, (7, 7), &[]),
        ]);

        let seen = scan(&t);

        assert_eq!(
            seen,
            vec![
                (0, Point::new(0, 0)),
                (1, Point::new(100, 50)),
                (2, Point::new(110, 70)),
                (3, Point::new(105, 71)),
                (4, Point::new(7, 7)),
            ]
        );
    }

    #[test]
    fn destroyed_windows_are_skipped_along_with_their_children() {
        // 2 is listed as a child but no longer exists
        let t = tree(&[(0, (0, 0), &[1, 2, 3]), (1, (1, 1), &[]), (3, (3, 3), &[])]);

        let ids: Vec<u32> = scan(&t).into_iter().map(|(id, _)| id).collect();

        assert_eq!(ids, vec![0, 1, 3]);
    }

    #[test]
    fn sizes_are_preserved() {
        let mut t = tree(&[(0, (0, 0), &[1]), (1, (5, 5), &[])]);
        t.0.insert(1, (Rect::new(5, 5, 150, 100), vec![]));
        let mut rects = vec![];

        scan_tree(&t, Xid(0), Point::default(), &mut |d| rects.push(d.r));

        assert_eq!(rects[1], Rect::new(5, 5, 150, 100));
    }

    // A chain of windows, each the only child of the last, with the given relative offsets
    #[derive(Debug, Clone)]
    struct Chain(Vec<(i16, i16)>);

    impl Arbitrary for Chain {
        fn arbitrary(g: &mut Gen) -> Self {
            Chain(Vec::arbitrary(g))
        }
    }

    #[quickcheck]
    fn absolute_position_is_the_sum_of_ancestor_offsets(chain: Chain) -> bool {
        let n = chain.0.len() as u32;
        let mut t = Tree::default();
        t.0.insert(0, (Rect::default(), if n > 0 { vec![1] } else { vec![] }));

        for (i, &(x, y)) in chain.0.iter().enumerate() {
            let id = i as u32 + 1;
            let children = if id < n { vec![id + 1] } else { vec![] };
            t.0.insert(id, (Rect::new(x as i32, y as i32, 1, 1), children));
        }

        let seen = scan(&t);
        let mut expected = Point::default();

        seen.len() == chain.0.len() + 1
            && seen.iter().skip(1).zip(chain.0.iter()).all(|((_, p), &(x, y))| {
                expected = Point::new(expected.x + x as i32, expected.y + y as i32);
                *p == expected
            })
    }
}

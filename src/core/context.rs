//! Per frame window registries
use crate::{
    core::{movement, scan::Discovered, TrackedWindow},
    pure::geometry::{Rect, Viewports},
    Xid,
};
use rand::{rngs::StdRng, Rng};
use std::{
    collections::{hash_map::Entry, HashMap},
    mem,
};

/// The state carried from one frame to the next.
///
/// Rats found in the previous frame are held on to so that windows that are still present
/// continue along the same heading rather than picking a new one each frame. Anything left in
/// the previous frame's set once the window tree has been walked has vanished.
#[derive(Debug)]
pub struct FrameContext<R: Rng = StdRng> {
    pub(crate) previous: HashMap<Xid, TrackedWindow>,
    pub(crate) rats: HashMap<Xid, TrackedWindow>,
    pub(crate) obscuring: HashMap<Xid, TrackedWindow>,
    pub(crate) rng: R,
}

impl<R: Rng> FrameContext<R> {
    /// Create a new, empty, context using the given random number generator.
    pub fn new(rng: R) -> Self {
        Self {
            previous: HashMap::new(),
            rats: HashMap::new(),
            obscuring: HashMap::new(),
            rng,
        }
    }

    /// Start a new frame: the rats from the last frame become the previous set and the
    /// current sets are emptied ready to be repopulated.
    pub fn begin_frame(&mut self) {
        self.previous = mem::take(&mut self.rats);
        self.obscuring.clear();
    }

    /// Record a rat found during this frame.
    ///
    /// Rats that were present in the previous frame keep their movement state and only have
    /// their geometry and attributes refreshed. New rats start off stationary with a random
    /// heading in the first quarter turn and their window type read using `wm_type`.
    pub fn track_rat<F>(&mut self, d: Discovered, wm_type: F) -> &TrackedWindow
    where
        F: FnOnce() -> Option<Xid>,
    {
        let w = match self.previous.remove(&d.id) {
            Some(mut w) => {
                w.r = d.r;
                w.attrs = d.attrs;
                w
            }
            None => {
                let heading = movement::perturb(0.0, &mut self.rng);
                TrackedWindow::new_rat(d.id, d.r, d.attrs, wm_type(), heading)
            }
        };

        match self.rats.entry(d.id) {
            Entry::Occupied(mut e) => {
                e.insert(w);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(w),
        }
    }

    /// Record an obscuring window found during this frame.
    pub fn track_obscuring(&mut self, d: Discovered, wm_type: Option<Xid>) -> &TrackedWindow {
        let w = TrackedWindow::new_obscuring(d.id, d.r, d.attrs, wm_type);

        match self.obscuring.entry(d.id) {
            Entry::Occupied(mut e) => {
                e.insert(w);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(w),
        }
    }

    /// Finish walking the window tree, returning the IDs of any rats from the previous frame
    /// that were not seen again.
    pub fn end_scan(&mut self) -> Vec<Xid> {
        let mut vanished: Vec<Xid> = self.previous.drain().map(|(id, _)| id).collect();
        vanished.sort();

        vanished
    }

    /// Run a frame of movement for every rat, returning the new positions of any that moved
    /// in ID order.
    pub fn move_rats(
        &mut self,
        viewports: &Viewports,
        speed: f64,
        size: (u32, u32),
    ) -> Vec<(Xid, Rect)> {
        let Self { rats, rng, .. } = self;

        // Visit rats in ID order so that a seeded rng always gives the same result
        let mut ws: Vec<&mut TrackedWindow> = rats.values_mut().collect();
        ws.sort_by_key(|w| w.id);

        ws.into_iter()
            .flat_map(|w| movement::step(w, viewports, speed, size, rng).map(|r| (w.id, r)))
            .collect()
    }

    /// The rats found in the current frame.
    pub fn rats(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.rats.values()
    }

    /// Mutable access to the rats found in the current frame.
    pub fn rats_mut(&mut self) -> impl Iterator<Item = &mut TrackedWindow> {
        self.rats.values_mut()
    }

    /// Look up a rat from the current frame by ID.
    pub fn rat(&self, id: Xid) -> Option<&TrackedWindow> {
        self.rats.get(&id)
    }

    /// The obscuring windows found in the current frame.
    pub fn obscuring(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.obscuring.values()
    }
}

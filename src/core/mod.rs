//! Core data structures and the per frame update loop
use crate::{
    pure::geometry::{Point, Rect, Viewports},
    x::{
        atom::{Atom, AtomTable, OBSCURING_WINDOW_TYPES},
        property::WindowAttributes,
        XConn, XConnExt,
    },
    Result, Xid,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{thread, time::Duration};
use tracing::{debug, info, trace, Level};

pub mod classify;
pub mod context;
pub mod movement;
pub mod scan;

#[doc(inline)]
pub use classify::{Classification, Classifier};
#[doc(inline)]
pub use context::FrameContext;
#[doc(inline)]
pub use scan::{scan_tree, Discovered};

/// The `WM_CLASS` used to identify rat windows
pub const RAT_CLASS: &str = "xeyes";
/// The distance in pixels that a rat moves each frame
pub const SPEED: f64 = 4.0;
/// The fixed width and height of a rat once it starts moving
pub const RAT_SIZE: (u32, u32) = (64, 64);
/// The time to wait between frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// The user facing configuration for xrats.
///
/// [Config::default] uses the constants defined in this module.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Windows with this string in their `WM_CLASS` are rats
    pub rat_class: String,
    /// Windows with one of these `_NET_WM_WINDOW_TYPE`s are obscuring windows
    pub obscuring_types: Vec<Atom>,
    /// The window type rats are given when they are adopted
    pub adopted_type: Atom,
    /// The distance in pixels that a rat moves each frame
    pub speed: f64,
    /// The fixed width and height of a rat once it starts moving
    pub rat_size: (u32, u32),
    /// The time to wait between frames
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rat_class: RAT_CLASS.to_owned(),
            obscuring_types: OBSCURING_WINDOW_TYPES.to_vec(),
            adopted_type: Atom::NetWindowTypeSplash,
            speed: SPEED,
            rat_size: RAT_SIZE,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

/// A window that is being tracked between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedWindow {
    /// The window ID
    pub id: Xid,
    /// The absolute position and size of the window
    pub r: Rect,
    /// The window attributes as of the last frame it was seen
    pub attrs: WindowAttributes,
    /// Whether or not this window is a rat
    pub is_rat: bool,
    /// The `_NET_WM_WINDOW_TYPE` of this window, if it has one
    pub wm_type: Option<Xid>,
    /// The current direction of travel in radians, anticlockwise from the positive x-axis
    pub heading: f64,
    /// Whether or not this window moved in the last frame
    pub is_moving: bool,
}

impl TrackedWindow {
    /// A newly found rat: stationary until its first frame of movement.
    pub fn new_rat(
        id: Xid,
        r: Rect,
        attrs: WindowAttributes,
        wm_type: Option<Xid>,
        heading: f64,
    ) -> Self {
        Self {
            id,
            r,
            attrs,
            is_rat: true,
            wm_type,
            heading,
            is_moving: false,
        }
    }

    /// A newly found obscuring window.
    pub fn new_obscuring(id: Xid, r: Rect, attrs: WindowAttributes, wm_type: Option<Xid>) -> Self {
        Self {
            id,
            r,
            attrs,
            is_rat: false,
            wm_type,
            heading: 0.0,
            is_moving: false,
        }
    }
}

/// Finds rat windows and moves them around the screen.
///
/// Each call to [RatManager::step] runs a single frame:
///   - walk the window tree, classifying each visible window
///   - adopt any rats that have not been adopted yet
///   - move every rat
///   - flush all pending requests to the X server
#[derive(Debug)]
pub struct RatManager<X, R = StdRng>
where
    X: XConn,
    R: Rng,
{
    x: X,
    config: Config,
    atoms: AtomTable,
    viewports: Viewports,
    classifier: Classifier,
    ctx: FrameContext<R>,
}

impl<X> RatManager<X, StdRng>
where
    X: XConn,
{
    /// Construct a new [RatManager] using a randomly seeded random number generator.
    pub fn new(x: X, config: Config) -> Result<Self> {
        Self::new_with_rng(x, config, StdRng::from_entropy())
    }
}

impl<X, R> RatManager<X, R>
where
    X: XConn,
    R: Rng,
{
    /// Construct a new [RatManager] using the provided random number generator.
    ///
    /// All atoms are interned and the monitor layout is read at this point.
    pub fn new_with_rng(x: X, config: Config, rng: R) -> Result<Self> {
        let atoms = AtomTable::new(&x)?;
        let viewports = x.viewports()?;
        let classifier = Classifier::new(&config, &atoms);
        info!(rat_class = %config.rat_class, n_viewports = viewports.iter().count(), "initialised");

        Ok(Self {
            x,
            config,
            atoms,
            viewports,
            classifier,
            ctx: FrameContext::new(rng),
        })
    }

    /// Run frames forever, sleeping for the configured frame interval between each.
    ///
    /// This only returns if communicating with the X server fails.
    pub fn run(mut self) -> Result<()> {
        info!("starting main loop");

        loop {
            self.step()?;
            thread::sleep(self.config.frame_interval);
        }
    }

    /// Run a single frame.
    pub fn step(&mut self) -> Result<()> {
        self.ctx.begin_frame();
        self.scan();

        for id in self.ctx.end_scan() {
            debug!(%id, "rat has vanished");
        }

        self.adopt_new_rats()?;
        self.move_rats()?;

        self.x.flush()
    }

    fn scan(&mut self) {
        let Self {
            x,
            atoms,
            classifier,
            ctx,
            ..
        } = self;
        let x = &*x;

        scan_tree(x, x.root(), Point::default(), &mut |d| {
            track(d, x, atoms, classifier, ctx)
        });
    }

    fn adopt_new_rats(&mut self) -> Result<()> {
        let adopted_type = self.atoms.known(self.config.adopted_type);

        for rat in self.ctx.rats_mut() {
            if rat.wm_type == Some(adopted_type) {
                continue;
            }

            debug!(id = %rat.id, "adopting new rat");
            self.x.adopt_rat(rat.id, adopted_type, &self.atoms)?;
            rat.wm_type = Some(adopted_type);
        }

        Ok(())
    }

    fn move_rats(&mut self) -> Result<()> {
        let moved = self
            .ctx
            .move_rats(&self.viewports, self.config.speed, self.config.rat_size);

        for (id, r) in moved {
            self.x.position_client(id, r)?;
        }

        Ok(())
    }

    /// The rats found in the most recent frame.
    pub fn rats(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.ctx.rats()
    }

    /// The obscuring windows found in the most recent frame.
    pub fn obscuring(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.ctx.obscuring()
    }

    /// The visible screen area rats are kept within.
    pub fn viewports(&self) -> &Viewports {
        &self.viewports
    }

    /// The resolved atoms in use.
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// A reference to the underlying X connection.
    pub fn conn(&self) -> &X {
        &self.x
    }
}

// Classify a single window found while walking the window tree and record it if it is a rat
// or an obscuring window. Windows that can not be classified are skipped for this frame.
fn track<X, R>(
    d: Discovered,
    x: &X,
    atoms: &AtomTable,
    classifier: &Classifier,
    ctx: &mut FrameContext<R>,
) where
    X: XConn,
    R: Rng,
{
    if !d.attrs.is_visible() {
        return;
    }

    let kind = match classifier.classify(d.id, x) {
        Ok(kind) => kind,
        Err(e) => {
            trace!(id = %d.id, %e, "unable to classify window: skipping");
            return;
        }
    };

    let id = d.id;
    let read_type = || match x.window_type(id, atoms) {
        Ok(ty) => ty,
        Err(e) => {
            trace!(%id, %e, "unable to read window type");
            None
        }
    };

    let w = match kind {
        Classification::Rat => ctx.track_rat(d, read_type),
        Classification::Obscuring => ctx.track_obscuring(d, read_type()),
        Classification::Plain => return,
    };

    if tracing::enabled!(Level::DEBUG) {
        let title = x.window_title(w.id, atoms).unwrap_or_default();
        debug!(?kind, id = %w.id, r = ?w.r, %title, "found window");
    }
}

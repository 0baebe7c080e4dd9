use std::rc::Rc;

use ahash::AHashSet;
use anyhow::Result;
use geo::{Coord, Intersects, Point};

use crate::{
    config::ToolConfig,
    host::{Canvas, DistrictSource, Meshblock, MeshblockStore, NotificationSink, Paintable, PointerEventHandler, SpatialLocator},
    overlay::{AggregateOverlay, DrawCommand, MapView},
    snap::{BoundaryMatcher, EdgeMatch, Matches},
    types::{DistrictCode, DistrictPair, MeshblockId},
};

use super::{MouseButton, PointerEvent};

/// State of an editing session between two districts.
#[derive(Debug)]
struct ActiveEdit<D> {
    pair: DistrictPair,                // Frozen at activation
    target: Option<DistrictCode>,      // Decided by the first reassignable meshblock
    touched: AHashSet<MeshblockId>,    // Meshblocks already reassigned this session
    overlay: AggregateOverlay<D>,
}

#[derive(Debug)]
enum State<D> {
    Idle { indicator: Option<EdgeMatch> },
    Active(ActiveEdit<D>),
}

/// Boundary painting tool: press on the border between two districts to start
/// a session, then sweep the cursor over meshblocks to move them across it.
///
/// Idle: moving the cursor previews the boundary under it with a snap
/// indicator. A primary press on a point that resolves to exactly two
/// districts activates the session; a secondary press, or a second primary
/// press, ends it. Middle presses are ignored.
///
/// Active: the two districts are frozen for the whole session. The first
/// meshblock swept over decides the paint direction (towards the other member
/// of the pair); every meshblock is reassigned at most once per session.
#[derive(Debug)]
pub struct RedistrictingSession<L, D, N, C> {
    meshblocks: Rc<L>,
    districts: Rc<D>,
    notifier: N,
    canvas: C,
    matcher: BoundaryMatcher,
    config: ToolConfig,
    state: State<D>,
}

impl<L, D, N, C> RedistrictingSession<L, D, N, C>
where
    L: SpatialLocator + MeshblockStore,
    D: DistrictSource,
    N: NotificationSink,
    C: Canvas,
{
    /// Create an idle session over the given datasets. Fails if `config` is invalid.
    pub fn new(meshblocks: Rc<L>, districts: Rc<D>, notifier: N, canvas: C, config: ToolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            meshblocks,
            districts,
            notifier,
            canvas,
            matcher: BoundaryMatcher::new(config.snap_distance),
            config,
            state: State::Idle { indicator: None },
        })
    }

    #[inline] pub fn config(&self) -> &ToolConfig { &self.config }

    #[inline] pub fn meshblocks(&self) -> &L { &self.meshblocks }

    #[inline] pub fn notifier(&self) -> &N { &self.notifier }

    #[inline] pub fn canvas(&self) -> &C { &self.canvas }

    #[inline] pub fn is_active(&self) -> bool { matches!(self.state, State::Active(_)) }

    /// The two districts being edited, if a session is active.
    pub fn district_pair(&self) -> Option<&DistrictPair> {
        match &self.state {
            State::Active(edit) => Some(&edit.pair),
            State::Idle { .. } => None,
        }
    }

    /// The district meshblocks are currently painted towards, once decided.
    pub fn target_district(&self) -> Option<&DistrictCode> {
        match &self.state {
            State::Active(edit) => edit.target.as_ref(),
            State::Idle { .. } => None,
        }
    }

    /// Meshblocks reassigned during the current session.
    pub fn touched(&self) -> impl Iterator<Item = MeshblockId> + '_ {
        let touched = match &self.state {
            State::Active(edit) => Some(edit.touched.iter().copied()),
            State::Idle { .. } => None,
        };
        touched.into_iter().flatten()
    }

    /// True if `id` was reassigned during the current session.
    pub fn was_touched(&self, id: MeshblockId) -> bool {
        matches!(&self.state, State::Active(edit) if edit.touched.contains(&id))
    }

    /// The match the idle snap indicator is locked to.
    pub fn snap_indicator(&self) -> Option<&EdgeMatch> {
        match &self.state {
            State::Idle { indicator } => indicator.as_ref(),
            State::Active(_) => None,
        }
    }

    /// The aggregate label overlay, present while a session is active.
    pub fn overlay(&self) -> Option<&AggregateOverlay<D>> {
        match &self.state {
            State::Active(edit) => Some(&edit.overlay),
            State::Idle { .. } => None,
        }
    }

    /// Matches under `point` and the meshblocks they refer to, one per id.
    fn resolve(&self, point: Coord<f64>) -> (Matches, Vec<Meshblock>) {
        let matches = self.matcher.find_matches(&*self.meshblocks, point);
        let mut ids: Vec<MeshblockId> = Vec::with_capacity(matches.len());
        for m in &matches {
            if !ids.contains(&m.meshblock) { ids.push(m.meshblock) }
        }
        let meshblocks = self.meshblocks.meshblocks_by_ids(&ids);
        (matches, meshblocks)
    }

    /// The boundary under the cursor: present only if the meshblocks resolve to exactly two districts.
    fn boundary_pair(meshblocks: &[Meshblock]) -> Option<DistrictPair> {
        DistrictPair::from_codes(meshblocks.iter().filter_map(|m| m.district.as_ref()))
    }

    /// Idle pointer move: lock the snap indicator to a valid boundary or clear it.
    fn preview(&mut self, point: Coord<f64>) {
        let (matches, meshblocks) = self.resolve(point);
        let next = Self::boundary_pair(&meshblocks).and(matches.first().cloned());

        let State::Idle { indicator } = &mut self.state else { return };
        if *indicator != next {
            *indicator = next;
            self.canvas.request_redraw();
        }
    }

    /// Start a session on the boundary under `point`. Returns false (and stays idle)
    /// unless the point resolves to exactly two districts.
    fn try_activate(&mut self, point: Coord<f64>) -> bool {
        let (_, meshblocks) = self.resolve(point);
        let Some(pair) = Self::boundary_pair(&meshblocks) else {
            tracing::trace!("[RedistrictingSession] no boundary at ({}, {})", point.x, point.y);
            return false;
        };

        tracing::debug!("[RedistrictingSession] editing boundary {pair}");
        self.state = State::Active(ActiveEdit {
            pair,
            target: None,
            touched: AHashSet::new(),
            overlay: AggregateOverlay::new(Rc::clone(&self.districts), &self.config),
        });
        self.canvas.request_redraw();
        true
    }

    /// End the active session, if any, dropping its overlay.
    fn cancel(&mut self) {
        if let State::Active(edit) = &self.state {
            tracing::debug!(
                "[RedistrictingSession] finished editing {} ({} meshblocks changed)",
                edit.pair, edit.touched.len()
            );
            self.state = State::Idle { indicator: None };
            self.canvas.request_redraw();
        }
    }

    /// Active pointer move: reassign the single untouched meshblock under `point`.
    fn paint(&mut self, point: Coord<f64>) {
        let (_, meshblocks) = self.resolve(point);
        let State::Active(edit) = &mut self.state else { return };

        // Edge matches can snap to meshblocks that do not actually cover the cursor.
        let cursor = Point::from(point);
        let mut candidates = meshblocks.into_iter()
            .filter(|m| !edit.touched.contains(&m.id) && m.geometry.intersects(&cursor))
            .collect::<Vec<_>>();
        if candidates.len() != 1 {
            tracing::trace!(
                "[RedistrictingSession] {} candidate meshblocks at ({}, {})",
                candidates.len(), point.x, point.y
            );
            return;
        }
        let meshblock = candidates.swap_remove(0);

        let Some(old) = meshblock.district.as_ref() else {
            tracing::trace!("[RedistrictingSession] meshblock {} has no district", meshblock.id);
            return;
        };
        let Some(other) = edit.pair.other(old) else {
            tracing::trace!("[RedistrictingSession] meshblock {} is in {old}, outside {}", meshblock.id, edit.pair);
            return;
        };
        let target = edit.target.get_or_insert_with(|| other.clone()).clone();
        if *old == target { return }

        if let Err(err) = self.meshblocks.set_district(meshblock.id, &target) {
            tracing::warn!("[RedistrictingSession] failed to move meshblock {} to {target}: {err:#}", meshblock.id);
            return;
        }
        edit.touched.insert(meshblock.id);
        tracing::debug!("[RedistrictingSession] meshblock {} moved {old} -> {target}", meshblock.id);

        self.notifier.push(&format!("{}: {} -> {}", meshblock.label, old, target));
        self.meshblocks.request_repaint();
    }
}

impl<L, D, N, C> PointerEventHandler for RedistrictingSession<L, D, N, C>
where
    L: SpatialLocator + MeshblockStore,
    D: DistrictSource,
    N: NotificationSink,
    C: Canvas,
{
    fn on_move(&mut self, event: &PointerEvent) {
        if self.is_active() {
            self.paint(event.point);
        } else {
            self.preview(event.point);
        }
    }

    fn on_press(&mut self, event: &PointerEvent) {
        match event.button {
            MouseButton::Middle => {}
            MouseButton::Secondary => self.cancel(),
            _ if self.is_active() => self.cancel(),
            _ => { self.try_activate(event.point); }
        }
    }

    fn deactivate(&mut self) {
        self.cancel();
        if let State::Idle { indicator } = &mut self.state {
            if indicator.take().is_some() { self.canvas.request_redraw() }
        }
    }
}

impl<L, D, N, C> Paintable for RedistrictingSession<L, D, N, C>
where
    L: SpatialLocator + MeshblockStore,
    D: DistrictSource,
    N: NotificationSink,
    C: Canvas,
{
    fn on_paint_request(&self, view: &MapView) -> Vec<DrawCommand> {
        if !view.is_drawable() { return vec![] }
        match &self.state {
            State::Idle { indicator: Some(indicator) } => vec![DrawCommand::SnapMarker {
                position: view.to_pixel(indicator.point),
                kind: indicator.kind,
            }],
            State::Idle { indicator: None } => vec![],
            State::Active(edit) => edit.overlay.on_paint_request(view),
        }
    }
}

//! Navigation session
//!
//! Owns everything that changes while a user moves around the portal: the
//! current tree, the current location, the expansion state and the fetch
//! generation counter. Derived values (active branch, route set, decision)
//! are memoized on `(tree revision, location)`.
//!
//! Fetching is split in two so the caller can run the network part
//! anywhere: `begin_fetch` hands out a ticket, `apply_fetch` accepts the
//! result only if that ticket is still the latest one.

use tracing::{debug, info};

use crate::domain::entities::{ExpansionState, MenuTree};
use crate::domain::services::{
    build_menu_tree, resolve_active_branch, visible_entries, ActiveBranch, RouteDecision, RouteSet,
    RouteValidator, VisibleEntry,
};
use crate::domain::value_objects::{FetchGenerations, FetchTicket};

use super::menu_fetch::FetchedMenu;
use super::snapshot::{SnapshotPublisher, SnapshotReader};

/// Result of offering a fetch result to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The tree was replaced
    Applied {
        revision: u64,
        decision: RouteDecision,
    },
    /// A newer fetch was issued (or the fetch was cancelled); nothing changed
    Stale { ticket: FetchTicket },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone)]
struct Derived {
    revision: u64,
    location: String,
    active: ActiveBranch,
    routes: RouteSet,
    decision: RouteDecision,
}

pub struct NavigationSession {
    validator: RouteValidator,
    publisher: SnapshotPublisher,
    tree: MenuTree,
    revision: u64,
    location: String,
    expansion: ExpansionState,
    generations: FetchGenerations,
    derived: Derived,
    derivations: u64,
}

impl NavigationSession {
    /// Start with an empty tree at `location`
    pub fn new(
        validator: RouteValidator,
        publisher: SnapshotPublisher,
        location: impl Into<String>,
    ) -> Self {
        let tree = MenuTree::empty();
        let location = location.into();
        let derived = derive(&validator, &tree, 0, &location);
        Self {
            validator,
            publisher,
            tree,
            revision: 0,
            location,
            expansion: ExpansionState::new(),
            generations: FetchGenerations::new(),
            derived,
            derivations: 1,
        }
    }

    /// Issue a ticket for a fetch about to start, superseding earlier ones
    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = self.generations.issue();
        debug!(%ticket, "fetch started");
        ticket
    }

    /// Abandon every in-flight fetch
    pub fn cancel_pending(&mut self) {
        self.generations.invalidate();
        debug!(generation = self.generations.latest(), "pending fetches cancelled");
    }

    /// Replace the tree with the result of the fetch identified by `ticket`
    pub fn apply_fetch(&mut self, ticket: FetchTicket, menu: FetchedMenu) -> ApplyOutcome {
        if !self.generations.is_current(ticket) {
            debug!(%ticket, latest = self.generations.latest(), "discarding stale fetch");
            return ApplyOutcome::Stale { ticket };
        }

        self.tree = build_menu_tree(&menu.descriptors);
        self.revision += 1;
        let version = self.publisher.publish(&menu);
        info!(
            revision = self.revision,
            snapshot_version = version,
            product = %menu.product,
            "menu tree replaced"
        );

        self.refresh();
        self.expansion.reset();
        self.expansion.sync_to(self.derived.active.chain());

        ApplyOutcome::Applied {
            revision: self.revision,
            decision: self.derived.decision.clone(),
        }
    }

    /// Move to `path` and return whether it may stay there.
    ///
    /// A location outside the menu keeps the user's open branch. When the
    /// decision redirects to `path` itself ([`RouteDecision::redirects_to`])
    /// the caller has nowhere else to go and should stay put.
    pub fn navigate(&mut self, path: impl Into<String>) -> RouteDecision {
        let path = path.into();
        if path != self.location {
            self.location = path;
            self.refresh();
            self.expansion.sync_to(self.derived.active.chain());
        }
        self.derived.decision.clone()
    }

    pub fn toggle_top(&mut self, index: usize) {
        self.expansion.toggle_top(index);
    }

    pub fn toggle_nested(&mut self, parent: &[usize], index: usize) {
        self.expansion.toggle_nested(parent, index);
    }

    pub fn active_branch(&self) -> &ActiveBranch {
        &self.derived.active
    }

    pub fn routes(&self) -> &RouteSet {
        &self.derived.routes
    }

    pub fn decision(&self) -> &RouteDecision {
        &self.derived.decision
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Number of applied fetches
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reader on the raw descriptor slot this session publishes to
    pub fn snapshot_reader(&self) -> SnapshotReader {
        self.publisher.reader()
    }

    /// How often derived values were recomputed
    pub fn derivations(&self) -> u64 {
        self.derivations
    }

    pub fn visible_entries(&self) -> Vec<VisibleEntry> {
        visible_entries(&self.tree, &self.expansion, &self.derived.active)
    }

    fn refresh(&mut self) {
        if self.derived.revision == self.revision && self.derived.location == self.location {
            return;
        }
        self.derived = derive(&self.validator, &self.tree, self.revision, &self.location);
        self.derivations += 1;
    }
}

fn derive(validator: &RouteValidator, tree: &MenuTree, revision: u64, location: &str) -> Derived {
    let active = resolve_active_branch(tree, location);
    let routes = RouteSet::from_tree(tree);
    let decision = validator.validate(&routes, location);
    Derived {
        revision,
        location: location.to_string(),
        active,
        routes,
        decision,
    }
}

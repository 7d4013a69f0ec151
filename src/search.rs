use std::fmt::Debug;

use typed_arena::Arena;

use crate::cost::Cost;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;
use crate::space::Successor;

/// A node of the search tree.
///
/// Nodes are never modified after allocation. A node only knows its parent
/// and the action taken from it, so the whole path (and the set of states on
/// it) is rebuilt by walking up when needed instead of being copied into every
/// node.
#[derive(Debug)]
pub struct SearchTreeNode<'t, St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    parent: Option<(&'t SearchTreeNode<'t, St, A, C>, A)>,
    state: St,
    g: C,
    depth: usize,
}

impl<'t, St, A, C> SearchTreeNode<'t, St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn state(&self) -> &St {
        &self.state
    }

    /// Cost accumulated from the root.
    #[inline(always)]
    pub fn g(&self) -> C {
        self.g
    }

    /// Number of actions from the root.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walks up to the root, starting at this node.
    pub fn ancestors(&'t self) -> impl Iterator<Item = &'t SearchTreeNode<'t, St, A, C>> {
        std::iter::successors(Some(self), |node| node.parent.map(|(parent, _a)| parent))
    }

    /// Whether `s` is on the path from the root to this node (inclusive).
    pub fn on_path(&'t self, s: &St) -> bool {
        self.ancestors().any(|node| node.state == *s)
    }

    #[must_use]
    pub fn path(&'t self) -> Path<St, A, C> {
        let mut actions = Vec::with_capacity(self.depth);
        let mut start = self.state;
        for node in self.ancestors() {
            start = node.state;
            if let Some((_parent, a)) = node.parent {
                actions.push(a);
            }
        }
        actions.reverse();
        debug_assert_eq!(actions.len(), self.depth);

        Path {
            start,
            end: self.state,
            cost: self.g,
            actions,
        }
    }
}

/// All the nodes created by one search run.
///
/// Backed by an arena, so nodes can point to their parents with plain
/// references and everything is freed at once when the run ends.
pub(crate) struct SearchTree<'t, St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    nodes: Arena<SearchTreeNode<'t, St, A, C>>,
}

impl<'t, St, A, C> SearchTree<'t, St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            nodes: Arena::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn root(&'t self, s: St) -> &'t SearchTreeNode<'t, St, A, C> {
        self.nodes.alloc(SearchTreeNode {
            parent: None,
            state: s,
            g: C::zero(),
            depth: 0usize,
        })
    }

    /// Extends `parent` through one of its successors.
    #[inline(always)]
    pub(crate) fn child(
        &'t self,
        parent: &'t SearchTreeNode<'t, St, A, C>,
        successor: &Successor<St, A, C>,
    ) -> &'t SearchTreeNode<'t, St, A, C> {
        debug_assert!(successor.cost >= C::zero(), "Negative step cost");
        self.nodes.alloc(SearchTreeNode {
            parent: Some((parent, successor.action)),
            state: successor.state,
            g: parent.g.saturating_add(&successor.cost),
            depth: parent.depth + 1,
        })
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub(crate) fn memory(&self) -> usize {
        self.len() * std::mem::size_of::<SearchTreeNode<'t, St, A, C>>()
    }
}

impl<St, A, C> std::fmt::Debug for SearchTree<'_, St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

/// Counters of a single search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Nodes created, including the root.
    pub generated: usize,
    /// Popped nodes dropped because a cheaper path to their state was known.
    pub stale: usize,
    /// Largest frontier seen.
    pub max_frontier: usize,
    /// Bytes used by the search tree.
    pub tree_bytes: usize,
}

impl SearchStats {
    #[inline(always)]
    pub(crate) fn saw_frontier(&mut self, len: usize) {
        self.max_frontier = std::cmp::max(self.max_frontier, len);
    }

    pub fn write_stats<W: std::io::Write>(&self, name: &str, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use thousands::Separable;

        writeln!(out, "{name} Stats:")?;
        writeln!(
            out,
            "  - Expanded nodes:  {}",
            self.expanded.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Generated nodes: {} ({})",
            self.generated.separate_with_commas(),
            Size::from_bytes(self.tree_bytes)
        )?;
        if self.stale > 0 {
            writeln!(
                out,
                "  - Stale nodes:     {}",
                self.stale.separate_with_commas()
            )?;
        }
        writeln!(
            out,
            "  - |Open|max:       {}",
            self.max_frontier.separate_with_commas()
        )?;

        Ok(())
    }
}

/// Checks that `path` replays through `problem` with the same end and cost.
///
/// Without the `verify` feature only the cheap sanity checks run, and only
/// with debug assertions.
#[inline(always)]
#[cfg(not(feature = "verify"))]
pub(crate) fn verify_path<P, St, A, C>(_problem: &P, path: &Path<St, A, C>)
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    debug_assert!(path.seems_valid(), "{path} does not look valid");
}
#[cfg(feature = "verify")]
pub(crate) fn verify_path<P, St, A, C>(problem: &P, path: &Path<St, A, C>)
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    assert!(path.seems_valid(), "{path} does not look valid");
    let replayed = crate::problem::replay_actions(problem, &path.actions);
    assert_eq!(
        replayed,
        Ok((path.end, path.cost)),
        "{path} does not replay through {problem:?}"
    );
}

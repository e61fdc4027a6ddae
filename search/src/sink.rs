//! Diagnostic sinks: the driver's only tracing channel.
//!
//! The driver never logs per-node events itself. It reports to a
//! [`DiagnosticSink`] handed in by the caller, so a quiet run pays nothing
//! and tests can observe every decision.

use log::{debug, log_enabled, trace, Level};
use pancake_kernel::stack::Stack;

use crate::node::SearchNode;
use crate::termination::{SearchStats, Termination};

/// What the driver did with a freshly built child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildDisposition {
    /// New state; added to the frontier.
    Inserted,
    /// State was in the frontier at a higher cost; entry replaced.
    Improved,
    /// State was in the frontier at equal or lower cost; child dropped.
    NotImproved,
    /// State was already expanded; child dropped.
    AlreadyVisited,
}

/// Receiver for search progress events.
///
/// Every method has an empty default, so implementations override only
/// what they need.
pub trait DiagnosticSink {
    /// A node was popped for goal testing and (unless it is the goal)
    /// expansion. `expansion` is the number of expansions done before it.
    fn on_pop(&mut self, _node: &SearchNode, _expansion: u64) {}

    /// A flip produced `after` from `before`.
    fn on_flip(&mut self, _before: &Stack, _depth: usize, _after: &Stack) {}

    /// A child was classified against the visited set and frontier.
    fn on_child(&mut self, _child: &SearchNode, _disposition: ChildDisposition) {}

    /// An expansion finished; `top` is the next node to pop.
    fn on_frontier_top(&mut self, _top: Option<&SearchNode>, _live: usize) {}

    /// Every live frontier state after an expansion, in `Stack` order.
    fn on_frontier_states(&mut self, _states: &mut dyn Iterator<Item = &Stack>) {}

    /// The search reached a terminal phase.
    fn on_termination(&mut self, _termination: &Termination, _stats: &SearchStats) {}
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Sink that forwards events to the `log` facade.
///
/// Pops, frontier tops and termination go to `debug`; flips, child
/// decisions and the full frontier listing to `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn on_pop(&mut self, node: &SearchNode, expansion: u64) {
        debug!(
            "pop #{expansion}: {} (g={}, h={}, f={}, order={})",
            node.stack,
            node.backward_cost,
            node.h_cost,
            node.total_cost(),
            node.order_added
        );
    }

    fn on_flip(&mut self, before: &Stack, depth: usize, after: &Stack) {
        trace!("flip top {depth}: {before} -> {after}");
    }

    fn on_child(&mut self, child: &SearchNode, disposition: ChildDisposition) {
        trace!(
            "child {} f={} order={}: {disposition:?}",
            child.stack,
            child.total_cost(),
            child.order_added
        );
    }

    fn on_frontier_top(&mut self, top: Option<&SearchNode>, live: usize) {
        match top {
            Some(node) => debug!(
                "frontier top: {} (f={}), {live} live entries",
                node.stack,
                node.total_cost()
            ),
            None => debug!("frontier empty"),
        }
    }

    fn on_frontier_states(&mut self, states: &mut dyn Iterator<Item = &Stack>) {
        if log_enabled!(Level::Trace) {
            let listed: Vec<String> = states.map(ToString::to_string).collect();
            trace!("frontier: {}", listed.join(" "));
        }
    }

    fn on_termination(&mut self, termination: &Termination, stats: &SearchStats) {
        debug!(
            "search {}: {} expansions, {} generated, {} improved, frontier high water {}",
            termination.as_str(),
            stats.expansions,
            stats.generated,
            stats.improved,
            stats.frontier_high_water
        );
    }
}

//! Conflict-free selection of bridge opportunities.

use tracing::debug;

use crate::claims::Claims;
use crate::opportunity::BridgeOpportunity;

/// Keeps the most efficient opportunities whose spans do not overlap.
///
/// Opportunities are stably sorted by efficiency, highest first, so equal
/// efficiencies keep their discovery order. Each one is then accepted only
/// if none of its days is covered by a previously accepted span.
///
/// The result is ordered by descending efficiency.
pub fn deduplicate_opportunities(
    mut opportunities: Vec<BridgeOpportunity>,
) -> Vec<BridgeOpportunity> {
    let n_in = opportunities.len();
    opportunities.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));

    let mut claims = Claims::new();
    let mut kept = Vec::new();
    for opp in opportunities {
        if claims.try_claim(opp.start_date(), opp.end_date()) {
            kept.push(opp);
        }
    }

    debug!(n_in, n_kept = kept.len(), "deduplicated opportunities");
    kept
}

//! Run-time settings handed to every parser

use cube_game::{CapacityTable, ErrorPolicy};

/// Settings shared by all solvers in a run
///
/// Solvers read only what concerns them; the calibration puzzle ignores
/// capacities, for instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Per-color ceilings for cube game validity
    pub capacities: CapacityTable,
    /// Whether to stop at the first malformed record
    pub error_policy: ErrorPolicy,
    /// Fan record parsing out across the rayon pool
    pub parallel: bool,
}

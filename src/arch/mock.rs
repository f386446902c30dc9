//! Mock interrupt masking (non-AArch64 targets)
//!
//! Host builds have no interrupts to mask; unit tests rely on the spin
//! mutex inside the lock for mutual exclusion. Both operations are no-ops
//! that keep the save/restore call shape intact.

use super::{IrqMask, IrqState};

/// Pretend to mask interrupts; returns an empty saved state.
pub fn irq_save(_mask: IrqMask) -> IrqState {
    IrqState(0)
}

/// Pretend to restore interrupt state.
pub fn irq_restore(_state: IrqState) {}

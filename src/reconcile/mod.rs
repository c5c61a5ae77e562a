//! Extension reconciliation: plan computation and execution

pub mod execute;
pub mod plan;

pub use execute::{execute, ExtensionManager, Outcome};
pub use plan::{reconcile, ReconcilePlan};

pub mod aggregator;
pub mod classifier;
pub mod model;

pub use aggregator::{aggregate, spilled};
pub use classifier::{classify_sprint, SpilloverReason};
pub use model::{ClassifiedIssue, SummaryRow};

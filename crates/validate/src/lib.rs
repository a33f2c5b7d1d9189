//! Dependency and completeness validation.
//!
//! Consumes a frozen [`ValidationInput`] (registry snapshot, formula catalog copy, simulation
//! graph) and produces a [`ValidationOutcome`]. Three independent checks run on every pass:
//!
//! 1. **Order** - every simulation input is produced by a strictly earlier phase or is part of
//!    the baseline.
//! 2. **Linkage** - every formula input and output is traceable to a producer.
//! 3. **Completeness** - every key parameter is produced somewhere.
//!
//! Findings are data ([`Issue`]); no check aborts another, and the core never decides whether
//! a run "failed". Callers read [`ValidationOutcome::has_fatal_issues`].
//!
//! # Lifecycle
//!
//! ```text
//! Validator<Idle> --load--> Validator<Loaded> --validate--> Validator<Validated> --report--> ValidationOutcome
//! ```

mod checks;
mod input;
mod issue;
mod options;
mod report;
mod validator;

pub use checks::{ValidationContext, check_completeness, check_linkage, check_order};
pub use input::ValidationInput;
pub use issue::{Check, Issue, IssueKind, Severity};
pub use options::ValidationOptions;
pub use report::{Report, Summary, ValidationOutcome};
pub use validator::{Idle, Loaded, Validated, Validator, validate};

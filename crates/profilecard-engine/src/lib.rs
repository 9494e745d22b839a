//! Profile fetch state machine.
//!
//! ```text
//! Initial ──begin_fetch──▶ Loading ──settle(Ok)──▶ Loaded
//!                             │                      │
//!                             └──settle(Err)──▶ FailedIdle
//!                                                    │
//!            Loaded / FailedIdle ──begin_fetch──▶ Loading
//! ```
//!
//! Nothing here performs I/O. The runtime issues the request, then hands the
//! outcome back through [`ProfileState::settle`] together with the ticket it
//! got from [`ProfileState::begin_fetch`].

pub mod sink;
pub mod state;

pub use sink::{ErrorSink, NullSink};
pub use state::{FetchTicket, OverlapPolicy, Phase, ProfileState, Settlement};

//! Nondeterministic finite automaton simulation with epsilon transitions.
//!
//! The core is purely in-process and side-effect free:
//! - a validated, immutable [`Automaton`] model with precomputed epsilon
//!   closures,
//! - a simulation engine that advances the set of simultaneously-active
//!   states over an input string ([`simulate`]) and returns an inspectable
//!   [`Trace`],
//! - a trace renderer ([`write_trace`]) for the step-by-step console format.
//!
//! Interactive data entry lives behind the [`CollectAutomaton`] boundary and
//! never leaks into the core.

mod automaton;
mod collect;
mod simulate;
mod state;
mod symbol;
mod trace;

pub use automaton::{
    Automaton, AutomatonDef, MAX_STATES, MAX_SYMBOLS, MAX_TRANSITIONS, ValidationError,
};
pub use collect::{CollectAutomaton, Collected, EPSILON_MARKER, InteractiveCollector};
pub use simulate::{Trace, TraceStep, Verdict, simulate};
pub use state::{StateId, StateSet};
pub use symbol::{Label, Symbol};
pub use trace::{render_trace, write_trace};

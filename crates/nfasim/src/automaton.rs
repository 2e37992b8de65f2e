//! Validated, immutable epsilon-NFA model.

use crate::state::{StateId, StateSet};
use crate::symbol::{Label, Symbol};
use indexmap::IndexSet;
use std::collections::HashMap;
use std::fmt;

/// Maximum number of states an automaton may declare.
pub const MAX_STATES: usize = 50;
/// Maximum number of alphabet symbols.
pub const MAX_SYMBOLS: usize = 20;
/// Maximum number of transitions.
pub const MAX_TRANSITIONS: usize = 100;

/// Raw automaton fields as collected from the outside world.
///
/// Nothing here is trusted; [`Automaton::new`] validates every field and is
/// the only way to obtain a usable automaton.
#[derive(Debug, Clone, Default)]
pub struct AutomatonDef {
    /// Declared state names.
    pub states: Vec<String>,
    /// Alphabet symbols.
    pub alphabet: Vec<Symbol>,
    /// Transition triples (source, label, destination).
    pub transitions: Vec<(String, Label, String)>,
    /// Start state name.
    pub start: String,
    /// Final state names (may be empty).
    pub finals: Vec<String>,
}

/// The first invariant violated while validating an [`AutomatonDef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The state set is empty.
    NoStates,
    /// More than [`MAX_STATES`] states were declared.
    TooManyStates(usize),
    /// A state name was declared twice.
    DuplicateState(String),
    /// The alphabet is empty.
    NoSymbols,
    /// More than [`MAX_SYMBOLS`] symbols were declared.
    TooManySymbols(usize),
    /// A symbol was declared twice.
    DuplicateSymbol(Symbol),
    /// More than [`MAX_TRANSITIONS`] transitions were declared.
    TooManyTransitions(usize),
    /// A transition references a state that was never declared.
    UnknownState(String),
    /// A transition is labeled with a symbol outside the alphabet.
    UnknownSymbol(Symbol),
    /// The start state was never declared.
    UnknownStartState(String),
    /// A final state was never declared.
    UnknownFinalState(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStates => write!(f, "automaton must declare at least one state"),
            Self::TooManyStates(n) => {
                write!(f, "too many states: {n} (maximum {MAX_STATES})")
            }
            Self::DuplicateState(name) => write!(f, "state '{name}' declared more than once"),
            Self::NoSymbols => write!(f, "alphabet must contain at least one symbol"),
            Self::TooManySymbols(n) => {
                write!(f, "too many alphabet symbols: {n} (maximum {MAX_SYMBOLS})")
            }
            Self::DuplicateSymbol(sym) => write!(f, "symbol '{sym}' declared more than once"),
            Self::TooManyTransitions(n) => {
                write!(f, "too many transitions: {n} (maximum {MAX_TRANSITIONS})")
            }
            Self::UnknownState(name) => {
                write!(f, "transition references undeclared state '{name}'")
            }
            Self::UnknownSymbol(sym) => {
                write!(f, "transition symbol '{sym}' is not in the alphabet")
            }
            Self::UnknownStartState(name) => {
                write!(f, "start state '{name}' is not in the declared states")
            }
            Self::UnknownFinalState(name) => {
                write!(f, "final state '{name}' is not in the declared states")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated epsilon-NFA.
///
/// State names are interned to dense [`StateId`]s in lexicographic order, so
/// iterating a [`StateSet`] yields names already sorted. The transition
/// relation and the per-state epsilon closures are fixed at construction;
/// the automaton is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// State names; the index of a name is its `StateId`.
    names: IndexSet<String>,
    /// Alphabet symbols, sorted.
    alphabet: IndexSet<Symbol>,
    /// Transitions: (source, label) -> set of destinations.
    transitions: HashMap<(StateId, Label), StateSet>,
    /// Start state.
    start: StateId,
    /// Final (accepting) states.
    finals: StateSet,
    /// Epsilon closure of each single state, precomputed.
    closures: Vec<StateSet>,
}

impl Automaton {
    /// Validate a raw definition and build the automaton.
    ///
    /// Validation is all-or-nothing: the first violated invariant is
    /// returned as a [`ValidationError`] and no automaton is produced.
    pub fn new(def: AutomatonDef) -> Result<Self, ValidationError> {
        if def.states.is_empty() {
            return Err(ValidationError::NoStates);
        }
        if def.states.len() > MAX_STATES {
            return Err(ValidationError::TooManyStates(def.states.len()));
        }
        if def.alphabet.is_empty() {
            return Err(ValidationError::NoSymbols);
        }
        if def.alphabet.len() > MAX_SYMBOLS {
            return Err(ValidationError::TooManySymbols(def.alphabet.len()));
        }
        if def.transitions.len() > MAX_TRANSITIONS {
            return Err(ValidationError::TooManyTransitions(def.transitions.len()));
        }

        // Intern names in lexicographic order so ids sort like names.
        let mut sorted_states = def.states.clone();
        sorted_states.sort();
        let mut names = IndexSet::with_capacity(sorted_states.len());
        for name in sorted_states {
            if !names.insert(name.clone()) {
                return Err(ValidationError::DuplicateState(name));
            }
        }

        let mut sorted_symbols = def.alphabet.clone();
        sorted_symbols.sort_unstable();
        let mut alphabet = IndexSet::with_capacity(sorted_symbols.len());
        for sym in sorted_symbols {
            if !alphabet.insert(sym) {
                return Err(ValidationError::DuplicateSymbol(sym));
            }
        }

        let num_states = names.len();
        let state_id = |name: &str| -> Option<StateId> {
            names.get_index_of(name).map(|idx| idx as StateId)
        };

        let mut transitions: HashMap<(StateId, Label), StateSet> = HashMap::new();
        for (source, label, destination) in &def.transitions {
            let src = state_id(source)
                .ok_or_else(|| ValidationError::UnknownState(source.clone()))?;
            let dst = state_id(destination)
                .ok_or_else(|| ValidationError::UnknownState(destination.clone()))?;
            if let Label::Symbol(sym) = label {
                if !alphabet.contains(sym) {
                    return Err(ValidationError::UnknownSymbol(*sym));
                }
            }
            transitions
                .entry((src, *label))
                .or_insert_with(|| StateSet::with_capacity(num_states))
                .insert(dst);
        }

        let start = state_id(&def.start)
            .ok_or_else(|| ValidationError::UnknownStartState(def.start.clone()))?;

        let mut finals = StateSet::with_capacity(num_states);
        for name in &def.finals {
            let id = state_id(name)
                .ok_or_else(|| ValidationError::UnknownFinalState(name.clone()))?;
            finals.insert(id);
        }

        let mut automaton = Self {
            names,
            alphabet,
            transitions,
            start,
            finals,
            closures: Vec::new(),
        };
        let closures = (0..num_states as StateId)
            .map(|state| automaton.epsilon_closure_single(state))
            .collect();
        automaton.closures = closures;
        Ok(automaton)
    }

    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.names.len()
    }

    /// The id of a declared state name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get_index_of(name).map(|idx| idx as StateId)
    }

    /// The name of a state id.
    ///
    /// # Panics
    /// Panics if the id was not produced by this automaton.
    pub fn state_name(&self, state: StateId) -> &str {
        self.names
            .get_index(state as usize)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("state id {state} out of range"))
    }

    /// The names of a set of states, in sorted order.
    pub fn state_names(&self, states: &StateSet) -> Vec<String> {
        states
            .iter()
            .map(|state| self.state_name(state).to_owned())
            .collect()
    }

    /// The start state.
    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// The final (accepting) states.
    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    /// The alphabet, in sorted order.
    pub fn alphabet(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.alphabet.iter().copied()
    }

    /// Check whether a symbol is in the alphabet.
    pub fn contains_symbol(&self, sym: Symbol) -> bool {
        self.alphabet.contains(&sym)
    }

    /// Compute the epsilon closure of a single state with a DFS over the
    /// epsilon edges. Used once per state at construction time.
    fn epsilon_closure_single(&self, state: StateId) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states());
        let mut stack = vec![state];

        while let Some(s) = stack.pop() {
            if closure.contains(s) {
                continue;
            }
            closure.insert(s);

            if let Some(destinations) = self.transitions.get(&(s, Label::Epsilon)) {
                for dest in destinations.iter() {
                    if !closure.contains(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// The epsilon closure of a set of states: the union of the cached
    /// per-state closures. `closure(∅) = ∅`.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            closure.union_with(&self.closures[state as usize]);
        }
        closure
    }

    /// The states reachable from a set on one input symbol, closed under
    /// epsilon transitions.
    ///
    /// An empty destination union yields the empty set, which is absorbing:
    /// no later symbol can repopulate it. A symbol outside the alphabet also
    /// yields the empty set (the caller is expected to have checked symbol
    /// membership up front).
    pub fn move_on_symbol(&self, states: &StateSet, sym: Symbol) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states());

        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, Label::Symbol(sym))) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }
}

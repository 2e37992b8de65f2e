//! Simulation engine: advances an active-state set over an input string.

use crate::automaton::Automaton;
use crate::state::StateSet;
use crate::symbol::Symbol;

/// Accept/reject outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// One observation of the run: the active states after consuming a symbol.
///
/// Step 0 carries no symbol and reports the initial active set, the epsilon
/// closure of the start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// Step index, 0-based. Step k (k ≥ 1) consumed the k-th input symbol.
    pub step: usize,
    /// The symbol consumed to reach this step, absent for step 0.
    pub symbol: Option<Symbol>,
    /// The active state names, sorted.
    pub active: Vec<String>,
}

/// The complete, inspectable record of one simulation run.
///
/// The engine performs no I/O; rendering is left to [`crate::trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// One entry per step, starting with step 0. Never empty.
    pub steps: Vec<TraceStep>,
    /// The verdict over the full input string.
    pub verdict: Verdict,
}

impl Trace {
    /// The active state names after the last consumed symbol.
    pub fn final_active(&self) -> &[String] {
        // steps always holds at least step 0
        &self.steps[self.steps.len() - 1].active
    }

    /// Whether the run accepted the input.
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Run the automaton on an input string, left to right.
///
/// Acceptance is evaluated once, against the active set after the whole
/// string has been consumed; intermediate sets touching a final state do not
/// accept early. The active-set simulation already aggregates every
/// surviving nondeterministic run, so the last set alone decides.
///
/// Callers are expected to pass only alphabet symbols; an out-of-alphabet
/// character collapses the active set to the absorbing empty set.
pub fn simulate(nfa: &Automaton, input: &str) -> Trace {
    let start = StateSet::singleton(nfa.start_state(), nfa.num_states());
    let mut active = nfa.epsilon_closure(&start);

    let mut steps = Vec::with_capacity(input.chars().count() + 1);
    steps.push(TraceStep {
        step: 0,
        symbol: None,
        active: nfa.state_names(&active),
    });

    for (i, sym) in input.chars().enumerate() {
        active = nfa.move_on_symbol(&active, sym);
        steps.push(TraceStep {
            step: i + 1,
            symbol: Some(sym),
            active: nfa.state_names(&active),
        });
    }

    let verdict = if active.intersects(nfa.final_states()) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };

    Trace { steps, verdict }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonDef;
    use crate::symbol::Label;

    // q0 loops on a and b, q0 -a-> q1 -b-> q2(final).
    fn sample_nfa() -> Automaton {
        Automaton::new(AutomatonDef {
            states: vec!["q0".into(), "q1".into(), "q2".into()],
            alphabet: vec!['a', 'b'],
            transitions: vec![
                ("q0".into(), Label::Symbol('a'), "q0".into()),
                ("q0".into(), Label::Symbol('b'), "q0".into()),
                ("q0".into(), Label::Symbol('a'), "q1".into()),
                ("q1".into(), Label::Symbol('b'), "q2".into()),
            ],
            start: "q0".into(),
            finals: vec!["q2".into()],
        })
        .unwrap()
    }

    #[test]
    fn test_accepts_ab() {
        let trace = simulate(&sample_nfa(), "ab");

        assert_eq!(trace.steps.len(), 3);
        assert_eq!(trace.steps[0].symbol, None);
        assert_eq!(trace.steps[0].active, vec!["q0"]);
        assert_eq!(trace.steps[1].symbol, Some('a'));
        assert_eq!(trace.steps[1].active, vec!["q0", "q1"]);
        assert_eq!(trace.steps[2].symbol, Some('b'));
        assert_eq!(trace.steps[2].active, vec!["q0", "q2"]);
        assert_eq!(trace.verdict, Verdict::Accepted);
    }

    #[test]
    fn test_rejects_ba() {
        let trace = simulate(&sample_nfa(), "ba");

        assert_eq!(trace.steps[1].active, vec!["q0"]);
        assert_eq!(trace.steps[2].active, vec!["q0", "q1"]);
        assert_eq!(trace.verdict, Verdict::Rejected);
        assert!(!trace.is_accepted());
    }

    #[test]
    fn test_empty_input() {
        // Acceptance of "" reduces to closure({start}) ∩ finals.
        let trace = simulate(&sample_nfa(), "");
        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.final_active(), ["q0"]);
        assert_eq!(trace.verdict, Verdict::Rejected);

        let nfa = Automaton::new(AutomatonDef {
            states: vec!["q0".into(), "q1".into()],
            alphabet: vec!['a'],
            transitions: vec![("q0".into(), Label::Epsilon, "q1".into())],
            start: "q0".into(),
            finals: vec!["q1".into()],
        })
        .unwrap();
        assert!(simulate(&nfa, "").is_accepted());
    }

    #[test]
    fn test_empty_set_is_absorbing() {
        // q1 has no outgoing transitions, so "aa" strands the run.
        let nfa = Automaton::new(AutomatonDef {
            states: vec!["q0".into(), "q1".into()],
            alphabet: vec!['a'],
            transitions: vec![("q0".into(), Label::Symbol('a'), "q1".into())],
            start: "q0".into(),
            finals: vec!["q1".into()],
        })
        .unwrap();

        let trace = simulate(&nfa, "aaa");
        assert_eq!(trace.steps[1].active, vec!["q1"]);
        assert!(trace.steps[2].active.is_empty());
        assert!(trace.steps[3].active.is_empty());
        assert_eq!(trace.verdict, Verdict::Rejected);
    }

    #[test]
    fn test_no_early_acceptance() {
        // The run passes through the final state mid-string but must still
        // be judged on the last active set only.
        let nfa = Automaton::new(AutomatonDef {
            states: vec!["q0".into(), "q1".into()],
            alphabet: vec!['a'],
            transitions: vec![
                ("q0".into(), Label::Symbol('a'), "q1".into()),
                ("q1".into(), Label::Symbol('a'), "q0".into()),
            ],
            start: "q0".into(),
            finals: vec!["q1".into()],
        })
        .unwrap();

        assert!(simulate(&nfa, "a").is_accepted());
        assert!(!simulate(&nfa, "aa").is_accepted());
    }

    #[test]
    fn test_initial_closure_spans_epsilon() {
        // q0 -ε-> q1 -a-> q2(final)
        let nfa = Automaton::new(AutomatonDef {
            states: vec!["q0".into(), "q1".into(), "q2".into()],
            alphabet: vec!['a'],
            transitions: vec![
                ("q0".into(), Label::Epsilon, "q1".into()),
                ("q1".into(), Label::Symbol('a'), "q2".into()),
            ],
            start: "q0".into(),
            finals: vec!["q2".into()],
        })
        .unwrap();

        let trace = simulate(&nfa, "a");
        assert_eq!(trace.steps[0].active, vec!["q0", "q1"]);
        assert!(trace.is_accepted());
    }
}

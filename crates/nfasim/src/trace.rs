//! Textual rendering of simulation traces.
//!
//! A pure observer over [`Trace`] values; nothing here feeds back into the
//! simulation.

use crate::simulate::{Trace, Verdict};
use std::io::{self, Write};

fn format_states(states: &[String]) -> String {
    format!("[{}]", states.join(", "))
}

/// Write the step-by-step trace and verdict to `out`.
///
/// ```text
/// Step 0: Current states = [q0]
/// Step 1: After symbol 'a', current states = [q0, q1]
///
/// Final states reached: [q0, q1]
/// Result: String REJECTED.
/// ```
pub fn write_trace<W: Write>(trace: &Trace, out: &mut W) -> io::Result<()> {
    for step in &trace.steps {
        match step.symbol {
            None => writeln!(
                out,
                "Step {}: Current states = {}",
                step.step,
                format_states(&step.active)
            )?,
            Some(sym) => writeln!(
                out,
                "Step {}: After symbol '{}', current states = {}",
                step.step,
                sym,
                format_states(&step.active)
            )?,
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Final states reached: {}",
        format_states(trace.final_active())
    )?;
    match trace.verdict {
        Verdict::Accepted => writeln!(out, "Result: String ACCEPTED."),
        Verdict::Rejected => writeln!(out, "Result: String REJECTED."),
    }
}

/// Render the trace to a string.
pub fn render_trace(trace: &Trace) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec<u8> cannot fail.
    write_trace(trace, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Automaton, AutomatonDef};
    use crate::simulate::simulate;
    use crate::symbol::Label;

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
    fn test_render_accepted() {
        let trace = simulate(&sample_nfa(), "ab");
        let expected = "\
Step 0: Current states = [q0]
Step 1: After symbol 'a', current states = [q0, q1]
Step 2: After symbol 'b', current states = [q0, q2]

Final states reached: [q0, q2]
Result: String ACCEPTED.
";
        assert_eq!(render_trace(&trace), expected);
    }

    #[test]
    fn test_render_rejected() {
        let trace = simulate(&sample_nfa(), "ba");
        let expected = "\
Step 0: Current states = [q0]
Step 1: After symbol 'b', current states = [q0]
Step 2: After symbol 'a', current states = [q0, q1]

Final states reached: [q0, q1]
Result: String REJECTED.
";
        assert_eq!(render_trace(&trace), expected);
    }

    #[test]
    fn test_render_empty_input() {
        let trace = simulate(&sample_nfa(), "");
        let expected = "\
Step 0: Current states = [q0]

Final states reached: [q0]
Result: String REJECTED.
";
        assert_eq!(render_trace(&trace), expected);
    }

    #[test]
    fn test_render_empty_active_set() {
        let nfa = Automaton::new(AutomatonDef {
            states: vec!["q0".into()],
            alphabet: vec!['a', 'b'],
            transitions: vec![("q0".into(), Label::Symbol('a'), "q0".into())],
            start: "q0".into(),
            finals: vec!["q0".into()],
        })
        .unwrap();
        let trace = simulate(&nfa, "b");
        let rendered = render_trace(&trace);
        assert!(rendered.contains("Step 1: After symbol 'b', current states = []"));
        assert!(rendered.ends_with("Result: String REJECTED.\n"));
    }
}

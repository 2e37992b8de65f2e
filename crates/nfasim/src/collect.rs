//! Interactive collection of an automaton definition.
//!
//! This is the fallible data-entry side of the system. It re-prompts
//! indefinitely on malformed entry and only ever hands a validated
//! [`Automaton`] onward; the simulation core never calls back into it.

use crate::automaton::{Automaton, AutomatonDef, MAX_STATES, MAX_SYMBOLS, MAX_TRANSITIONS};
use crate::symbol::{Label, Symbol};
use anyhow::{Context, Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The character standing in for epsilon when typing transitions.
/// It is an artifact of the entry format only; the [`Label`] type itself
/// reserves no character.
pub const EPSILON_MARKER: char = 'e';

const MAX_NAME_LEN: usize = 20;
const MAX_INPUT_LEN: usize = 100;

/// A validated automaton together with the string to run it on.
pub struct Collected {
    pub automaton: Automaton,
    pub input: String,
}

/// The external data-entry boundary.
///
/// Implementations may retry on bad input however they like; the contract is
/// only that a returned [`Collected`] holds a validated automaton and an
/// input string drawn entirely from its alphabet.
pub trait CollectAutomaton {
    fn collect(&mut self) -> Result<Collected>;
}

/// Parse a transition entered as `start symbol end`, with
/// [`EPSILON_MARKER`] meaning epsilon.
pub fn parse_transition(
    line: &str,
    states: &[String],
    alphabet: &[Symbol],
) -> Result<(String, Label, String), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("Invalid format. Use: start symbol end".to_string());
    }
    let (source, symbol, destination) = (parts[0], parts[1], parts[2]);

    let declared = |name: &str| states.iter().any(|s| s.as_str() == name);
    if !declared(source) || !declared(destination) {
        return Err("Invalid states. Try again.".to_string());
    }

    let mut chars = symbol.chars();
    let (Some(sym), None) = (chars.next(), chars.next()) else {
        return Err("Symbol must be a single character.".to_string());
    };

    let label = if sym == EPSILON_MARKER {
        Label::Epsilon
    } else if alphabet.contains(&sym) {
        Label::Symbol(sym)
    } else {
        return Err("Symbol not in alphabet. Try again.".to_string());
    };

    Ok((source.to_string(), label, destination.to_string()))
}

/// Console collector reproducing the original prompt-and-retry flow.
pub struct InteractiveCollector {
    editor: DefaultEditor,
}

impl InteractiveCollector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line.trim().to_string()),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                bail!("input ended before the automaton was fully entered")
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Read the number of states. Accepts a float and rounds, like the
    /// original.
    fn read_num_states(&mut self) -> Result<usize> {
        loop {
            let line = self.prompt("Enter number of states (can be float, will round): ")?;
            match line.parse::<f64>() {
                Ok(value) => {
                    let n = value.round();
                    if (1.0..=MAX_STATES as f64).contains(&n) {
                        return Ok(n as usize);
                    }
                    println!("Number of states must be between 1 and {MAX_STATES}.");
                }
                Err(_) => println!("Invalid input. Try again."),
            }
        }
    }

    fn read_count(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            let line = self.prompt(prompt)?;
            match line.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => println!("Number out of range. Try again."),
            }
        }
    }

    fn read_state_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let name = self.prompt(prompt)?;
            if !name.is_empty()
                && name.len() <= MAX_NAME_LEN
                && !name.contains(char::is_whitespace)
            {
                return Ok(name);
            }
            println!("Invalid state name. Try again (1-{MAX_NAME_LEN} chars, no spaces).");
        }
    }

    fn read_states(&mut self) -> Result<Vec<String>> {
        let n = self.read_num_states()?;
        let mut states = Vec::with_capacity(n);
        println!("Enter state names:");
        while states.len() < n {
            let name = self.read_state_name(&format!("State {}: ", states.len()))?;
            if states.contains(&name) {
                println!("State '{name}' already declared. Try again.");
                continue;
            }
            states.push(name);
        }
        Ok(states)
    }

    fn read_alphabet(&mut self) -> Result<Vec<Symbol>> {
        let n = self.read_count(
            &format!("Enter number of symbols in the alphabet (1-{MAX_SYMBOLS}): "),
            1,
            MAX_SYMBOLS,
        )?;
        let mut alphabet = Vec::with_capacity(n);
        println!("Enter alphabet symbols (one per line):");
        while alphabet.len() < n {
            let line = self.prompt(&format!("Symbol {}: ", alphabet.len() + 1))?;
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(sym), None) if sym != EPSILON_MARKER => {
                    if alphabet.contains(&sym) {
                        println!("Symbol '{sym}' already declared. Try again.");
                    } else {
                        alphabet.push(sym);
                    }
                }
                _ => println!(
                    "Invalid symbol. Must be a single character and not '{EPSILON_MARKER}'."
                ),
            }
        }
        Ok(alphabet)
    }

    fn read_transitions(
        &mut self,
        states: &[String],
        alphabet: &[Symbol],
    ) -> Result<Vec<(String, Label, String)>> {
        let n = self.read_count(
            &format!("Enter number of transitions (0-{MAX_TRANSITIONS}): "),
            0,
            MAX_TRANSITIONS,
        )?;
        let mut transitions = Vec::with_capacity(n);
        println!("Enter transitions (start symbol end), use '{EPSILON_MARKER}' for epsilon:");
        while transitions.len() < n {
            let line = self.prompt(&format!("Transition {}: ", transitions.len() + 1))?;
            match parse_transition(&line, states, alphabet) {
                Ok(transition) => transitions.push(transition),
                Err(msg) => println!("{msg}"),
            }
        }
        Ok(transitions)
    }

    fn read_start_state(&mut self, states: &[String]) -> Result<String> {
        loop {
            let name = self.read_state_name("Enter start state: ")?;
            if states.contains(&name) {
                return Ok(name);
            }
            println!("Invalid start state. Try again.");
        }
    }

    fn read_final_states(&mut self, states: &[String]) -> Result<Vec<String>> {
        let n = self.read_count(
            &format!("Enter number of final states (0-{}): ", states.len()),
            0,
            states.len(),
        )?;
        let mut finals = Vec::with_capacity(n);
        for i in 0..n {
            loop {
                let name = self.read_state_name(&format!("Final state {}: ", i + 1))?;
                if states.contains(&name) {
                    finals.push(name);
                    break;
                }
                println!("Invalid final state. Try again.");
            }
        }
        Ok(finals)
    }

    /// Read the input string; every character must be in the alphabet so the
    /// simulation's precondition holds. The empty string is allowed.
    fn read_input_string(&mut self, alphabet: &[Symbol]) -> Result<String> {
        loop {
            let input = self.prompt("Enter string to test: ")?;
            if input.chars().count() > MAX_INPUT_LEN {
                println!("Input too long (max {MAX_INPUT_LEN} chars). Try again.");
                continue;
            }
            if let Some(bad) = input.chars().find(|c| !alphabet.contains(c)) {
                println!("Character '{bad}' is not in the alphabet. Try again.");
                continue;
            }
            return Ok(input);
        }
    }
}

impl CollectAutomaton for InteractiveCollector {
    fn collect(&mut self) -> Result<Collected> {
        let states = self.read_states()?;
        let alphabet = self.read_alphabet()?;
        let transitions = self.read_transitions(&states, &alphabet)?;
        let start = self.read_start_state(&states)?;
        let finals = self.read_final_states(&states)?;
        let input = self.read_input_string(&alphabet)?;

        // Every field was checked during entry, so this only fails if the
        // entry checks and the model validation ever drift apart.
        let automaton = Automaton::new(AutomatonDef {
            states,
            alphabet,
            transitions,
            start,
            finals,
        })
        .context("collected definition failed validation")?;

        Ok(Collected { automaton, input })
    }
}

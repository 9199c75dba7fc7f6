// Execution engine for the Grass machine

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::{InputQueue, OutputBuffer};
use crate::memory::env::Env;
use crate::memory::value::Value;
use crate::parser::ast::{Insn, Program};
use std::collections::VecDeque;
use std::fmt;

/// Machine lifecycle status.
///
/// A machine is constructed `Ready`, becomes `Running` when a program is
/// loaded, and reaches `Terminated` exactly once; further steps are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Running,
    Terminated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "ready"),
            Status::Running => write!(f, "running"),
            Status::Terminated => write!(f, "terminated"),
        }
    }
}

/// Interpreter options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Skip the dump push on a saturating call made with an empty code
    /// queue. Never changes observable output, only dump growth.
    pub tail_call_optimization: bool,
}

/// A saved caller: the code queue and environment to resume once the
/// current scope produces its result.
#[derive(Debug, Clone)]
struct Frame {
    code: VecDeque<Insn>,
    env: Env,
}

/// The Grass machine: one instance per program run.
///
/// The machine advances one instruction (or one dump pop) per [`step`]
/// call and never loops internally; run-to-completion policy belongs to
/// whatever drives it.
///
/// [`step`]: Machine::step
pub struct Machine {
    /// Pending instructions of the current scope, consumed front to back
    code: VecDeque<Insn>,

    /// Current binding environment
    env: Env,

    /// Continuation stack of saved callers
    dump: Vec<Frame>,

    /// Accumulated program output
    output: OutputBuffer,

    /// Pre-populated program input
    input: InputQueue,

    options: Options,
    status: Status,
}

impl Machine {
    /// Create a machine seeded with the fixed bootstrap state.
    ///
    /// The environment holds the language's four global bindings,
    /// bottom-to-top `In`, `Char('w')`, `Succ`, `Out`, so that index 1 is
    /// `Out` and index 4 is `In`. The dump holds two frames: a terminal
    /// empty frame, and above it a frame whose sole instruction `App(1, 1)`
    /// applies the finished program's result to itself. That
    /// self-application is the language's entry convention: a program
    /// denotes a function and is started as `program(program)`.
    pub fn new(input: Vec<u8>) -> Self {
        Machine {
            code: VecDeque::new(),
            env: Env::from_values(vec![
                Value::In,
                Value::Char(b'w'),
                Value::Succ,
                Value::Out,
            ]),
            dump: vec![
                Frame {
                    code: VecDeque::new(),
                    env: Env::new(),
                },
                Frame {
                    code: VecDeque::from(vec![Insn::App { func: 1, arg: 1 }]),
                    env: Env::new(),
                },
            ],
            output: OutputBuffer::new(),
            input: InputQueue::from_bytes(input),
            options: Options::default(),
            status: Status::Ready,
        }
    }

    /// Load a parsed program, transitioning `Ready` → `Running`.
    ///
    /// The seeded environment and dump are left untouched.
    pub fn load(&mut self, program: Program) -> Result<(), RuntimeError> {
        if self.status != Status::Ready {
            return Err(RuntimeError::AlreadyLoaded {
                status: self.status,
            });
        }
        self.code = VecDeque::from(program);
        self.status = Status::Running;
        Ok(())
    }

    /// Advance the machine by exactly one step.
    ///
    /// With pending instructions, evaluates the first one. With an empty
    /// queue, the top of the environment is the finished scope's result:
    /// either the machine terminates (empty dump) or the topmost caller is
    /// restored with that result pushed as its newest binding.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        match self.status {
            Status::Ready => return Err(RuntimeError::NotStarted),
            Status::Terminated => return Ok(()),
            Status::Running => {}
        }

        match self.code.pop_front() {
            Some(insn) => self.eval(insn),
            None => {
                let ret = self.lookup(1)?.clone();
                match self.dump.pop() {
                    None => {
                        self.status = Status::Terminated;
                        Ok(())
                    }
                    Some(frame) => {
                        self.code = frame.code;
                        self.env = frame.env;
                        self.env.push(ret);
                        Ok(())
                    }
                }
            }
        }
    }

    /// Evaluate a single instruction.
    fn eval(&mut self, insn: Insn) -> Result<(), RuntimeError> {
        match insn {
            Insn::App { func, arg } => {
                // Resolve both operands before the application mutates the
                // environment.
                let func = self.lookup(func)?.clone();
                let arg = self.lookup(arg)?.clone();
                self.apply(func, arg)
            }
            Insn::Abs { arity, body } => {
                let closure = Value::Closure {
                    arity,
                    body,
                    env: self.env.clone(),
                };
                self.env.push(closure);
                Ok(())
            }
        }
    }

    /// Apply `func` to `arg`: the single dispatch point over value kinds.
    fn apply(&mut self, func: Value, arg: Value) -> Result<(), RuntimeError> {
        match func {
            Value::Closure { arity, body, env } => {
                // `func` is already a copy of the environment slot, so its
                // captured env is ours to extend.
                let mut call_env = env;
                call_env.push(arg);

                if arity == 1 {
                    // Saturating call: transfer control into the body.
                    let tail_call =
                        self.options.tail_call_optimization && self.code.is_empty();
                    if !tail_call {
                        self.dump.push(Frame {
                            code: std::mem::take(&mut self.code),
                            env: std::mem::take(&mut self.env),
                        });
                    }
                    self.code = VecDeque::from(body);
                    self.env = call_env;
                } else {
                    // Partial application: bind one argument, stay put.
                    self.env.push(Value::Closure {
                        arity: arity - 1,
                        body,
                        env: call_env,
                    });
                }
                Ok(())
            }
            Value::Char(byte) => {
                let other = expect_char("compare", &arg)?;
                self.env.push(Value::truth(byte == other));
                Ok(())
            }
            Value::Out => {
                let byte = expect_char("output", &arg)?;
                self.output.put(byte);
                // Pass the char back through so output chains compose.
                self.env.push(arg);
                Ok(())
            }
            Value::In => {
                match self.input.read() {
                    Some(byte) => self.env.push(Value::Char(byte)),
                    // End of input: hand the caller its own fallback back.
                    None => self.env.push(arg),
                }
                Ok(())
            }
            Value::Succ => {
                let byte = expect_char("successor", &arg)?;
                self.env.push(Value::Char(byte.wrapping_add(1)));
                Ok(())
            }
        }
    }

    fn lookup(&self, index: usize) -> Result<&Value, RuntimeError> {
        self.env.get(index).ok_or(RuntimeError::IndexOutOfRange {
            index,
            len: self.env.len(),
        })
    }

    // ===== Read-only projections for drivers and hosts =====

    pub fn status(&self) -> Status {
        self.status
    }

    /// Output accumulated so far, readable at any time including mid-run.
    pub fn output_bytes(&self) -> &[u8] {
        self.output.bytes()
    }

    /// Pending instructions in the current scope.
    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    /// Depth of the continuation stack.
    pub fn dump_depth(&self) -> usize {
        self.dump.len()
    }

    /// Current environment contents, bottom-to-top.
    pub fn env_values(&self) -> &[Value] {
        self.env.values()
    }

    /// Unread input bytes.
    pub fn input_remaining(&self) -> usize {
        self.input.remaining()
    }

    pub fn set_tail_call_optimization(&mut self, enabled: bool) {
        self.options.tail_call_optimization = enabled;
    }
}

fn expect_char(operation: &'static str, value: &Value) -> Result<u8, RuntimeError> {
    value.as_char().ok_or(RuntimeError::NotAChar {
        operation,
        got: value.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Step until termination, with a generous fuel cap so a broken machine
    /// fails the test instead of hanging it.
    fn run_to_end(machine: &mut Machine) -> Result<(), RuntimeError> {
        for _ in 0..10_000 {
            machine.step()?;
            if machine.status() == Status::Terminated {
                return Ok(());
            }
        }
        panic!("machine did not terminate within fuel limit");
    }

    #[test]
    fn test_bootstrap_layout() {
        let machine = Machine::new(vec![]);
        assert_eq!(machine.status(), Status::Ready);
        assert_eq!(machine.code_len(), 0);
        assert_eq!(machine.dump_depth(), 2);
        assert_eq!(
            machine.env_values(),
            &[
                Value::In,
                Value::Char(b'w'),
                Value::Succ,
                Value::Out,
            ]
        );
    }

    #[test]
    fn test_step_before_load() {
        let mut machine = Machine::new(vec![]);
        assert_eq!(machine.step(), Err(RuntimeError::NotStarted));
    }

    #[test]
    fn test_load_twice() {
        let mut machine = Machine::new(vec![]);
        machine.load(vec![]).unwrap();
        assert_eq!(machine.status(), Status::Running);
        assert_eq!(
            machine.load(vec![]),
            Err(RuntimeError::AlreadyLoaded {
                status: Status::Running,
            })
        );
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let mut machine = Machine::new(vec![]);
        machine
            .load(vec![Insn::Abs { arity: 1, body: vec![] }])
            .unwrap();
        run_to_end(&mut machine).unwrap();

        let output_len = machine.output_bytes().len();
        for _ in 0..3 {
            machine.step().unwrap();
            assert_eq!(machine.status(), Status::Terminated);
            assert_eq!(machine.output_bytes().len(), output_len);
        }
    }

    #[test]
    fn test_identity_program_self_applies_and_terminates() {
        // The minimal program: a single arity-1 abstraction with an empty
        // body, invoked as program(program) by the seeded dump.
        let mut machine = Machine::new(vec![]);
        machine
            .load(vec![Insn::Abs { arity: 1, body: vec![] }])
            .unwrap();
        run_to_end(&mut machine).unwrap();

        assert_eq!(machine.status(), Status::Terminated);
        assert!(machine.output_bytes().is_empty());
        assert_eq!(machine.dump_depth(), 0);
    }

    #[test]
    fn test_succ_wraps_at_byte_boundary() {
        let mut machine = Machine::new(vec![]);
        machine.apply(Value::Succ, Value::Char(255)).unwrap();
        assert_eq!(machine.env_values().last(), Some(&Value::Char(0)));

        machine.apply(Value::Succ, Value::Char(b'a')).unwrap();
        assert_eq!(machine.env_values().last(), Some(&Value::Char(b'b')));
    }

    #[test]
    fn test_succ_requires_char() {
        let mut machine = Machine::new(vec![]);
        assert_eq!(
            machine.apply(Value::Succ, Value::Out),
            Err(RuntimeError::NotAChar {
                operation: "successor",
                got: "Out",
            })
        );
    }

    #[test]
    fn test_char_comparison_pushes_truth() {
        let mut machine = Machine::new(vec![]);
        machine
            .apply(Value::Char(b'x'), Value::Char(b'x'))
            .unwrap();
        assert_eq!(machine.env_values().last(), Some(&Value::truth(true)));

        machine
            .apply(Value::Char(b'x'), Value::Char(b'y'))
            .unwrap();
        assert_eq!(machine.env_values().last(), Some(&Value::truth(false)));
    }

    #[test]
    fn test_char_comparison_requires_char() {
        let mut machine = Machine::new(vec![]);
        assert_eq!(
            machine.apply(Value::Char(0), Value::In),
            Err(RuntimeError::NotAChar {
                operation: "compare",
                got: "In",
            })
        );
    }

    #[test]
    fn test_out_writes_and_passes_through() {
        let mut machine = Machine::new(vec![]);
        machine.apply(Value::Out, Value::Char(b'g')).unwrap();
        assert_eq!(machine.output_bytes(), b"g");
        assert_eq!(machine.env_values().last(), Some(&Value::Char(b'g')));

        assert_eq!(
            machine.apply(Value::Out, Value::Succ),
            Err(RuntimeError::NotAChar {
                operation: "output",
                got: "Succ",
            })
        );
        // A fault leaves already-accumulated output intact.
        assert_eq!(machine.output_bytes(), b"g");
    }

    #[test]
    fn test_in_reads_then_falls_back() {
        let mut machine = Machine::new(vec![b'z']);
        machine.apply(Value::In, Value::Out).unwrap();
        assert_eq!(machine.env_values().last(), Some(&Value::Char(b'z')));

        // Exhausted: the caller-supplied argument comes back unchanged,
        // repeatably.
        for _ in 0..3 {
            machine.apply(Value::In, Value::Out).unwrap();
            assert_eq!(machine.env_values().last(), Some(&Value::Out));
        }
    }

    #[test]
    fn test_index_fault_on_malformed_program() {
        let mut machine = Machine::new(vec![]);
        machine
            .load(vec![Insn::App { func: 9, arg: 1 }])
            .unwrap();
        assert_eq!(
            machine.step(),
            Err(RuntimeError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_partial_application_binds_without_control_transfer() {
        let mut machine = Machine::new(vec![]);
        let depth_before = machine.dump_depth();
        machine
            .apply(Value::truth(true), Value::Char(b'a'))
            .unwrap();

        assert_eq!(machine.dump_depth(), depth_before);
        assert_eq!(machine.code_len(), 0);
        match machine.env_values().last() {
            Some(Value::Closure { arity, env, .. }) => {
                assert_eq!(*arity, 1);
                assert_eq!(env.get(1), Some(&Value::Char(b'a')));
            }
            other => panic!("expected a partial closure, got {:?}", other),
        }
    }

    #[test]
    fn test_tail_call_skips_dump_push() {
        let identity = vec![Insn::Abs { arity: 1, body: vec![] }];

        let mut plain = Machine::new(vec![]);
        plain.load(identity.clone()).unwrap();
        plain.step().unwrap(); // Abs
        plain.step().unwrap(); // scope return into App(1,1) frame
        plain.step().unwrap(); // App(1,1): saturating call with empty queue
        assert_eq!(plain.dump_depth(), 2);

        let mut tco = Machine::new(vec![]);
        tco.set_tail_call_optimization(true);
        tco.load(identity).unwrap();
        tco.step().unwrap();
        tco.step().unwrap();
        tco.step().unwrap();
        assert_eq!(tco.dump_depth(), 1);
    }
}

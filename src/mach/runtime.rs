use super::{Expression, Operation, Program, Statement, Val, Var};
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime
///
/// Executes a `Program` one step at a time. Every call to `execute`
/// runs until something is visible to the host and reports it as an
/// `Event`. An `Input` event pauses the program; it repeats on every
/// call until `enter` supplies the reply. `Stopped` means finished.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Print(String),
    Input(String),
    Errors(Rc<Vec<Error>>),
}

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    pc: usize,
    vars: Var,
    state: State,
}

#[derive(Debug)]
enum State {
    Running,
    Waiting(Rc<str>, Rc<str>),
    Failed(Error),
    Stopped,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Program::lesson())
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            pc: 0,
            vars: Var::new(),
            state: State::Running,
        }
    }

    /// Start over from the first statement with no variables.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.vars.clear();
        self.state = State::Running;
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.vars.get(name)
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.state, State::Waiting(..))
    }

    /// Answer the pending `Input` event. Returns false when nothing was asked.
    pub fn enter(&mut self, s: &str) -> bool {
        let var_name = match &self.state {
            State::Waiting(var_name, _) => var_name.clone(),
            _ => return false,
        };
        match s.trim().parse::<i64>() {
            Ok(n) => {
                self.vars.store(&var_name, Val::Integer(n));
                self.pc += 1;
                self.state = State::Running;
            }
            Err(_) => self.state = State::Failed(error!(InvalidNumber)),
        }
        true
    }

    /// The host ran out of input while a reply was pending.
    pub fn end_of_input(&mut self) {
        if self.is_waiting() {
            self.state = State::Failed(error!(InputPastEnd));
        }
    }

    pub fn execute(&mut self) -> Event {
        loop {
            match &self.state {
                State::Running => {}
                State::Waiting(_, prompt) => return Event::Input(prompt.to_string()),
                State::Stopped => return Event::Stopped,
                State::Failed(error) => {
                    let error = error.clone();
                    self.state = State::Stopped;
                    return Event::Errors(Rc::new(vec![error]));
                }
            }
            let statement = match self.program.get(self.pc) {
                Some(statement) => statement.clone(),
                None => {
                    self.state = State::Stopped;
                    return Event::Stopped;
                }
            };
            match self.step(statement) {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => self.state = State::Failed(error),
            }
        }
    }

    fn step(&mut self, statement: Statement) -> Result<Option<Event>> {
        match statement {
            Statement::Let(var_name, expr) => {
                let val = self.eval(&expr)?;
                self.vars.store(&var_name, val);
                self.pc += 1;
                Ok(None)
            }
            Statement::Print(exprs) => {
                let mut vals = Vec::with_capacity(exprs.len());
                for expr in &exprs {
                    vals.push(self.eval(expr)?.to_string());
                }
                let mut s = vals.join(" ");
                s.push('\n');
                self.pc += 1;
                Ok(Some(Event::Print(s)))
            }
            Statement::Input(var_name, prompt) => {
                let event = Event::Input(prompt.to_string());
                self.state = State::Waiting(var_name, prompt);
                Ok(Some(event))
            }
        }
    }

    fn eval(&self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Literal(val) => Ok(val.clone()),
            Expression::Var(var_name) => self.vars.fetch(var_name),
            Expression::Add(l, r) => Operation::sum(self.eval(l)?, self.eval(r)?),
            Expression::Subtract(l, r) => Operation::subtract(self.eval(l)?, self.eval(r)?),
            Expression::Divide(l, r) => Operation::divide(self.eval(l)?, self.eval(r)?),
            Expression::Multiply(l, r) => Operation::multiply(self.eval(l)?, self.eval(r)?),
            Expression::Power(l, r) => Operation::power(self.eval(l)?, self.eval(r)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_name() {
        let mut r = Runtime::default();
        assert_eq!(r.execute(), Event::Print("Rehan\n".to_string()));
        assert_eq!(r.var("age"), Some(&Val::Integer(21)));
    }

    #[test]
    fn test_enter_without_prompt() {
        let mut r = Runtime::default();
        assert!(!r.enter("5"));
    }

    #[test]
    fn test_undefined_variable_stops() {
        let mut p = Program::new();
        p.push(Statement::Print(vec![Expression::Var("missing".into())]));
        p.push(Statement::Print(vec![Expression::Literal(Val::Integer(1))]));
        let mut r = Runtime::new(p);
        assert_eq!(
            r.execute(),
            Event::Errors(Rc::new(vec![error!(UndefinedVariable)]))
        );
        assert_eq!(r.execute(), Event::Stopped);
    }

    #[test]
    fn test_waiting_until_enter() {
        let mut r = Runtime::new(Program::interactive_lesson());
        for _ in 0..3 {
            r.execute();
        }
        assert_eq!(r.execute(), Event::Input("Enter first number: ".to_string()));
        assert!(r.is_waiting());
        assert_eq!(r.execute(), Event::Input("Enter first number: ".to_string()));
        assert!(r.var("sum").is_none());
        assert!(r.enter(" 7 \n"));
        assert_eq!(r.var("first_number"), Some(&Val::Integer(7)));
        assert_eq!(r.execute(), Event::Input("Enter second number: ".to_string()));
    }

    #[test]
    fn test_never_stops_while_waiting() {
        let mut r = Runtime::new(Program::interactive_lesson());
        let mut events = Vec::new();
        for _ in 0..6 {
            events.push(r.execute());
        }
        assert!(!events.contains(&Event::Stopped));
        assert_eq!(events[5], Event::Input("Enter first number: ".to_string()));
        r.end_of_input();
        assert!(matches!(r.execute(), Event::Errors(_)));
        assert_eq!(r.execute(), Event::Stopped);
    }

    #[test]
    fn test_reset() {
        let mut r = Runtime::default();
        while r.execute() != Event::Stopped {}
        assert!(r.var("pow").is_some());
        r.reset();
        assert!(r.var("pow").is_none());
        assert_eq!(r.execute(), Event::Print("Rehan\n".to_string()));
    }
}

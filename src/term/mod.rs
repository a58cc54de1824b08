extern crate ansi_term;
extern crate linefeed;
use crate::mach::{Event, Program, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::Write;

const USAGE: &str = "usage: lesson [--input]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Batch,
    Input,
    Help,
}

/// Reads the flags after the program name. `None` is a bad flag.
pub fn parse_args<I>(args: I) -> Option<Mode>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut mode = Mode::Batch;
    for arg in args {
        match arg.as_ref() {
            "-i" | "--input" => mode = Mode::Input,
            "-h" | "--help" => return Some(Mode::Help),
            _ => return None,
        }
    }
    Some(mode)
}

pub fn main() {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let args = std::env::args().skip(1);
    match run(args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(0) => {}
        Ok(status) => std::process::exit(status),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Picks the mode from the flags and runs it. Returns the exit status:
/// 0 when the lesson finishes, 1 on a runtime error, 2 on a bad flag.
pub fn run<I, O, E>(args: I, out: &mut O, err: &mut E) -> std::io::Result<i32>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    O: Write,
    E: Write,
{
    match parse_args(args) {
        None => {
            writeln!(err, "{}", USAGE)?;
            Ok(2)
        }
        Some(Mode::Help) => {
            writeln!(out, "{}", USAGE)?;
            Ok(0)
        }
        Some(Mode::Batch) => batch_loop(&mut Runtime::new(Program::lesson()), out, err),
        Some(Mode::Input) => interactive_loop(),
    }
}

/// Runs a program with no one to answer input. Returns the exit status.
pub fn batch_loop<O: Write, E: Write>(
    runtime: &mut Runtime,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<i32> {
    loop {
        match runtime.execute() {
            Event::Stopped => {
                out.flush()?;
                return Ok(0);
            }
            Event::Print(s) => out.write_all(s.as_bytes())?,
            Event::Input(_) => runtime.end_of_input(),
            Event::Errors(errors) => {
                out.flush()?;
                for error in errors.iter() {
                    writeln!(err, "{}", Style::new().bold().paint(error.to_string()))?;
                }
                return Ok(1);
            }
        }
    }
}

fn interactive_loop() -> std::io::Result<i32> {
    let mut runtime = Runtime::new(Program::interactive_lesson());
    let input = Interface::new("lesson")?;
    loop {
        match runtime.execute() {
            Event::Stopped => return Ok(0),
            Event::Print(s) => input.write_fmt(format_args!("{}", s))?,
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => runtime.end_of_input(),
                }
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    input.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
                return Ok(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(Vec::<String>::new()), Some(Mode::Batch));
        assert_eq!(parse_args(vec!["--input"]), Some(Mode::Input));
        assert_eq!(parse_args(vec!["-i"]), Some(Mode::Input));
        assert_eq!(parse_args(vec!["-i", "--help"]), Some(Mode::Help));
        assert_eq!(parse_args(vec!["--verbose"]), None);
    }
}

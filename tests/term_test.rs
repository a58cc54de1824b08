use lesson::mach::{Expression, Program, Runtime, Statement, Val};
use lesson::term::{batch_loop, run};

fn run_str(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(args.iter(), &mut out, &mut err).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_batch_output() {
    let (status, out, err) = run_str(&[]);
    assert_eq!(status, 0);
    assert_eq!(out, "Rehan\n21\nTrue\nSum is:  15\nSub is:  26\n");
    assert_eq!(err, "");
}

#[test]
fn test_bad_flag() {
    let (status, out, err) = run_str(&["--verbose"]);
    assert_eq!(status, 2);
    assert_eq!(out, "");
    assert_eq!(err, "usage: lesson [--input]\n");
}

#[test]
fn test_help() {
    let (status, out, _) = run_str(&["--help"]);
    assert_eq!(status, 0);
    assert_eq!(out, "usage: lesson [--input]\n");
}

#[test]
fn test_batch_error_status() {
    let mut p = Program::new();
    p.push(Statement::Print(vec![Expression::Literal(Val::Integer(1))]));
    p.push(Statement::Let(
        "div".into(),
        Expression::Divide(
            Box::new(Expression::Literal(Val::Integer(1))),
            Box::new(Expression::Literal(Val::Integer(0))),
        ),
    ));
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = batch_loop(&mut Runtime::new(p), &mut out, &mut err).unwrap();
    assert_eq!(status, 1);
    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    assert!(String::from_utf8(err).unwrap().contains("?DIVISION BY ZERO"));
}

#[test]
fn test_batch_cannot_answer_input() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut runtime = Runtime::new(Program::interactive_lesson());
    let status = batch_loop(&mut runtime, &mut out, &mut err).unwrap();
    assert_eq!(status, 1);
    assert_eq!(String::from_utf8(out).unwrap(), "Rehan\n21\nTrue\n");
    assert!(String::from_utf8(err).unwrap().contains("?INPUT PAST END"));
}

use super::Val;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Val),
    Var(Rc<str>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Power(Box<Expression>, Box<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(Rc<str>, Expression),
    Print(Vec<Expression>),
    /// Prompt, then store the reply parsed as an integer.
    Input(Rc<str>, Rc<str>),
}

/// ## Program
///
/// An ordered list of statements. The runtime walks it front to back.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<&Statement> {
        self.statements.get(pc)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// The lesson with every value fixed in the source.
    pub fn lesson() -> Program {
        let mut p = Program::new();
        p.values();
        p.let_("first_number", lit(5i64));
        p.let_("second_number", lit(10i64));
        p.arithmetic();
        p
    }

    /// The lesson with the first pair of numbers read from the user.
    pub fn interactive_lesson() -> Program {
        let mut p = Program::new();
        p.values();
        p.push(Statement::Input(
            "first_number".into(),
            "Enter first number: ".into(),
        ));
        p.push(Statement::Input(
            "second_number".into(),
            "Enter second number: ".into(),
        ));
        p.arithmetic();
        p
    }

    fn values(&mut self) {
        self.let_("name", lit("Rehan"));
        self.let_("age", lit(21i64));
        self.let_("isMarried", lit(true));
        self.print(vec![var("name")]);
        self.print(vec![var("age")]);
        self.print(vec![var("isMarried")]);
    }

    fn arithmetic(&mut self) {
        use Expression::*;
        self.let_("sum", Add(first(), second()));
        self.print(vec![lit("Sum is: "), var("sum")]);
        self.let_("first_number", lit(50i64));
        self.let_("second_number", lit(24i64));
        self.let_("sub", Subtract(first(), second()));
        self.print(vec![lit("Sub is: "), var("sub")]);
        self.let_("div", Divide(first(), second()));
        self.let_("mul", Multiply(first(), second()));
        self.let_("pow", Power(first(), second()));
    }

    fn let_(&mut self, name: &str, expr: Expression) {
        self.push(Statement::Let(name.into(), expr));
    }

    fn print(&mut self, exprs: Vec<Expression>) {
        self.push(Statement::Print(exprs));
    }
}

fn lit<T: Into<Val>>(val: T) -> Expression {
    Expression::Literal(val.into())
}

fn var(name: &str) -> Expression {
    Expression::Var(name.into())
}

fn first() -> Box<Expression> {
    Box::new(var("first_number"))
}

fn second() -> Box<Expression> {
    Box::new(var("second_number"))
}

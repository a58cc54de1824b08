use std::rc::Rc;

/// ## Values
///
/// Every variable in the lesson holds one of these. Text is reference
/// counted so storing and printing a value never copies the string.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(Rc<str>),
    Integer(i64),
    Boolean(bool),
    Float(f64),
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Boolean(b)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Float(n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            String(s) => write!(f, "{}", s),
            Integer(n) => write!(f, "{}", n),
            Boolean(true) => write!(f, "True"),
            Boolean(false) => write!(f, "False"),
            Float(n) => write!(f, "{}", format_float(*n)),
        }
    }
}

// Shortest round-trip digits; exponent form outside [1e-4, 1e16).
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = n.abs();
    if abs != 0.0 && (abs >= 1e16 || abs < 1e-4) {
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => s,
        };
    }
    let s = format!("{}", n);
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

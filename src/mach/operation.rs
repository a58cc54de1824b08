use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (Operation::numeric(lhs), Operation::numeric(rhs)) {
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 + r)),
            (Float(l), Integer(r)) => Ok(Float(l + r as f64)),
            (Float(l), Float(r)) => Ok(Float(l + r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (Operation::numeric(lhs), Operation::numeric(rhs)) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 - r)),
            (Float(l), Integer(r)) => Ok(Float(l - r as f64)),
            (Float(l), Float(r)) => Ok(Float(l - r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// True division; two integers divide to a float.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let (l, r) = match (Operation::numeric(lhs), Operation::numeric(rhs)) {
            (Integer(l), Integer(r)) => (l as f64, r as f64),
            (Integer(l), Float(r)) => (l as f64, r),
            (Float(l), Integer(r)) => (l, r as f64),
            (Float(l), Float(r)) => (l, r),
            _ => return Err(error!(TypeMismatch)),
        };
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Float(l / r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (Operation::numeric(lhs), Operation::numeric(rhs)) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 * r)),
            (Float(l), Integer(r)) => Ok(Float(l * r as f64)),
            (Float(l), Float(r)) => Ok(Float(l * r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Integer powers stay integers while they fit, then widen to float.
    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let (l, r) = match (Operation::numeric(lhs), Operation::numeric(rhs)) {
            (Integer(l), Integer(r)) => {
                if let Ok(exp) = u32::try_from(r) {
                    if let Some(i) = l.checked_pow(exp) {
                        return Ok(Integer(i));
                    }
                }
                (l as f64, r as f64)
            }
            (Integer(l), Float(r)) => (l as f64, r),
            (Float(l), Integer(r)) => (l, r as f64),
            (Float(l), Float(r)) => (l, r),
            _ => return Err(error!(TypeMismatch)),
        };
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero));
        }
        let n = l.powf(r);
        if n.is_infinite() && l.is_finite() && r.is_finite() {
            return Err(error!(Overflow));
        }
        Ok(Float(n))
    }

    fn numeric(val: Val) -> Val {
        match val {
            Val::Boolean(b) => Val::Integer(b as i64),
            _ => val,
        }
    }
}

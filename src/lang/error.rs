pub struct Error {
    code: ErrorCode,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code as u16
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Overflow = 6,
    DivisionByZero = 11,
    TypeMismatch = 13,
    UndefinedVariable = 18,
    InvalidNumber = 22,
    InputPastEnd = 62,
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl Clone for Error {
    fn clone(&self) -> Error {
        Error {
            code: self.code,
            message: self.message,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::DivisionByZero => "DIVISION BY ZERO",
            ErrorCode::TypeMismatch => "TYPE MISMATCH",
            ErrorCode::UndefinedVariable => "UNDEFINED VARIABLE",
            ErrorCode::InvalidNumber => "INVALID NUMBER",
            ErrorCode::InputPastEnd => "INPUT PAST END",
        };
        if self.message.is_empty() {
            write!(f, "?{}", code_str)
        } else {
            write!(f, "?{}; {}", code_str, self.message)
        }
    }
}

pub struct Error {
    code: u16,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::slot::Error::new($crate::slot::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::slot::Error::new($crate::slot::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: "",
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
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
    InvalidWager = 1,
    MalformedInput = 2,
    InputStreamClosed = 3,
    EmptyReel = 10,
    InvalidWeights = 11,
    InvalidLength = 12,
    InvalidRange = 13,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "INVALID WAGER",
            2 => "MALFORMED INPUT",
            3 => "INPUT STREAM CLOSED",
            10 => "EMPTY REEL",
            11 => "INVALID WEIGHTS",
            12 => "INVALID REEL COUNT",
            13 => "INVALID RANGE",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "SLOT ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

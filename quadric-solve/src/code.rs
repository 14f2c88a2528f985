use thiserror::Error;

/// Message returned by [`message`] for codes outside the known code space.
pub const UNKNOWN_MESSAGE: &str = "Unknown result code.";

/// Numeric result codes for callers that exchange plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Code {
    /// Every real number is a root.
    InfiniteRoots = 3,
    /// Two distinct real roots.
    TwoRoots = 2,
    /// Exactly one real root.
    OneRoot = 1,
    /// No real root.
    NoRoots = 0,
    /// A root is not representable as an `f64`.
    Overflow = -1,
    /// Output storage for the roots was not provided.
    InvalidArguments = -2,
}

/// An integer that does not name a [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown result code {0}")]
pub struct UnknownCode(pub i32);

impl Code {
    pub const ALL: [Self; 6] = [
        Self::InfiniteRoots,
        Self::TwoRoots,
        Self::OneRoot,
        Self::NoRoots,
        Self::Overflow,
        Self::InvalidArguments,
    ];

    /// Returns `true` if the equation was solved.
    #[must_use]
    pub fn is_ok(self) -> bool {
        i32::from(self) >= 0
    }

    /// A human-readable sentence describing the code.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InfiniteRoots => {
                "The equation is solved. An infinite number of solutions have been found."
            }
            Self::TwoRoots => "The equation is solved. Two solutions found.",
            Self::OneRoot => "The equation is solved. One solution found.",
            Self::NoRoots => "The equation is solved. No solutions found.",
            Self::Overflow => "The equation is not solved. An overflow has occurred.",
            Self::InvalidArguments => {
                "The equation is not solved. No storage was provided for the roots."
            }
        }
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code as i32
    }
}

impl TryFrom<i32> for Code {
    type Error = UnknownCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| i32::from(*code) == value)
            .ok_or(UnknownCode(value))
    }
}

/// Looks up the message for a raw result code.
///
/// Unrecognized codes map to [`UNKNOWN_MESSAGE`].
#[must_use]
pub fn message(code: i32) -> &'static str {
    Code::try_from(code).map_or(UNKNOWN_MESSAGE, Code::message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_fixed_values() {
        assert_eq!(i32::from(Code::InfiniteRoots), 3);
        assert_eq!(i32::from(Code::TwoRoots), 2);
        assert_eq!(i32::from(Code::OneRoot), 1);
        assert_eq!(i32::from(Code::NoRoots), 0);
        assert_eq!(i32::from(Code::Overflow), -1);
        assert_eq!(i32::from(Code::InvalidArguments), -2);
    }

    #[test]
    fn converts_back_from_integers() {
        for code in Code::ALL {
            assert_eq!(Code::try_from(i32::from(code)), Ok(code));
        }
        assert_eq!(Code::try_from(42), Err(UnknownCode(42)));
    }

    #[test]
    fn unknown_codes_get_default_message() {
        assert_eq!(message(7), UNKNOWN_MESSAGE);
        assert_eq!(message(-100), UNKNOWN_MESSAGE);
        assert_eq!(message(1), Code::OneRoot.message());
    }

    #[test]
    fn only_solved_codes_are_ok() {
        assert!(Code::NoRoots.is_ok());
        assert!(Code::InfiniteRoots.is_ok());
        assert!(!Code::Overflow.is_ok());
        assert!(!Code::InvalidArguments.is_ok());
    }
}

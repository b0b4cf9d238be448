/// A matrix or vector whose shape does not match what the operation needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dimension of {what}: expected {expected}, found {found}")]
pub struct DimensionError {
    pub what: &'static str,
    pub expected: usize,
    pub found: usize,
}

impl DimensionError {
    pub fn new(what: &'static str, expected: usize, found: usize) -> Self {
        Self { what, expected, found }
    }

    /// `Ok(())` if `found == expected`, otherwise the corresponding error
    pub fn check(what: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if found == expected { Ok(()) }
        else                 { Err(Self::new(what, expected, found)) }
    }
}

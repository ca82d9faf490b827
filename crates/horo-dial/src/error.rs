use std::fmt;

/// Smallest surface edge, in pixels, that still leaves room for a dial.
pub const MIN_SURFACE_EDGE: u32 = 8;

/// Error returned when a dial cannot be laid out on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialError {
    /// Either surface dimension is below [`MIN_SURFACE_EDGE`].
    SurfaceTooSmall { width: u32, height: u32 },
}

impl fmt::Display for DialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialError::SurfaceTooSmall { width, height } => write!(
                f,
                "surface {width}x{height} is too small for a dial (minimum {MIN_SURFACE_EDGE}x{MIN_SURFACE_EDGE})"
            ),
        }
    }
}

impl std::error::Error for DialError {}

/// Which field of a wall-clock reading was out of range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        })
    }
}

/// A wall-clock reading with a field outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTimeError {
    pub field: TimeField,
    pub value: u32,
}

impl fmt::Display for ClockTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = match self.field {
            TimeField::Hour => 23,
            TimeField::Minute | TimeField::Second => 59,
        };
        write!(f, "{} {} out of range 0..={max}", self.field, self.value)
    }
}

impl std::error::Error for ClockTimeError {}

/// Error returned by a [`TimeSource`](crate::TimeSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSourceError {
    /// The source produced a reading that is not a valid time of day.
    OutOfRange(ClockTimeError),
    /// The source could not produce a reading at all.
    Unavailable(String),
}

impl fmt::Display for TimeSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSourceError::OutOfRange(e) => write!(f, "time source returned invalid reading: {e}"),
            TimeSourceError::Unavailable(msg) => write!(f, "time source unavailable: {msg}"),
        }
    }
}

impl std::error::Error for TimeSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimeSourceError::OutOfRange(e) => Some(e),
            TimeSourceError::Unavailable(_) => None,
        }
    }
}

impl From<ClockTimeError> for TimeSourceError {
    fn from(e: ClockTimeError) -> Self {
        TimeSourceError::OutOfRange(e)
    }
}

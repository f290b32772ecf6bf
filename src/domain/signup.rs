//! Registration state per (student, activity) pair and capacity rules.

/// Maximum simultaneous participants; `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(pub Option<i64>);

impl Capacity {
    pub fn unlimited() -> Self {
        Self(None)
    }

    /// True if one more participant fits when `enrolled` are already signed up.
    pub fn admits(&self, enrolled: i64) -> bool {
        match self.0 {
            Some(max) => enrolled < max,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    NotRegistered,
    Registered,
}

impl Registration {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Self::Registered
        } else {
            Self::NotRegistered
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupRejection {
    AlreadySignedUp,
    ActivityFull,
    NotSignedUp,
}

impl SignupRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::AlreadySignedUp => "Student is already signed up",
            Self::ActivityFull => "Activity is full",
            Self::NotSignedUp => "Student is not signed up for this activity",
        }
    }
}

/// State machine: the only transitions are signup and unregister.
pub struct SignupMachine;

impl SignupMachine {
    /// Duplicate check runs before the capacity check.
    pub fn sign_up(
        current: Registration,
        capacity: Capacity,
        enrolled: i64,
    ) -> Result<Registration, SignupRejection> {
        match current {
            Registration::Registered => Err(SignupRejection::AlreadySignedUp),
            Registration::NotRegistered if !capacity.admits(enrolled) => {
                Err(SignupRejection::ActivityFull)
            }
            Registration::NotRegistered => Ok(Registration::Registered),
        }
    }

    pub fn unregister(current: Registration) -> Result<Registration, SignupRejection> {
        match current {
            Registration::Registered => Ok(Registration::NotRegistered),
            Registration::NotRegistered => Err(SignupRejection::NotSignedUp),
        }
    }
}

//! Patchable profile fields
//!
//! Partial profile updates arrive as a key/value map. Every key must match
//! this statically declared allow-list before any update statement is
//! built; unknown keys are rejected rather than silently dropped.

/// A profile field a user may patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    BirthDate,
    City,
    State,
    Image,
    Phone,
    Email,
    IsPrivate,
}

impl UserField {
    /// All patchable fields
    pub const ALL: [UserField; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::BirthDate,
        Self::City,
        Self::State,
        Self::Image,
        Self::Phone,
        Self::Email,
        Self::IsPrivate,
    ];

    /// Resolve a request key against the allow-list
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "birth_date" => Some(Self::BirthDate),
            "city" => Some(Self::City),
            "state" => Some(Self::State),
            "image" => Some(Self::Image),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "is_private" => Some(Self::IsPrivate),
            _ => None,
        }
    }

    /// The request key for this field
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::BirthDate => "birth_date",
            Self::City => "city",
            Self::State => "state",
            Self::Image => "image",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::IsPrivate => "is_private",
        }
    }

    /// The storage column this field maps to
    pub fn column(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::BirthDate => "birth_date",
            Self::City => "city",
            Self::State => "state",
            Self::Image => "image",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::IsPrivate => "is_private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_round_trips_through_its_key() {
        for field in UserField::ALL {
            assert_eq!(UserField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert_eq!(UserField::from_key("username"), None);
        assert_eq!(UserField::from_key("is_admin"), None);
        assert_eq!(UserField::from_key("password_hash"), None);
        assert_eq!(UserField::from_key(""), None);
    }
}

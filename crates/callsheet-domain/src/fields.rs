//! Fields pulled out of a free-text description

/// Candidate fields produced by an extractor
///
/// Every attribute is optional. Absence means no rule matched; deciding
/// whether that is acceptable is left to the validator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedFields {
    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Address
    pub address: Option<String>,

    /// Height
    pub height: Option<String>,

    /// Weight
    pub weight: Option<String>,

    /// Gender
    pub gender: Option<String>,

    /// Age in years
    pub age: Option<u32>,
}

impl ExtractedFields {
    /// True when no attribute was extracted
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.address.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.gender.is_none()
            && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ExtractedFields::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_non_empty() {
        let fields = ExtractedFields {
            weight: Some("150 Pounds".to_string()),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }
}

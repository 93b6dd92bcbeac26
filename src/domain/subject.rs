use std::fmt;

/// The closed set of inquiry categories the contact form offers. Submissions
/// carrying anything else are rejected before the gate is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    BusinessInquiry,
    StrategicPartnerships,
    MediaAndPress,
    TechnicalSupport,
    GeneralInquiry,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::BusinessInquiry,
        Subject::StrategicPartnerships,
        Subject::MediaAndPress,
        Subject::TechnicalSupport,
        Subject::GeneralInquiry,
    ];

    pub fn parse(s: &str) -> Result<Subject, String> {
        match s {
            "Business Inquiry" => Ok(Subject::BusinessInquiry),
            "Strategic Partnerships" => Ok(Subject::StrategicPartnerships),
            "Media & Press" => Ok(Subject::MediaAndPress),
            "Technical Support" => Ok(Subject::TechnicalSupport),
            "General Inquiry" => Ok(Subject::GeneralInquiry),
            other => Err(format!("'{}' is not a recognised subject.", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::BusinessInquiry => "Business Inquiry",
            Subject::StrategicPartnerships => "Strategic Partnerships",
            Subject::MediaAndPress => "Media & Press",
            Subject::TechnicalSupport => "Technical Support",
            Subject::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

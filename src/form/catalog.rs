//! Fixed catalog of error scenarios a transaction can be tagged with.

/// One selectable error scenario: a comma-joined list of failure reasons and its code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorScenario {
    pub label: &'static str,
    pub value: u8,
}

impl ErrorScenario {
    pub const fn new(label: &'static str, value: u8) -> Self {
        Self { label, value }
    }

    /// Individual reasons, without the trailing separator
    pub fn reasons(&self) -> impl Iterator<Item = &'static str> {
        self.label
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// All scenarios in display order. Codes 1-23, each used once.
pub const ERROR_SCENARIOS: &[ErrorScenario] = &[
    ErrorScenario::new("Bad CVV,", 1),
    ErrorScenario::new("Bad CVV,Insufficient Balance,", 2),
    ErrorScenario::new("Bad CVV,Technical Glitch,", 3),
    ErrorScenario::new("Bad Card Number,", 4),
    ErrorScenario::new("Bad Card Number,Bad CVV,", 5),
    ErrorScenario::new("Bad Card Number,Bad Expiration,", 6),
    ErrorScenario::new("Bad Card Number,Bad Card Expiration,Insufficient Balance,", 7),
    ErrorScenario::new("Bad Card Number,Bad Expiration,Technical Glitch,", 8),
    ErrorScenario::new("Bad Card Number,Insufficient Balance,", 9),
    ErrorScenario::new("Bad Card Number,Technical Glitch,", 10),
    ErrorScenario::new("Bad Expiration,", 11),
    ErrorScenario::new("Bad Expiration,Bad CVV,", 12),
    ErrorScenario::new("Bad Expiration,Insufficient Balance,", 13),
    ErrorScenario::new("Bad Expiration,Technical Glitch,", 14),
    ErrorScenario::new("Bad PIN,", 15),
    ErrorScenario::new("Bad PIN,Insufficient Balance,", 16),
    ErrorScenario::new("Bad PIN,Technical Glitch,", 17),
    ErrorScenario::new("Bad Zipcode,", 18),
    ErrorScenario::new("Bad Zipcode,Insufficient Balance,", 19),
    ErrorScenario::new("Bad Zipcode,Technical Glitch,", 20),
    ErrorScenario::new("Insufficient Balance,", 21),
    ErrorScenario::new("Insufficient Balance,Technical Glitch,", 22),
    ErrorScenario::new("Technical Glitch,", 23),
];

/// Find a scenario by its code
pub fn find_scenario(code: u8) -> Option<&'static ErrorScenario> {
    ERROR_SCENARIOS.iter().find(|s| s.value == code)
}

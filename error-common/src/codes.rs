// Error codes implementation
// Standardized error codes for the CarePlan Engine pipeline stages

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
}

pub mod records {
    pub const WRITE_FAILED: &str = "RECORDS_2001";
    pub const READ_FAILED: &str = "RECORDS_2002";
    pub const NOT_FOUND: &str = "RECORDS_2003";
}

pub mod reasoning {
    pub const INVOCATION_FAILED: &str = "REASONING_5001";
    pub const MALFORMED_RESPONSE: &str = "REASONING_5002";
    pub const TIMEOUT: &str = "REASONING_5003";
}

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

lazy_static! {
    static ref MRN_REGEX: Regex = Regex::new(r"\bMRN[-:#\s]?\d{5,10}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref PHONE_REGEX: Regex =
        Regex::new(r"\b(?:\+1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
            .unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap();
    static ref DOB_REGEX: Regex =
        Regex::new(r"\b\d{1,2}/\d{1,2}/(?:19|20)\d{2}\b").unwrap();
}

/// PHI redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_mrn: bool,
    pub redact_ssn: bool,
    pub redact_phones: bool,
    pub redact_emails: bool,
    pub redact_dates_of_birth: bool,
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_mrn: true,
            redact_ssn: true,
            redact_phones: true,
            redact_emails: true,
            redact_dates_of_birth: true,
            hash_for_correlation: false,
        }
    }
}

impl From<&crate::LoggerConfig> for RedactionConfig {
    fn from(logger: &crate::LoggerConfig) -> Self {
        Self {
            hash_for_correlation: logger.hash_for_correlation,
            ..Self::default()
        }
    }
}

/// PHI redactor for clinical log messages
pub struct ClinicalRedactor {
    config: RedactionConfig,
}

impl ClinicalRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_mrn {
            result = self.redact_mrn(&result);
        }

        if self.config.redact_ssn {
            result = self.redact_ssn(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        if self.config.redact_dates_of_birth {
            result = self.redact_dates_of_birth(&result);
        }

        result
    }

    fn redact_mrn(&self, text: &str) -> String {
        MRN_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("MRN[{}]", self.hash_value(&caps[0]))
                } else {
                    "MRN[REDACTED]".to_string()
                }
            })
            .to_string()
    }

    fn redact_ssn(&self, text: &str) -> String {
        SSN_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("SSN[{}]", self.hash_value(&caps[0]))
                } else {
                    "***-**-****".to_string()
                }
            })
            .to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("PHONE[{}]", self.hash_value(&caps[0]))
                } else {
                    "(***) ***-****".to_string()
                }
            })
            .to_string()
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let email = &caps[0];
                if self.config.hash_for_correlation {
                    format!("EMAIL[{}]", self.hash_value(email))
                } else {
                    match email.split_once('@') {
                        Some((local, domain)) => format!(
                            "{}***@{}***",
                            local.chars().take(1).collect::<String>(),
                            domain.chars().take(1).collect::<String>()
                        ),
                        None => "***@***".to_string(),
                    }
                }
            })
            .to_string()
    }

    fn redact_dates_of_birth(&self, text: &str) -> String {
        DOB_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("DATE[{}]", self.hash_value(&caps[0]))
                } else {
                    "[DATE]".to_string()
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        // First 8 bytes keep the correlation token short
        general_purpose::STANDARD.encode(&result[..8])
    }
}

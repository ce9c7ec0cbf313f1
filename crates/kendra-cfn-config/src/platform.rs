// Platform detection based on environment variables
//
// - AWS Lambda: AWS_LAMBDA_FUNCTION_NAME env var present
// - Local: anything else (contract tests, SAM local without the variable)

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Lambda,
    Local,
}

impl Platform {
    /// Auto-detect the current platform based on environment variables
    pub fn detect() -> Self {
        if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
            Platform::Lambda
        } else {
            Platform::Local
        }
    }

    /// Get platform-specific defaults
    pub fn defaults(&self) -> PlatformDefaults {
        match self {
            Platform::Lambda => PlatformDefaults {
                log_format: "json",
                request_timeout_secs: 30,
            },
            Platform::Local => PlatformDefaults {
                log_format: "text",
                request_timeout_secs: 60,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformDefaults {
    pub log_format: &'static str,
    pub request_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults() {
        let lambda = Platform::Lambda.defaults();
        assert_eq!(lambda.log_format, "json");
        assert_eq!(lambda.request_timeout_secs, 30);

        let local = Platform::Local.defaults();
        assert_eq!(local.log_format, "text");
    }
}

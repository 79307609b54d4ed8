//! 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정을 환경 변수에서 읽습니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`이 없을 때 사용할 기본 로그 필터
    ///
    /// 개발/테스트 환경은 검증 실패 상세(`debug`)까지, 스테이징/프로덕션은 `info`까지 기록합니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수를 반환합니다. 기본값: 4 (`WORKERS`)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE`에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    /// 잘못된 값이나 0은 경고를 남기고 기본값으로 대체합니다.
    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second.map(str::parse::<u64>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::warn!(
                    "RATE_LIMIT_PER_SECOND 값이 올바르지 않습니다. 기본값 {} 사용",
                    Self::DEFAULT_PER_SECOND
                );
                Self::DEFAULT_PER_SECOND
            }
            None => Self::DEFAULT_PER_SECOND,
        };

        let burst_size = match burst_size.map(str::parse::<u32>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::warn!(
                    "RATE_LIMIT_BURST_SIZE 값이 올바르지 않습니다. 기본값 {} 사용",
                    Self::DEFAULT_BURST_SIZE
                );
                Self::DEFAULT_BURST_SIZE
            }
            None => Self::DEFAULT_BURST_SIZE,
        };

        Self { per_second, burst_size }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)에서 허용 Origin 목록을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_value(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let allowed_origins: Vec<String> = value
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if allowed_origins.is_empty() {
            return Self {
                allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            };
        }

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(Environment::Development.default_log_filter(), "debug,actix_web=debug");
        assert_eq!(Environment::Test.default_log_filter(), "debug,actix_web=debug");
        assert_eq!(Environment::Staging.default_log_filter(), "info,actix_web=info");
        assert_eq!(
            Environment::from_str("unknown").default_log_filter(),
            "info,actix_web=info"
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_rate_limit_config() {
        assert_eq!(
            RateLimitConfig::from_values(None, None),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("10"), Some("20")),
            RateLimitConfig { per_second: 10, burst_size: 20 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("fast"), Some("0")),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
    }

    #[test]
    fn test_cors_config() {
        assert_eq!(CorsConfig::from_value(None).allowed_origins.len(), 4);
        assert_eq!(CorsConfig::from_value(Some(" , ")).allowed_origins.len(), 4);
        assert_eq!(
            CorsConfig::from_value(Some("https://blog.example.com, https://admin.example.com"))
                .allowed_origins,
            vec!["https://blog.example.com", "https://admin.example.com"]
        );
    }
}

//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다. `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` / `NODE_ENV` | `production` | 실행 환경 |
//! | `HOST` | `0.0.0.0` | 바인딩 호스트 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `WORKERS` | `4` | 워커 스레드 수 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 크기 |
//! | `CORS_ALLOWED_ORIGINS` | localhost 3000/8080 | 쉼표로 구분된 Origin 목록 |

pub mod data_config;

pub use data_config::*;

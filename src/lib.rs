//! LPG 탱크 게이징 계산 로직을 라이브러리로 분리해 CLI 외 다른 UI에서도 같은 엔진을 쓴다.

pub mod app;
pub mod calibration;
pub mod cli;
pub mod config;
pub mod correction;
pub mod engine;
pub mod interpolate;
pub mod tank;
pub mod ui_cli;
pub mod units;

//! 열쾌적(PMV/PPD, 적응형) 계산 로직을 라이브러리로 분리하여 CLI 외의 인터페이스에서도 재사용한다.

pub mod app;
pub mod cli;
pub mod comfort;
pub mod config;
pub mod hvac;
pub mod i18n;
pub mod report;
pub mod ui_cli;
pub mod units;

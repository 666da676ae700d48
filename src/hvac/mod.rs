//! 공조 냉동사이클 구성요소(압축기, 증발기, 응축기, 팽창밸브)의 개략 열수지 계산 모듈.
//! 공기를 이상기체로 가정한 교육용 추정치이며 냉매 물성은 다루지 않는다.

pub mod cycle;

pub use cycle::*;

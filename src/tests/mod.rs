mod flows;
pub mod support;

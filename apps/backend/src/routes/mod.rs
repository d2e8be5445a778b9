pub mod pronunciation;
pub mod scenarios;

pub mod check;
pub mod evaluate;
pub mod profile;

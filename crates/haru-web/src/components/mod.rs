//! Reusable components shared across views

mod diary_card;
mod navbar;

pub use diary_card::{relative_time, DiaryCard};
pub use navbar::Navbar;

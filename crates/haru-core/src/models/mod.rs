//! Data models shared between the API client and the UI.

pub mod diary;
pub mod user;

pub use diary::{Diary, DiaryDraft, DiaryId, DiaryPatch, ListQuery, Mood};
pub use user::{ProfileUpdate, SignupRequest, User};

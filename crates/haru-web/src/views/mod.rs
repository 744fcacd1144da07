//! Page views, one per route

mod diary_create;
mod diary_detail;
mod diary_edit;
mod diary_list;
mod login;
mod profile;
mod signup;

pub use diary_create::DiaryCreate;
pub use diary_detail::DiaryDetail;
pub use diary_edit::DiaryEdit;
pub use diary_list::DiaryList;
pub use login::Login;
pub use profile::Profile;
pub use signup::Signup;

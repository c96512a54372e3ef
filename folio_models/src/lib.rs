pub mod contact;
pub mod submission;

mod application;
mod company;
mod file_ref;
mod job;
mod role;
mod user;

pub use application::{Application, ApplicationStatus, ApplicationWithApplicant};
pub use company::Company;
pub use file_ref::FileRef;
pub use job::{Job, PostedJob};
pub use role::Role;
pub use user::User;

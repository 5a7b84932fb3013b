mod comment;
mod constituency;
mod dashboard_summary;
mod login;
mod member;
mod program;
mod progress_update;
mod project;
mod user;

pub use comment::{Comment, CommentInput};
pub use constituency::{Constituency, ConstituencyInput};
pub use dashboard_summary::DashboardSummary;
pub use login::{LoginData, LoginRequest, RegisterRequest};
pub use member::{Member, MemberInput};
pub use program::{Program, ProgramInput};
pub use progress_update::{Attachment, ProgressUpdate, ProgressUpdateInput};
pub use project::{Project, ProjectInput};
pub use user::User;

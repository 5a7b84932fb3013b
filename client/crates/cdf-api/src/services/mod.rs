//! One module per backend resource. Each is a thin typed layer over
//! [`Client::execute`](crate::Client) with its own fallback message.

mod auth;
mod comments;
mod constituencies;
mod dashboard;
mod members;
mod programs;
mod progress_updates;
mod projects;
mod users;

use crate::{
    comment_commands::CommentCommands, constituency_commands::ConstituencyCommands,
    member_commands::MemberCommands, program_commands::ProgramCommands,
    progress_commands::ProgressCommands, project_commands::ProjectCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in identity and the sections it can see
    Whoami,

    /// Dashboard totals
    Dashboard,

    /// Constituency operations
    Constituency {
        #[command(subcommand)]
        action: ConstituencyCommands,
    },

    /// Member operations
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },

    /// Program operations
    Program {
        #[command(subcommand)]
        action: ProgramCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Project progress update operations
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// User account operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

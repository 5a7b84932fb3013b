use crate::{
    cli::PageArgs,
    commands::Commands,
    comment_commands::CommentCommands,
    constituency_commands::ConstituencyCommands,
    member_commands::MemberCommands,
    program_commands::ProgramCommands,
    progress_commands::ProgressCommands,
    project_commands::{ProjectCommands, ProjectFields},
    user_commands::UserCommands,
};

use cdf_api::models::{
    Attachment, ConstituencyInput, MemberInput, ProgramInput, ProgressUpdateInput, ProjectInput,
    RegisterRequest,
};
use cdf_api::{ApiError, Client, ClientResult, ErrorKind, paginate};

use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};

const NOT_LOGGED_IN: &str = "Not logged in.";

/// Run one command against the backend and shape the payload for output.
pub(crate) async fn run(client: &Client, command: Commands) -> ClientResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let identity = client.login(&email, &password).await?;
            to_json(json!({ "identity": identity }))
        }
        Commands::Logout => {
            client.logout();
            Ok(json!({ "logged_out": true }))
        }
        Commands::Whoami => whoami(client),
        Commands::Dashboard => to_json(client.dashboard_summary().await?),

        Commands::Constituency { action } => match action {
            ConstituencyCommands::List { paging } => {
                page_of(client.list_constituencies().await, &paging)
            }
            ConstituencyCommands::Get { id } => to_json(client.get_constituency(id).await?),
            ConstituencyCommands::Create { name, county, code } => {
                let input = ConstituencyInput { name, county, code };
                to_json(client.create_constituency(&input).await?)
            }
            ConstituencyCommands::Update {
                id,
                name,
                county,
                code,
            } => {
                let input = ConstituencyInput { name, county, code };
                to_json(client.update_constituency(id, &input).await?)
            }
            ConstituencyCommands::Delete { id } => {
                client.delete_constituency(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Member { action } => match action {
            MemberCommands::List {
                constituency_id,
                paging,
            } => page_of(client.list_members(constituency_id).await, &paging),
            MemberCommands::Get { id } => to_json(client.get_member(id).await?),
            MemberCommands::Create {
                name,
                email,
                phone,
                position,
                constituency_id,
            } => {
                let input = MemberInput {
                    name,
                    email,
                    phone,
                    position,
                    constituency_id,
                };
                to_json(client.create_member(&input).await?)
            }
            MemberCommands::Update {
                id,
                name,
                email,
                phone,
                position,
                constituency_id,
            } => {
                let input = MemberInput {
                    name,
                    email,
                    phone,
                    position,
                    constituency_id,
                };
                to_json(client.update_member(id, &input).await?)
            }
            MemberCommands::Delete { id } => {
                client.delete_member(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Program { action } => match action {
            ProgramCommands::List { paging } => page_of(client.list_programs().await, &paging),
            ProgramCommands::Get { id } => to_json(client.get_program(id).await?),
            ProgramCommands::Create {
                name,
                description,
                budget,
                start_date,
                end_date,
            } => {
                let input = ProgramInput {
                    name,
                    description,
                    budget,
                    start_date,
                    end_date,
                };
                to_json(client.create_program(&input).await?)
            }
            ProgramCommands::Update {
                id,
                name,
                description,
                budget,
                start_date,
                end_date,
            } => {
                let input = ProgramInput {
                    name,
                    description,
                    budget,
                    start_date,
                    end_date,
                };
                to_json(client.update_program(id, &input).await?)
            }
            ProgramCommands::Delete { id } => {
                client.delete_program(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Project { action } => match action {
            ProjectCommands::List {
                constituency_id,
                program_id,
                status,
                paging,
            } => page_of(
                client
                    .list_projects(constituency_id, program_id, status.as_deref())
                    .await,
                &paging,
            ),
            ProjectCommands::Get { id } => to_json(client.get_project(id).await?),
            ProjectCommands::Create { fields } => {
                to_json(client.create_project(&project_input(fields)).await?)
            }
            ProjectCommands::Update { id, fields } => {
                to_json(client.update_project(id, &project_input(fields)).await?)
            }
            ProjectCommands::Delete { id } => {
                client.delete_project(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Progress { action } => match action {
            ProgressCommands::List { project_id, paging } => {
                page_of(client.list_progress_updates(project_id).await, &paging)
            }
            ProgressCommands::Get { id } => to_json(client.get_progress_update(id).await?),
            ProgressCommands::Create {
                project_id,
                description,
                percentage,
                file,
            } => {
                let input = ProgressUpdateInput {
                    description,
                    progress_percentage: percentage,
                    attachment: file.as_deref().map(read_attachment).transpose()?,
                };
                to_json(client.create_progress_update(project_id, &input).await?)
            }
            ProgressCommands::Update {
                id,
                description,
                percentage,
                file,
            } => {
                let input = ProgressUpdateInput {
                    description,
                    progress_percentage: percentage,
                    attachment: file.as_deref().map(read_attachment).transpose()?,
                };
                to_json(client.update_progress_update(id, &input).await?)
            }
            ProgressCommands::Delete { id } => {
                client.delete_progress_update(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Comment { action } => match action {
            CommentCommands::List { project_id, paging } => {
                page_of(client.list_comments(project_id).await, &paging)
            }
            CommentCommands::Create {
                project_id,
                content,
            } => to_json(client.create_comment(project_id, &content).await?),
            CommentCommands::Update { id, content } => {
                to_json(client.update_comment(id, &content).await?)
            }
            CommentCommands::Delete { id } => {
                client.delete_comment(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::User { action } => match action {
            UserCommands::List { paging } => page_of(client.list_users().await, &paging),
            UserCommands::Get { id } => to_json(client.get_user(id).await?),
            UserCommands::Register {
                name,
                email,
                password,
                role,
            } => {
                let request = RegisterRequest {
                    name,
                    email,
                    password,
                    role,
                };
                to_json(client.register(&request).await?)
            }
            UserCommands::Delete { id } => {
                client.delete_user(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },
    }
}

/// Identity and menu sections from the stored token. No request is made.
pub(crate) fn whoami(client: &Client) -> ClientResult<Value> {
    let session = client.session();
    let identity = session
        .current_identity()
        .ok_or_else(|| ApiError::rejected(ErrorKind::Other, NOT_LOGGED_IN))?;

    to_json(json!({
        "identity": identity,
        "sections": session.visible_sections(),
    }))
}

/// Whole list, or one page of it when `--page` was given.
pub(crate) fn page_of<T: Serialize + Clone>(
    result: ClientResult<Vec<T>>,
    paging: &PageArgs,
) -> ClientResult<Value> {
    let items = result?;
    match paging.page {
        Some(page) => to_json(paginate(&items, page, paging.per_page)),
        None => to_json(items),
    }
}

fn project_input(fields: ProjectFields) -> ProjectInput {
    ProjectInput {
        name: fields.name,
        description: fields.description,
        constituency_id: fields.constituency_id,
        program_id: fields.program_id,
        budget: fields.budget,
        status: fields.status,
        start_date: fields.start_date,
        end_date: fields.end_date,
    }
}

fn read_attachment(path: &Path) -> ClientResult<Attachment> {
    let bytes = std::fs::read(path).map_err(|e| {
        ApiError::rejected(
            ErrorKind::Unknown,
            format!("Could not read {}: {e}", path.display()),
        )
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("attachment"));

    Ok(Attachment { file_name, bytes })
}

fn to_json<T: Serialize>(data: T) -> ClientResult<Value> {
    serde_json::to_value(data).map_err(|e| {
        ApiError::rejected(
            ErrorKind::Unknown,
            format!("Failed to render response: {e}"),
        )
    })
}

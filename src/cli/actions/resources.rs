use crate::{
    app_lib::{ApiClient, ListParams},
    cli::{actions::print_json, globals::GlobalArgs},
    features::{
        cms::{activities, benefits, faqs, news},
        content,
        master::{departments, enumerations, prokers},
        menus::client as menus,
        permissions::client as permissions,
        registrations::client as registrations,
        roles::client as roles,
        users::client as users,
    },
};
use anyhow::{anyhow, bail, Context, Result};
use serde_json::json;
use std::str::FromStr;

/// Resources reachable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Users,
    Roles,
    Permissions,
    Menus,
    News,
    Activities,
    Benefits,
    Departments,
    Prokers,
    Faqs,
    Registrations,
}

impl ResourceKind {
    pub const LISTABLE: [&'static str; 11] = [
        "users",
        "roles",
        "permissions",
        "menus",
        "news",
        "activities",
        "benefits",
        "departments",
        "prokers",
        "faqs",
        "registrations",
    ];

    /// The users endpoint has no delete operation.
    pub const DELETABLE: [&'static str; 10] = [
        "roles",
        "permissions",
        "menus",
        "news",
        "activities",
        "benefits",
        "departments",
        "prokers",
        "faqs",
        "registrations",
    ];
}

impl FromStr for ResourceKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        Ok(match value {
            "users" => Self::Users,
            "roles" => Self::Roles,
            "permissions" => Self::Permissions,
            "menus" => Self::Menus,
            "news" => Self::News,
            "activities" => Self::Activities,
            "benefits" => Self::Benefits,
            "departments" => Self::Departments,
            "prokers" => Self::Prokers,
            "faqs" => Self::Faqs,
            "registrations" => Self::Registrations,
            other => return Err(anyhow!("unknown resource: {other}")),
        })
    }
}

#[derive(Debug)]
pub struct ListArgs {
    pub globals: GlobalArgs,
    pub kind: ResourceKind,
    pub params: ListParams,
}

#[derive(Debug)]
pub struct ShowArgs {
    pub globals: GlobalArgs,
    pub id: String,
}

#[derive(Debug)]
pub struct DeleteArgs {
    pub globals: GlobalArgs,
    pub kind: ResourceKind,
    pub id: String,
}

#[derive(Debug)]
pub struct EnumArgs {
    pub globals: GlobalArgs,
    pub key: String,
}

fn numeric_id(id: &str) -> Result<u64> {
    id.trim()
        .parse()
        .with_context(|| format!("invalid numeric id: {id}"))
}

/// # Errors
/// Returns an error if the request fails.
pub async fn list(args: ListArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    let api: &ApiClient = auth.api();
    let params = &args.params;

    match args.kind {
        ResourceKind::Users => print_json(&users::list_users(api).await?),
        ResourceKind::Roles => print_json(&roles::list_roles(api, params).await?),
        ResourceKind::Permissions => {
            print_json(&permissions::list_permissions(api, params).await?)
        }
        ResourceKind::Menus => print_json(&menus::list_menus(api, params).await?),
        ResourceKind::News => print_json(&news::list_news(api, params).await?),
        ResourceKind::Activities => print_json(&activities::list_activities(api, params).await?),
        ResourceKind::Benefits => print_json(&benefits::list_benefits(api, params).await?),
        ResourceKind::Departments => {
            print_json(&departments::list_departments(api, params).await?)
        }
        ResourceKind::Prokers => print_json(&prokers::list_prokers(api, params).await?),
        ResourceKind::Faqs => print_json(&faqs::list_faqs(api, params).await?),
        ResourceKind::Registrations => {
            print_json(&registrations::list_registrations(api, params).await?)
        }
    }
}

/// # Errors
/// Returns an error if the request fails.
pub async fn show_news(args: ShowArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    print_json(&news::get_news(auth.api(), &args.id).await?)
}

/// # Errors
/// Returns an error if the id is invalid or the request fails.
pub async fn delete(args: DeleteArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    let api = auth.api();
    let id = args.id.as_str();

    match args.kind {
        ResourceKind::Users => bail!("users cannot be deleted from the dashboard"),
        ResourceKind::Roles => roles::delete_role(api, numeric_id(id)?).await?,
        ResourceKind::Permissions => permissions::delete_permission(api, numeric_id(id)?).await?,
        ResourceKind::Menus => menus::delete_menu(api, id).await?,
        ResourceKind::News => news::delete_news(api, id).await?,
        ResourceKind::Activities => activities::delete_activity(api, id).await?,
        ResourceKind::Benefits => benefits::delete_benefit(api, id).await?,
        ResourceKind::Departments => departments::delete_department(api, id).await?,
        ResourceKind::Prokers => prokers::delete_proker(api, id).await?,
        ResourceKind::Faqs => faqs::delete_faq(api, id).await?,
        ResourceKind::Registrations => registrations::delete_registration(api, id).await?,
    }

    print_json(&json!({ "deleted": true, "id": args.id }))
}

/// # Errors
/// Returns an error if the request fails.
pub async fn enumeration(args: EnumArgs) -> Result<()> {
    let auth = args.globals.auth_context()?;
    print_json(&enumerations::get_enumeration(auth.api(), &args.key).await?)
}

/// # Errors
/// Returns an error if the request fails.
pub async fn content(globals: &GlobalArgs) -> Result<()> {
    let auth = globals.auth_context()?;
    print_json(&content::get_content_activities(auth.api()).await?)
}

//! Command-line argument wrappers and command handlers
//!
//! Each clap argument struct converts into the matching core parameter type
//! via `From`, keeping clap attributes out of `bailout-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Coordinator
//! ```
//!
//! Errors from the coordinator are reduced to their caller-safe message
//! before they reach the terminal, so an unknown plan and a wrong secret
//! print the same text.

use anyhow::{anyhow, Result};
use bailout_core::{
    params::{CreatePlan, PlanAccess, DEFAULT_PARTICIPANTS},
    BailSummary, BailoutError, Coordinator, CreateResult,
};
use clap::Args;
use log::debug;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Create a new plan
///
/// Prints one private link per participant. Each link embeds that
/// participant's secret, so send every person only their own link.
#[derive(Args)]
pub struct CreatePlanArgs {
    #[arg(short, long, help = "Optional description of the plan")]
    pub description: Option<String>,
    #[arg(
        short = 'n',
        long = "participants",
        default_value_t = DEFAULT_PARTICIPANTS,
        help = "Number of participants (2 to 5)"
    )]
    pub num_participants: u32,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            description: val.description,
            num_participants: val.num_participants,
        }
    }
}

/// Identify yourself as a participant of a plan
#[derive(Args)]
pub struct AccessArgs {
    #[arg(help = "ID of the plan")]
    pub plan_id: String,
    #[arg(help = "Your secret participant token")]
    pub secret: String,
}

impl From<AccessArgs> for PlanAccess {
    fn from(val: AccessArgs) -> Self {
        PlanAccess {
            plan_id: val.plan_id,
            secret: val.secret,
        }
    }
}

/// Runs CLI commands against a coordinator and renders the results.
pub struct Cli {
    coordinator: Coordinator,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(coordinator: Coordinator, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            coordinator,
            renderer,
            json,
        }
    }

    /// Create a plan and print its share links.
    pub async fn create_plan(&self, args: CreatePlanArgs) -> Result<()> {
        let created = self
            .coordinator
            .create_plan(&args.into())
            .await
            .map_err(public_error)?;

        if self.json {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct Created<'a> {
                plan_id: &'a str,
                participants: Vec<bailout_core::models::ShareLink>,
            }

            return print_json(&Created {
                plan_id: &created.plan_id,
                participants: created.share_links(self.coordinator.base_url()),
            });
        }

        self.renderer
            .render(&CreateResult::new(&created, self.coordinator.base_url()).to_string())
    }

    /// Show the plan as the given participant sees it.
    pub async fn show_status(&self, args: AccessArgs) -> Result<()> {
        let view = self
            .coordinator
            .get_status(&args.into())
            .await
            .map_err(public_error)?;

        if self.json {
            return print_json(&view);
        }
        self.renderer.render(&view.to_string())
    }

    /// Vote to bail as the given participant.
    pub async fn submit_bail(&self, args: AccessArgs) -> Result<()> {
        let result = self
            .coordinator
            .submit_bail(&args.into())
            .await
            .map_err(public_error)?;

        if self.json {
            return print_json(&result);
        }
        self.renderer.render(&BailSummary(&result).to_string())
    }
}

/// Logs the full error and keeps only the caller-safe message.
fn public_error(error: BailoutError) -> anyhow::Error {
    debug!("Operation failed: {error:?}");
    anyhow!(error.public_message())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

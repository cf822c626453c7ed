//! Command handlers for the terminal interface
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! [`Catalog`] and hands the markdown produced by the core `Display` types to
//! the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use log::debug;
use plancat_core::{
    params::{Browse, Compare, Id, SetStatus},
    Catalog, CreateResult, DeleteResult, NewPlan, OperationStatus, PlanStatus, PlanUpdate,
    UpdateResult,
};

use crate::{
    args::{BrowseArgs, CompareArgs, PlanCommands},
    renderer::TerminalRenderer,
};

/// Runs commands against a catalog and renders their output.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let new_plan: NewPlan = args.into();
                let plan = self
                    .catalog
                    .create_plan(&new_plan)
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                let plan = self
                    .catalog
                    .show_plan(&params)
                    .await
                    .with_context(|| format!("Failed to show plan {}", params.id))?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Update(args) => {
                let update: PlanUpdate = args.into();
                let changes = update.changed_fields();
                if changes.is_empty() {
                    bail!("Nothing to update for plan {}", update.id);
                }
                let plan = self
                    .catalog
                    .update_plan(&update)
                    .await
                    .with_context(|| format!("Failed to update plan {}", update.id))?;
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Archive(args) => {
                let params: Id = args.into();
                let plan = self
                    .catalog
                    .archive_plan(&params)
                    .await
                    .with_context(|| format!("Failed to archive plan {}", params.id))?;
                let status =
                    OperationStatus::success(format!("Archived plan '{}' ({})", plan.name, plan.id));
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Activate(args) => {
                let params = SetStatus {
                    id: args.id,
                    status: PlanStatus::Active,
                };
                let plan = self
                    .catalog
                    .set_plan_status(&params)
                    .await
                    .with_context(|| format!("Failed to activate plan {}", params.id))?;
                let status =
                    OperationStatus::success(format!("Activated plan '{}' ({})", plan.name, plan.id));
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Duplicate(args) => {
                let params = args.into();
                let plan = self
                    .catalog
                    .duplicate_plan(&params)
                    .await
                    .context("Failed to duplicate plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Deleting plan {} is permanent. Re-run with --confirm to delete it.",
                        args.id
                    );
                }
                let params = Id { id: args.id };
                let plan = self
                    .catalog
                    .delete_plan(&params)
                    .await
                    .with_context(|| format!("Failed to delete plan {}", params.id))?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
        }
    }

    pub async fn browse(&self, args: BrowseArgs) -> Result<()> {
        let params: Browse = args.into();
        debug!("Browsing with {params:?}");
        let view = self
            .catalog
            .browse(&params)
            .await
            .context("Failed to browse plans")?;
        self.renderer.render(&view.to_string())
    }

    pub async fn compare(&self, args: CompareArgs) -> Result<()> {
        let params: Compare = args.into();
        let outcome = self
            .catalog
            .compare_plans(&params)
            .await
            .context("Failed to compare plans")?;
        match outcome {
            Ok(matrix) => self.renderer.render(&format!("# Comparison\n\n{matrix}")),
            Err(notice) => {
                self.renderer
                    .render(&OperationStatus::failure(notice.to_string()).to_string())?;
                bail!("Comparison refused: {notice}")
            }
        }
    }

    pub async fn seed(&self) -> Result<()> {
        let inserted = self
            .catalog
            .seed_demo()
            .await
            .context("Failed to seed demo catalog")?;
        let status = OperationStatus::success(format!("Seeded {inserted} demo plans"));
        self.renderer.render(&status.to_string())
    }
}

//! Command-line argument definitions using clap
//!
//! The argument structures here carry every clap-specific attribute. Each one
//! converts into a core parameter type with `From`, so the core crate never
//! sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use plancat_core::{
    models::{Feature, NewPlan, Periodicity, PlanStatus, PlanType, PlanUpdate, SortStrategy, ViewMode},
    params::{Browse, Compare, DuplicatePlan, Id},
};

/// Browse, filter and compare the plans of a fitness catalog
///
/// Plans live in a local SQLite database. Run `plancat seed` once to load a
/// demo catalog, then `plancat browse` to list it or `plancat compare` to put
/// plans side by side.
#[derive(Parser)]
#[command(version, about, name = "plancat")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/plancat/plancat.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum number of plans that can be selected for comparison
    #[arg(long, global = true)]
    pub max_selectable: Option<usize>,

    /// Turn plan comparison off; selections are then unbounded
    #[arg(long, global = true)]
    pub no_comparison: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command the catalog is browsed with
/// default settings.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Filter, sort and select plans
    #[command(aliases = ["b", "ls"])]
    Browse(BrowseArgs),
    /// Compare plans side by side
    #[command(alias = "c")]
    Compare(CompareArgs),
    /// Load the demo catalog
    Seed,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Update fields of a plan
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Archive a plan
    #[command(alias = "a")]
    Archive(PlanIdArgs),
    /// Make a plan active again
    Activate(PlanIdArgs),
    /// Copy a plan into a new draft
    #[command(alias = "dup")]
    Duplicate(DuplicatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Create a new plan
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Display name of the plan
    pub name: String,
    #[arg(short, long, help = "Price before any discount")]
    pub price: f64,
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Subscription)]
    pub plan_type: TypeArg,
    #[arg(long, value_enum, default_value_t = PeriodicityArg::Monthly)]
    pub periodicity: PeriodicityArg,
    #[arg(long, help = "Identifier for the plan; generated when omitted")]
    pub id: Option<String>,
    #[arg(short, long, help = "Free-text description")]
    pub description: Option<String>,
    #[arg(long, default_value = "EUR")]
    pub currency: String,
    #[arg(long, help = "Discount in percent, between 0 and 100")]
    pub discount: Option<f64>,
    #[arg(long, help = "Number of sessions included")]
    pub sessions: Option<u32>,
    #[arg(
        short,
        long = "feature",
        value_parser = parse_feature,
        help = "Feature as ID=LABEL; prefix the label with '*' to highlight it. Repeatable"
    )]
    pub features: Vec<Feature>,
    #[arg(short, long = "benefit", help = "Additional benefit. Repeatable")]
    pub benefits: Vec<String>,
    #[arg(short, long, value_enum, default_value_t = StatusArg::Active)]
    pub status: StatusArg,
    #[arg(long, help = "Mark the plan as popular")]
    pub popular: bool,
    #[arg(long, help = "Mark the plan as recommended")]
    pub recommended: bool,
    #[arg(long = "new", help = "Mark the plan as new")]
    pub is_new: bool,
    #[arg(long, default_value_t = 0, help = "Manual ordering weight")]
    pub order: u32,
}

impl From<CreatePlanArgs> for NewPlan {
    fn from(val: CreatePlanArgs) -> Self {
        NewPlan {
            id: val.id,
            name: val.name,
            description: val.description.unwrap_or_default(),
            plan_type: val.plan_type.into(),
            status: val.status.into(),
            base_price: val.price,
            currency: val.currency,
            discount_percent: val.discount,
            periodicity: val.periodicity.into(),
            features: val.features,
            benefits: val.benefits,
            included_sessions: val.sessions,
            is_popular: val.popular,
            is_recommended: val.recommended,
            is_new: val.is_new,
            display_order: val.order,
        }
    }
}

/// Update fields of a plan; omitted options are left unchanged
#[derive(ClapArgs)]
pub struct UpdatePlanArgs {
    #[arg(help = "Identifier of the plan to update")]
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short = 't', long = "type", value_enum)]
    pub plan_type: Option<TypeArg>,
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(short, long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long, conflicts_with = "no_discount")]
    pub discount: Option<f64>,
    #[arg(long, help = "Remove the discount")]
    pub no_discount: bool,
    #[arg(long, value_enum)]
    pub periodicity: Option<PeriodicityArg>,
    #[arg(long, conflicts_with = "no_sessions")]
    pub sessions: Option<u32>,
    #[arg(long, help = "Remove the included session count")]
    pub no_sessions: bool,
    #[arg(
        short,
        long = "feature",
        value_parser = parse_feature,
        help = "Replace the features; ID=LABEL, repeatable"
    )]
    pub features: Vec<Feature>,
    #[arg(short, long = "benefit", help = "Replace the benefits; repeatable")]
    pub benefits: Vec<String>,
    #[arg(long)]
    pub popular: Option<bool>,
    #[arg(long)]
    pub recommended: Option<bool>,
    #[arg(long = "new")]
    pub is_new: Option<bool>,
    #[arg(long)]
    pub order: Option<u32>,
}

impl From<UpdatePlanArgs> for PlanUpdate {
    fn from(val: UpdatePlanArgs) -> Self {
        PlanUpdate {
            id: val.id,
            name: val.name,
            description: val.description,
            plan_type: val.plan_type.map(Into::into),
            status: val.status.map(Into::into),
            base_price: val.price,
            currency: val.currency,
            discount_percent: if val.no_discount {
                Some(None)
            } else {
                val.discount.map(Some)
            },
            periodicity: val.periodicity.map(Into::into),
            features: Some(val.features).filter(|f| !f.is_empty()),
            benefits: Some(val.benefits).filter(|b| !b.is_empty()),
            included_sessions: if val.no_sessions {
                Some(None)
            } else {
                val.sessions.map(Some)
            },
            is_popular: val.popular,
            is_recommended: val.recommended,
            is_new: val.is_new,
            display_order: val.order,
        }
    }
}

/// A command that takes only a plan identifier
#[derive(ClapArgs)]
pub struct PlanIdArgs {
    #[arg(help = "Identifier of the plan")]
    pub id: String,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Copy a plan into a new draft
#[derive(ClapArgs)]
pub struct DuplicatePlanArgs {
    #[arg(help = "Identifier of the plan to copy")]
    pub id: String,
    #[arg(long, help = "Identifier for the copy; generated when omitted")]
    pub new_id: Option<String>,
}

impl From<DuplicatePlanArgs> for DuplicatePlan {
    fn from(val: DuplicatePlanArgs) -> Self {
        DuplicatePlan {
            id: val.id,
            new_id: val.new_id,
        }
    }
}

/// Delete a plan permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    #[arg(help = "Identifier of the plan to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Filter, sort and select plans
#[derive(ClapArgs, Default)]
pub struct BrowseArgs {
    #[arg(short = 'q', long, help = "Case-insensitive text matched against name and description")]
    pub search: Option<String>,
    #[arg(short = 't', long = "type", value_enum)]
    pub plan_type: Option<TypeArg>,
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long, value_enum, default_value_t = SortArg::Name)]
    pub sort: SortArg,
    #[arg(long, help = "Render a list instead of a table")]
    pub list: bool,
    #[arg(long = "select", help = "Toggle a plan into the selection. Repeatable")]
    pub select: Vec<String>,
    #[arg(long, help = "Toggle-all over the visible plans")]
    pub select_all: bool,
    #[arg(long, help = "Compare the selected plans")]
    pub compare: bool,
}

impl From<BrowseArgs> for Browse {
    fn from(val: BrowseArgs) -> Self {
        Browse {
            text: val.search,
            plan_type: val.plan_type.map(Into::into),
            status: val.status.map(Into::into),
            sort: val.sort.into(),
            view_mode: if val.list { ViewMode::List } else { ViewMode::Grid },
            select: val.select,
            select_all: val.select_all,
            compare: val.compare,
        }
    }
}

/// Compare plans side by side
#[derive(ClapArgs)]
pub struct CompareArgs {
    /// Identifiers of the plans, in column order
    #[arg(num_args = 2.., required = true)]
    pub ids: Vec<String>,
}

impl From<CompareArgs> for Compare {
    fn from(val: CompareArgs) -> Self {
        Compare { ids: val.ids }
    }
}

/// Parses `ID=LABEL`; a label starting with `*` is highlighted.
fn parse_feature(raw: &str) -> Result<Feature, String> {
    let (id, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=LABEL, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing feature id in '{raw}'"));
    }
    match label.trim().strip_prefix('*') {
        Some(label) => Ok(Feature::new(id, label.trim()).highlighted()),
        None => Ok(Feature::new(id, label.trim())),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Subscription,
    PunchCard,
    Package,
    #[value(alias = "pt")]
    PersonalTraining,
    Group,
}

impl From<TypeArg> for PlanType {
    fn from(val: TypeArg) -> Self {
        match val {
            TypeArg::Subscription => PlanType::Subscription,
            TypeArg::PunchCard => PlanType::PunchCard,
            TypeArg::Package => PlanType::Package,
            TypeArg::PersonalTraining => PlanType::PersonalTraining,
            TypeArg::Group => PlanType::Group,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
    Archived,
    Draft,
}

impl From<StatusArg> for PlanStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Active => PlanStatus::Active,
            StatusArg::Inactive => PlanStatus::Inactive,
            StatusArg::Archived => PlanStatus::Archived,
            StatusArg::Draft => PlanStatus::Draft,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodicityArg {
    Monthly,
    Quarterly,
    Annual,
    OneTime,
}

impl From<PeriodicityArg> for Periodicity {
    fn from(val: PeriodicityArg) -> Self {
        match val {
            PeriodicityArg::Monthly => Periodicity::Monthly,
            PeriodicityArg::Quarterly => Periodicity::Quarterly,
            PeriodicityArg::Annual => Periodicity::Annual,
            PeriodicityArg::OneTime => Periodicity::OneTime,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Name,
    Price,
    Popularity,
    Date,
}

impl From<SortArg> for SortStrategy {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Name => SortStrategy::Name,
            SortArg::Price => SortStrategy::Price,
            SortArg::Popularity => SortStrategy::Popularity,
            SortArg::Date => SortStrategy::Date,
        }
    }
}

//! Argument parsing and the planning run.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use soulplan::{
    parse_constraint_arg, Inventory, MemberConfig, PlannerConfig, SoulDb, TeamConfig,
    TeamPlan, TeamPlanner, ThreadCount,
};

use crate::report;

/// Soul database used when neither the command line nor the config names one.
const DEFAULT_SOUL_DB: &str = "souls.yaml";

/// Find the best Onmyoji soul sets for a team
#[derive(Parser, Debug)]
#[command(name = "soulplan")]
#[command(about = "Find the best Onmyoji soul sets for a team", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Soul database (YAML, or TOML with a .toml extension)
    #[arg(long, value_name = "PATH")]
    pub soul_db: Option<PathBuf>,

    /// Planner settings; a missing file means defaults
    #[arg(long, value_name = "PATH", default_value = "soulplan.toml")]
    pub config: PathBuf,

    /// Ignore crit when calculating damage, for fights that negate crit.
    /// Crit constraints still see the real crit
    #[arg(long)]
    pub ignore_crit: bool,

    /// Search threads: auto, unlimited or a number
    #[arg(long, value_name = "N")]
    pub threads: Option<ThreadCount>,

    /// Write the soul database minus the claimed souls to PATH
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Do not print progress to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// <team.yaml> or <shikigami> <primary soul> [<attr>=<range>...]
    #[arg(required = true, num_args = 1.., value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let plan = self.run(&mut io::stdout().lock())?;
        if !plan.is_complete() {
            let names: Vec<&str> = plan.unsatisfied().map(|a| a.member.as_str()).collect();
            bail!(
                "Unable to find souls that satisfy the set requirement and constraints for {}",
                names.join(", ")
            );
        }
        Ok(())
    }

    /// Plans the team, writes the report to `out` and saves the database if asked.
    pub fn run(&self, out: &mut impl Write) -> Result<TeamPlan> {
        let config = self.planner_config()?;
        let team = self.team()?;
        let members = team.resolve().context("Invalid team")?;

        let db_path = self
            .soul_db
            .clone()
            .or_else(|| config.soul_db.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOUL_DB));
        let db = SoulDb::load(&db_path)
            .with_context(|| format!("Error reading {}", db_path.display()))?;
        let mut inventory = Inventory::from(db);

        let plan = TeamPlanner::new(&config).plan(&mut inventory, &members)?;
        for assignment in &plan.assignments {
            out.write_all(report::render(assignment)?.as_bytes())?;
        }

        if let Some(path) = &self.save {
            SoulDb::from(inventory)
                .save(path)
                .with_context(|| format!("Error writing {}", path.display()))?;
        }
        Ok(plan)
    }

    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = PlannerConfig::load_or_default(&self.config)
            .with_context(|| format!("Error reading {}", self.config.display()))?;
        if let Some(threads) = self.threads {
            config.thread_count = threads;
        }
        config.ignore_crit |= self.ignore_crit;
        Ok(config)
    }

    fn team(&self) -> Result<TeamConfig> {
        match self.args.as_slice() {
            [] => bail!("Expected a team file or a shikigami and a primary soul"),
            [path] => TeamConfig::load(path).with_context(|| format!("Error reading {}", path)),
            [name, primary, constraints @ ..] => {
                let mut member = MemberConfig::new(name.as_str(), primary.as_str());
                for arg in constraints {
                    let (attribute, range) = parse_constraint_arg(arg)?;
                    member = member.with_constraint(attribute, range);
                }
                Ok(TeamConfig::new().with_member(member))
            }
        }
    }
}

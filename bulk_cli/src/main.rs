use bulk_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bulkbites")]
#[command(about = "Bulking nutrition target calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a plan from flags and print it
    Plan {
        /// Current body weight in kilograms
        #[arg(long)]
        weight: String,

        /// Bulk duration in weeks
        #[arg(long)]
        duration: String,

        /// Desired weight gain in kilograms
        #[arg(long)]
        gain: Option<String>,

        /// Surplus policy (goal_driven, fixed_surplus)
        #[arg(long)]
        policy: Option<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in the form interactively (default)
    Interactive,
}

fn main() -> Result<()> {
    // Initialize logging
    bulk_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Plan {
            weight,
            duration,
            gain,
            policy,
            json,
        }) => cmd_plan(
            &config,
            &weight,
            &duration,
            gain.as_deref(),
            policy.as_deref(),
            json,
        ),
        Some(Commands::Interactive) | None => cmd_interactive(&config),
    }
}

fn cmd_plan(
    config: &Config,
    weight: &str,
    duration: &str,
    gain: Option<&str>,
    policy: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut plan_config = config.plan.clone();
    if let Some(raw) = policy {
        plan_config.policy = parse_policy(raw)?;
    }

    tracing::debug!(policy = ?plan_config.policy, "computing one-shot plan");

    let inputs = BulkInputs::parse(weight, duration, gain)?;
    let plan = compute_plan(&inputs, &plan_config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    Ok(())
}

fn parse_policy(raw: &str) -> Result<PlanPolicy> {
    match raw.to_lowercase().as_str() {
        "goal_driven" | "goal" => Ok(PlanPolicy::GoalDriven),
        "fixed_surplus" | "fixed" => Ok(PlanPolicy::FixedSurplus),
        other => Err(Error::Config(format!(
            "unknown policy: {} (expected goal_driven or fixed_surplus)",
            other
        ))),
    }
}

fn cmd_interactive(config: &Config) -> Result<()> {
    let mut session = FormSession::new();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BULKING BITES                          │");
    println!("╰─────────────────────────────────────────╯");
    println!();

    loop {
        session.weight = prompt_field("Current weight (kg)")?;
        session.duration = prompt_field("Duration (weeks)")?;
        session.desired_gain = prompt_field("Desired weight gain (kg, blank to skip)")?;

        match session.calculate(&config.plan) {
            Ok(plan) => display_plan(&plan),
            Err(Error::InvalidInput(msg)) => {
                println!("\n✗ {}\n", msg);
            }
            Err(e) => return Err(e),
        }

        match prompt_action()? {
            UserAction::Reset => {
                session.reset();
                println!("\nForm cleared.\n");
            }
            UserAction::Quit => break,
        }
    }

    Ok(())
}

fn display_plan(plan: &NutritionPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY PLAN                             │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Calories: {} kcal", plan.calories_per_day);
    println!("  Protein:  {} g", plan.protein_g_per_day);
    println!("  Carbs:    {} g", plan.carb_g_per_day);
    println!("  Fat:      {} g", plan.fat_g_per_day);

    if let Some(surplus) = plan.daily_calorie_surplus {
        println!("  Surplus:  {} kcal/day", surplus);
    }

    if let Some(ref lifestyle) = plan.lifestyle {
        println!();
        println!("  Sleep:    {} hours", lifestyle.sleep_hours);
        println!("  Water:    {} liters", lifestyle.water_liters);
        println!("  Meals:    {} per day", lifestyle.meals_per_day);
        println!("  Workouts: {} per week", lifestyle.workouts_per_week);
    }

    println!();
}

enum UserAction {
    Reset,
    Quit,
}

fn prompt_field(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn prompt_action() -> Result<UserAction> {
    println!("─────────────────────────────────────────");
    println!("Press Enter to quit");
    println!("  'r' + Enter to reset and start over");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let action = match input.trim().to_lowercase().as_str() {
        "r" => UserAction::Reset,
        _ => UserAction::Quit,
    };

    Ok(action)
}

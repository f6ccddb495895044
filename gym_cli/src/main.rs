use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gym_core::body::{self, BodyInput, Sex, UnitSystem};
use gym_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gymlog")]
#[command(about = "Weekly workout planner and training log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's workout (default)
    Today,

    /// Show the weekly schedule
    Schedule,

    /// Replace one day of the schedule
    SetDay {
        /// Day of the week (e.g. monday, tue)
        day: DayOfWeek,

        /// Muscle groups to train (comma separated)
        #[arg(long = "muscle", value_delimiter = ',')]
        muscles: Vec<MuscleGroup>,

        /// Explicit exercise ids instead of the generated selection
        #[arg(long = "exercise", value_delimiter = ',')]
        exercises: Vec<String>,

        /// Make this a rest day
        #[arg(long, conflicts_with_all = ["muscles", "exercises"])]
        rest: bool,
    },

    /// Edit the exercises of an already scheduled day
    Edit(EditArgs),

    /// Browse the exercise library
    Exercises {
        /// Only exercises for this muscle group
        #[arg(long)]
        muscle: Option<MuscleGroup>,
    },

    /// Show instructions for one exercise
    Exercise { id: String },

    /// List predefined programs
    Programs,

    /// Perform a day's workout and log it
    Workout {
        /// Day to perform (defaults to today)
        day: Option<DayOfWeek>,

        /// Mark these exercises done (1-based, comma separated) and finish
        #[arg(long, value_delimiter = ',', conflicts_with = "all")]
        done: Vec<usize>,

        /// Mark every exercise done and finish
        #[arg(long)]
        all: bool,
    },

    /// Weekly goal, streak, and recent history
    Progress,

    /// Body mass index and basal metabolic rate
    Bmi {
        /// Weight (kg, or lb with --imperial)
        #[arg(long)]
        weight: f64,

        /// Height (cm, or in with --imperial)
        #[arg(long)]
        height: f64,

        /// Age in years, enables the BMR estimate
        #[arg(long)]
        age: Option<u32>,

        #[arg(long, value_enum, default_value_t = SexArg::Male)]
        sex: SexArg,

        /// Use pounds and inches
        #[arg(long)]
        imperial: bool,
    },

    /// Export workout history to CSV
    Export { path: PathBuf },

    /// Delete schedule, history, and preferences
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Positions are 1-based and refer to the list as it was before this edit
#[derive(Args)]
struct EditArgs {
    day: DayOfWeek,

    /// Set the number of sets, e.g. --sets 2=5
    #[arg(long, value_name = "POS=N", value_parser = parse_assignment::<u32>)]
    sets: Vec<(usize, u32)>,

    /// Set the rep target, e.g. --reps "1=8-10"
    #[arg(long, value_name = "POS=TEXT", value_parser = parse_assignment::<String>)]
    reps: Vec<(usize, String)>,

    /// Set the working weight in kg, e.g. --weight 1=60 (0 clears it)
    #[arg(long, value_name = "POS=KG", value_parser = parse_assignment::<f64>)]
    weight: Vec<(usize, f64)>,

    /// Remove the exercise at this position
    #[arg(long)]
    remove: Option<usize>,

    /// Move the exercise at this position up one place
    #[arg(long)]
    move_up: Option<usize>,

    /// Move the exercise at this position down one place
    #[arg(long)]
    move_down: Option<usize>,

    /// Add exercise ids to the end
    #[arg(long, value_delimiter = ',')]
    add: Vec<String>,
}

/// Parse a `POS=VALUE` pair
fn parse_assignment<T>(s: &str) -> std::result::Result<(usize, T), String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let (position, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected POS=VALUE, got '{}'", s))?;
    let position = position
        .trim()
        .parse()
        .map_err(|e| format!("invalid position '{}': {}", position, e))?;
    let value = value
        .parse()
        .map_err(|e| format!("invalid value '{}': {}", value, e))?;
    Ok((position, value))
}

#[derive(Clone, Copy, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

fn main() -> Result<()> {
    gym_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);
    let backend = FileStore::new(data_dir);

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => cmd_today(&backend, &config),
        Commands::Schedule => cmd_schedule(&backend),
        Commands::SetDay {
            day,
            muscles,
            exercises,
            rest,
        } => cmd_set_day(&backend, &config, day, muscles, exercises, rest),
        Commands::Edit(args) => cmd_edit(&backend, &config, args),
        Commands::Exercises { muscle } => cmd_exercises(muscle),
        Commands::Exercise { id } => cmd_exercise(&id),
        Commands::Programs => cmd_programs(),
        Commands::Workout { day, done, all } => cmd_workout(&backend, day, done, all),
        Commands::Progress => cmd_progress(&backend, &config),
        Commands::Bmi {
            weight,
            height,
            age,
            sex,
            imperial,
        } => cmd_bmi(weight, height, age, sex, imperial),
        Commands::Export { path } => cmd_export(&backend, path),
        Commands::Reset { yes } => cmd_reset(&backend, yes),
    }
}

fn cmd_today(backend: &FileStore, config: &Config) -> Result<()> {
    let store = ScheduleStore::new(backend);

    if !store.has_user_setup() {
        println!("No workouts scheduled yet.");
        println!("Plan a day with: gymlog set-day <day> --muscle chest,arms");
        return Ok(());
    }

    let today = store.today(Utc::now());
    println!("Today is {}", today.day);
    display_day(&today, config.planner.minutes_per_exercise);
    Ok(())
}

fn cmd_schedule(backend: &FileStore) -> Result<()> {
    let schedule = ScheduleStore::new(backend).load();

    for day in schedule.iter() {
        if day.is_rest_day {
            println!("{:<10} Rest", day.day.name());
        } else {
            println!(
                "{:<10} {} ({} exercises)",
                day.day.name(),
                join_groups(&day.muscle_groups),
                day.exercises.len()
            );
        }
    }
    Ok(())
}

fn cmd_set_day(
    backend: &FileStore,
    config: &Config,
    day: DayOfWeek,
    muscles: Vec<MuscleGroup>,
    exercises: Vec<String>,
    rest: bool,
) -> Result<()> {
    let store = ScheduleStore::new(backend);

    if !rest && muscles.is_empty() && exercises.is_empty() {
        return Err(Error::InvalidInput(
            "choose --muscle groups, --exercise ids, or --rest".into(),
        ));
    }

    let schedule = if exercises.is_empty() {
        store.update_day(day, muscles, None, rest)?
    } else {
        let mut draft = DayDraft::from_workout(&DayWorkout::training(day, muscles, vec![]));
        for id in &exercises {
            draft.add_exercise(id)?;
        }
        draft.save(&store)?
    };

    println!("✓ {} saved", day);
    display_day(schedule.day(day), config.planner.minutes_per_exercise);
    Ok(())
}

fn cmd_edit(backend: &FileStore, config: &Config, args: EditArgs) -> Result<()> {
    let EditArgs {
        day,
        sets,
        reps,
        weight,
        remove,
        move_up,
        move_down,
        add,
    } = args;

    let store = ScheduleStore::new(backend);
    let mut draft = DayDraft::from_workout(store.load().day(day));

    if draft.is_rest_day() {
        return Err(Error::NoWorkoutScheduled(day.to_string()));
    }

    for (position, value) in sets {
        draft.set_sets(to_index(position)?, value)?;
    }
    for (position, value) in reps {
        draft.set_reps(to_index(position)?, value)?;
    }
    for (position, value) in weight {
        let value = (value != 0.0).then_some(value);
        draft.set_weight(to_index(position)?, value)?;
    }

    if let Some(position) = remove {
        let removed = draft.remove_exercise(to_index(position)?)?;
        println!("Removed {}", exercise_name(&removed.exercise_id));
    }
    if let Some(position) = move_up {
        draft.move_up(to_index(position)?)?;
    }
    if let Some(position) = move_down {
        draft.move_down(to_index(position)?)?;
    }
    for id in &add {
        draft.add_exercise(id)?;
    }

    let schedule = draft.save(&store)?;
    println!("✓ {} updated", day);
    display_day(schedule.day(day), config.planner.minutes_per_exercise);
    Ok(())
}

fn cmd_exercises(muscle: Option<MuscleGroup>) -> Result<()> {
    let catalog = get_default_catalog();
    let exercises: Vec<&Exercise> = match muscle {
        Some(group) => catalog.by_muscle_group(group).collect(),
        None => catalog.all().iter().collect(),
    };

    for exercise in exercises {
        println!(
            "{:<20} {:<28} {}",
            exercise.id,
            exercise.name,
            join_groups(&exercise.muscle_groups)
        );
    }
    Ok(())
}

fn cmd_exercise(id: &str) -> Result<()> {
    let exercise =
        catalog::get(id).ok_or_else(|| Error::UnknownExercise(id.to_string()))?;

    println!("\n  {}", exercise.name);
    println!("  {}", join_groups(&exercise.muscle_groups));
    println!();
    println!("  {}", exercise.description);
    println!();
    println!(
        "  Default: {} sets × {}",
        exercise.default_sets, exercise.default_reps
    );
    println!();
    println!("  Steps:");
    for (i, step) in exercise.steps.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
    println!();
    println!("  Tips:");
    for tip in &exercise.tips {
        println!("    • {}", tip);
    }
    if let Some(ref url) = exercise.demo_url {
        println!();
        println!("  ℹ Demo: {}", url);
    }
    println!();
    Ok(())
}

fn cmd_programs() -> Result<()> {
    let catalog = get_default_catalog();

    for program in get_default_programs() {
        println!("\n{} [{:?}]", program.title, program.level);
        println!("  {}", program.description);
        for day in &program.days {
            let names: Vec<&str> = day
                .resolve(catalog)
                .into_iter()
                .map(|e| e.name.as_str())
                .collect();
            println!("  • {}: {}", day.title, names.join(", "));
        }
    }
    println!();
    Ok(())
}

fn cmd_workout(
    backend: &FileStore,
    day: Option<DayOfWeek>,
    done: Vec<usize>,
    all: bool,
) -> Result<()> {
    let schedule_store = ScheduleStore::new(backend);
    let log_store = LogStore::new(backend);

    let now = Utc::now();
    let day = day.unwrap_or_else(|| DayOfWeek::of(now));
    let workout = schedule_store.load().day(day).clone();

    let mut session = match WorkoutSession::start(&workout, now) {
        Ok(session) => session,
        Err(Error::NoWorkoutScheduled(_)) => {
            println!("No workout scheduled for {}.", day);
            println!("Set one up with: gymlog set-day {} --muscle <groups>", day);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if all {
        session.complete_all();
    } else if !done.is_empty() {
        for position in done {
            session.set_completed(to_index(position)?, true)?;
        }
    } else if !run_interactive(&mut session)? {
        println!("\nWorkout discarded.");
        return Ok(());
    }

    let total = session.exercises().len();
    let log = session.finish(Utc::now());
    let completed = log.completed_exercises();
    let duration = log.duration.unwrap_or(0);
    log_store.append(log)?;

    println!(
        "\n✓ Workout logged! {}/{} exercises in {} minutes.",
        completed, total, duration
    );
    Ok(())
}

/// Returns false if the user quits without finishing
fn run_interactive(session: &mut WorkoutSession) -> Result<bool> {
    loop {
        display_session(session);
        println!("─────────────────────────────────────────");
        println!("Number + Enter to toggle an exercise");
        println!("  'f' + Enter to finish");
        println!("  'q' + Enter to quit without logging");
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(false);
        }

        match input.trim().to_lowercase().as_str() {
            "q" => return Ok(false),
            "f" => {
                if session.is_all_completed() || confirm_finish_early(session)? {
                    return Ok(true);
                }
            }
            other => match other.parse::<usize>() {
                Ok(position) => {
                    if let Err(e) = to_index(position).and_then(|i| session.toggle(i)) {
                        println!("{}", e);
                    }
                }
                Err(_) => println!("Unrecognized input: {}", other),
            },
        }
    }
}

fn confirm_finish_early(session: &WorkoutSession) -> Result<bool> {
    print!(
        "You've completed {}/{} exercises. Finish anyway? [y/N] ",
        session.completed_count(),
        session.exercises().len()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn cmd_progress(backend: &FileStore, config: &Config) -> Result<()> {
    let store = LogStore::new(backend);
    let logs = store.load();
    let now = Utc::now();

    let stats = weekly_stats(&logs, now);
    let goal = config.goals.weekly_workouts;
    let progress = goal_progress(&stats, goal);

    println!(
        "\nWeekly goal: {}/{} workouts ({:.0}%)",
        stats.workouts_completed,
        goal,
        progress * 100.0
    );
    println!("  Day streak:     {}", current_streak(&logs, now.date_naive()));
    println!("  This week:      {}", stats.workouts_completed);
    println!("  Exercises:      {}", stats.total_exercises);
    println!("  Total sessions: {}", logs.len());

    println!("\nRecent workouts:");
    if logs.is_empty() {
        println!("  Complete your first workout to see your history here!");
    }
    for log in logs.iter().take(10) {
        println!(
            "  {} {}  {} exercises  {}",
            if log.completed { "✓" } else { "○" },
            log.date.format("%a %b %-d"),
            log.exercises.len(),
            log.duration
                .map(|d| format!("{} min", d))
                .unwrap_or_default()
        );
    }
    println!();
    Ok(())
}

fn cmd_bmi(
    weight: f64,
    height: f64,
    age: Option<u32>,
    sex: SexArg,
    imperial: bool,
) -> Result<()> {
    let units = if imperial {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    };
    let report = body::assess(&BodyInput {
        weight,
        height,
        age,
        sex: match sex {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        },
        units,
    })?;

    let unit = if imperial { "lbs" } else { "kg" };
    println!("\nBMI: {:.1} ({})", report.bmi, report.category);
    println!("  {}", report.category.advice());
    println!(
        "  Healthy weight: {:.1}-{:.1} {}",
        report.ideal_weight.0, report.ideal_weight.1, unit
    );
    if let Some(bmr) = report.bmr {
        println!("  BMR: {} cal/day", bmr.round());
    }
    println!();
    Ok(())
}

fn cmd_export(backend: &FileStore, path: PathBuf) -> Result<()> {
    let logs = LogStore::new(backend).load();
    let count = export::export_logs_csv(&logs, &path)?;
    println!("✓ Exported {} workouts to {}", count, path.display());
    Ok(())
}

fn cmd_reset(backend: &FileStore, yes: bool) -> Result<()> {
    if !yes {
        print!("This will clear your entire workout schedule and history. Continue? [y/N] ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    ScheduleStore::new(backend).clear_all()?;
    println!("✓ All data cleared");
    Ok(())
}

fn display_day(day: &DayWorkout, minutes_per_exercise: u32) {
    if day.is_rest_day {
        println!("\n  {}: Rest day\n", day.day);
        return;
    }

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} DAY", join_groups(&day.muscle_groups).to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    for (i, config) in day.exercises.iter().enumerate() {
        // Stale ids (removed from the catalog) are skipped
        let Some(exercise) = catalog::get(&config.exercise_id) else {
            continue;
        };
        println!(
            "  {}. {} - {} × {}{}",
            i + 1,
            exercise.name,
            config.sets,
            config.reps,
            config
                .weight
                .map(|w| format!(" @ {}", w))
                .unwrap_or_default()
        );
    }
    println!(
        "\n  ~{} min\n",
        day.exercises.len() as u32 * minutes_per_exercise
    );
}

fn display_session(session: &WorkoutSession) {
    println!(
        "\n{} workout: {}/{} done ({:.0}%)",
        session.day(),
        session.completed_count(),
        session.exercises().len(),
        session.progress() * 100.0
    );
    for (i, config) in session.exercises().iter().enumerate() {
        let Some(exercise) = catalog::get(&config.exercise_id) else {
            continue;
        };
        println!(
            "  [{}] {}. {} - {} × {}",
            if config.completed { "x" } else { " " },
            i + 1,
            exercise.name,
            config.sets,
            config.reps
        );
    }
}

fn exercise_name(id: &str) -> String {
    catalog::get(id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn join_groups(groups: &[MuscleGroup]) -> String {
    if groups.is_empty() {
        return "Custom".into();
    }
    groups
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Convert a 1-based position from the command line
fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| Error::InvalidInput("positions start at 1".into()))
}

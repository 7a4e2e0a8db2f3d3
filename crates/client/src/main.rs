use anyhow::{anyhow, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use client::{
    api::ApiClient,
    catalog::{ExerciseCatalog, LoadState},
    config::ClientConfig,
    content::{image_url, ContentReader, HttpContentReader},
    guidance::GuidanceRequester,
    history::WorkoutHistory,
    session::UserSession,
    stats::{
        exercise_names, format_duration, format_record_date, format_relative_date, format_time,
        format_workout_duration, total_sets, total_volume, WorkoutSummary,
    },
    store::{FilePreferenceStore, PreferenceStore, Preferences},
};
use shared::{
    model::{difficulty_text, WeightUnit, Workout},
    *,
};
use tracing::debug;

#[derive(Debug, Parser)]
#[clap(name = "workout", about = "Browse exercises and saved workouts")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the exercise library
    Exercises {
        /// Only names containing this, ignoring case
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one exercise
    Exercise { id: String },
    /// List saved workouts, newest first
    History,
    /// Show one saved workout
    Workout { id: String },
    /// Delete a saved workout
    Delete { id: String },
    /// Ask for ai guidance on an exercise
    Guidance { name: String },
    /// Show or change the preferred weight unit
    Unit { unit: Option<WeightUnit> },
    /// Check the server is reachable
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing()?;

    let cli = Cli::parse();
    debug!(?cli);

    let config = cli.config;
    let content = HttpContentReader::new(config.content_api());
    let server = ApiClient::new(&config.server_url);
    let session = UserSession::new(config.user_id.as_str());

    match cli.command {
        Command::Exercises { search } => {
            let mut catalog = ExerciseCatalog::new(content);
            if let LoadState::Failed(e) = catalog.refresh().await {
                bail!("Failed to load exercises: {e}");
            }
            let exercises = catalog.filtered(search.as_deref().unwrap_or_default());
            if exercises.is_empty() {
                println!("No exercises found");
            }
            for exercise in exercises {
                let difficulty = difficulty_text(exercise.difficulty);
                println!("{}  {} ({difficulty})", exercise.id, exercise.name);
            }
        },
        Command::Exercise { id } => {
            let exercise =
                content.exercise(&id).await?.ok_or_else(|| anyhow!("Exercise {id} not found"))?;
            println!("{}", exercise.name);
            println!("Difficulty: {}", difficulty_text(exercise.difficulty));
            if let Some(description) = &exercise.description {
                println!("\n{description}\n");
            }
            let image = exercise
                .image
                .as_ref()
                .and_then(|i| i.asset.as_ref())
                .and_then(|asset| image_url(content.config(), asset));
            if let Some(image) = image {
                println!("Image: {image}");
            }
            if let Some(video_url) = &exercise.video_url {
                println!("Video: {video_url}");
            }
        },
        Command::History => {
            let mut history = WorkoutHistory::new(content, server);
            if let LoadState::Failed(e) = history.refresh(&session).await {
                bail!("Failed to load workouts: {e}");
            }

            let summary = WorkoutSummary::from_workouts(history.workouts());
            println!(
                "{} workouts, {} total, {} average",
                summary.total_workouts,
                format_duration(summary.total_duration),
                format_duration(summary.average_duration)
            );
            let today = Local::now().date_naive();
            for workout in history.workouts() {
                let when = match workout.date {
                    Some(date) => {
                        let date = date.with_timezone(&Local);
                        format!("{} {}", format_relative_date(&date, today), format_time(&date))
                    },
                    None => "Unknown Date".to_owned(),
                };
                println!(
                    "{}  {when}  {}  {} sets  {}",
                    workout.id,
                    format_workout_duration(workout.duration),
                    total_sets(workout),
                    exercise_names(workout).join(", ")
                );
            }
        },
        Command::Workout { id } => {
            let history = WorkoutHistory::new(content, server);
            let workout =
                history.record(&id).await?.ok_or_else(|| anyhow!("Workout {id} not found"))?;
            print_workout(&workout);
        },
        Command::Delete { id } => {
            let history = WorkoutHistory::new(content, server);
            history.delete(&id).await?;
            println!("Workout deleted");
        },
        Command::Guidance { name } => {
            let requester = GuidanceRequester::new(server);
            if let Some(text) = requester.request(&name).await {
                println!("{text}");
            }
        },
        Command::Ping => {
            server.ping().await?;
            println!("{} is up", config.server_url);
        },
        Command::Unit { unit } => {
            let preferences = FilePreferenceStore::new(config.preferences_path());
            match unit {
                Some(weight_unit) => {
                    preferences.save(&Preferences { weight_unit })?;
                    println!("Weight unit set to {weight_unit}");
                },
                None => {
                    let saved = preferences.load()?.unwrap_or_default();
                    println!("{}", saved.weight_unit);
                },
            }
        },
    }

    Ok(())
}

fn print_workout(workout: &Workout) {
    let date = workout.date.map(|d| d.with_timezone(&Local));
    println!("{}", format_record_date(date.as_ref()));
    println!("Duration: {}", format_workout_duration(workout.duration));

    let volume = total_volume(workout);
    println!("Total volume: {} {}", volume.volume, volume.unit);

    for exercise in workout.exercises() {
        let name = exercise.exercise.as_ref().map_or("Unknown Exercise", |e| e.name.as_str());
        println!("\n{name}");
        for (i, set) in exercise.sets().iter().enumerate() {
            let reps = set.reps.unwrap_or(0);
            match set.weight {
                Some(weight) => println!(
                    "  {}. {reps} reps x {weight} {}",
                    i + 1,
                    set.weight_unit.unwrap_or_default()
                ),
                None => println!("  {}. {reps} reps", i + 1),
            }
        }
    }
}

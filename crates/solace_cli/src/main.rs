use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use solace_core::{
    ChatMessage, CompanionState, EntrySource, MoodEntry, Recommendations, SolaceConfig,
};
use solace_counsel::providers::{GeminiModel, MockModel};
use solace_counsel::{classifier, companion, recommender, GenerativeModel};
use solace_insight::{distribution, recent_entries, trend_series, TimeWindow, Trend};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solace — a gentle wellness companion", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "solace.toml")]
    config: String,

    /// Override the model name from the config
    #[arg(short, long)]
    model: Option<String>,

    /// Run offline against a scripted mock model (no API key needed)
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut config = SolaceConfig::load_or_default(&args.config);
    if let Some(model) = args.model {
        config.model.name = model;
    }

    let model: Box<dyn GenerativeModel> = if args.mock {
        info!("Running offline with the mock model");
        Box::new(MockModel::new())
    } else {
        // The one fatal startup condition: no credential, no companion.
        info!("Starting with model {}", config.model.name);
        Box::new(GeminiModel::from_env(&config.model).context("Cannot start Solace")?)
    };

    let mut state = CompanionState::new();
    println!("Solace is here with you. Type to talk, or /help for commands.");

    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        // Empty input is ignored at the prompt, never an error.
        if input.is_empty() {
            continue;
        }
        editor.add_history_entry(input)?;

        if let Some(command) = input.strip_prefix('/') {
            if !handle_command(command, model.as_ref(), &mut state).await? {
                break;
            }
            continue;
        }

        chat(model.as_ref(), &mut state, input).await;
    }

    println!("Take care of yourself. Goodbye.");
    Ok(())
}

/// Dispatch one slash command. Returns false when the session should end.
async fn handle_command(
    command: &str,
    model: &dyn GenerativeModel,
    state: &mut CompanionState,
) -> Result<bool> {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => return Ok(false),
        "help" => print_help(),
        "mood" => record_text_mood(model, state, rest, EntrySource::Journal).await,
        "voice" => record_text_mood(model, state, rest, EntrySource::Voice).await,
        "photo" => record_photo_mood(model, state, rest).await,
        "recent" => {
            let n = rest.parse().unwrap_or(5);
            print_recent(state.mood_history(), n);
        }
        "stats" => {
            let window = match rest {
                "" | "week" => TimeWindow::Week,
                "month" => TimeWindow::Month,
                "all" => TimeWindow::AllTime,
                other => {
                    println!("Unknown window '{other}'. Use week, month, or all.");
                    return Ok(true);
                }
            };
            print_stats(state.mood_history(), window);
        }
        "trend" => print_trend(state.mood_history()),
        "suggest" => {
            println!("(gathering a few ideas...)");
            let bundle = recommender::recommend(model, state.mood_history()).await;
            print_recommendations(&bundle);
        }
        "dismiss" => {
            state.dismiss_distress_alert();
            println!("Alert dismissed. I'm still here whenever you need me.");
        }
        other => println!("Unknown command '/{other}'. Try /help."),
    }

    distress_banner(state);
    Ok(true)
}

async fn chat(model: &dyn GenerativeModel, state: &mut CompanionState, text: &str) {
    println!("(thinking...)");
    let answer = companion::reply(model, state.chat_log(), text).await;
    state.record_chat(ChatMessage::user(text));
    state.record_chat(ChatMessage::assistant(&answer));
    println!("\nsolace: {answer}\n");
}

async fn record_text_mood(
    model: &dyn GenerativeModel,
    state: &mut CompanionState,
    text: &str,
    source: EntrySource,
) {
    if text.is_empty() {
        println!("Tell me a little about how you feel, e.g. /mood slept badly, long day ahead");
        return;
    }
    println!("(reading your mood...)");
    let reading = classifier::classify_text(model, text).await;
    let entry = state.record_reading(reading, source, Utc::now());
    println!(
        "Recorded: {} {}{}",
        entry.emoji,
        entry.mood,
        entry
            .notes
            .as_deref()
            .map(|n| format!(" — {n}"))
            .unwrap_or_default()
    );
}

async fn record_photo_mood(model: &dyn GenerativeModel, state: &mut CompanionState, path: &str) {
    if path.is_empty() {
        println!("Give me a photo to look at, e.g. /photo selfie.jpg");
        return;
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Could not read {path}: {e}");
            return;
        }
    };
    println!("(reading your expression...)");
    let reading = classifier::classify_image(model, &bytes).await;
    let entry = state.record_reading(reading, EntrySource::Facial, Utc::now());
    println!(
        "Recorded: {} {}{}",
        entry.emoji,
        entry.mood,
        entry
            .notes
            .as_deref()
            .map(|n| format!(" — {n}"))
            .unwrap_or_default()
    );
}

fn print_help() {
    println!("Just type to talk with Solace. Commands:");
    println!("  /mood <text>     record how you feel from a journal line");
    println!("  /voice <text>    record a transcribed voice note");
    println!("  /photo <path>    record your mood from a JPEG photo");
    println!("  /recent [n]      show the last n entries (default 5)");
    println!("  /stats [window]  mood breakdown for week, month, or all");
    println!("  /trend           mood trend line over the session");
    println!("  /suggest         personalized breathing/journaling/music/videos");
    println!("  /dismiss         acknowledge the distress alert");
    println!("  /quit            end the session");
}

fn print_recent(history: &[MoodEntry], n: usize) {
    let recent = recent_entries(history, n);
    if recent.is_empty() {
        println!("No mood entries yet. Try /mood to record one.");
        return;
    }
    for entry in recent {
        println!(
            "  {}  {} {:8} ({}){}",
            entry.recorded_at.format("%m/%d %H:%M"),
            entry.emoji,
            entry.mood.to_string(),
            entry.source,
            entry
                .notes
                .as_deref()
                .map(|n| format!("  {n}"))
                .unwrap_or_default()
        );
    }
}

fn print_stats(history: &[MoodEntry], window: TimeWindow) {
    let slices = distribution(history, window, Utc::now());
    if slices.is_empty() {
        println!("No entries in this window yet.");
        return;
    }
    for slice in slices {
        let bar = "█".repeat((slice.percentage as usize / 5).max(1));
        println!(
            "  {} {:8} {:3}% {} ({})",
            slice.emoji, slice.mood.to_string(), slice.percentage, bar, slice.count
        );
    }
}

fn print_trend(history: &[MoodEntry]) {
    match trend_series(history) {
        Trend::Insufficient => {
            println!("Not enough entries for a trend yet — record at least two.");
        }
        Trend::Series(points) => {
            for point in points {
                let bar = "·".repeat(point.level as usize);
                println!("  {}  {bar}● {} ({})", point.label, point.level, point.mood);
            }
        }
    }
}

fn print_recommendations(bundle: &Recommendations) {
    println!("A few things for feeling {}:", bundle.for_mood);
    println!("  Breathing:");
    for item in &bundle.breathing {
        println!("    - {item}");
    }
    println!("  Journaling:");
    for item in &bundle.journaling {
        println!("    - {item}");
    }
    println!("  Music:");
    for pick in &bundle.music {
        println!("    - {} — {}", pick.title, pick.description);
    }
    println!("  Videos:");
    for pick in &bundle.videos {
        println!("    - {} [{}]", pick.title, pick.kind);
    }
}

fn distress_banner(state: &CompanionState) {
    if state.distress_alert() {
        println!();
        println!("┃ It sounds like things have been heavy lately. You don't have to");
        println!("┃ carry that alone — consider reaching out to someone you trust or");
        println!("┃ a mental health professional. (/dismiss to hide this)");
    }
}

//! CLI logic for the Planboard tool.
//!
//! Each subcommand loads its inputs, runs them through the `planboard`
//! library and writes an SVG file or a plain-text listing.

pub mod error_adapter;

mod args;
mod config;

pub use args::{
    Args, CanvasArgs, Command, LeavesArgs, SessionAction, SessionArgs, TimelineArgs,
};

use std::fs;

use chrono::Local;
use log::info;

use planboard::{
    BoardRenderer, PlanboardError,
    canvas::Canvas,
    gesture::Script,
    leave::{self, CalendarView, Leave},
    plan::PlanFile,
    seed,
    session::{FileStore, Session},
};

/// Run the Planboard CLI application
///
/// # Errors
///
/// Returns `PlanboardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script and plan parsing errors
/// - Rendering errors
/// - Session store errors
pub fn run(args: &Args) -> Result<(), PlanboardError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = BoardRenderer::new(app_config);

    match &args.command {
        Command::Canvas(cmd) => run_canvas(&renderer, cmd),
        Command::Timeline(cmd) => run_timeline(&renderer, cmd),
        Command::Leaves(cmd) => run_leaves(cmd),
        Command::Session(cmd) => run_session(cmd),
    }
}

fn run_canvas(renderer: &BoardRenderer, cmd: &CanvasArgs) -> Result<(), PlanboardError> {
    let mut canvas = if cmd.empty {
        Canvas::new()
    } else {
        seed::canvas()
    };

    if let Some(path) = &cmd.script {
        info!(script_path = path; "Replaying gesture script");
        let source = fs::read_to_string(path)?;
        let script = Script::from_toml(&source)?;
        let summary = script.replay(&mut canvas);
        info!(
            created = summary.created().len(),
            skipped = summary.skipped();
            "Script replayed"
        );
    }

    let svg = renderer.render_canvas_svg(&canvas)?;
    fs::write(&cmd.output, svg)?;

    info!(output_file = cmd.output; "Canvas exported successfully");
    Ok(())
}

fn run_timeline(renderer: &BoardRenderer, cmd: &TimelineArgs) -> Result<(), PlanboardError> {
    let items = match &cmd.plan {
        Some(path) => {
            info!(plan_path = path; "Loading plan file");
            PlanFile::from_toml(&fs::read_to_string(path)?)?.work_items()?
        }
        None => seed::work_items(),
    };

    let svg = renderer.render_timeline_svg(&cmd.month, &items, cmd.today)?;
    fs::write(&cmd.output, svg)?;

    info!(output_file = cmd.output; "Timeline exported successfully");
    Ok(())
}

fn run_leaves(cmd: &LeavesArgs) -> Result<(), PlanboardError> {
    let leaves = match &cmd.plan {
        Some(path) => PlanFile::from_toml(&fs::read_to_string(path)?)?.leaves(),
        None => seed::leaves(),
    };
    let date = cmd.date.unwrap_or_else(|| Local::now().date_naive());

    let covering = leave::leaves_on(&leaves, date);
    match leave::decorate_day(&leaves, date, CalendarView::Month) {
        Some(decoration) => println!(
            "{date} [{}]: {} on leave",
            decoration.class_name(),
            decoration.leave_count()
        ),
        None => println!("{date}: nobody on leave"),
    }
    for entry in &covering {
        println!("  {}", describe(entry));
    }

    let upcoming = leave::upcoming(&leaves, date, cmd.limit);
    println!("Upcoming leaves:");
    if upcoming.is_empty() {
        println!("  none");
    }
    for entry in upcoming {
        println!("  {}", describe(entry));
    }

    Ok(())
}

fn describe(entry: &Leave) -> String {
    let mut line = format!(
        "{} {} to {} ({})",
        entry.user_name(),
        entry.start(),
        entry.end(),
        entry.status()
    );
    if let Some(reason) = entry.reason() {
        line.push_str(": ");
        line.push_str(reason);
    }
    line
}

fn run_session(cmd: &SessionArgs) -> Result<(), PlanboardError> {
    let dir = config::session_dir(cmd.store.as_ref())?;
    let mut session = Session::init(FileStore::new(dir))?;

    match &cmd.action {
        SessionAction::Login { email, password } => {
            let user = session.login(email, password)?;
            println!("Signed in as {} <{}>", user.name(), user.email());
        }
        SessionAction::Register {
            name,
            email,
            password,
        } => {
            let user = session.register(name, email, password)?;
            println!("Registered {} <{}>", user.name(), user.email());
        }
        SessionAction::Logout => {
            session.logout()?;
            println!("Signed out");
        }
        SessionAction::Whoami => match session.current_user() {
            Some(user) => println!("{} <{}> (id {})", user.name(), user.email(), user.id()),
            None => println!("Not signed in"),
        },
    }

    session.teardown();
    Ok(())
}

mod cli;

use clap::Parser;
use cli::Args;
use exam_schedule::loader;
use exam_schedule::solver::BacktrackingScheduler;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let courses = match loader::load_courses(&args.course_file) {
        Ok(courses) => courses,
        Err(err) => {
            eprintln!("error in course file '{}': {err}", args.course_file);
            return ExitCode::FAILURE;
        }
    };
    let rooms = match loader::load_rooms(&args.room_file) {
        Ok(rooms) => rooms,
        Err(err) => {
            eprintln!("error in room file '{}': {err}", args.room_file);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "read {} courses and {} rooms",
        courses.len(),
        rooms.len()
    );

    let scheduler = BacktrackingScheduler::new();
    match scheduler.schedule(&courses, &rooms, args.max_slots as usize) {
        Some(schedule) => {
            if args.json {
                match serde_json::to_string_pretty(&schedule) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("failed to serialize schedule: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{schedule}");
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!(
                "unable to create a schedule within {} timeslots",
                args.max_slots
            );
            ExitCode::FAILURE
        }
    }
}

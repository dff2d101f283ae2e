use clap::Parser;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Exam schedule generator", long_about = None)]
pub struct Args {
    /// Path of the course definition file
    pub course_file: String,

    /// Path of the room definition file
    pub room_file: String,

    /// Maximum number of exam timeslots
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub max_slots: u32,

    /// Print the schedule as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

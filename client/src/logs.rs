use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    println!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().bold(),
        msg
    );
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Level::Success, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Level::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}

use crate::cli::commands::list::print_entries;
use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::models::day_summary::{DailySummary, WeeklySummary};
use crate::ui::messages::header;
use crate::utils::clock::Clock;
use crate::utils::colors::dim_placeholder;
use crate::utils::date::{resolve_day, weekday_short};
use crate::utils::formatting::{bold, format_day, format_duration, format_time, pad_right};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date, week } = cmd {
        let clock = command_clock();
        let day = resolve_day(date.as_ref(), clock.now().date_naive())?;

        let pool = open_pool(cfg)?;
        let entries = load_all_entries(&pool)?;

        if *week {
            print_week(&Core::build_weekly_summary(&entries, day, &clock));
        } else {
            print_day(day, &Core::build_daily_summary(&entries, day, &clock));
        }
    }
    Ok(())
}

fn metric(label: &str, value: &str) {
    println!("{} {}", pad_right(label, 16), dim_placeholder(value));
}

fn print_day(day: NaiveDate, summary: &DailySummary) {
    header(format!("Daily Summary · {}", format_day(&day)));

    if summary.is_empty() {
        println!("No entries recorded for this day.");
        return;
    }

    let na = || "N/A".to_string();
    metric("Total work", &format_duration(summary.total_work));
    metric("Total break", &format_duration(summary.total_break));
    metric(
        "First clock-in",
        &summary.first_clock_in.as_ref().map_or_else(na, format_time),
    );
    metric(
        "Last clock-out",
        &summary.last_clock_out.as_ref().map_or_else(na, format_time),
    );
    println!(
        "Work ({}%) | Break ({}%)",
        summary.work_percentage, summary.break_percentage
    );

    if !summary.breaks.is_empty() {
        println!("\n{}", bold(&format!("Breaks taken ({})", summary.breaks.len())));
        for b in &summary.breaks {
            println!(
                "  {} → {}  {}",
                format_time(&b.start),
                format_time(&b.end),
                format_duration(b.duration_ms)
            );
        }
    }

    println!();
    print_entries(&summary.entries);
}

fn print_week(week: &WeeklySummary) {
    let (Some((first, _)), Some((last, _))) = (week.days.first(), week.days.last()) else {
        return;
    };
    header(format!("Weekly Summary · {} – {}", first, last));

    for (day, s) in &week.days {
        println!(
            "{} {}  work {}  break {}  sessions {}",
            weekday_short(*day),
            day,
            dim_placeholder(&format_duration(s.total_work)),
            dim_placeholder(&format_duration(s.total_break)),
            s.entries.len()
        );
    }

    println!(
        "\n{} work {}  break {}",
        pad_right("Week total", 14),
        format_duration(week.total_work),
        format_duration(week.total_break)
    );
}

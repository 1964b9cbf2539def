use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, Screen};
use crate::db::Database;
use crate::export::ReportFormat;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("e", "Go to Entries", cmd_entries, r);
    register_command!("entries", "Go to Entries", cmd_entries, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("s", "Save the entry fields as a new record", cmd_save, r);
    register_command!("save", "Save the entry fields as a new record", cmd_save, r);
    register_command!("u", "Update the selected record", cmd_update, r);
    register_command!("update", "Update the selected record", cmd_update, r);
    register_command!("delete", "Delete the selected record", cmd_delete, r);
    register_command!("clear", "Clear the entry fields", cmd_clear, r);
    register_command!("date", "Fill the date field with today", cmd_date, r);
    register_command!("limit", "Set spending limit (e.g. :limit 3000)", cmd_limit, r);
    register_command!("b", "Show total expense and remaining balance", cmd_balance, r);
    register_command!(
        "balance",
        "Show total expense and remaining balance",
        cmd_balance,
        r
    );
    register_command!(
        "export",
        "Generate a report (e.g. :export pdf|xlsx|csv|chart)",
        cmd_export,
        r
    );
    register_command!("pdf", "Generate the PDF report", cmd_export_pdf, r);
    register_command!("xlsx", "Generate the Excel report", cmd_export_xlsx, r);
    register_command!("csv", "Generate the CSV report", cmd_export_csv, r);
    register_command!("chart", "Generate the expense pie chart", cmd_export_chart, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    let (name, args) = match input.split_once(' ') {
        Some((n, a)) => (n, a.trim()),
        None => (input, ""),
    };

    match COMMANDS.get(name) {
        Some(cmd) => (cmd.run)(args, app, db),
        None => {
            app.set_status(format!("Unknown command: {name} (:help for a list)"));
            Ok(())
        }
    }
}

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_entries(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Entries;
    app.refresh_records(db)
}

fn cmd_summary(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    app.refresh_records(db)
}

fn cmd_save(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.save_record(db)
}

fn cmd_update(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.apply_update(db)
}

fn cmd_delete(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.request_delete();
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.clear_entries();
    Ok(())
}

fn cmd_date(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.set_date_today();
    app.set_status(format!("Date set to {}", app.date_input));
    Ok(())
}

fn cmd_limit(args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :limit <amount>");
        return Ok(());
    }
    match Decimal::from_str(args) {
        Ok(v) => {
            app.limit = v;
            app.limit_input = v.to_string();
            app.set_status(format!("Spending limit set to {v}"));
        }
        Err(_) => app.set_status(format!("Invalid limit: '{args}'")),
    }
    Ok(())
}

fn cmd_balance(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.refresh_records(db)?;
    app.show_balance = true;
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    match ReportFormat::parse(args) {
        Some(format) => app.export_report(db, format),
        None => {
            app.set_status("Usage: :export <pdf|xlsx|csv|chart>");
            Ok(())
        }
    }
}

fn cmd_export_pdf(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.export_report(db, ReportFormat::Pdf)
}

fn cmd_export_xlsx(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.export_report(db, ReportFormat::Xlsx)
}

fn cmd_export_csv(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.export_report(db, ReportFormat::Csv)
}

fn cmd_export_chart(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.export_report(db, ReportFormat::Chart)
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::db::Database;
use crate::export::{self, ReportFormat};
use crate::models::ExpenseRecord;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(db),
        "delete" | "rm" => cli_delete(&args[2..], db),
        "balance" => cli_balance(&args[2..], db),
        "report" => cli_report(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI — local-only expense tracker");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <name> <price> [date]     Add an expense record");
    println!("  list                          List all expense records");
    println!("  delete <id>                   Delete a record by serial number");
    println!("  balance                       Print total expense and remaining balance");
    println!("    --limit <amount>            Spending limit (default: 5000)");
    println!("  report <pdf|xlsx|csv|chart>   Generate an expense report");
    println!("    --out <dir>                 Output directory (default: current)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: expensetui add <name> <price> [date]");
    }

    let name = args[0].clone();
    let price = Decimal::from_str(&args[1])
        .map_err(|_| anyhow::anyhow!("Invalid price: '{}'", args[1]))?;
    let date = args.get(2).cloned().unwrap_or_default();

    let rec = ExpenseRecord::new(name, price, date);
    let id = db.insert_record(&rec)?;
    println!("Saved record #{id}: {}", rec.item_name);
    Ok(())
}

fn cli_list(db: &mut Database) -> Result<()> {
    let records = db.get_records()?;
    if records.is_empty() {
        println!("No expense records");
        return Ok(());
    }

    println!(
        "{:>9}  {:<32} {:>12}  {}",
        "Serial no", "Item Name", "Item Price", "Purchase Date"
    );
    for rec in &records {
        println!(
            "{:>9}  {:<32} {:>12.2}  {}",
            rec.serial(),
            rec.item_name,
            rec.item_price,
            rec.purchase_date
        );
    }
    println!();
    println!("{} records, {:.2} total", records.len(), db.total_spent()?);
    Ok(())
}

fn cli_delete(args: &[String], db: &mut Database) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: expensetui delete <id>");
    }
    let id: i64 = args[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid serial number: '{}'", args[0]))?;

    match db.get_record_by_id(id)? {
        Some(rec) => {
            db.delete_record(id)?;
            println!("Deleted: {}", rec.item_name);
        }
        None => println!("No record #{id}"),
    }
    Ok(())
}

fn cli_balance(args: &[String], db: &mut Database) -> Result<()> {
    let limit = match args.windows(2).find(|w| w[0] == "--limit") {
        Some(w) => Decimal::from_str(&w[1])
            .map_err(|_| anyhow::anyhow!("Invalid limit: '{}'", w[1]))?,
        None => Decimal::from(5000),
    };

    let total = db.total_spent()?;
    println!("Total Expense:     {total:.2}");
    println!("Expense Limit:     {limit:.2}");
    println!("Balance Remaining: {:.2}", limit - total);
    Ok(())
}

fn cli_report(args: &[String], db: &mut Database) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: expensetui report <pdf|xlsx|csv|chart> [--out <dir>]");
    }
    let format = ReportFormat::parse(&args[0]).ok_or_else(|| {
        let supported: Vec<&str> = ReportFormat::all().iter().map(|f| f.extension()).collect();
        anyhow::anyhow!(
            "Unknown report format: '{}' (expected one of: {})",
            args[0],
            supported.join(", ")
        )
    })?;

    let out_dir = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| PathBuf::from(&w[1]))
        .unwrap_or_else(|| PathBuf::from("."));
    if !out_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", out_dir.display());
    }

    let records = db.get_records()?;
    let path = export::write_report(format, &records, &out_dir)?;
    println!("Expense report generated: {}", path.display());
    Ok(())
}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use generation_identifier::{
    BirthDateForm, FixedYear, Submission, SystemClock, YearProvider, logging,
};

#[derive(Debug, Parser)]
#[command(name = "genid")]
#[command(version, about = "Find out whether a birth date makes you Gen Z or Gen Alpha")]
struct Args {
    /// Birth date as YYYY-MM-DD
    #[arg(value_name = "DATE", conflicts_with_all = ["year", "month", "day"])]
    date: Option<String>,

    /// Birth year
    #[arg(short, long)]
    year: Option<String>,

    /// Birth month (1-12)
    #[arg(short, long)]
    month: Option<String>,

    /// Birth day of month
    #[arg(short, long)]
    day: Option<String>,

    /// Treat this as the current year when checking the accepted range
    #[arg(long, value_name = "YEAR")]
    as_of: Option<u16>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn has_fields(&self) -> bool {
        self.date.is_some() || self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Builds the form from flags. A positional date is split on its first
    /// two hyphens; anything malformed is left for validation to reject.
    fn form(&self) -> BirthDateForm {
        if let Some(date) = &self.date {
            let mut parts = date.trim().splitn(3, '-');
            let mut next = || parts.next().unwrap_or_default().to_owned();
            let (year, month, day) = (next(), next(), next());
            return BirthDateForm { year, month, day };
        }

        BirthDateForm {
            year:  self.year.clone().unwrap_or_default(),
            month: self.month.clone().unwrap_or_default(),
            day:   self.day.clone().unwrap_or_default(),
        }
    }

    fn current_year(&self) -> u16 {
        self.as_of.unwrap_or_else(|| SystemClock.current_year())
    }
}

/// Asks for each field on the terminal, the way the page walks through its
/// year, month and day pickers.
fn prompt_form(current_year: u16, input: &mut impl BufRead, out: &mut impl Write) -> Result<BirthDateForm> {
    let mut form = BirthDateForm::default();

    form.year = ask(&format!("Birth year (1900-{current_year}): "), input, out)?;

    let months = BirthDateForm::month_options()
        .map(|(number, name)| format!("{number}={name}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{months}")?;
    form.month = ask("Birth month (1-12): ", input, out)?;

    let days = form.day_options();
    form.day = ask(&format!("Birth day ({}-{}): ", days.start(), days.end()), input, out)?;

    Ok(form)
}

fn ask(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(line.trim().to_owned())
}

fn render(submission: &Submission, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, submission).context("Failed to serialize outcome")?;
        writeln!(out)?;
        return Ok(());
    }

    match submission {
        Submission::Result(view) => {
            writeln!(out, "{}", view.badge)?;
            writeln!(out, "{}", view.headline)?;
            writeln!(out, "{}", view.description)?;
        },
        Submission::Notice(notice) => {
            writeln!(out, "{}", notice.title)?;
            writeln!(out, "{}", notice.description)?;
        },
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let current_year = args.current_year();
    let form = if args.has_fields() {
        args.form()
    } else {
        let stdin = io::stdin();
        prompt_form(current_year, &mut stdin.lock(), &mut io::stdout())?
    };

    let submission = form.submit(&FixedYear(current_year));
    match &submission {
        Submission::Result(view) => tracing::info!(generation = %view.generation, "classified"),
        Submission::Notice(notice) => tracing::info!(title = notice.title, "rejected"),
    }

    let stdout = io::stdout();
    render(&submission, args.json, &mut stdout.lock())?;

    Ok(match submission {
        Submission::Result(_) => ExitCode::SUCCESS,
        Submission::Notice(_) => ExitCode::from(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: FixedYear = FixedYear(2024);

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("genid").chain(argv.iter().copied())).unwrap()
    }

    fn rendered(submission: &Submission, json: bool) -> String {
        let mut out = Vec::new();
        render(submission, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_positional_date() {
        let form = parse(&["2005-06-15"]).form();
        assert_eq!(form, BirthDateForm::new("2005", "06", "15"));
    }

    #[test]
    fn test_positional_date_malformed() {
        let form = parse(&["2005-06"]).form();
        assert_eq!(form, BirthDateForm::new("2005", "06", ""));
        assert!(form.submit(&NOW).notice().is_some());

        let form = parse(&["2005-06-15-01"]).form();
        assert_eq!(form.day, "15-01");
        assert!(form.submit(&NOW).notice().is_some());
    }

    #[test]
    fn test_field_flags() {
        let args = parse(&["--year", "2015", "-m", "1", "-d", "1"]);
        assert!(args.has_fields());
        assert_eq!(args.form(), BirthDateForm::new("2015", "1", "1"));
    }

    #[test]
    fn test_date_conflicts_with_fields() {
        let result = Args::try_parse_from(["genid", "2005-06-15", "--year", "2005"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_as_of_overrides_clock() {
        assert_eq!(parse(&["--as-of", "2030"]).current_year(), 2030);
        assert_eq!(parse(&[]).current_year(), generation_identifier::current_year());
        assert!(!parse(&[]).has_fields());
    }

    #[test]
    fn test_render_result() {
        let submission = BirthDateForm::new("2005", "6", "15").submit(&NOW);
        let text = rendered(&submission, false);
        assert!(text.starts_with("🎉 Congratulations!\nYou're Gen Z!\n"));
    }

    #[test]
    fn test_render_notice() {
        let submission = BirthDateForm::new("2005", "2", "31").submit(&NOW);
        assert_eq!(
            rendered(&submission, false),
            "Invalid Date\nPlease enter a valid birth date.\n"
        );
    }

    #[test]
    fn test_render_json() {
        let submission = BirthDateForm::new("1990", "1", "1").submit(&NOW);
        let value: serde_json::Value = serde_json::from_str(&rendered(&submission, true)).unwrap();
        assert_eq!(value["kind"], "notice");
        assert_eq!(value["title"], "Not Gen Z or Alpha");
    }

    #[test]
    fn test_prompt_form() {
        let mut input = "2020\n2\n29\n".as_bytes();
        let mut out = Vec::new();
        let form = prompt_form(2024, &mut input, &mut out).unwrap();
        assert_eq!(form, BirthDateForm::new("2020", "2", "29"));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Birth year (1900-2024): "));
        assert!(transcript.contains("1=January"));
        assert!(transcript.contains("Birth day (1-29): "));
    }
}

use anyhow::{Context, Result, bail};
use dnscheck_lib::{CheckResultSet, DiagnosticRow, ExpectedHostIps, Status};

use crate::args::Cli;

pub fn write_report(
    result: &CheckResultSet,
    mail_host: &str,
    expected: &ExpectedHostIps,
    cli: &Cli,
) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(result, mail_host, expected, cli),
        "json" => write_json(result, cli),
        "csv" => write_csv(result, cli),
        other => bail!("unknown --format '{other}', use: human|json|csv"),
    }
}

fn write_human(
    result: &CheckResultSet,
    mail_host: &str,
    expected: &ExpectedHostIps,
    cli: &Cli,
) -> Result<()> {
    let report = render_human(result, mail_host, expected)?;
    emit(cli.out.as_deref(), report.as_bytes())
}

fn render_human(
    result: &CheckResultSet,
    mail_host: &str,
    expected: &ExpectedHostIps,
) -> Result<String> {
    use std::fmt::Write;

    let source = if expected.is_override() {
        "override"
    } else {
        "discovered"
    };
    let ips = expected.all();
    let ips = if ips.is_empty() {
        "none".to_string()
    } else {
        ips.join(", ")
    };
    let mut out = String::new();
    writeln!(out, "mail host {mail_host} (expected IPs, {source}: {ips})")?;
    for row in &result.mail_host {
        writeln!(out, "  {}", row.summary_line())?;
    }

    for entry in &result.domains {
        writeln!(out, "domain {}", entry.domain)?;
        if entry.rows.is_empty() {
            writeln!(out, "  (no checks)")?;
        }
        for row in &entry.rows {
            writeln!(out, "  {}", row.summary_line())?;
        }
    }

    let rows: Vec<&DiagnosticRow> = result.rows().collect();
    let count = |status: Status| rows.iter().filter(|row| row.status == status).count();
    writeln!(
        out,
        "{} rows: {} ok, {} warning, {} error",
        rows.len(),
        count(Status::Ok),
        count(Status::Warning),
        count(Status::Error)
    )?;
    Ok(out)
}

/// Report to `out` when given, stdout otherwise.
fn emit(out: Option<&str>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => write_all_atomically(path, bytes),
        None => {
            use std::io::Write;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(feature = "with-serde")]
fn write_json(result: &CheckResultSet, cli: &Cli) -> Result<()> {
    let mut s = serde_json::to_string_pretty(result)?;
    s.push('\n');
    emit(cli.out.as_deref(), s.as_bytes())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &CheckResultSet, _: &Cli) -> Result<()> {
    bail!("format=json needs the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn write_csv(result: &CheckResultSet, cli: &Cli) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "scope",
        "domain",
        "subject",
        "record_type",
        "status",
        "expected",
        "actual",
        "message",
    ])?;
    for row in &result.mail_host {
        wtr.write_record(csv_record(row, ""))?;
    }
    for entry in &result.domains {
        for row in &entry.rows {
            wtr.write_record(csv_record(row, &entry.domain))?;
        }
    }
    let data = wtr.into_inner().context("flush CSV")?;
    emit(cli.out.as_deref(), &data)
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &CheckResultSet, _: &Cli) -> Result<()> {
    bail!("format=csv needs the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &DiagnosticRow, domain: &str) -> Vec<String> {
    vec![
        row.scope.to_string(),
        domain.to_string(),
        row.subject.clone(),
        row.record_type.clone(),
        row.status.to_string(),
        row.expected_values.join("|"),
        row.actual_values.join("|"),
        row.message.clone(),
    ]
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use dnscheck_lib::{CheckResultSet, DiagnosticRow, Scope, Status, parse_override};

    use super::{emit, render_human};

    fn report() -> CheckResultSet {
        let mut result = CheckResultSet::new();
        result.mail_host.push(DiagnosticRow::new(
            Scope::MailHost,
            "mail.example.com",
            "A",
            vec!["192.0.2.1".to_string()],
            vec!["192.0.2.1".to_string()],
            Status::Ok,
            "A record matches an expected host IP",
        ));
        result.insert_domain("example.com", Vec::new());
        result
    }

    #[test]
    fn human_report_lists_rows_and_totals() {
        let expected = parse_override("192.0.2.1").expect("valid");
        let text = render_human(&report(), "mail.example.com", &expected).expect("render");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "mail host mail.example.com (expected IPs, override: 192.0.2.1)"
        );
        assert!(lines[1].starts_with("  [OK     ] A mail.example.com ::"));
        assert_eq!(
            lines[2..],
            [
                "domain example.com",
                "  (no checks)",
                "1 rows: 1 ok, 0 warning, 0 error"
            ]
        );
    }

    #[test]
    fn report_goes_to_out_file_when_given() {
        let name = format!("dnscheck-report-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        let path = path.to_str().expect("utf-8 temp path").to_string();

        emit(Some(&path), b"mail host mail.example.com\n").expect("written");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "mail host mail.example.com\n");
        assert!(!std::path::Path::new(&format!("{path}.tmp")).exists());
        std::fs::remove_file(&path).expect("cleanup");
    }
}

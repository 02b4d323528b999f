//! PII command implementation.

use crate::cli::PiiArgs;
use crate::error::Result;
use crate::output::Formatter;
use recordsdesk_pii::parser::load_from_path;
use recordsdesk_pii::FindingsIndex;

/// Execute the pii command.
pub fn execute_pii(args: PiiArgs, formatter: &Formatter) -> Result<()> {
    let outcome = load_from_path(&args.csv)?;
    if outcome.skipped > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("Skipped {} malformed row(s)", outcome.skipped))
        );
    }

    let index = FindingsIndex::from_findings(outcome.findings);
    let findings = index.for_record(&args.record_id);

    println!("{}", formatter.format_findings(findings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_pii_command_reads_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "recordId,fileName,pageNumber,piiType,confidence,x,y,width,height,text,reasoning"
        )
        .unwrap();
        writeln!(
            file,
            "rec-1,scan.pdf,1,ssn,0.98,10,20,100,12,123-45-6789,SSN pattern"
        )
        .unwrap();

        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = PiiArgs {
            record_id: "rec-1".to_string(),
            csv: file.path().to_string_lossy().to_string(),
        };
        execute_pii(args, &formatter).unwrap();
    }
}

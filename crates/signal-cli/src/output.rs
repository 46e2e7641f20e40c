//! Result formatting

use crate::settings::OutputFormat;
use anyhow::Result;
use feature_engine::ProcessorResult;
use serde::Serialize;
use std::io::Write;

/// JSON line: the result plus the optional echoed label
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    result: &'a ProcessorResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

/// Writes one line per push in the configured format
pub struct ResultWriter<W: Write> {
    out: W,
    format: OutputFormat,
    precision: usize,
    with_label: bool,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(out: W, format: OutputFormat, precision: usize, with_label: bool) -> Self {
        Self {
            out,
            format,
            precision,
            with_label,
        }
    }

    /// Column header; written for TSV only
    pub fn write_header(&mut self, processor_names: &[&str]) -> Result<()> {
        if self.format != OutputFormat::Tsv {
            return Ok(());
        }
        let mut columns = vec!["id"];
        if self.with_label {
            columns.push("label");
        }
        columns.push("value");
        columns.extend_from_slice(processor_names);
        writeln!(self.out, "{}", columns.join("\t"))?;
        Ok(())
    }

    pub fn write(&mut self, result: &ProcessorResult, label: Option<&str>) -> Result<()> {
        match self.format {
            OutputFormat::Tsv => {
                let mut line = result.id.clone();
                if self.with_label {
                    line.push('\t');
                    line.push_str(label.unwrap_or(""));
                }
                line.push('\t');
                line.push_str(&self.number(result.value));
                for values in &result.processor_results {
                    for v in values {
                        line.push('\t');
                        line.push_str(&self.number(*v));
                    }
                }
                writeln!(self.out, "{line}")?;
            }
            OutputFormat::Json => {
                let record = JsonRecord { result, label };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn number(&self, v: f64) -> String {
        format!("{:.*}", self.precision, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_result() -> ProcessorResult {
        ProcessorResult {
            id: "GCAG".into(),
            value: 0.9363,
            processor_results: vec![vec![0.5], vec![1.26, -3.0]],
        }
    }

    #[test]
    fn test_tsv_rows() {
        let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Tsv, 2, true);
        writer.write_header(&["rms", "custom"]).unwrap();
        writer.write(&sample_result(), Some("2016")).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "id\tlabel\tvalue\trms\tcustom\nGCAG\t2016\t0.94\t0.50\t1.26\t-3.00\n"
        );
    }

    #[test]
    fn test_tsv_without_label() {
        let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Tsv, 1, false);
        writer.write_header(&[]).unwrap();
        writer.write(&sample_result(), None).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "id\tvalue\nGCAG\t0.9\t0.5\t1.3\t-3.0\n");
    }

    #[test]
    fn test_json_lines() {
        let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Json, 2, false);
        writer.write_header(&["ignored"]).unwrap();
        writer.write(&sample_result(), None).unwrap();
        writer.write(&sample_result(), Some("x")).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "GCAG");
        assert_eq!(first["processorResults"][1][0], 1.26);
        assert!(first.get("label").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["label"], "x");
    }

    proptest! {
        #[test]
        fn prop_tsv_column_count(
            arities in proptest::collection::vec(0usize..4, 0..6),
            with_label in any::<bool>(),
        ) {
            let result = ProcessorResult {
                id: "s".into(),
                value: 1.0,
                processor_results: arities.iter().map(|&n| vec![0.5; n]).collect(),
            };
            let mut writer = ResultWriter::new(Vec::new(), OutputFormat::Tsv, 2, with_label);
            writer.write(&result, Some("y")).unwrap();

            let text = String::from_utf8(writer.into_inner()).unwrap();
            let columns = text.trim_end_matches('\n').split('\t').count();
            let expected = 2 + usize::from(with_label) + arities.iter().sum::<usize>();
            prop_assert_eq!(columns, expected);
        }
    }
}

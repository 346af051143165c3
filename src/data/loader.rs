use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{LoadReport, Sample, SampleSet, SkippedLine};
use crate::config::{LoaderConfig, MalformedLinePolicy};

/// Field separator between angle and distance.
pub const SEPARATOR: char = ',';

// ---------------------------------------------------------------------------
// Per-line classification and parsing
// ---------------------------------------------------------------------------

/// How a single input line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// No separator: blank line, header or comment. Not an error.
    Skip,
    /// Has a separator and must parse as `angle,distance`.
    Candidate,
}

/// Why a candidate line could not become a [`Sample`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("expected 2 comma-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("angle '{text}' is not a number")]
    InvalidAngle { text: String },
    #[error("distance '{text}' is not a number")]
    InvalidDistance { text: String },
    #[error("line is not valid UTF-8")]
    NotUtf8,
}

pub fn classify_line(line: &str) -> LineKind {
    if line.contains(SEPARATOR) {
        LineKind::Candidate
    } else {
        LineKind::Skip
    }
}

/// Parse a candidate line `<angle_degrees>,<distance>` into a sample.
pub fn parse_sample(line: &str) -> Result<Sample, SampleError> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    parse_fields(&fields)
}

fn parse_fields(fields: &[&str]) -> Result<Sample, SampleError> {
    let [angle, distance] = fields else {
        return Err(SampleError::FieldCount {
            found: fields.len(),
        });
    };
    let angle = angle.trim();
    let distance = distance.trim();

    let angle_degrees = angle
        .parse::<f64>()
        .map_err(|_| SampleError::InvalidAngle {
            text: angle.to_string(),
        })?;
    let distance = distance
        .parse::<f64>()
        .map_err(|_| SampleError::InvalidDistance {
            text: distance.to_string(),
        })?;

    Ok(Sample::from_degrees(angle_degrees, distance))
}

// ---------------------------------------------------------------------------
// Whole-file loading
// ---------------------------------------------------------------------------

/// Load the configured input file.
pub fn load_samples(config: &LoaderConfig) -> Result<LoadReport> {
    load_file(&config.input_path, config.malformed_lines)
}

/// Load samples from a file. A missing or unreadable file is an error;
/// malformed lines are handled according to `policy`.
pub fn load_file(path: &Path, policy: MalformedLinePolicy) -> Result<LoadReport> {
    let file = File::open(path)
        .with_context(|| format!("opening sample file {}", path.display()))?;
    let report = load_reader(file, policy)
        .with_context(|| format!("reading sample file {}", path.display()))?;

    log::info!(
        "Loaded {} samples from {} ({} lines without separator, {} malformed)",
        report.samples.len(),
        path.display(),
        report.lines_without_separator,
        report.malformed.len()
    );
    Ok(report)
}

/// Parse samples from any reader, one `angle,distance` pair per line.
///
/// Lines are numbered from 1 as they appear in the input, blank lines
/// included. A trailing `\r` is dropped so CRLF files read the same.
pub fn load_reader<R: Read>(input: R, policy: MalformedLinePolicy) -> Result<LoadReport> {
    let mut samples = SampleSet::new();
    let mut lines_without_separator = 0;
    let mut malformed = Vec::new();

    for (index, raw) in BufReader::new(input).split(b'\n').enumerate() {
        let line = index as u64 + 1;
        let raw = raw.with_context(|| format!("reading line {line}"))?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);

        let parsed = match std::str::from_utf8(bytes) {
            Ok(text) if classify_line(text) == LineKind::Skip => None,
            Ok(text) => Some(parse_sample(text)),
            Err(_) if !bytes.contains(&(SEPARATOR as u8)) => None,
            Err(_) => Some(Err(SampleError::NotUtf8)),
        };

        match parsed {
            None => lines_without_separator += 1,
            Some(Ok(sample)) => samples.push(sample),
            Some(Err(error)) => match policy {
                MalformedLinePolicy::Skip => {
                    log::warn!("Skipping line {line}: {error}");
                    malformed.push(SkippedLine { line, error });
                }
                MalformedLinePolicy::Abort => bail!("line {line}: {error}"),
            },
        }
    }

    if samples.is_empty() {
        log::warn!("No valid samples found");
    }

    Ok(LoadReport {
        samples,
        lines_without_separator,
        malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use std::io::Write;

    fn load_str(text: &str) -> LoadReport {
        load_reader(text.as_bytes(), MalformedLinePolicy::Skip).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn classify_by_separator() {
        assert_eq!(classify_line("   "), LineKind::Skip);
        assert_eq!(classify_line(""), LineKind::Skip);
        assert_eq!(classify_line("# comment"), LineKind::Skip);
        assert_eq!(classify_line("90,150"), LineKind::Candidate);
        assert_eq!(classify_line("a,b,c"), LineKind::Candidate);
    }

    #[test]
    fn parse_quarter_turn() {
        let sample = parse_sample("90,150").unwrap();
        assert!((sample.angle_radians - 1.5708).abs() < 1e-4);
        assert_eq!(sample.distance, 150.0);

        let sample = parse_sample("0,100").unwrap();
        assert_eq!(sample.angle_radians, 0.0);
        assert_eq!(sample.distance, 100.0);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let sample = parse_sample(" 180 , 42.5\n").unwrap();
        assert!((sample.angle_radians - PI).abs() < 1e-12);
        assert_eq!(sample.distance, 42.5);
    }

    #[test]
    fn parse_rejects_malformed_fields() {
        assert_eq!(
            parse_sample("1,2,3"),
            Err(SampleError::FieldCount { found: 3 })
        );
        assert_eq!(
            parse_sample("north,10"),
            Err(SampleError::InvalidAngle {
                text: "north".into()
            })
        );
        assert_eq!(
            parse_sample("10, "),
            Err(SampleError::InvalidDistance { text: "".into() })
        );
    }

    #[test]
    fn four_quadrants_in_file_order() {
        let report = load_str("0,10\n90,20\n180,30\n270,40\n");

        let angles: Vec<f64> = report.samples.iter().map(|s| s.angle_radians).collect();
        assert_close(&angles, &[0.0, PI / 2.0, PI, 3.0 * PI / 2.0]);
        assert_eq!(report.samples.distances(), &[10.0, 20.0, 30.0, 40.0]);
        assert!(report.malformed.is_empty());
    }

    #[test]
    fn lines_without_separator_contribute_nothing() {
        let report = load_str("# sweep 1\n\n0,100\nangle distance\n\n45,50\n");

        assert_eq!(report.samples.len(), 2);
        assert_eq!(report.lines_without_separator, 4);
        assert!(report.malformed.is_empty());
    }

    #[test]
    fn skip_policy_keeps_valid_lines() {
        let report = load_str("0,10\nbad,20\n90,20\n1,2,3\n180,30\r\n");

        assert_eq!(report.samples.distances(), &[10.0, 20.0, 30.0]);
        let lines: Vec<u64> = report.malformed.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(
            report.malformed[1].error,
            SampleError::FieldCount { found: 3 }
        );
    }

    #[test]
    fn malformed_lines_keep_file_line_numbers() {
        let cases: [(&str, u64); 5] = [
            ("0,1\n\nx,2\n", 3),
            ("\n\nx,2\n", 3),
            ("0,1\n\n\n\nx,2\n", 5),
            ("0,1\r\n\r\nx,2\r\n", 3),
            ("\n\n0,1\n\nx,2\n90,4\n", 5),
        ];
        for (input, expected) in cases {
            let report = load_str(input);
            assert_eq!(report.malformed.len(), 1, "{input:?}");
            assert_eq!(report.malformed[0].line, expected, "{input:?}");
        }
    }

    #[test]
    fn abort_policy_counts_blank_and_crlf_lines() {
        let err = load_reader(
            "0,10\r\n\r\n# header\r\n\r\n90,x\r\n".as_bytes(),
            MalformedLinePolicy::Abort,
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 5"), "{msg}");
    }

    #[test]
    fn crlf_lines_parse_cleanly() {
        let report = load_str("0,10\r\n\r\n90,20\r\n");
        assert_eq!(report.samples.distances(), &[10.0, 20.0]);
        assert!(report.malformed.is_empty());
    }

    #[test]
    fn skip_policy_drops_invalid_utf8() {
        let mut input = b"0,1\n".to_vec();
        input.extend_from_slice(&[0xff, b',', b'2', b'\n']);
        input.extend_from_slice(b"90,3\n");

        let report = load_reader(input.as_slice(), MalformedLinePolicy::Skip).unwrap();
        assert_eq!(report.samples.distances(), &[1.0, 3.0]);
        assert_eq!(report.malformed[0].error, SampleError::NotUtf8);
    }

    #[test]
    fn abort_policy_names_the_line() {
        let err = load_reader("0,10\n90,x\n".as_bytes(), MalformedLinePolicy::Abort)
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("'x'"), "{msg}");
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("veriler.txt");

        let err = load_file(&path, MalformedLinePolicy::Skip).unwrap_err();
        let io = err.root_cause().downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert!(format!("{err:#}").contains("veriler.txt"));
    }

    #[test]
    fn reloading_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,10\n30,15.5\n# noise\n300,7").unwrap();

        let config = LoaderConfig {
            input_path: file.path().to_path_buf(),
            ..LoaderConfig::default()
        };
        let first = load_samples(&config).unwrap();
        let second = load_samples(&config).unwrap();

        assert_eq!(first.samples.len(), 3);
        assert_eq!(first, second);
    }
}

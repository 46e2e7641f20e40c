//! Built-in Processor Registry

use crate::error::SignalError;
use crate::processor::Processor;
use crate::rms::RunningRms;
use crate::statistics::{Average, MeanAbsoluteValue, WindowedRms};
use crate::waveform::{WaveformLength, WilsonAmplitude};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Description of a built-in processor.
///
/// A kind is a recipe, not an instance: [`ProcessorKind::build`] returns a
/// fresh processor every time, so stateful kinds never share memory between
/// signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessorKind {
    #[serde(rename = "avg", alias = "average")]
    Average,
    #[serde(rename = "mav", alias = "mean_absolute_value")]
    MeanAbsoluteValue,
    #[serde(rename = "wl", alias = "waveform_length")]
    WaveformLength,
    #[serde(rename = "wamp", alias = "wilson_amplitude")]
    WilsonAmplitude { threshold: f64 },
    #[serde(rename = "rms_window", alias = "windowed_rms")]
    WindowedRms,
    #[serde(rename = "rms", alias = "running_rms")]
    RunningRms,
}

impl ProcessorKind {
    /// Instantiate a new processor of this kind
    pub fn build(&self) -> Box<dyn Processor> {
        match *self {
            ProcessorKind::Average => Box::new(Average::new()),
            ProcessorKind::MeanAbsoluteValue => Box::new(MeanAbsoluteValue::new()),
            ProcessorKind::WaveformLength => Box::new(WaveformLength::new()),
            ProcessorKind::WilsonAmplitude { threshold } => Box::new(WilsonAmplitude::new(threshold)),
            ProcessorKind::WindowedRms => Box::new(WindowedRms::new()),
            ProcessorKind::RunningRms => Box::new(RunningRms::new()),
        }
    }

    /// Short name, identical to the built processor's `name()`
    pub fn name(&self) -> &'static str {
        match self {
            ProcessorKind::Average => "avg",
            ProcessorKind::MeanAbsoluteValue => "mav",
            ProcessorKind::WaveformLength => "wl",
            ProcessorKind::WilsonAmplitude { .. } => "wamp",
            ProcessorKind::WindowedRms => "rms_window",
            ProcessorKind::RunningRms => "rms",
        }
    }

    /// Whether the processor keeps memory across pushes
    pub fn is_stateful(&self) -> bool {
        matches!(self, ProcessorKind::RunningRms)
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorKind::WilsonAmplitude { threshold } => write!(f, "wamp:{threshold}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for ProcessorKind {
    type Err = SignalError;

    /// Parse `avg`, `mav`, `wl`, `wamp:<threshold>`, `rms_window` or `rms`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let kind = match name.to_ascii_lowercase().as_str() {
            "avg" | "average" => ProcessorKind::Average,
            "mav" | "mean_absolute_value" => ProcessorKind::MeanAbsoluteValue,
            "wl" | "waveform_length" => ProcessorKind::WaveformLength,
            "wamp" | "wilson_amplitude" => {
                let raw = arg.ok_or_else(|| {
                    SignalError::InvalidThreshold(format!("'{s}' needs a threshold, e.g. wamp:0.5"))
                })?;
                let threshold = raw
                    .parse::<f64>()
                    .map_err(|e| SignalError::InvalidThreshold(format!("'{raw}': {e}")))?;
                return Ok(ProcessorKind::WilsonAmplitude { threshold });
            }
            "rms_window" | "windowed_rms" => ProcessorKind::WindowedRms,
            "rms" | "running_rms" => ProcessorKind::RunningRms,
            _ => return Err(SignalError::UnknownProcessor(s.to_string())),
        };

        if arg.is_some() {
            return Err(SignalError::UnknownProcessor(format!(
                "'{s}': {name} takes no argument"
            )));
        }
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("avg".parse::<ProcessorKind>().unwrap(), ProcessorKind::Average);
        assert_eq!("MAV".parse::<ProcessorKind>().unwrap(), ProcessorKind::MeanAbsoluteValue);
        assert_eq!("running_rms".parse::<ProcessorKind>().unwrap(), ProcessorKind::RunningRms);
        assert_eq!(" rms_window ".parse::<ProcessorKind>().unwrap(), ProcessorKind::WindowedRms);
        assert_eq!(
            "wamp:0.25".parse::<ProcessorKind>().unwrap(),
            ProcessorKind::WilsonAmplitude { threshold: 0.25 }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "fft".parse::<ProcessorKind>(),
            Err(SignalError::UnknownProcessor(_))
        ));
        assert!(matches!(
            "wamp".parse::<ProcessorKind>(),
            Err(SignalError::InvalidThreshold(_))
        ));
        assert!(matches!(
            "wamp:abc".parse::<ProcessorKind>(),
            Err(SignalError::InvalidThreshold(_))
        ));
        assert!(matches!(
            "mav:3".parse::<ProcessorKind>(),
            Err(SignalError::UnknownProcessor(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for kind in [
            ProcessorKind::Average,
            ProcessorKind::WilsonAmplitude { threshold: 1.5 },
            ProcessorKind::RunningRms,
        ] {
            assert_eq!(kind.to_string().parse::<ProcessorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_build_names_match() {
        let kinds = [
            ProcessorKind::Average,
            ProcessorKind::MeanAbsoluteValue,
            ProcessorKind::WaveformLength,
            ProcessorKind::WilsonAmplitude { threshold: 0.1 },
            ProcessorKind::WindowedRms,
            ProcessorKind::RunningRms,
        ];
        for kind in kinds {
            assert_eq!(kind.build().name(), kind.name());
        }
    }

    #[test]
    fn test_build_gives_fresh_state() {
        let kind = ProcessorKind::RunningRms;
        let mut first = kind.build();
        first.process(&[10.0]);
        first.process(&[10.0]);

        let mut second = kind.build();
        assert_eq!(second.process(&[1.0]), vec![1.0]);
        assert!(kind.is_stateful());
        assert!(!ProcessorKind::WaveformLength.is_stateful());
    }

    #[test]
    fn test_deserialize_tagged() {
        let kinds: Vec<ProcessorKind> = serde_json::from_str(
            r#"[{"kind":"rms"},{"kind":"wamp","threshold":0.5},{"kind":"waveform_length"}]"#,
        )
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                ProcessorKind::RunningRms,
                ProcessorKind::WilsonAmplitude { threshold: 0.5 },
                ProcessorKind::WaveformLength,
            ]
        );
    }
}

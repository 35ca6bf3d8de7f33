//! Self-check scenarios exercising the stream/column contract.
//!
//! Each check builds its own streams and column, so checks are independent
//! and run in declaration order.

use sf_core::numeric::{Tolerances, nearly_equal};
use sf_core::units::{as_fraction, as_kgps, kgps};
use sf_core::StreamId;
use sf_devices::{Column, Device, DeviceError, Side, Stream, StreamTable};
use std::io::{self, Write};

type CheckFn = fn() -> Result<(), String>;

const CHECKS: &[(&str, CheckFn)] = &[
    ("Stream creation and set/get", stream_set_get),
    ("Equal split of total feed", equal_split),
    ("Ratio split 0.6", ratio_split),
    ("Zero feed", zero_feed),
    ("Input capacity limit", input_capacity),
    ("Output capacity limit", output_capacity),
    ("Incomplete wiring", incomplete_wiring),
    ("Invalid split ratio", invalid_ratio),
    ("Mass conservation", conservation),
];

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// `None` on pass, failure description otherwise.
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn success_percent(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.passed() as f64 * 100.0 / self.total() as f64
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for (i, outcome) in self.outcomes.iter().enumerate() {
            match &outcome.failure {
                None => writeln!(out, "Check {}: {} ... PASS", i + 1, outcome.name)?,
                Some(why) => {
                    writeln!(out, "Check {}: {} ... FAIL", i + 1, outcome.name)?;
                    writeln!(out, "  {}", why)?;
                }
            }
        }
        writeln!(out)?;
        writeln!(out, "=== Self-check results ===")?;
        writeln!(out, "Passed {} of {}", self.passed(), self.total())?;
        writeln!(out, "Success rate: {:.1}%", self.success_percent())
    }
}

pub fn run_all() -> CheckSummary {
    let outcomes = CHECKS
        .iter()
        .map(|&(name, check)| CheckOutcome {
            name,
            failure: check().err(),
        })
        .collect();
    CheckSummary { outcomes }
}

struct Rig {
    streams: StreamTable,
    column: Column,
    inputs: [StreamId; 2],
    outputs: [StreamId; 2],
}

fn rig(a: f64, b: f64, prior_out: f64) -> Result<Rig, String> {
    let mut streams = StreamTable::new();
    let inputs = [streams.add("in1", kgps(a)), streams.add("in2", kgps(b))];
    let outputs = [
        streams.add("out1", kgps(prior_out)),
        streams.add("out2", kgps(prior_out)),
    ];
    let mut column = Column::new("check");
    for id in inputs {
        column.attach_input(id).map_err(describe)?;
    }
    for id in outputs {
        column.attach_output(id).map_err(describe)?;
    }
    Ok(Rig {
        streams,
        column,
        inputs,
        outputs,
    })
}

fn describe(e: DeviceError) -> String {
    format!("unexpected error: {e}")
}

fn flow(streams: &StreamTable, id: StreamId) -> f64 {
    as_kgps(streams[id].mass_flow())
}

fn expect_flow(streams: &StreamTable, id: StreamId, expected: f64) -> Result<(), String> {
    let got = flow(streams, id);
    if nearly_equal(got, expected, Tolerances::BALANCE) {
        Ok(())
    } else {
        Err(format!(
            "{}: expected {expected}, got {got}",
            streams[id].name()
        ))
    }
}

fn stream_set_get() -> Result<(), String> {
    let mut s = Stream::with_mass_flow("test_stream", kgps(5.5));
    s.set_mass_flow(kgps(10.2));
    if s.name() != "test_stream" {
        return Err(format!("name changed to {}", s.name()));
    }
    if !nearly_equal(as_kgps(s.mass_flow()), 10.2, Tolerances::BALANCE) {
        return Err(format!("expected 10.2, got {}", as_kgps(s.mass_flow())));
    }
    Ok(())
}

fn equal_split() -> Result<(), String> {
    let mut r = rig(10.0, 20.0, 0.0)?;
    r.column.update(&mut r.streams).map_err(describe)?;
    expect_flow(&r.streams, r.outputs[0], 15.0)?;
    expect_flow(&r.streams, r.outputs[1], 15.0)
}

fn ratio_split() -> Result<(), String> {
    let mut r = rig(10.0, 20.0, 0.0)?;
    r.column.set_split_ratio(0.6).map_err(describe)?;
    r.column.update(&mut r.streams).map_err(describe)?;
    expect_flow(&r.streams, r.outputs[0], 18.0)?;
    expect_flow(&r.streams, r.outputs[1], 12.0)
}

fn zero_feed() -> Result<(), String> {
    let mut r = rig(0.0, 0.0, 5.0)?;
    r.column.update(&mut r.streams).map_err(describe)?;
    expect_flow(&r.streams, r.outputs[0], 0.0)?;
    expect_flow(&r.streams, r.outputs[1], 0.0)
}

fn expect_capacity(result: Result<(), DeviceError>, side: Side) -> Result<(), String> {
    match result {
        Err(DeviceError::CapacityExceeded { side: got, .. }) if got == side => Ok(()),
        Err(e) => Err(format!("wrong error: {e}")),
        Ok(()) => Err("expected CapacityExceeded, attach succeeded".to_string()),
    }
}

fn input_capacity() -> Result<(), String> {
    let mut r = rig(1.0, 2.0, 0.0)?;
    let extra = r.streams.add("in3", kgps(3.0));
    expect_capacity(r.column.attach_input(extra), Side::Input)?;
    if r.column.inputs() != r.inputs {
        return Err("existing inputs were altered".to_string());
    }
    Ok(())
}

fn output_capacity() -> Result<(), String> {
    let mut r = rig(1.0, 2.0, 0.0)?;
    let extra = r.streams.add("out3", kgps(0.0));
    expect_capacity(r.column.attach_output(extra), Side::Output)?;
    if r.column.outputs() != r.outputs {
        return Err("existing outputs were altered".to_string());
    }
    Ok(())
}

fn incomplete_wiring() -> Result<(), String> {
    let mut streams = StreamTable::new();
    let in1 = streams.add("in1", kgps(1.0));
    let out1 = streams.add("out1", kgps(7.0));
    let mut column = Column::new("check");
    column.attach_input(in1).map_err(describe)?;
    column.attach_output(out1).map_err(describe)?;

    match column.update(&mut streams) {
        Err(DeviceError::ConfigurationIncomplete { .. }) => expect_flow(&streams, out1, 7.0),
        Err(e) => Err(format!("wrong error: {e}")),
        Ok(()) => Err("expected ConfigurationIncomplete, update succeeded".to_string()),
    }
}

fn invalid_ratio() -> Result<(), String> {
    let mut column = Column::new("check");
    column.set_split_ratio(0.6).map_err(describe)?;
    for bad in [-0.1, 1.1] {
        match column.set_split_ratio(bad) {
            Err(DeviceError::InvalidArgument { .. }) => {}
            Err(e) => return Err(format!("wrong error for {bad}: {e}")),
            Ok(()) => return Err(format!("ratio {bad} was accepted")),
        }
    }
    let kept = as_fraction(column.split_ratio());
    if kept != 0.6 {
        return Err(format!("ratio changed to {kept}"));
    }
    Ok(())
}

fn conservation() -> Result<(), String> {
    for ratio in [0.0, 0.25, 0.5, 0.6, 1.0] {
        let mut r = rig(4.0, 6.0, 0.0)?;
        r.column.set_split_ratio(ratio).map_err(describe)?;
        r.column.update(&mut r.streams).map_err(describe)?;
        let fed = flow(&r.streams, r.inputs[0]) + flow(&r.streams, r.inputs[1]);
        let produced = flow(&r.streams, r.outputs[0]) + flow(&r.streams, r.outputs[1]);
        if !nearly_equal(fed, produced, Tolerances::BALANCE) {
            return Err(format!("ratio {ratio}: fed {fed}, produced {produced}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes() {
        let summary = run_all();
        assert_eq!(summary.total(), CHECKS.len());
        for outcome in &summary.outcomes {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failure);
        }
        assert!(summary.all_passed());
        assert_eq!(summary.success_percent(), 100.0);
    }

    #[test]
    fn summary_counts_failures() {
        let summary = CheckSummary {
            outcomes: vec![
                CheckOutcome {
                    name: "ok",
                    failure: None,
                },
                CheckOutcome {
                    name: "bad",
                    failure: Some("boom".to_string()),
                },
            ],
        };
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.success_percent(), 50.0);

        let mut out = Vec::new();
        summary.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Check 2: bad ... FAIL"));
        assert!(text.contains("  boom"));
        assert!(text.contains("Passed 1 of 2"));
        assert!(text.contains("Success rate: 50.0%"));
    }
}

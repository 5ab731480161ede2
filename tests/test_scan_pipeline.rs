//! End-to-end tests for the scan pipeline.
//!
//! These tests feed multi-line scan input through `run_scans` and validate
//! the emitted records and the collected metrics.

use serde_json::Value;
use tracking_classifier::{
    run_scans, CarrierType, Config, Metrics, OutputFormat, ScanService, ScanServiceImpl,
    Symbology, TrackingNumberClassifier,
};

const INPUT: &str = "\
code128 1Z999AA10123456784
ean128\t420 12345 9400 1000 0000 0000 0000 00

datamatrix 1Z999AA10123456784
upca 036000291452
not a label
9261-2929-0000-0000-0000-00
";

fn run(config: &Config) -> (Vec<String>, Metrics) {
    let metrics = Metrics::new();
    let service = ScanServiceImpl::new(TrackingNumberClassifier::new(), metrics.clone());
    let mut output = Vec::new();

    let processed = run_scans(&service, config, INPUT.as_bytes(), &mut output).unwrap();
    assert_eq!(processed, 6);
    assert_eq!(service.metrics().scans_total(), 6);

    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, metrics)
}

#[test]
fn test_json_lines_output() {
    let (lines, metrics) = run(&Config::default());
    assert_eq!(lines.len(), 6);

    let records: Vec<Value> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records[0]["outcome"], "matched");
    assert_eq!(records[0]["carrier"], "ups");
    assert_eq!(records[0]["source_symbology"], "code128");

    assert_eq!(records[1]["carrier"], "usps");
    assert_eq!(records[1]["canonical_text"], "9400100000000000000000");
    assert_eq!(records[1]["raw_input"], "42012345940010000000000000000000");

    assert_eq!(records[2]["outcome"], "ineligible");
    assert_eq!(records[2]["symbology"], "datamatrix");
    assert_eq!(records[3]["outcome"], "ineligible");
    assert_eq!(records[3]["symbology"], "upca");

    assert_eq!(records[4]["outcome"], "unmatched");
    assert!(records[4].get("symbology").is_none());

    assert_eq!(records[5]["carrier"], "fedexSmartPost");
    assert!(records[5].get("source_symbology").is_none());

    assert_eq!(metrics.matched_total(), 3);
    assert_eq!(metrics.ineligible_total(), 2);
    assert_eq!(metrics.unmatched_total(), 1);
    assert_eq!(metrics.carrier_matches(CarrierType::FedexSmartPost), 1);
}

#[test]
fn test_matched_records_deserialize_back() {
    let (lines, _) = run(&Config::default());
    let tn: tracking_classifier::TrackingNumber = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(tn.carrier(), CarrierType::Usps);
    assert_eq!(tn.source_symbology(), Some(Symbology::Ean128));
}

#[test]
fn test_text_output_matches_only() {
    let config = Config {
        output_format: OutputFormat::Text,
        emit_unmatched: false,
        ..Config::default()
    };
    let (lines, metrics) = run(&config);

    assert_eq!(
        lines,
        vec![
            "'1Z999AA10123456784' [ups - code128]",
            "'9400100000000000000000' [usps - ean128]",
            "'9261292900000000000000' [fedexSmartPost]",
        ]
    );
    assert_eq!(metrics.summary().by_carrier.len(), 3);
}

#[test]
fn test_default_symbology_applies_to_bare_lines() {
    let config = Config {
        output_format: OutputFormat::Text,
        default_symbology: Some(Symbology::Datamatrix),
        ..Config::default()
    };
    let (lines, metrics) = run(&config);

    assert_eq!(lines[4], "'notalabel' [skipped - datamatrix]");
    assert_eq!(lines[5], "'9261-2929-0000-0000-0000-00' [skipped - datamatrix]");
    assert_eq!(metrics.matched_total(), 2);
}

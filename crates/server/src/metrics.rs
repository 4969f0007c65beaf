//! Prometheus wiring for conversion metrics.
//!
//! The converter reports every conversion through
//! [`ConversionMetrics`]; [`PrometheusConversionMetrics`] forwards those
//! reports to the `metrics` facade, which the Prometheus exporter renders
//! behind `GET /metrics`.

use converter::{ConversionMetrics, ConvertError, Direction};
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub const TRANSLATIONS_TOTAL: &str = "converter_translations_total";
pub const TRANSLATION_DURATION: &str = "converter_translation_duration_seconds";

/// Forwards conversion reports to the global `metrics` recorder.
#[derive(Debug, Default)]
pub struct PrometheusConversionMetrics;

impl ConversionMetrics for PrometheusConversionMetrics {
    fn record_conversion(
        &self,
        direction: Direction,
        latency: Duration,
        result: Result<(), &ConvertError>,
    ) {
        let outcome = outcome_label(result);
        counter!(TRANSLATIONS_TOTAL, "direction" => direction.as_str(), "outcome" => outcome)
            .increment(1);
        histogram!(TRANSLATION_DURATION, "direction" => direction.as_str())
            .record(latency.as_secs_f64());
    }
}

fn outcome_label(result: Result<(), &ConvertError>) -> &'static str {
    match result {
        Ok(()) => "success",
        Err(ConvertError::Decode { .. }) => "decode_error",
        Err(_) => "error",
    }
}

/// Install the Prometheus recorder and describe the conversion metrics.
pub fn install_exporter() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_counter!(TRANSLATIONS_TOTAL, "Translations by direction and outcome");
    describe_histogram!(
        TRANSLATION_DURATION,
        Unit::Seconds,
        "Translation latency by direction"
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_distinguish_decode_failures() {
        let decode = ConvertError::Decode {
            kind: "dy-request",
            message: "eof".into(),
        };
        let unknown = ConvertError::UnknownDirection("x".into());

        assert_eq!(outcome_label(Ok(())), "success");
        assert_eq!(outcome_label(Err(&decode)), "decode_error");
        assert_eq!(outcome_label(Err(&unknown)), "error");
    }
}

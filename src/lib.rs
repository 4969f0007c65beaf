//! Workspace umbrella crate for the personalization content converter.
//!
//! This crate stitches the document models (`schema`) and the translators
//! (`translate`) together behind a single byte-level entry point:
//! [`Converter::convert`] decodes a JSON body for a [`Direction`], runs the
//! matching translator and returns both documents as a [`Conversion`].

pub use schema::{
    compare_maps, CommonCampaign, CommonRequest, CommonResponse, Document, DyChooseRequest,
    DynMap, IsResponse, UoRequest,
};
pub use translate::{
    Clock, CommonToDy, CommonToIs, CommonToUo, DyToCommon, FixedClock, IsToCommon, SystemClock,
    TranslateError, Translator, UoToCommon,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while converting a JSON body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The body is not valid JSON or does not match the input document shape.
    #[error("failed to decode {kind}: {message}")]
    Decode { kind: &'static str, message: String },
    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),
    /// A document could not be serialized into the response envelope.
    #[error("failed to encode {kind}: {message}")]
    Encode { kind: &'static str, message: String },
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

impl ConvertError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            ConvertError::Decode { .. } | ConvertError::UnknownDirection(_) => 400,
            ConvertError::Translate(_) | ConvertError::Encode { .. } => 500,
        }
    }
}

/// Whether a direction translates requests or responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Request,
    Response,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Request => "request",
            DocumentKind::Response => "response",
        }
    }
}

/// One of the six supported translation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UoToCommon,
    CommonToUo,
    DyToCommon,
    CommonToDy,
    CommonToIs,
    IsToCommon,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::UoToCommon,
        Direction::CommonToUo,
        Direction::DyToCommon,
        Direction::CommonToDy,
        Direction::CommonToIs,
        Direction::IsToCommon,
    ];

    /// Route segment, e.g. `uo-to-common`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::UoToCommon => "uo-to-common",
            Direction::CommonToUo => "common-to-uo",
            Direction::DyToCommon => "dy-to-common",
            Direction::CommonToDy => "common-to-dy",
            Direction::CommonToIs => "common-to-is",
            Direction::IsToCommon => "is-to-common",
        }
    }

    pub fn kind(self) -> DocumentKind {
        match self {
            Direction::CommonToIs | Direction::IsToCommon => DocumentKind::Response,
            _ => DocumentKind::Request,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownDirection(s.to_owned()))
    }
}

/// The result of one conversion: the decoded input and the translated output.
///
/// Serializes as the `{"request": ..., "response": ...}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(skip)]
    pub direction: Direction,
    #[serde(skip)]
    pub subject_id: String,
    pub request: Value,
    pub response: Value,
}

/// Metrics observer for conversions.
pub trait ConversionMetrics: Send + Sync {
    fn record_conversion(
        &self,
        direction: Direction,
        latency: Duration,
        result: Result<(), &ConvertError>,
    );
}

/// Install or clear the global conversion metrics recorder.
pub fn set_conversion_metrics(recorder: Option<Arc<dyn ConversionMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ConversionMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn ConversionMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn ConversionMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Dispatches JSON bodies to the translator for a [`Direction`].
///
/// Holds one instance of every translator. The clock is shared by the two
/// translators that read time.
#[derive(Debug, Clone, Default)]
pub struct Converter<C = SystemClock> {
    uo_to_common: UoToCommon<C>,
    dy_to_common: DyToCommon<C>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock + Clone> Converter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            uo_to_common: UoToCommon::with_clock(clock.clone()),
            dy_to_common: DyToCommon::with_clock(clock),
        }
    }
}

impl<C: Clock> Converter<C> {
    /// Decode `body` as the input document of `direction` and translate it.
    ///
    /// ```rust
    /// use converter::{Converter, Direction, FixedClock};
    ///
    /// let converter = Converter::with_clock(FixedClock::from_unix(0));
    /// let body = br#"{"id": "req-1", "campaignResponses": [{"campaignId": "c-1"}]}"#;
    ///
    /// let conversion = converter.convert(Direction::IsToCommon, body).unwrap();
    /// assert_eq!(conversion.response["requestId"], "req-1");
    /// assert_eq!(conversion.response["campaigns"][0]["campaignId"], "c-1");
    /// ```
    pub fn convert(&self, direction: Direction, body: &[u8]) -> Result<Conversion, ConvertError> {
        let start = Instant::now();
        let result = match direction {
            Direction::UoToCommon => run(&self.uo_to_common, direction, body),
            Direction::CommonToUo => run(&CommonToUo, direction, body),
            Direction::DyToCommon => run(&self.dy_to_common, direction, body),
            Direction::CommonToDy => run(&CommonToDy, direction, body),
            Direction::CommonToIs => run(&CommonToIs, direction, body),
            Direction::IsToCommon => run(&IsToCommon, direction, body),
        };

        let latency = start.elapsed();
        let elapsed_micros = latency.as_micros();
        match &result {
            Ok(conversion) => info!(
                direction = %direction,
                subject_id = %conversion.subject_id,
                body_len = body.len(),
                elapsed_micros,
                "convert_success"
            ),
            Err(err) => warn!(
                direction = %direction,
                error = %err,
                body_len = body.len(),
                elapsed_micros,
                "convert_failure"
            ),
        }
        if let Some(recorder) = metrics_recorder() {
            recorder.record_conversion(direction, latency, result.as_ref().map(|_| ()));
        }
        result
    }

    /// Convert with the direction given by its route segment.
    pub fn convert_named(&self, direction: &str, body: &[u8]) -> Result<Conversion, ConvertError> {
        self.convert(direction.parse()?, body)
    }
}

fn run<T>(translator: &T, direction: Direction, body: &[u8]) -> Result<Conversion, ConvertError>
where
    T: Translator,
    T::Input: DeserializeOwned + Serialize + Document,
    T::Output: Serialize + Document,
{
    let input: T::Input = serde_json::from_slice(body).map_err(|err| ConvertError::Decode {
        kind: <T::Input as Document>::KIND,
        message: err.to_string(),
    })?;
    let output = translator.translate(&input)?;

    Ok(Conversion {
        direction,
        subject_id: input.subject_id().to_owned(),
        request: encode(&input)?,
        response: encode(&output)?,
    })
}

fn encode<D: Serialize + Document>(document: &D) -> Result<Value, ConvertError> {
    serde_json::to_value(document).map_err(|err| ConvertError::Encode {
        kind: D::KIND,
        message: err.to_string(),
    })
}

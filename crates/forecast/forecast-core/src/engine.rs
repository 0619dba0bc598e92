//! End-to-end forecast runs.
//!
//! `ForecastEngine` wires parser, estimators, generator, detector and
//! assembler together. A run is a pure function of the input and the
//! engine's configuration, apart from "today" anchoring the empty-history
//! fallback.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use forecast_api::{ForecastConfig, Locale, Result, Scenario};
use forecast_spi::{
    AnomalyDetector, ForecastDocument, ForecastRequest, ScenarioDocument, TrendEstimator,
};
use serde_json::Value;
use tracing::{info, info_span};

use crate::anomaly::RollingWindowDetector;
use crate::assembler::assemble;
use crate::generator::ForecastGenerator;
use crate::localization::Catalog;
use crate::noise::NoiseCascade;
use crate::parser::{parse_request, request_from_value};
use crate::recommendation::recommend;
use crate::scenario::report;
use crate::trend::LeastSquaresTrend;

/// Runs the forecast pipeline for input documents.
#[derive(Debug)]
pub struct ForecastEngine {
    config: ForecastConfig,
    catalog: Catalog,
    trend: LeastSquaresTrend,
    noise: NoiseCascade,
    detector: RollingWindowDetector,
    today: Option<NaiveDate>,
}

impl ForecastEngine {
    /// Engine with a validated configuration.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ForecastConfig) -> Self {
        Self {
            catalog: Catalog::new(config.locale),
            trend: LeastSquaresTrend::new(),
            noise: NoiseCascade::standard(),
            detector: RollingWindowDetector::new(config.anomaly),
            today: None,
            config,
        }
    }

    /// Render descriptions in `locale`.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self.catalog = Catalog::new(locale);
        self
    }

    /// Pin the date used by the empty-history fallback.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Parse raw document bytes and run the forecast. Never fails.
    pub fn run_bytes(&self, input: &[u8]) -> ForecastDocument {
        self.run(parse_request(input, &self.config))
    }

    /// Run the forecast for a decoded JSON document. Never fails.
    pub fn run_value(&self, document: &Value) -> ForecastDocument {
        self.run(request_from_value(document, &self.config))
    }

    /// Run the forecast for a parsed request.
    pub fn run(&self, request: ForecastRequest) -> ForecastDocument {
        let span = info_span!(
            "forecast",
            observations = request.history.len(),
            horizon = request.horizon,
            seasonality = request.seasonality
        );
        let _guard = span.enter();

        let values = request.history.values();
        let trend = self.trend.estimate(&values);
        let noise = self.noise.estimate(&values);

        let generator =
            ForecastGenerator::from_config(&self.config, request.horizon, request.seasonality);
        let outcome = generator.generate(&request.history, trend, noise.level, self.today());
        let anomalies = self.detector.detect(&request.history, outcome.noise_level);

        info!(
            points = outcome.points.len(),
            anomalies = anomalies.len(),
            noise_level = outcome.noise_level,
            slope = outcome.slope,
            "forecast complete"
        );

        assemble(request.history, outcome, anomalies, &self.catalog)
    }

    /// Run the forecast and add scenario projections and recommendations.
    ///
    /// Unknown or missing scenario names select the optimistic scenario.
    pub fn run_scenario(&self, input: &[u8], scenario: Option<&str>) -> ScenarioDocument {
        let forecast = self.run_bytes(input);
        self.with_scenarios(forecast, Scenario::resolve(scenario))
    }

    /// Extend a finished forecast with scenario projections.
    pub fn with_scenarios(&self, forecast: ForecastDocument, selected: Scenario) -> ScenarioDocument {
        let scenarios: BTreeMap<String, _> = Scenario::builtin()
            .iter()
            .chain(std::iter::once(&selected))
            .map(|scenario| (scenario.name.clone(), report(&forecast.baseline, scenario)))
            .collect();
        let chosen = report(&forecast.baseline, &selected);
        let recommendations = recommend(
            &chosen.summary,
            &forecast.stats,
            &forecast.anomalies,
            &self.catalog,
        );

        info!(scenario = %selected.name, cards = recommendations.len(), "scenario analysis complete");

        ScenarioDocument {
            forecast,
            scenario: chosen,
            scenarios,
            recommendations,
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::from_valid_config(ForecastConfig::default())
    }
}

//! Property-based tests for prediction models and advisability scoring

use application::{
    EventDecision, Forecast, MAX_ADVISABILITY, MAX_PREDICTION_DAYS, MIN_ADVISABILITY, ModelChoice,
    WeatherPrediction,
};
use domain::{
    CloudCover, Event, TemperatureRange, WeatherHistory, WeatherRecord, Wind, WindDirection,
};
use proptest::prelude::*;

/// rainfall, high, spread, humidity, cloud, average wind, gust excess, easterly, pressure
type Row = (f64, f64, f64, u8, u8, f64, f64, bool, f64);

fn arb_record() -> impl Strategy<Value = Row> {
    (
        0.0f64..60.0,
        -10.0f64..45.0,
        0.0f64..20.0,
        0u8..=100,
        0u8..=9,
        0.0f64..40.0,
        0.0f64..60.0,
        any::<bool>(),
        950.0f64..1050.0,
    )
}

fn build_history(rows: &[Row]) -> WeatherHistory {
    rows.iter()
        .zip(1u32..)
        .map(
            |(&(rain, high, spread, humidity, cloud, avg, extra, easterly, pressure), date)| {
                WeatherRecord::new(
                    date,
                    rain,
                    TemperatureRange::new(high, high - spread).unwrap(),
                    humidity,
                    CloudCover::new(cloud).unwrap(),
                    Wind::new(
                        avg,
                        avg + extra,
                        WindDirection::new(if easterly { "NE" } else { "SW" }),
                    )
                    .unwrap(),
                    pressure,
                )
                .unwrap()
            },
        )
        .collect()
}

fn snapshot(choice: ModelChoice, history: &WeatherHistory) -> Forecast {
    let model = choice.build(history).unwrap();
    Forecast::from_prediction(model.as_ref())
}

// ============================================================================
// Prediction Model Property Tests
// ============================================================================

mod prediction_tests {
    use super::*;

    proptest! {
        #[test]
        fn day_counts_beyond_maximum_are_capped(
            rows in prop::collection::vec(arb_record(), 1..40),
            extra in 1usize..100,
        ) {
            let history = build_history(&rows);
            let days = MAX_PREDICTION_DAYS + extra;

            prop_assert_eq!(
                snapshot(ModelChoice::Simple { days }, &history),
                snapshot(ModelChoice::Simple { days: MAX_PREDICTION_DAYS }, &history)
            );
            prop_assert_eq!(
                snapshot(ModelChoice::Sophisticated { days }, &history),
                snapshot(ModelChoice::Sophisticated { days: MAX_PREDICTION_DAYS }, &history)
            );
        }

        #[test]
        fn outputs_stay_in_range(
            rows in prop::collection::vec(arb_record(), 1..40),
            days in 1usize..40,
        ) {
            let history = build_history(&rows);
            for choice in [
                ModelChoice::Yesterday,
                ModelChoice::Simple { days },
                ModelChoice::Sophisticated { days },
            ] {
                let forecast = snapshot(choice, &history);
                prop_assert!((0..=100).contains(&forecast.chance_of_rain));
                prop_assert!((0..=100).contains(&forecast.humidity));
                prop_assert!((0..=9).contains(&forecast.cloud_cover));
                prop_assert!(forecast.wind_speed >= 0.0);
                prop_assert!(forecast.number_days >= 1);
                prop_assert!(forecast.number_days <= MAX_PREDICTION_DAYS);
            }
        }

        #[test]
        fn simple_temperatures_bound_the_window(
            rows in prop::collection::vec(arb_record(), 1..40),
            days in 1usize..40,
        ) {
            let history = build_history(&rows);
            let model = ModelChoice::Simple { days }.build(&history).unwrap();
            prop_assert!(model.low_temperature() <= model.high_temperature());
        }
    }
}

// ============================================================================
// Advisability Property Tests
// ============================================================================

mod advisability_tests {
    use super::*;

    fn arb_forecast() -> impl Strategy<Value = Forecast> {
        (
            0i32..=100,
            -60.0f64..80.0,
            -80.0f64..60.0,
            0i32..=100,
            0i32..=9,
            0.0f64..500.0,
        )
            .prop_map(|(rain, high, low, humidity, cloud, wind)| Forecast {
                model: "Arbitrary",
                number_days: 1,
                chance_of_rain: rain,
                high_temperature: high,
                low_temperature: low,
                humidity,
                cloud_cover: cloud,
                wind_speed: wind,
            })
    }

    proptest! {
        #[test]
        fn advisability_is_clamped(
            forecast in arb_forecast(),
            outdoors in any::<bool>(),
            cover in any::<bool>(),
            hour in 0u8..=23,
        ) {
            let event = Event::new("Prop event", outdoors, cover, hour).unwrap();
            let decision = EventDecision::new(&event, &forecast);
            let advisability = decision.advisability();

            prop_assert!(advisability >= MIN_ADVISABILITY);
            prop_assert!(advisability <= MAX_ADVISABILITY);
            prop_assert!(decision.rain_factor() >= -9.0);
        }

        #[test]
        fn report_agrees_with_decision(
            forecast in arb_forecast(),
            hour in 0u8..=23,
        ) {
            let event = Event::new("Prop event", true, false, hour).unwrap();
            let decision = EventDecision::new(&event, &forecast);
            let report = decision.report();

            prop_assert_eq!(report.advisability, decision.advisability());
            prop_assert_eq!(report.rain_factor, decision.rain_factor());
            prop_assert_eq!(report.temperature_factor, decision.temperature_factor());
        }
    }
}

//! Simple multi-day average model

use domain::{DomainError, WeatherHistory, WeatherRecord};

use super::{WeatherPrediction, capture_window, clamp_days, round_half_even, window_mean};

/// Scales mean daily rainfall (mm) to a percentage-like chance of rain
const RAINFALL_TO_CHANCE: f64 = 9.0;

/// Prediction from plain averages over the last few days
///
/// Temperatures are reported as the extremes of the window rather than
/// averages so planners see the best and worst case.
#[derive(Debug, Clone, Copy)]
pub struct SimplePrediction<'a> {
    window: &'a [WeatherRecord],
    number_days: usize,
}

impl<'a> SimplePrediction<'a> {
    pub const NAME: &'static str = "SimplePrediction";

    /// Build the model over the most recent `number_days` records (at most 28)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayCount` for zero days and
    /// `DomainError::EmptyHistory` if the history holds no records.
    pub fn new(history: &'a WeatherHistory, number_days: usize) -> Result<Self, DomainError> {
        let number_days = clamp_days(number_days)?;
        let window = capture_window(history, number_days)?;
        Ok(Self {
            window,
            number_days,
        })
    }

    fn mean(&self, field: impl Fn(&WeatherRecord) -> f64) -> f64 {
        window_mean(self.window, field)
    }
}

impl WeatherPrediction for SimplePrediction<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn number_days(&self) -> usize {
        self.number_days
    }

    fn chance_of_rain(&self) -> i32 {
        round_half_even(self.mean(WeatherRecord::rainfall) * RAINFALL_TO_CHANCE).min(100)
    }

    fn high_temperature(&self) -> f64 {
        self.window
            .iter()
            .map(WeatherRecord::high_temperature)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn low_temperature(&self) -> f64 {
        self.window
            .iter()
            .map(WeatherRecord::low_temperature)
            .fold(f64::INFINITY, f64::min)
    }

    fn humidity(&self) -> i32 {
        round_half_even(self.mean(|r| f64::from(r.humidity())))
    }

    fn cloud_cover(&self) -> i32 {
        round_half_even(self.mean(|r| f64::from(r.cloud_cover().value())))
    }

    fn wind_speed(&self) -> f64 {
        f64::from(round_half_even(self.mean(WeatherRecord::average_wind_speed)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Day, history};
    use super::*;

    #[test]
    fn high_is_window_maximum_not_mean() {
        let h = history(&[
            Day { high: 20.0, ..Day::default() },
            Day { high: 25.0, ..Day::default() },
            Day { high: 22.0, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 3).unwrap();
        assert!((model.high_temperature() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn low_is_window_minimum() {
        let h = history(&[
            Day { low: 9.0, ..Day::default() },
            Day { low: 4.5, ..Day::default() },
            Day { low: 11.0, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 3).unwrap();
        assert!((model.low_temperature() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn only_recent_days_are_used() {
        let h = history(&[
            Day { high: 40.0, ..Day::default() },
            Day { high: 21.0, ..Day::default() },
            Day { high: 23.0, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 2).unwrap();
        assert_eq!(model.number_days(), 2);
        assert!((model.high_temperature() - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn averages_are_rounded() {
        let h = history(&[
            Day { humidity: 60, cloud_cover: 2, average_wind: 10.0, maximum_wind: 20.0, ..Day::default() },
            Day { humidity: 61, cloud_cover: 3, average_wind: 13.0, maximum_wind: 20.0, ..Day::default() },
            Day { humidity: 65, cloud_cover: 5, average_wind: 14.0, maximum_wind: 20.0, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 3).unwrap();
        // 62.0, 3.33, 12.33
        assert_eq!(model.humidity(), 62);
        assert_eq!(model.cloud_cover(), 3);
        assert!((model.wind_speed() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rain_chance_scales_mean_rainfall() {
        let h = history(&[
            Day { rainfall: 2.0, ..Day::default() },
            Day { rainfall: 4.0, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 2).unwrap();
        // mean 3mm * 9
        assert_eq!(model.chance_of_rain(), 27);
    }

    #[test]
    fn rain_chance_clamped_to_100() {
        let h = history(&[Day { rainfall: 50.0, ..Day::default() }]);
        let model = SimplePrediction::new(&h, 1).unwrap();
        assert_eq!(model.chance_of_rain(), 100);
    }

    #[test]
    fn day_count_clamped_to_28() {
        let days = vec![Day::default(); 40];
        let h = history(&days);
        let model = SimplePrediction::new(&h, 35).unwrap();
        assert_eq!(model.number_days(), 28);
    }

    #[test]
    fn zero_days_rejected() {
        let h = history(&[Day::default()]);
        assert!(matches!(
            SimplePrediction::new(&h, 0),
            Err(DomainError::InvalidDayCount(0))
        ));
    }

    #[test]
    fn empty_history_rejected() {
        let empty = WeatherHistory::new();
        assert!(matches!(
            SimplePrediction::new(&empty, 3),
            Err(DomainError::EmptyHistory)
        ));
    }

    #[test]
    fn short_history_averages_available_days() {
        let h = history(&[
            Day { humidity: 40, ..Day::default() },
            Day { humidity: 60, ..Day::default() },
        ]);
        let model = SimplePrediction::new(&h, 10).unwrap();
        assert_eq!(model.number_days(), 10);
        assert_eq!(model.humidity(), 50);
    }
}

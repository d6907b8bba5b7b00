//! Domain entities - Observed weather and planned events

mod event;
mod weather_history;
mod weather_record;

pub use event::Event;
pub use weather_history::WeatherHistory;
pub use weather_record::WeatherRecord;

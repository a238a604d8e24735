use festivos::configuration::Configuration;
use festivos::service::holidayservice::HolidayService;

const CATALOG_PATH: &'static str = "data/festivos.json";
const COUNTRY: &'static str = "Colombia";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festivos=debug".into())
        )
        .init();

    let year = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i32>().ok())
        .unwrap_or(2026);

    let config = Configuration::new();
    config.from_reader(CATALOG_PATH.to_owned()).unwrap();
    let repository = config.repository(COUNTRY).unwrap();
    let service = HolidayService::new(repository);

    for holiday in service.holidays_in_year(year).unwrap() {
        println!("{}, {}, {}",
                 holiday.rule().id(),
                 holiday.rule().name(),
                 holiday.date());
    }
}
